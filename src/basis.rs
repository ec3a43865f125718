//! Cox-de Boor evaluation of the non-zero B-spline basis functions.

use num_traits::Float;
use tinyvec::TinyVec;

use crate::knots::KnotVector;

/// Number of weights kept inline before spilling to the heap (orders up to 7).
pub const INLINE_WEIGHTS: usize = 8;

/// Blending weights of the `order + 1` basis functions active in one span.
pub type Weights<F> = TinyVec<[F; INLINE_WEIGHTS]>;

/// Compute the `order + 1` basis functions that are non-zero at `t` in knot span `span`,
/// using the triangular recurrence from The NURBS Book (Algorithm A2.2).
/// Entry `l` of the result blends control point `span - order + l`.
///
/// `span` must be the span containing `t` (see `find_span`); the divisors are
/// then non-zero for any clamped, non-decreasing knot vector.
/// The weights are non-negative and sum up to one.
pub fn basis_functions<F>(span: usize, t: F, knots: &KnotVector<F>) -> Weights<F>
where
    F: Float + Default,
{
    let p = knots.order();
    let mut weights: Weights<F> = core::iter::repeat(F::zero()).take(p + 1).collect();
    let mut left = weights.clone();
    let mut right = weights.clone();

    weights[0] = F::one();
    for j in 1..=p {
        left[j] = t - knots[span + 1 - j];
        right[j] = knots[span + j] - t;
        let mut saved = F::zero();
        for r in 0..j {
            let temp = weights[r] / (right[r + 1] + left[j - r]);
            weights[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        weights[j] = saved;
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::find_span;
    use crate::EPSILON;
    use approx::assert_relative_eq;

    #[test]
    fn quadratic_weights_by_hand() {
        // [0, 0, 0, 1, 2, 2, 2]
        let knots: KnotVector<f64> = KnotVector::clamped(4, 2);

        let w = basis_functions(2, 0.5, &knots);
        assert_eq!(w.len(), 3);
        assert_relative_eq!(w[0], 0.25, epsilon = EPSILON);
        assert_relative_eq!(w[1], 0.625, epsilon = EPSILON);
        assert_relative_eq!(w[2], 0.125, epsilon = EPSILON);

        let w = basis_functions(3, 1.0, &knots);
        assert_relative_eq!(w[0], 0.5, epsilon = EPSILON);
        assert_relative_eq!(w[1], 0.5, epsilon = EPSILON);
        assert_relative_eq!(w[2], 0.0, epsilon = EPSILON);
    }

    #[test]
    fn clamped_ends_have_single_weight() {
        let knots: KnotVector<f64> = KnotVector::clamped(5, 3);
        let (lo, hi) = knots.domain();

        let w = basis_functions(find_span(&knots, lo), lo, &knots);
        assert_relative_eq!(w[0], 1.0, epsilon = EPSILON);

        let w = basis_functions(find_span(&knots, hi), hi, &knots);
        assert_relative_eq!(w[3], 1.0, epsilon = EPSILON);
    }

    #[test]
    fn partition_of_unity() {
        for count in 2..12 {
            for order in 1..count {
                let knots: KnotVector<f64> = KnotVector::clamped(count, order);
                let (lo, hi) = knots.domain();
                let nsteps = 64;
                for step in 0..=nsteps {
                    let t = lo + (hi - lo) * step as f64 / nsteps as f64;
                    let w = basis_functions(find_span(&knots, t), t, &knots);
                    assert_eq!(w.len(), order + 1);
                    assert!(w.iter().all(|&b| b >= -EPSILON));
                    assert_relative_eq!(w.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn high_orders_spill_to_heap() {
        let order = INLINE_WEIGHTS + 2;
        let knots: KnotVector<f32> = KnotVector::clamped(order + 3, order);
        let w = basis_functions(find_span(&knots, 1.5), 1.5, &knots);
        assert_eq!(w.len(), order + 1);
        assert!(w.is_heap());
        assert!((w.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }
}
