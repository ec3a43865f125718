//! Clamped knot vectors.

use core::ops::Index;
use core::slice;

use num_traits::Float;

use crate::cast;

/// Non-decreasing knot vector of a clamped B-spline with `count` control points
/// and order `p`. Holds `count + p + 1` knots, the first and last `p + 1` of which
/// repeat the domain endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector<F = f64> {
    knots: Vec<F>,
    order: usize,
}

impl<F: Float> KnotVector<F> {
    /// Build the uniform clamped knot vector for `count` control points and order `order`:
    /// `order + 1` zeros, then `1, 2, ..` for the interior, then `count - order`
    /// repeated up to the end.
    ///
    /// If `order >= count` the vector can still be built (all knots collapse to zero)
    /// but it describes no drawable curve, callers must not evaluate it.
    pub fn clamped(count: usize, order: usize) -> Self {
        let end = count.saturating_sub(order);
        let knots = (0..count + order + 1)
            .map(|i| cast(i.saturating_sub(order).min(end)))
            .collect();
        KnotVector { knots, order }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn len(&self) -> usize {
        self.knots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Number of control points the vector was built for.
    pub fn control_point_count(&self) -> usize {
        self.knots.len() - self.order - 1
    }

    /// Highest control point index `n = count - 1`.
    pub fn max_index(&self) -> usize {
        self.control_point_count().saturating_sub(1)
    }

    /// Inclusive parameter range `[knot[p], knot[n + 1]]` the curve is defined over.
    pub fn domain(&self) -> (F, F) {
        (
            self.knots[self.order],
            self.knots[self.knots.len() - 1 - self.order],
        )
    }

    pub fn iter(&self) -> slice::Iter<'_, F> {
        self.knots.iter()
    }

    pub fn as_slice(&self) -> &[F] {
        &self.knots
    }
}

impl<F> Index<usize> for KnotVector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.knots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_points_quadratic() {
        let knots: KnotVector<f64> = KnotVector::clamped(4, 2);
        assert_eq!(knots.as_slice(), &[0., 0., 0., 1., 2., 2., 2.]);
        assert_eq!(knots.domain(), (0.0, 2.0));
        assert_eq!(knots.max_index(), 3);
        assert_eq!(knots.control_point_count(), 4);
    }

    #[test]
    fn linear_with_two_points() {
        let knots: KnotVector<f64> = KnotVector::clamped(2, 1);
        assert_eq!(knots.as_slice(), &[0., 0., 1., 1.]);
        assert_eq!(knots.domain(), (0.0, 1.0));
    }

    #[test]
    fn cubic_with_seven_points() {
        let knots: KnotVector<f32> = KnotVector::clamped(7, 3);
        assert_eq!(knots.as_slice(), &[0., 0., 0., 0., 1., 2., 3., 4., 4., 4., 4.]);
    }

    #[test]
    fn non_decreasing_with_expected_length() {
        for count in 1..12 {
            for order in 1..12 {
                let knots: KnotVector<f64> = KnotVector::clamped(count, order);
                assert_eq!(knots.len(), count + order + 1);
                assert!(knots.as_slice().windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }

    #[test]
    fn clamped_ends_repeat() {
        let order = 3;
        let knots: KnotVector<f64> = KnotVector::clamped(6, order);
        let (lo, hi) = knots.domain();
        assert!(knots.iter().take(order + 1).all(|&k| k == lo));
        assert!(knots.iter().rev().take(order + 1).all(|&k| k == hi));
    }

    #[test]
    fn undrawable_order_collapses_to_zero() {
        let knots: KnotVector<f64> = KnotVector::clamped(2, 4);
        assert_eq!(knots.len(), 7);
        assert!(knots.iter().all(|&k| k == 0.0));
    }
}
