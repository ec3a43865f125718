use num_traits::Float;

use crate::knots::KnotVector;
use crate::{cast, NativeFloat};

/// Distance below which a parameter counts as sitting on the right end of the domain.
/// Absorbs drift accumulated while stepping towards the last sample.
pub const DOMAIN_END_TOLERANCE: NativeFloat = 1e-6;

/// Rounding steps of the domain end tolerated on top of `DOMAIN_END_TOLERANCE`,
/// so scalars coarser than `f64` still snap onto the last span.
pub const DOMAIN_END_ULPS: NativeFloat = 8.0;

/// Find the knot span `i` in `[p, n]` with `knots[i] <= t < knots[i + 1]`,
/// where `p` is the order and `n` the highest control point index.
///
/// The right end of the domain belongs to the last span `n`, which is what makes
/// the curve end exactly on its last control point. Parameters outside the
/// domain are clamped onto it.
///
/// The knot vector must describe a drawable curve (`order < count`).
pub fn find_span<F: Float>(knots: &KnotVector<F>, t: F) -> usize {
    let p = knots.order();
    let n = knots.max_index();
    debug_assert!(p < knots.control_point_count());

    let (lo, hi) = knots.domain();
    let ulps: F = cast(DOMAIN_END_ULPS);
    let tolerance = cast::<F, _>(DOMAIN_END_TOLERANCE).max(F::epsilon() * ulps * hi.abs());
    if t >= hi || (t - hi).abs() < tolerance {
        return n;
    }
    let t = t.max(lo);

    // binary search, knots[low] <= t < knots[high] holds throughout
    let mut low = p;
    let mut high = n + 1;
    let mut mid = (low + high) / 2;
    while t < knots[mid] || t >= knots[mid + 1] {
        if t < knots[mid] {
            high = mid;
        } else {
            low = mid;
        }
        mid = (low + high) / 2;
    }
    mid
}
