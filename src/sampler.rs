//! Uniform sampling of the clamped B-spline defined by a control point set.

use num_traits::Float;

use crate::basis::basis_functions;
use crate::cast;
use crate::control_point::ControlPointSet;
use crate::knots::KnotVector;
use crate::point::{CurvePoint, Point};
use crate::settings::CurveSettings;
use crate::span::find_span;

/// Evaluate the curve at `t` by blending the `order + 1` control points active in
/// the span containing `t`. `knots` must have been built for `points.len()` points.
pub fn point_at<F, P>(points: &[P], knots: &KnotVector<F>, t: F) -> CurvePoint<F>
where
    F: Float + Default,
    P: Point<F>,
{
    debug_assert_eq!(points.len(), knots.control_point_count());
    let p = knots.order();
    let span = find_span(knots, t);
    let weights = basis_functions(span, t, knots);

    weights
        .iter()
        .zip(&points[span - p..=span])
        .fold(CurvePoint::origin(), |acc, (&w, cp)| {
            acc + CurvePoint::new(cp.x(), cp.y()) * w
        })
}

/// Produces `sample_count` evenly spaced curve points over the whole domain.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CurveSampler {
    settings: CurveSettings,
}

impl CurveSampler {
    pub fn new(settings: CurveSettings) -> Self {
        CurveSampler { settings }
    }

    pub fn settings(&self) -> CurveSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: CurveSettings) {
        self.settings = settings;
    }

    /// A curve needs more control points than its order.
    pub fn is_drawable(&self, count: usize) -> bool {
        self.settings.order() < count
    }

    /// Sample the curve of `points`, starting at the first point's parameter.
    /// Returns None if the curve is undrawable with the current order.
    pub fn sample<F>(&self, points: &ControlPointSet<F>) -> Option<Vec<CurvePoint<F>>>
    where
        F: Float + Default,
    {
        self.sample_from(points.as_slice(), points.start_parameter())
    }

    /// Sample the curve of `points` from `start` to the end of the domain.
    /// Returns None if the curve is undrawable with the current order.
    pub fn sample_from<F, P>(&self, points: &[P], start: F) -> Option<Vec<CurvePoint<F>>>
    where
        F: Float + Default,
        P: Point<F>,
    {
        if !self.is_drawable(points.len()) {
            return None;
        }

        let knots = KnotVector::clamped(points.len(), self.settings.order());
        let (_, t_max) = knots.domain();
        let n = self.settings.sample_count();
        let steps: F = cast(n - 1);
        let dt = (t_max - start) / steps;

        // the last sample sits exactly on the domain end, free of stepping drift
        let curve = (0..n)
            .map(|k| {
                let t = if k == n - 1 {
                    t_max
                } else {
                    start + dt * cast::<F, _>(k)
                };
                point_at(points, &knots, t)
            })
            .collect();
        Some(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn square() -> ControlPointSet<f64> {
        [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn quadratic_square_five_samples() {
        let sampler = CurveSampler::new(CurveSettings::new(2, 5).unwrap());
        let curve = sampler.sample(&square()).unwrap();

        let expected = [
            CurvePoint::new(0.0, 0.0),
            CurvePoint::new(7.5, 1.25),
            CurvePoint::new(10.0, 5.0),
            CurvePoint::new(7.5, 8.75),
            CurvePoint::new(0.0, 10.0),
        ];
        assert_eq!(curve.len(), expected.len());
        for (got, want) in curve.iter().zip(expected.iter()) {
            assert!((*got - *want).squared_norm() < EPSILON);
        }
    }

    #[test]
    fn order_not_below_count_is_undrawable() {
        let points = square();
        let sampler = CurveSampler::new(CurveSettings::new(4, 10).unwrap());
        assert!(!sampler.is_drawable(points.len()));
        assert!(sampler.sample(&points).is_none());

        let sampler = CurveSampler::new(CurveSettings::new(3, 10).unwrap());
        assert!(sampler.sample(&points).is_some());
    }

    #[test]
    fn empty_set_is_undrawable() {
        let sampler = CurveSampler::default();
        assert!(sampler.sample(&ControlPointSet::<f64>::new()).is_none());
    }

    #[test]
    fn endpoints_interpolated_with_exact_length() {
        let points: ControlPointSet<f64> = [
            (3.0, 1.0),
            (-2.0, 7.5),
            (4.25, 9.0),
            (8.0, -3.0),
            (11.0, 2.0),
            (13.5, 6.0),
            (20.0, 0.5),
        ]
        .into_iter()
        .collect();
        let first = CurvePoint::new(points[0].x, points[0].y);
        let last = CurvePoint::new(points[6].x, points[6].y);

        for order in 1..points.len() {
            for n in [2, 3, 17, 256] {
                let sampler = CurveSampler::new(CurveSettings::new(order, n).unwrap());
                let curve = sampler.sample(&points).unwrap();
                assert_eq!(curve.len(), n);
                assert!((curve[0] - first).squared_norm() < EPSILON);
                assert!((curve[n - 1] - last).squared_norm() < EPSILON);
            }
        }
    }

    #[test]
    fn f32_long_curve_ends_on_last_point() {
        let points: ControlPointSet<f32> = (0..200)
            .map(|i| (i as f32 * 3.0, ((i * 37) % 101) as f32))
            .collect();
        let last = points[199];

        for order in 1..=3 {
            for n in [7, 99, 100, 333] {
                let sampler = CurveSampler::new(CurveSettings::new(order, n).unwrap());
                let curve = sampler.sample(&points).unwrap();
                assert_eq!(curve.len(), n);
                let end = curve[n - 1];
                assert!((end.x - last.x).abs() < 1e-5);
                assert!((end.y - last.y).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn linear_order_follows_polygon() {
        let points: ControlPointSet<f64> =
            [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)].into_iter().collect();
        let sampler = CurveSampler::new(CurveSettings::new(1, 5).unwrap());
        let curve = sampler.sample(&points).unwrap();
        assert!((curve[1] - CurvePoint::new(2.0, 0.0)).squared_norm() < EPSILON);
        assert!((curve[2] - CurvePoint::new(4.0, 0.0)).squared_norm() < EPSILON);
        assert!((curve[3] - CurvePoint::new(4.0, 2.0)).squared_norm() < EPSILON);
    }

    #[test]
    fn point_at_matches_sampling() {
        let points = square();
        let knots = KnotVector::clamped(points.len(), 2);
        let p = point_at(points.as_slice(), &knots, 1.0);
        assert!((p - CurvePoint::new(10.0, 5.0)).squared_norm() < EPSILON);
    }
}
