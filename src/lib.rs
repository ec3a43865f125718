//! Clamped B-spline curves for interactive editors.
//!
//! The evaluation engine turns an ordered set of control points and an order `p`
//! into sampled curve points:
//! - [`KnotVector::clamped`] builds the uniform clamped knot vector
//! - [`find_span`] locates the knot span of a parameter by binary search
//! - [`basis_functions`] runs the Cox-de Boor recurrence for the `p + 1` active weights
//! - [`CurveSampler`] blends control points into `N` evenly spaced curve points
//!
//! [`InteractionController`] keeps the editor state (add, hover select, drag) and hands
//! [`Frame`]s to a [`Canvas`] implemented by the renderer.
//!
//! # Example
//! ```rust
//! use knotpad::{ControlPointSet, CurveSampler, CurveSettings};
//!
//! let points: ControlPointSet<f64> = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
//!     .into_iter()
//!     .collect();
//! let sampler = CurveSampler::new(CurveSettings::new(2, 5)?);
//! let curve = sampler.sample(&points).unwrap();
//!
//! assert_eq!(curve.len(), 5);
//! assert_eq!((curve[0].x, curve[0].y), (0.0, 0.0));
//! assert_eq!((curve[4].x, curve[4].y), (0.0, 10.0));
//! # Ok::<(), knotpad::ConfigError>(())
//! ```

pub mod basis;
pub mod control_point;
pub mod error;
pub mod interaction;
pub mod knots;
pub mod point;
pub mod sampler;
pub mod settings;
pub mod span;

pub use basis::{basis_functions, Weights};
pub use control_point::{ControlPoint, ControlPointSet};
pub use error::ConfigError;
pub use interaction::{Canvas, Frame, InteractionController, PointerButton};
pub use knots::KnotVector;
pub use point::{CurvePoint, Point};
pub use sampler::{point_at, CurveSampler};
pub use settings::{CurveSettings, DisplayOptions};
pub use span::find_span;

use num_traits::{Float, NumCast, ToPrimitive};

/// Precision of constants in the library
pub type NativeFloat = f64;

/// Tolerance used when comparing evaluated points in tests
pub const EPSILON: NativeFloat = 1e-10;

/// Convert a primitive into the curve scalar, NaN if `F` cannot represent it.
pub(crate) fn cast<F: Float, N: ToPrimitive>(n: N) -> F {
    <F as NumCast>::from(n).unwrap_or_else(F::nan)
}
