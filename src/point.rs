use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Trait over planar points the curve engine can blend.
/// Control points and sampled curve points both implement it, so a renderer
/// can consume either through the same two accessors.
pub trait Point<F: Float> {
    fn x(&self) -> F;

    fn y(&self) -> F;
}

/// A point on the evaluated curve. Purely derived data, rebuilt on every
/// recomputation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CurvePoint<F = f64> {
    pub x: F,
    pub y: F,
}

impl<F: Float> CurvePoint<F> {
    pub fn new(x: F, y: F) -> Self {
        CurvePoint { x, y }
    }

    pub fn origin() -> Self {
        CurvePoint {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Squared length when interpreted as a vector
    #[cfg(test)]
    pub(crate) fn squared_norm(&self) -> F {
        self.x * self.x + self.y * self.y
    }
}

impl<F: Float> Point<F> for CurvePoint<F> {
    fn x(&self) -> F {
        self.x
    }

    fn y(&self) -> F {
        self.y
    }
}

impl<F: Float> Add for CurvePoint<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        CurvePoint {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> Sub for CurvePoint<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        CurvePoint {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> Mul<F> for CurvePoint<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        CurvePoint {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<F: Float> From<(F, F)> for CurvePoint<F> {
    fn from((x, y): (F, F)) -> Self {
        CurvePoint { x, y }
    }
}
