//! Control points and the ordered set the curve is built from.

use core::ops::Index;
use core::slice;

use num_traits::Float;

use crate::point::Point;
use crate::{cast, NativeFloat};

/// Half the edge length of the square pick box around every control point.
pub const HIT_HALF_EXTENT: NativeFloat = 5.0;

/// A user placed control point.
/// `parameter` is the point's position in the curve domain; only the first
/// point's value is read, as the start of the sampled range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlPoint<F = f64> {
    pub x: F,
    pub y: F,
    pub selected: bool,
    pub parameter: F,
}

impl<F: Float> ControlPoint<F> {
    pub fn new(x: F, y: F) -> Self {
        ControlPoint {
            x,
            y,
            selected: false,
            parameter: F::zero(),
        }
    }

    /// Move the point, leaving its selection state alone.
    pub fn set_position(&mut self, x: F, y: F) {
        self.x = x;
        self.y = y;
    }

    /// True if (x, y) lies inside the closed pick box centered on the point.
    pub fn contains(&self, x: F, y: F) -> bool {
        let half: F = cast(HIT_HALF_EXTENT);
        let in_x = self.x - half <= x && x <= self.x + half;
        let in_y = self.y - half <= y && y <= self.y + half;
        in_x && in_y
    }
}

impl<F: Float> Point<F> for ControlPoint<F> {
    fn x(&self) -> F {
        self.x
    }

    fn y(&self) -> F {
        self.y
    }
}

/// Ordered control points. Insertion order is the curve order and is never
/// rearranged; duplicates are allowed.
#[derive(Debug, Clone, Default)]
pub struct ControlPointSet<F = f64> {
    points: Vec<ControlPoint<F>>,
}

impl<F: Float> ControlPointSet<F> {
    pub fn new() -> Self {
        ControlPointSet { points: Vec::new() }
    }

    /// Append an unselected point and return its index.
    pub fn add(&mut self, x: F, y: F) -> usize {
        self.points.push(ControlPoint::new(x, y));
        self.points.len() - 1
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint<F>> {
        self.points.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, ControlPoint<F>> {
        self.points.iter()
    }

    pub fn as_slice(&self) -> &[ControlPoint<F>] {
        &self.points
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Index of the first point whose pick box contains (x, y).
    pub fn hit_test(&self, x: F, y: F) -> Option<usize> {
        self.points.iter().position(|p| p.contains(x, y))
    }

    /// Recompute every `selected` flag from the pick boxes at (x, y).
    /// Overlapping boxes may light up several points at once.
    /// Returns true if any flag changed.
    pub fn update_selection(&mut self, x: F, y: F) -> bool {
        let mut changed = false;
        for point in self.points.iter_mut() {
            let hit = point.contains(x, y);
            changed |= point.selected != hit;
            point.selected = hit;
        }
        changed
    }

    /// The last selected index in sequence order.
    pub fn last_selected(&self) -> Option<usize> {
        self.points.iter().rposition(|p| p.selected)
    }

    /// Overwrite the position of the point at `index`.
    /// Returns false if there is no such point.
    pub fn move_point(&mut self, index: usize, x: F, y: F) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.set_position(x, y);
                true
            }
            None => false,
        }
    }

    /// Start of the sampled parameter range, zero for an empty set.
    pub fn start_parameter(&self) -> F {
        self.points.first().map_or(F::zero(), |p| p.parameter)
    }
}

impl<F> Index<usize> for ControlPointSet<F> {
    type Output = ControlPoint<F>;

    fn index(&self, index: usize) -> &ControlPoint<F> {
        &self.points[index]
    }
}

impl<'a, F> IntoIterator for &'a ControlPointSet<F> {
    type Item = &'a ControlPoint<F>;
    type IntoIter = slice::Iter<'a, ControlPoint<F>>;

    fn into_iter(self) -> slice::Iter<'a, ControlPoint<F>> {
        self.points.iter()
    }
}

impl<F: Float> FromIterator<(F, F)> for ControlPointSet<F> {
    fn from_iter<I: IntoIterator<Item = (F, F)>>(iter: I) -> Self {
        ControlPointSet {
            points: iter
                .into_iter()
                .map(|(x, y)| ControlPoint::new(x, y))
                .collect(),
        }
    }
}
