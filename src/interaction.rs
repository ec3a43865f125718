//! Pointer driven editing of the control point set.
//!
//! `InteractionController` owns the editor state: the control points, the
//! sampling configuration, the display toggles and the derived curve. Each
//! handler applies one pointer or UI event to that state, recomputes the
//! curve when it is shown, and hands a `Frame` to the `Canvas` collaborator.
//! Coordinates are expected in curve space (origin bottom left).

use log::{debug, trace, warn};
use num_traits::Float;

use crate::control_point::{ControlPoint, ControlPointSet};
use crate::error::ConfigError;
use crate::point::CurvePoint;
use crate::sampler::CurveSampler;
use crate::settings::{CurveSettings, DisplayOptions};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Everything a renderer needs to draw the editor.
#[derive(Debug, Copy, Clone)]
pub struct Frame<'a, F> {
    pub control_points: &'a [ControlPoint<F>],
    /// None while the curve is hidden or undrawable
    pub curve: Option<&'a [CurvePoint<F>]>,
    pub options: DisplayOptions,
}

impl<'a, F> Frame<'a, F> {
    /// Control points to draw as markers, if enabled.
    pub fn control_point_markers(&self) -> Option<&'a [ControlPoint<F>]> {
        self.options.show_control_points.then_some(self.control_points)
    }

    /// Control points to join into the control polygon, if enabled.
    pub fn control_polygon(&self) -> Option<&'a [ControlPoint<F>]> {
        self.options.show_control_polygon.then_some(self.control_points)
    }

    /// Curve samples to draw as individual points, if enabled.
    pub fn curve_points(&self) -> Option<&'a [CurvePoint<F>]> {
        self.curve.filter(|_| self.options.curve_as_points)
    }

    /// Curve samples to draw as a line strip, if enabled.
    pub fn curve_line(&self) -> Option<&'a [CurvePoint<F>]> {
        self.curve.filter(|_| self.options.curve_as_line)
    }
}

/// Rendering collaborator, called whenever visible state changed.
pub trait Canvas<F> {
    fn redraw(&mut self, frame: &Frame<'_, F>);
}

/// Editor state machine for placing and dragging control points.
#[derive(Debug, Clone)]
pub struct InteractionController<F = f64> {
    points: ControlPointSet<F>,
    sampler: CurveSampler,
    options: DisplayOptions,
    curve: Option<Vec<CurvePoint<F>>>,
    drag_target: Option<usize>,
    primary_down: bool,
    // set when the last primary press grabbed a point, swallows the click that follows
    press_grabbed: bool,
}

impl<F> InteractionController<F>
where
    F: Float + Default + core::fmt::Debug,
{
    pub fn new(settings: CurveSettings) -> Self {
        InteractionController {
            points: ControlPointSet::new(),
            sampler: CurveSampler::new(settings),
            options: DisplayOptions::default(),
            curve: None,
            drag_target: None,
            primary_down: false,
            press_grabbed: false,
        }
    }

    pub fn control_points(&self) -> &ControlPointSet<F> {
        &self.points
    }

    /// The sampled curve, None while hidden or undrawable.
    pub fn curve(&self) -> Option<&[CurvePoint<F>]> {
        self.curve.as_deref()
    }

    pub fn settings(&self) -> CurveSettings {
        self.sampler.settings()
    }

    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    /// Index of the point being dragged, if any.
    pub fn drag_target(&self) -> Option<usize> {
        self.drag_target
    }

    pub fn frame(&self) -> Frame<'_, F> {
        Frame {
            control_points: self.points.as_slice(),
            curve: self.curve(),
            options: self.options,
        }
    }

    /// Append a control point regardless of the drag state.
    pub fn add_point<C: Canvas<F>>(&mut self, x: F, y: F, canvas: &mut C) -> usize {
        let index = self.points.add(x, y);
        debug!("added control point {} at ({:?}, {:?})", index, x, y);
        self.recompute();
        self.refresh(canvas);
        index
    }

    /// Pointer moved. With the primary button held the drag target follows the
    /// pointer, otherwise the selection flags follow the hover position.
    pub fn pointer_move<C: Canvas<F>>(&mut self, x: F, y: F, canvas: &mut C) {
        if self.primary_down {
            let Some(index) = self.drag_target else {
                return;
            };
            if self.points.move_point(index, x, y) {
                self.recompute();
                self.refresh(canvas);
            }
        } else if self.points.update_selection(x, y) {
            trace!("hover selection changed at ({:?}, {:?})", x, y);
            self.refresh(canvas);
        }
    }

    /// Button pressed. A primary press starts dragging the last selected point
    /// in sequence order, if there is one.
    pub fn pointer_down(&mut self, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        self.drag_target = self.points.last_selected();
        self.press_grabbed = self.drag_target.is_some();
        self.primary_down = true;
        if let Some(index) = self.drag_target {
            debug!("drag started on control point {}", index);
        }
    }

    /// Button released. A primary release ends any drag.
    pub fn pointer_up(&mut self, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        if let Some(index) = self.drag_target.take() {
            debug!("drag ended on control point {}", index);
        }
        self.primary_down = false;
    }

    /// Click at (x, y). Adds a point unless the press behind the click grabbed one.
    /// Returns the index of the new point.
    pub fn click<C: Canvas<F>>(&mut self, x: F, y: F, canvas: &mut C) -> Option<usize> {
        if self.drag_target.is_some() || self.press_grabbed {
            return None;
        }
        Some(self.add_point(x, y, canvas))
    }

    /// Change the spline order. Invalid values are refused and leave the current
    /// configuration in place.
    pub fn set_order<C: Canvas<F>>(
        &mut self,
        order: usize,
        canvas: &mut C,
    ) -> Result<(), ConfigError> {
        let settings = self.settings().with_order(order).map_err(|e| {
            warn!("{}", e);
            e
        })?;
        self.apply_settings(settings, canvas);
        Ok(())
    }

    /// Change the number of curve samples. Invalid values are refused and leave
    /// the current configuration in place.
    pub fn set_sample_count<C: Canvas<F>>(
        &mut self,
        sample_count: usize,
        canvas: &mut C,
    ) -> Result<(), ConfigError> {
        let settings = self
            .settings()
            .with_sample_count(sample_count)
            .map_err(|e| {
                warn!("{}", e);
                e
            })?;
        self.apply_settings(settings, canvas);
        Ok(())
    }

    pub fn toggle_curve<C: Canvas<F>>(&mut self, canvas: &mut C) {
        self.options.show_curve = !self.options.show_curve;
        self.recompute();
        self.refresh(canvas);
    }

    pub fn toggle_control_points<C: Canvas<F>>(&mut self, canvas: &mut C) {
        self.options.show_control_points = !self.options.show_control_points;
        self.refresh(canvas);
    }

    pub fn toggle_control_polygon<C: Canvas<F>>(&mut self, canvas: &mut C) {
        self.options.show_control_polygon = !self.options.show_control_polygon;
        self.refresh(canvas);
    }

    pub fn toggle_curve_points<C: Canvas<F>>(&mut self, canvas: &mut C) {
        self.options.curve_as_points = !self.options.curve_as_points;
        self.refresh(canvas);
    }

    pub fn toggle_curve_line<C: Canvas<F>>(&mut self, canvas: &mut C) {
        self.options.curve_as_line = !self.options.curve_as_line;
        self.refresh(canvas);
    }

    /// Remove all control points and the curve.
    pub fn clear<C: Canvas<F>>(&mut self, canvas: &mut C) {
        self.points.clear();
        self.drag_target = None;
        self.press_grabbed = false;
        self.recompute();
        self.refresh(canvas);
    }

    fn apply_settings<C: Canvas<F>>(&mut self, settings: CurveSettings, canvas: &mut C) {
        debug!(
            "curve settings: order {}, {} samples",
            settings.order(),
            settings.sample_count()
        );
        self.sampler.set_settings(settings);
        self.recompute();
        self.refresh(canvas);
    }

    /// Replace the curve wholesale, or drop it while hidden.
    fn recompute(&mut self) {
        self.curve = if self.options.show_curve {
            self.sampler.sample(&self.points)
        } else {
            None
        };
        match &self.curve {
            Some(curve) => debug!(
                "sampled {} curve points from {} control points",
                curve.len(),
                self.points.len()
            ),
            None if self.options.show_curve => debug!(
                "curve undrawable: order {} needs more than {} control points",
                self.settings().order(),
                self.points.len()
            ),
            None => {}
        }
    }

    fn refresh<C: Canvas<F>>(&self, canvas: &mut C) {
        canvas.redraw(&self.frame());
    }
}

impl<F> Default for InteractionController<F>
where
    F: Float + Default + core::fmt::Debug,
{
    fn default() -> Self {
        InteractionController::new(CurveSettings::default())
    }
}
