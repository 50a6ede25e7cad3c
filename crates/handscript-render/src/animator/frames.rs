use super::DrawingPlan;
use crate::{Error, Result};
use handscript_core::geom::Point;
use serde::Serialize;
use std::iter::FusedIterator;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub time_ms: f64,
    pub strokes: Vec<Vec<Point>>,
}

/// Lazy frame sequence over a plan.
///
/// Frame `i` is sampled at `i * step` (never by accumulating steps) for every sample strictly
/// before the end, followed by one frame at exactly the total duration.
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    plan: &'a DrawingPlan,
    step_ms: f64,
    regular: usize,
    next: usize,
}

impl<'a> Frames<'a> {
    pub(super) fn new(plan: &'a DrawingPlan, fps: f64) -> Result<Self> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(Error::InvalidConfig {
                field: "fps",
                value: fps,
                reason: "must be a positive frame rate",
            });
        }
        let step_ms = 1000.0 / fps;
        let regular = (plan.total_duration_ms / step_ms).ceil().max(0.0);
        if regular >= usize::MAX as f64 {
            return Err(Error::InvalidConfig {
                field: "fps",
                value: fps,
                reason: "frame count does not fit in memory addressing",
            });
        }
        let regular = regular as usize;
        Ok(Self {
            plan,
            step_ms,
            regular,
            next: 0,
        })
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    fn time_of(&self, index: usize) -> f64 {
        if index < self.regular {
            (index as f64 * self.step_ms).min(self.plan.total_duration_ms)
        } else {
            self.plan.total_duration_ms
        }
    }
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.next > self.regular {
            return None;
        }
        let time_ms = self.time_of(self.next);
        self.next += 1;
        Some(Frame {
            time_ms,
            strokes: self.plan.state_at(time_ms),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.regular.saturating_add(1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Frames<'_> {}

impl FusedIterator for Frames<'_> {}
