//! Timeline construction and playback queries.
//!
//! A [`DrawingPlan`] is a strictly sequential list of stroke and pause instructions. Queries
//! never mutate the plan, so any number of snapshots can be taken from the same value.

mod frames;

pub use frames::{Frame, Frames};

use crate::{Error, Result};
use handscript_core::Stroke;
use handscript_core::geom::{LayoutBox, Point, polyline_length};
use serde::{Deserialize, Serialize};

/// Pause after every stroke when the config leaves it unset, in ms.
pub const DEFAULT_PAUSE_BETWEEN_STROKES_MS: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Pen speed in pixels per second.
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_between_strokes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_between_chars: Option<f64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new(300.0)
    }
}

impl AnimationConfig {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            pause_between_strokes: None,
            pause_between_chars: None,
        }
    }

    pub fn with_pause_between_strokes(mut self, ms: f64) -> Self {
        self.pause_between_strokes = Some(ms);
        self
    }

    pub fn with_pause_between_chars(mut self, ms: f64) -> Self {
        self.pause_between_chars = Some(ms);
        self
    }

    pub fn stroke_pause_ms(&self) -> f64 {
        self.pause_between_strokes
            .unwrap_or(DEFAULT_PAUSE_BETWEEN_STROKES_MS)
    }

    pub fn char_pause_ms(&self) -> f64 {
        self.pause_between_chars.unwrap_or(0.0)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(Error::InvalidConfig {
                field: "speed",
                value: self.speed,
                reason: "must be a positive number of pixels per second",
            });
        }
        for (field, value) in [
            ("pause_between_strokes", self.pause_between_strokes),
            ("pause_between_chars", self.pause_between_chars),
        ] {
            let Some(value) = value else { continue };
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig {
                    field,
                    value,
                    reason: "must be a non-negative number of milliseconds",
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DrawingInstruction {
    Stroke {
        points: Vec<Point>,
        start_ms: f64,
        end_ms: f64,
    },
    Pause {
        duration_ms: f64,
        start_ms: f64,
        end_ms: f64,
    },
}

impl DrawingInstruction {
    pub fn start_ms(&self) -> f64 {
        match self {
            Self::Stroke { start_ms, .. } | Self::Pause { start_ms, .. } => *start_ms,
        }
    }

    pub fn end_ms(&self) -> f64 {
        match self {
            Self::Stroke { end_ms, .. } | Self::Pause { end_ms, .. } => *end_ms,
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.end_ms() - self.start_ms()
    }

    /// Stroke geometry, `None` for pauses.
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Self::Stroke { points, .. } => Some(points),
            Self::Pause { .. } => None,
        }
    }

    pub fn is_stroke(&self) -> bool {
        matches!(self, Self::Stroke { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingPlan {
    pub instructions: Vec<DrawingInstruction>,
    pub total_duration_ms: f64,
    pub bounds: LayoutBox,
}

/// Builds the timeline for `strokes`, in input order, starting at time 0.
///
/// Each stroke takes `arc length / speed` seconds. Zero-length strokes are kept as
/// zero-duration instructions. Pauses of zero length are not emitted.
pub fn create_drawing_plan<I>(
    strokes: I,
    bounds: LayoutBox,
    config: &AnimationConfig,
) -> Result<DrawingPlan>
where
    I: IntoIterator<Item = Stroke>,
{
    config.validate()?;
    let stroke_pause = config.stroke_pause_ms();
    let char_pause = config.char_pause_ms();

    let mut builder = Timeline::default();
    for (i, stroke) in strokes.into_iter().enumerate() {
        if i > 0 && stroke.starts_glyph {
            builder.pause(char_pause);
        }
        if let Some(delay) = stroke.delay_ms {
            builder.pause(delay.max(0.0));
        }
        let duration = stroke.arc_length() / config.speed * 1000.0;
        builder.stroke(stroke.points, duration);
        builder.pause(stroke_pause);
    }

    let plan = DrawingPlan {
        total_duration_ms: builder.clock,
        instructions: builder.instructions,
        bounds,
    };
    tracing::debug!(
        strokes = plan.stroke_count(),
        instructions = plan.instructions.len(),
        total_ms = plan.total_duration_ms,
        "built drawing plan"
    );
    Ok(plan)
}

#[derive(Default)]
struct Timeline {
    instructions: Vec<DrawingInstruction>,
    clock: f64,
}

impl Timeline {
    fn stroke(&mut self, points: Vec<Point>, duration_ms: f64) {
        let start_ms = self.clock;
        self.clock += duration_ms;
        self.instructions.push(DrawingInstruction::Stroke {
            points,
            start_ms,
            end_ms: self.clock,
        });
    }

    fn pause(&mut self, duration_ms: f64) {
        if duration_ms <= 0.0 {
            return;
        }
        let start_ms = self.clock;
        self.clock += duration_ms;
        self.instructions.push(DrawingInstruction::Pause {
            duration_ms,
            start_ms,
            end_ms: self.clock,
        });
    }
}

impl DrawingPlan {
    pub fn stroke_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_stroke()).count()
    }

    /// Everything drawn after `time_ms`: whole strokes that have finished plus the visible
    /// prefix of the stroke in progress.
    pub fn state_at(&self, time_ms: f64) -> Vec<Vec<Point>> {
        if time_ms >= self.total_duration_ms {
            return self
                .instructions
                .iter()
                .filter_map(|i| i.points().map(<[Point]>::to_vec))
                .collect();
        }
        if time_ms <= 0.0 {
            return Vec::new();
        }

        let mut out = Vec::new();
        for instruction in &self.instructions {
            let DrawingInstruction::Stroke {
                points,
                start_ms,
                end_ms,
            } = instruction
            else {
                continue;
            };
            if time_ms >= *end_ms {
                out.push(points.clone());
            } else if time_ms >= *start_ms {
                let progress = (time_ms - start_ms) / (end_ms - start_ms);
                let partial = truncate_polyline(points, progress);
                if !partial.is_empty() {
                    out.push(partial);
                }
            } else {
                break;
            }
        }
        out
    }

    /// Snapshots every `1000 / fps` ms, ending with one at exactly the total duration.
    pub fn frames(&self, fps: f64) -> Result<Frames<'_>> {
        Frames::new(self, fps)
    }
}

/// The part of `points` covered after walking `progress` (0..=1) of its arc length.
///
/// Returns every whole point before the cut plus the interpolated cut point. Progress at or
/// below 0 yields nothing, at or above 1 the full polyline.
pub fn truncate_polyline(points: &[Point], progress: f64) -> Vec<Point> {
    if progress <= 0.0 || points.is_empty() {
        return Vec::new();
    }
    if progress >= 1.0 {
        return points.to_vec();
    }

    let total = polyline_length(points);
    if total == 0.0 {
        return vec![points[0]];
    }

    let target = total * progress;
    let mut walked = 0.0;
    for (i, w) in points.windows(2).enumerate() {
        let seg = w[0].distance_to(w[1]);
        if walked + seg >= target {
            let t = if seg > 0.0 { (target - walked) / seg } else { 0.0 };
            let mut out = points[..=i].to_vec();
            out.push(w[0].lerp(w[1], t));
            return out;
        }
        walked += seg;
    }
    points.to_vec()
}

#[cfg(test)]
mod tests;
