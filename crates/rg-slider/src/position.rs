//! Pointer position to handle placement

use crate::navigator::Navigator;

/// Layout measurements the placement depends on, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackMetrics {
    /// Width of the draggable handle
    pub handle_width: f32,
    /// Width of the track bar
    pub track_width: f32,
}

impl TrackMetrics {
    pub fn new(handle_width: f32, track_width: f32) -> Self {
        Self {
            handle_width,
            track_width,
        }
    }

    /// Whether the measurements are unusable for placement
    pub fn is_degenerate(&self) -> bool {
        !(self.track_width.is_finite() && self.track_width > 0.0 && self.handle_width.is_finite())
    }

    /// Largest handle `left` percentage that keeps the handle inside the track
    pub fn max_available_percent(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (100.0 - 100.0 * self.handle_width as f64 / self.track_width as f64).max(0.0)
    }
}

/// Where the handle goes and which value that position stands for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Handle `left`, in percent of the track width
    pub left_percent: f64,
    pub value: i64,
}

/// Compute the handle placement for a pointer `offset_x` pixels right of the widget origin
///
/// The track percentage is `100 * (offset_x - handle_width) / track_width`,
/// limited to `[0, 100]`. Without steps the value is that percentage rounded;
/// with steps both snap to the nearest step. The handle position is finally
/// limited to [`TrackMetrics::max_available_percent`].
///
/// A degenerate track (zero, negative or non-finite width) places the handle
/// at 0 with the value of the track start.
pub fn expected_placement(
    offset_x: f32,
    metrics: &TrackMetrics,
    navigator: &Navigator,
) -> Placement {
    let go_to = if metrics.is_degenerate() {
        log::warn!(
            "slider track has no usable width ({:?}), placing handle at 0",
            metrics
        );
        0.0
    } else {
        let raw =
            100.0 * (offset_x as f64 - metrics.handle_width as f64) / metrics.track_width as f64;
        if raw.is_finite() {
            raw.clamp(0.0, 100.0)
        } else {
            0.0
        }
    };

    let (go_to, value) = match navigator.quantize(go_to) {
        Some(quantized) => (quantized.percent, quantized.value),
        None => (go_to, go_to.round() as i64),
    };

    Placement {
        left_percent: go_to.min(metrics.max_available_percent()),
        value,
    }
}
