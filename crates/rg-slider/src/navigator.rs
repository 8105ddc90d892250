//! Step and range quantization
//!
//! A slider is either continuous (values 0..=100), in step mode (`step`
//! positions, values `1..=step`), or in range mode (values
//! `navigatorFrom..=navigatorTo`). The navigation list holds every value but
//! the last; the last one is reached through the final step of the track (see
//! [`Navigator::quantize`]).

use crate::config::SliderConfig;
use crate::error::ConfigurationError;

/// Largest number of steps a slider accepts
///
/// Every step becomes a navigation entry and, with `showNavigator`, a marker.
pub const MAX_STEPS: i64 = 1000;

/// How values are quantized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Unquantized percentage
    Continuous,
    /// Derived from a step count
    Steps { count: i64 },
    /// Derived from an explicit start/end pair
    Range { from: i64, to: i64 },
}

/// Result of snapping a track percentage to a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantized {
    /// Snapped percentage
    pub percent: f64,
    /// Value of the snapped step
    pub value: i64,
}

/// Navigation list and step geometry derived from a [`SliderConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    mode: StepMode,
    total_steps: i64,
    list: Vec<i64>,
}

impl Navigator {
    /// Validate `config` and derive the navigation list
    pub fn from_config(config: &SliderConfig) -> Result<Self, ConfigurationError> {
        if config.navigator_from.is_some() && config.step.is_some() {
            return Err(ConfigurationError::MutuallyExclusiveOptions);
        }
        if let (Some(from), Some(to)) = (config.navigator_from, config.navigator_to) {
            if from > to {
                return Err(ConfigurationError::InvalidRange { from, to });
            }
        }

        let mode = match (config.step, config.navigator_from, config.navigator_to) {
            (Some(count), _, _) => StepMode::Steps { count },
            (None, Some(from), Some(to)) if config.show_navigator => StepMode::Range { from, to },
            _ => StepMode::Continuous,
        };

        let (total_steps, first) = match mode {
            StepMode::Continuous => (Some(0), 0),
            StepMode::Steps { count } => (count.checked_sub(1), 1),
            StepMode::Range { from, to } => (to.checked_sub(from), from),
        };
        let total_steps = match total_steps {
            Some(total) if total <= MAX_STEPS => total,
            _ => return Err(ConfigurationError::TooManySteps { max: MAX_STEPS }),
        };
        if total_steps <= 0 && mode != StepMode::Continuous {
            log::warn!("slider {:?} has no steps, falling back to continuous values", mode);
        }

        let list = if total_steps > 0 {
            (first..first + total_steps).collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            mode,
            total_steps: total_steps.max(0),
            list,
        })
    }

    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Number of steps between the ends of the track, zero when continuous
    pub fn total_steps(&self) -> i64 {
        self.total_steps
    }

    pub fn is_stepped(&self) -> bool {
        self.total_steps > 0
    }

    /// Ordered selectable values, empty when continuous
    pub fn list(&self) -> &[i64] {
        &self.list
    }

    /// Every value the slider can publish when stepped: the list plus the final step
    pub fn reachable_values(&self) -> Vec<i64> {
        let mut values = self.list.clone();
        if let Some(&last) = self.list.last() {
            values.push(last + 1);
        }
        values
    }

    /// Value published once the slider is ready
    pub fn initial_value(&self) -> i64 {
        self.list.first().copied().unwrap_or(0)
    }

    /// Width of one step as a percentage of the track
    pub fn step_percent(&self) -> f64 {
        if self.is_stepped() {
            100.0 / self.total_steps as f64
        } else {
            100.0
        }
    }

    /// Pixel width of one navigator marker on a track of `track_width` pixels
    pub fn marker_width(&self, track_width: f32) -> f32 {
        if !self.is_stepped() {
            return 0.0;
        }
        (track_width as f64 * self.step_percent() / 100.0).round() as f32
    }

    /// Snap a track percentage in `[0, 100]` to the nearest step
    ///
    /// Reaching the end of the track yields one more than the last list entry
    /// rather than a list entry. Returns `None` when continuous.
    pub fn quantize(&self, percent: f64) -> Option<Quantized> {
        if !self.is_stepped() {
            return None;
        }

        let each_step = self.step_percent();
        let index = (percent / each_step).round().max(0.0) as usize;
        let snapped = (index as f64 * each_step).floor();

        // FIXME: the final step publishes `list[index - 1] + 1` instead of a
        // list entry. Pending product review of whether the list itself
        // should end with that value.
        let value = if snapped == 100.0 || index >= self.list.len() {
            self.list[self.list.len().min(index) - 1] + 1
        } else {
            self.list[index]
        };

        Some(Quantized {
            percent: snapped,
            value,
        })
    }
}
