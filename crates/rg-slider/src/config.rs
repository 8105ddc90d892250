//! Slider configuration
//!
//! Configuration is read once when the widget is attached. It can be built in
//! code, deserialized (TOML, JSON, ...) with camelCase keys, or parsed from the
//! string-valued attributes of the markup.

use serde::Deserialize;

use crate::error::ConfigurationError;

/// Default class of the draggable handle
pub const DEFAULT_TRACKER_CLASS: &str = "rg-tracker";
/// Default class of the track bar the handle moves along
pub const DEFAULT_TRACK_BAR_CLASS: &str = "rg-slider-wrapper";
/// Default class of the navigator label list
pub const DEFAULT_NAVIGATOR_CLASS: &str = "rg-navigator";

/// Slider configuration
///
/// At most one of `step` and `navigator_from` may be set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SliderConfig {
    /// Class of the draggable handle
    #[serde(alias = "trackClass")]
    pub tracker_class: String,
    /// Class of the track bar
    pub track_bar_class: String,
    /// Class of the navigator label list
    pub navigator_class: String,
    /// Render navigator labels; also required for range mode
    pub show_navigator: bool,
    /// Number of selectable positions in step mode
    pub step: Option<i64>,
    /// First value in range mode
    pub navigator_from: Option<i64>,
    /// Last value in range mode
    pub navigator_to: Option<i64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            tracker_class: DEFAULT_TRACKER_CLASS.to_string(),
            track_bar_class: DEFAULT_TRACK_BAR_CLASS.to_string(),
            navigator_class: DEFAULT_NAVIGATOR_CLASS.to_string(),
            show_navigator: false,
            step: None,
            navigator_from: None,
            navigator_to: None,
        }
    }
}

impl SliderConfig {
    pub fn with_tracker_class(mut self, class: impl Into<String>) -> Self {
        self.tracker_class = class.into();
        self
    }

    pub fn with_track_bar_class(mut self, class: impl Into<String>) -> Self {
        self.track_bar_class = class.into();
        self
    }

    pub fn with_navigator_class(mut self, class: impl Into<String>) -> Self {
        self.navigator_class = class.into();
        self
    }

    pub fn with_show_navigator(mut self, show: bool) -> Self {
        self.show_navigator = show;
        self
    }

    /// Step mode with `step` selectable positions
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    /// Range mode from `from` to `to`
    ///
    /// Range mode is only active together with `show_navigator`.
    pub fn with_navigator_range(mut self, from: i64, to: i64) -> Self {
        self.navigator_from = Some(from);
        self.navigator_to = Some(to);
        self
    }

    /// Build a configuration from markup attributes
    ///
    /// Recognized names are `trackClass` (or `trackerClass`), `trackBarClass`,
    /// `navigatorClass`, `showNavigator`, `step`, `navigatorFrom` and
    /// `navigatorTo`. Empty values count as unset and unknown names are ignored.
    pub fn from_attributes<'a>(
        attributes: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigurationError> {
        let mut config = Self::default();

        for (name, value) in attributes {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match name {
                "trackClass" | "trackerClass" => config.tracker_class = value.to_string(),
                "trackBarClass" => config.track_bar_class = value.to_string(),
                "navigatorClass" => config.navigator_class = value.to_string(),
                "showNavigator" => config.show_navigator = parse_flag(value),
                "step" => config.step = Some(parse_int(name, value)?),
                "navigatorFrom" => config.navigator_from = Some(parse_int(name, value)?),
                "navigatorTo" => config.navigator_to = Some(parse_int(name, value)?),
                _ => log::debug!("ignoring unknown slider attribute {name}"),
            }
        }

        Ok(config)
    }
}

/// Any present flag value except an explicit `false`/`0` enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(value.to_ascii_lowercase().as_str(), "false" | "0")
}

/// Parse the leading integer of an attribute value
///
/// Like attribute integer parsing in markup: an optional sign followed by
/// digits, ignoring anything after them (`"10px"` is 10).
fn parse_int(attribute: &str, value: &str) -> Result<i64, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidNumber {
        attribute: attribute.to_string(),
        value: value.to_string(),
    };

    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(invalid());
    }

    let magnitude: i64 = digits[..end].parse().map_err(|_| invalid())?;
    Ok(if negative { -magnitude } else { magnitude })
}
