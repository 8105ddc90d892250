//! Default slider markup
//!
//! The widget itself only needs a track bar and a handle somewhere inside its
//! root. This builds the standard markup for hosts that don't bring their own.

use rg_dom::{Element, Layout, Size};

use crate::config::SliderConfig;
use crate::error::ConfigurationError;
use crate::navigator::Navigator;

/// Class of the widget root produced by [`slider_markup`]
pub const SLIDER_ROOT_CLASS: &str = "rg-slider";

/// Dimensions of the default markup
#[derive(Debug, Clone)]
pub struct SliderStyle {
    /// Width of the slider track
    pub track_width: f32,
    /// Height of the slider track
    pub track_height: f32,
    /// Width of the draggable handle
    pub handle_width: f32,
    /// Height of the navigator label row
    pub navigator_height: f32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_width: 300.0,
            track_height: 20.0,
            handle_width: 20.0,
            navigator_height: 20.0,
        }
    }
}

/// Create the slider markup
///
/// The markup consists of:
/// - A root element (`rg-slider`)
/// - The track bar (`config.track_bar_class`) containing the handle (`config.tracker_class`)
/// - With `show_navigator` and steps, a navigator list (`config.navigator_class`) with one
///   labelled marker per navigation entry
///
/// Fails for the same configurations [`Slider::attach`](crate::Slider::attach) rejects.
pub fn slider_markup(
    config: &SliderConfig,
    style: &SliderStyle,
) -> Result<Element, ConfigurationError> {
    let navigator = Navigator::from_config(config)?;

    let handle = {
        let mut handle = Element::new("span")
            .with_class(config.tracker_class.as_str())
            .with_size(style.handle_width, style.track_height);
        handle.left_percent = Some(0.0);
        handle
    };

    let mut root = Element::new("div")
        .with_class(SLIDER_ROOT_CLASS)
        .with_width(Size::px(style.track_width))
        .with_height(Size::px(style.track_height + style.navigator_height))
        .with_layout(Layout::Vertical)
        .with_child(
            Element::new("div")
                .with_class(config.track_bar_class.as_str())
                .with_width(Size::fraction(1.0))
                .with_height(Size::px(style.track_height))
                .with_child(handle),
        );

    if config.show_navigator && navigator.is_stepped() {
        let marker_width = navigator.marker_width(style.track_width);
        root = root.with_child(
            Element::new("ul")
                .with_class(config.navigator_class.as_str())
                .with_width(Size::fraction(1.0))
                .with_height(Size::px(style.navigator_height))
                .with_layout(Layout::Horizontal)
                .with_children(
                    navigator
                        .list()
                        .iter()
                        .map(|value| {
                            Element::new("li")
                                .with_size(marker_width, style.navigator_height)
                                .with_text(value.to_string())
                        })
                        .collect(),
                ),
        );
    }

    Ok(root)
}
