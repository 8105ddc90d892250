//! # rg-slider
//!
//! A draggable range slider bound to a host-owned value.
//!
//! The widget attaches to existing markup inside a [`rg_dom::Document`]: a
//! track bar and a handle, both located by class name. Pointer presses on the
//! handle start tracking, document-wide moves drag it, and clicks on the widget
//! jump to the clicked position. Every recomputed value is published into a
//! [`BoundValue`], optionally snapped to a step count or a navigator range.
//!
//! ```no_run
//! use rg_dom::{Document, ElementPath, Rect};
//! use rg_slider::{slider_markup, BoundValue, Slider, SliderConfig, SliderStyle};
//!
//! let config = SliderConfig::default().with_step(10);
//! let markup = slider_markup(&config, &SliderStyle::default()).unwrap();
//! let mut document = Document::new(markup);
//! document.compute_layout(Rect::from_min_size([0.0, 0.0], [800.0, 600.0]));
//!
//! let bound = BoundValue::new();
//! let slider = Slider::attach(&mut document, ElementPath::root(), config, bound.clone()).unwrap();
//! slider.ready(&document);
//! assert_eq!(bound.get(), Some(1));
//! ```

mod binding;
mod config;
mod error;
mod navigator;
mod position;
mod slider;
mod template;

pub use binding::*;
pub use config::*;
pub use error::*;
pub use navigator::*;
pub use position::*;
pub use slider::*;
pub use template::*;
