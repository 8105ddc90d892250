//! # rg-dom
//!
//! The rendering surface the slider widget lives on.
//!
//! This crate provides a small element tree with class lists and layout
//! metrics, pre-order class queries, hit testing, and a [`Document`] that owns
//! the tree together with its pointer event listeners. It has no knowledge of
//! any windowing system; backends such as `rg-winit` feed it [`PointerEvent`]s.

mod document;
mod element;
mod event;
mod layout;
mod primitives;
mod query;

pub use document::*;
pub use element::*;
pub use event::*;
pub use hit_test::*;
pub use layout::*;
pub use primitives::*;
pub use query::*;
