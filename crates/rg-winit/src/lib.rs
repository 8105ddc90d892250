//! # rg-winit
//!
//! Feeds winit window input into an [`rg_dom::Document`].
//!
//! [`InputState`] turns `WindowEvent`s into [`rg_dom::PointerEvent`]s; the host
//! dispatches those into its document.

mod input;

pub use input::*;
