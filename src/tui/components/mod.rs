//! UI components for the carousel TUI.
//!
//! Components are stateless renderers: the app passes a view context built
//! from the scroller's committed state and gets back terminal text.

mod carousel_strip;
mod text_columns;

pub use carousel_strip::{CarouselStripComponent, CarouselStripViewContext};
