//! Operation modes for the scroller binary.

pub mod carousel;
