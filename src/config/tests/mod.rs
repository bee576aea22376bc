//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `loading`: Environment and CLI loading tests
//! - `options`: Label generation and scroller option mapping tests
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod options;
