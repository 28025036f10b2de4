//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types, field paths       |

mod error;

pub use error::{ConfigError, FieldPath};
