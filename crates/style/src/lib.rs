//! Inline style value objects.
//!
//! Each value is a named CSS-like property that formats itself as
//! `name:value`, suitable for composing a `style` attribute on a
//! markup element. These carry no tree semantics of their own.

pub mod border;
pub mod color;
pub mod error;
pub mod property;

pub use border::{Border, BorderStyle};
pub use color::Color;
pub use error::StyleError;
pub use property::Style;
