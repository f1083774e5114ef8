//! Template renderers.

mod simple;

pub use simple::{RenderError, SimpleRenderer};
