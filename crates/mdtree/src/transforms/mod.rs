//! Inline transformation units.

mod commonmark;
mod transform;

pub use commonmark::{
    autolink_transform, code_autolink_html_transform, code_span_transform, commonmark_transforms,
    line_break_transform, raw_html_transform,
};
pub use transform::{Transform, TransformFn, TransformFnBox};

/// Constructor for a transformation unit
pub type TransformConstructor = fn() -> Box<dyn Transform>;
