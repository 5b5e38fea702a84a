//! Transform trait and closure-backed units.

use mdtree_core::Text;

/// Type alias for transformation functions
pub type TransformFnBox = Box<dyn Fn(Text) -> Text + Send + Sync>;

/// A transformation unit rewrites inline text.
///
/// Units are invoked in the order the pipeline was configured with, each one
/// receiving the previous unit's output. Implementations must be reentrant:
/// one pipeline may be shared between threads.
pub trait Transform: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Rewrite the given text
    fn transform(&self, text: Text) -> Text;
}

/// A unit defined by a closure
pub struct TransformFn {
    name: String,
    function: TransformFnBox,
}

impl TransformFn {
    /// Create a new closure-backed unit
    pub fn new<F>(name: &str, function: F) -> Self
    where
        F: Fn(Text) -> Text + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            function: Box::new(function),
        }
    }

    /// Create a unit that only rewrites raw fragments
    pub fn raw<F>(name: &str, function: F) -> Self
    where
        F: Fn(&str) -> Vec<mdtree_core::Inline> + Send + Sync + 'static,
    {
        Self::new(name, move |text: Text| text.rewrite_raw(&function))
    }

    /// Box this unit for use in a pipeline
    pub fn boxed(self) -> Box<dyn Transform> {
        Box::new(self)
    }
}

impl Transform for TransformFn {
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self, text: Text) -> Text {
        (self.function)(text)
    }
}

impl std::fmt::Debug for TransformFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformFn").field("name", &self.name).finish()
    }
}
