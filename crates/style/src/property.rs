//! The common contract for style properties.

/// A named style property with a string value.
///
/// The rendered form is the CSS declaration `name:value`.
pub trait Style {
    /// The fixed property name (e.g. `"color"`).
    fn name(&self) -> &'static str;

    /// The current property value.
    fn value(&self) -> String;

    /// Formats the property as a `name:value` declaration.
    fn declaration(&self) -> String {
        format!("{}:{}", self.name(), self.value())
    }
}
