use crate::regexp_cache::InvalidRegexError;

/// Read-only view of one element of a territory description tree.
///
/// The compiler only ever asks for direct children by tag, attributes by
/// name and the text content of an element, so any document representation
/// can be plugged in by implementing these three lookups.
pub trait MetadataElement {
    /// Returns the direct children of this element with the given tag, in
    /// document order.
    fn children_named<'a>(&'a self, tag: &str) -> Vec<&'a Self>;

    /// Returns the value of the attribute, or `None` if it is not present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Returns the text content of this element, or `None` if it is empty.
    fn text(&self) -> Option<&str>;
}

/// Internal regular expression API used to isolate the engine the compiled
/// patterns are later handed to, so a different engine could be swapped in
/// easily.
pub(crate) trait PatternSyntaxApi: Send + Sync {
    /// Returns an error if the engine refuses to compile the given pattern.
    fn check_syntax(&self, pattern: &str) -> Result<(), InvalidRegexError>;
}
