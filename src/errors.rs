//! Configuration and export errors
//!
//! Geometry generation itself never fails: degenerate input produces an empty
//! `Profile` or `Mesh`. Only documents that do not have the expected shape at
//! all, and I/O, surface as errors.

use crate::config::Category;

/// Everything that can go wrong while loading or editing a [`Configuration`](crate::config::Configuration).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// (Json) The document is not valid JSON or a category has the wrong shape
    #[error("(Json) configuration document is malformed: {0}")]
    Json(#[from] serde_json::Error),
    /// (Io) Reading or writing the configuration file failed
    #[error("(Io) configuration file could not be accessed: {0}")]
    Io(#[from] std::io::Error),
    /// (Structure) A value does not match the shape its category expects
    #[error("(Structure) {category}: {message}")]
    Structure { category: Category, message: String },
    /// (IndexOutOfRange) An edit addressed an item that does not exist
    #[error("(IndexOutOfRange) {category}[{index}] does not exist (len = {len})")]
    IndexOutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },
    /// (ImmutableType) An edit tried to change an item's `type`
    #[error("(ImmutableType) {category}[{index}]: `type` cannot change after creation")]
    ImmutableType { category: Category, index: usize },
    /// (NotAList) An item edit addressed a single-record category
    #[error("(NotAList) {0} is a single record, not a list of items")]
    NotAList(Category),
    /// (UnknownCategory) A category name that the document does not define
    #[error("(UnknownCategory) no configuration category named `{0}`")]
    UnknownCategory(String),
}

/// Errors bubbled up from the mesh exporters.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// (Io) Writing the exported bytes failed
    #[error("(Io) export failed: {0}")]
    Io(#[from] std::io::Error),
    /// (Empty) Nothing visible to export
    #[error("(Empty) the scene has no visible geometry")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_category() {
        let err = ConfigError::IndexOutOfRange {
            category: Category::Markers,
            index: 4,
            len: 2,
        };
        let text = err.to_string();
        assert!(text.contains("markers[4]"));
        assert!(text.contains("len = 2"));
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigError>();
        assert_send_sync::<ExportError>();
    }
}
