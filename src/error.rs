//! Error types for rendering and header parsing.

use crate::component::ComponentType;

/// Errors scoped to a single render or a single header parse.
///
/// None of these abort a multi-platform batch; the batch records them per
/// platform and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The platform maps have no entry for the component type.
    #[error("platform {platform} has no artifact mapping for component type {component_type}")]
    UnknownComponentType {
        platform: String,
        component_type: ComponentType,
    },

    /// A template references a placeholder the renderer does not provide.
    #[error("template family {family} references unknown placeholder {placeholder:?}")]
    UnknownPlaceholder { family: String, placeholder: String },

    /// A file pattern produced an unusable filename.
    #[error("platform {platform} file pattern {pattern:?} is invalid: {detail}")]
    InvalidFilePattern {
        platform: String,
        pattern: String,
        detail: String,
    },

    /// A structured family failed to serialize.
    #[error("template family {family} failed to encode: {detail}")]
    Encode { family: String, detail: String },

    /// A rendered document's header block could not be read back.
    #[error("header parse error: {detail}")]
    Header { detail: String },
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, GenerateError>;
