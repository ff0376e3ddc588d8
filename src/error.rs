use crate::version::BumpLevel;
use thiserror::Error;

/// The current tag does not have the `v<major>.<minor>.<patch>` shape.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("tag {tag:?} does not match v{{major}}.{{minor}}.{{patch}} format")]
    Pattern { tag: String },

    #[error("tag part is not an integer: {part:?} in {tag:?}")]
    NotInteger { part: String, tag: String },

    #[error("cannot bump {level} of {tag}: component is already at its maximum")]
    Overflow { tag: String, level: BumpLevel },
}

/// A git invocation failed. The message carries git's own diagnostic.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("git: {diagnostic}")]
    Failed { diagnostic: String },

    #[error("failed to run git: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("git: {0}")]
    Repository(#[from] git2::Error),
}

impl ToolError {
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        ToolError::Failed {
            diagnostic: diagnostic.into(),
        }
    }
}
