//! Reading and writing version tags.
//!
//! [`TagRepository`] is the seam between the bump logic and git. Two backends
//! implement it:
//!
//! - [`GitCommand`] shells out to the `git` binary (the default);
//! - [`Git2Repository`] talks to the repository in-process through libgit2.
//!
//! Both describe `HEAD` with the nearest reachable tag matching [`TAG_GLOB`]
//! and create lightweight tags at `HEAD`.

pub mod command;
pub mod libgit2;

pub use command::GitCommand;
pub use libgit2::Git2Repository;

use crate::error::ToolError;
use crate::version::Version;

/// Glob a tag name must match to be considered a version tag.
pub const TAG_GLOB: &str = "v*.*.*";

pub trait TagRepository {
    /// Returns the nearest tag reachable from `HEAD` that matches [`TAG_GLOB`],
    /// with surrounding whitespace trimmed.
    ///
    /// Fails when no such tag exists, when git is unavailable, or when the
    /// working directory is not inside a repository.
    fn current_tag(&self) -> Result<String, ToolError>;

    /// Creates a lightweight tag named after `version` at `HEAD`.
    ///
    /// Not idempotent: a second call with the same version fails because the
    /// tag already exists.
    fn add_version_tag(&self, version: &Version) -> Result<(), ToolError>;
}
