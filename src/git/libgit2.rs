use crate::error::ToolError;
use crate::git::{TAG_GLOB, TagRepository};
use crate::version::Version;
use git2::{DescribeFormatOptions, DescribeOptions, ObjectType, Repository};
use log::{debug, info};
use std::path::Path;

/// Tag backend that operates on the repository in-process through libgit2.
pub struct Git2Repository {
    repository: Repository,
}

impl Git2Repository {
    /// Opens the repository containing `path`, searching parent directories.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ToolError> {
        let path = path.as_ref();
        let repository = Repository::discover(path)?;

        debug!("Opened repository at {:?}", repository.path());

        Ok(Git2Repository { repository })
    }
}

impl TagRepository for Git2Repository {
    fn current_tag(&self) -> Result<String, ToolError> {
        let mut options = DescribeOptions::new();
        options.describe_tags().pattern(TAG_GLOB);

        let describe = self.repository.describe(&options)?;

        // Zero abbreviation yields the bare tag name, never `tag-N-gSHA`.
        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        let tag = describe.format(Some(&format))?.trim().to_string();
        debug!("Found current tag: {}", tag);
        Ok(tag)
    }

    fn add_version_tag(&self, version: &Version) -> Result<(), ToolError> {
        let tag_name = version.to_string();
        info!("Creating tag: {}", tag_name);

        let head = self.repository.head()?.peel(ObjectType::Commit)?;
        self.repository.tag_lightweight(&tag_name, &head, false)?;

        info!("Created tag: {}", tag_name);
        Ok(())
    }
}
