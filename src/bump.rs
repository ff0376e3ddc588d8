use crate::git::TagRepository;
use crate::version::{BumpLevel, Version};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;

/// The transition computed by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bump {
    pub from: Version,
    pub to: Version,
}

/// Reads the current version tag, bumps it by `level` and writes the new tag.
///
/// Steps run strictly in order and the first failure ends the run; nothing is
/// retried or rolled back. The `Will bump from <old> to <new>` line is written
/// to `out` before the tag is created, so it is printed even if the write
/// fails. With `dry_run` the tag is not created.
pub fn bump_tag(
    repo: &dyn TagRepository,
    level: BumpLevel,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<Bump> {
    let current_tag = repo.current_tag().context("Could not get current tag")?;
    let from = Version::parse(&current_tag)?;
    let to = from.bump(level)?;
    debug!("Bumping {} by {} -> {}", from, level, to);

    writeln!(out, "Will bump from {} to {}", from, to)?;

    if dry_run {
        info!("Dry run: not creating tag {}", to);
    } else {
        repo.add_version_tag(&to)
            .with_context(|| format!("Could not create tag {}", to))?;
    }

    Ok(Bump { from, to })
}
