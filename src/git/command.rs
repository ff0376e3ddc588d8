use crate::error::ToolError;
use crate::git::{TAG_GLOB, TagRepository};
use crate::version::Version;
use log::{debug, info};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Tag backend that runs the `git` binary.
#[derive(Debug, Clone)]
pub struct GitCommand {
    program: OsString,
    workdir: PathBuf,
}

impl GitCommand {
    /// Runs `git` from `PATH` inside `workdir`.
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        GitCommand {
            program: OsString::from("git"),
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    /// Uses a different executable in place of `git`.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = program.into();
        self
    }

    fn run(&self, args: &[&str]) -> Result<Output, ToolError> {
        debug!(
            "Running {} {} in {:?}",
            self.program.to_string_lossy(),
            args.join(" "),
            self.workdir
        );

        Command::new(&self.program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(ToolError::Spawn)
    }
}

impl TagRepository for GitCommand {
    fn current_tag(&self) -> Result<String, ToolError> {
        let output = self.run(&["describe", "--tags", "--abbrev=0", "--match", TAG_GLOB])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::failed(stderr.trim()));
        }

        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!("Found current tag: {}", tag);
        Ok(tag)
    }

    fn add_version_tag(&self, version: &Version) -> Result<(), ToolError> {
        let tag_name = version.to_string();
        info!("Creating tag: {}", tag_name);

        let output = self.run(&["tag", tag_name.as_str()])?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(ToolError::failed(combined.trim()));
        }

        info!("Created tag: {}", tag_name);
        Ok(())
    }
}
