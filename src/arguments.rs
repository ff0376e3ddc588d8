use crate::version::BumpLevel;
use clap::{Parser, ValueEnum};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum Backend {
    /// Run the `git` executable
    #[default]
    Git,
    /// Use libgit2 in-process
    Libgit2,
}

#[derive(Debug, Parser)]
#[command(author, version, about, bin_name = "gittag")]
pub struct Arguments {
    /// Version component to increment
    #[arg(value_enum)]
    pub level: BumpLevel,
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short, value_enum, default_value_t = Backend::Git)]
    pub backend: Backend,
    /// Print the next version without creating the tag
    #[arg(long, short = 'n')]
    pub dry_run: bool,
    #[arg(long, short)]
    pub verbose: bool,
}
