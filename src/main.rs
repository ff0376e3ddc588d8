use anyhow::{Context, Result};
use clap::Parser;
use gittag::{
    arguments::{Arguments, Backend},
    bump::bump_tag,
    git::{Git2Repository, GitCommand, TagRepository},
};
use log::LevelFilter;

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let repo: Box<dyn TagRepository> = match args.backend {
        Backend::Git => Box::new(GitCommand::new(&args.path)),
        Backend::Libgit2 => Box::new(
            Git2Repository::open(&args.path).context("Could not open repository")?,
        ),
    };

    bump_tag(repo.as_ref(), args.level, args.dry_run, &mut std::io::stdout())?;

    Ok(())
}
