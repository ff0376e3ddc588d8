//! Temporary repositories shared by the integration tests.

#![allow(dead_code)]

use git2::{ObjectType, Repository};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a repository with a configured identity and one initial commit.
pub fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    let repo = Repository::init(temp_dir.path()).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    commit_file(temp_dir.path(), "README.md", "# Test Repo");

    temp_dir
}

/// Writes `name` with `contents` and commits it on top of `HEAD`.
pub fn commit_file(path: &Path, name: &str, contents: &str) -> git2::Oid {
    let repo = Repository::open(path).unwrap();
    fs::write(path.join(name), contents).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = repo.signature().unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, &format!("add {}", name), &tree, &parents)
        .unwrap()
}

/// Creates a lightweight tag at `HEAD`.
pub fn tag_head(path: &Path, name: &str) {
    let repo = Repository::open(path).unwrap();
    let head = repo.head().unwrap().peel(ObjectType::Commit).unwrap();
    repo.tag_lightweight(name, &head, false).unwrap();
}

/// Creates an annotated tag at `HEAD`.
pub fn annotate_head(path: &Path, name: &str) {
    let repo = Repository::open(path).unwrap();
    let head = repo.head().unwrap().peel(ObjectType::Commit).unwrap();
    let sig = repo.signature().unwrap();
    repo.tag(name, &head, &sig, &format!("Release {}", name), false)
        .unwrap();
}

/// Returns every tag name in the repository, sorted.
pub fn tag_names(path: &Path) -> Vec<String> {
    let repo = Repository::open(path).unwrap();
    let mut names: Vec<String> = repo
        .tag_names(None)
        .unwrap()
        .iter()
        .flatten()
        .map(|s| s.to_string())
        .collect();
    names.sort();
    names
}
