//! Git integration - files changed since the last commit.
//!
//! Uses `std::process::Command` to call the git CLI (no git2 dependency). The
//! listing is equivalent to diffing the HEAD tree against the working directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("{} is not inside a git repository", .0.display())]
    NotARepository(PathBuf),

    #[error("repository has no commits")]
    NoCommits,

    #[error("git {command} failed: {stderr}")]
    Command { command: String, stderr: String },
}

/// Which working-tree changes count as changed files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangedFileOptions {
    /// Also list files git does not track (ignored files stay excluded)
    pub include_untracked: bool,
    /// List tracked files that were removed from the working tree
    pub include_deleted: bool,
}

impl Default for ChangedFileOptions {
    fn default() -> Self {
        Self {
            include_untracked: false,
            include_deleted: true,
        }
    }
}

/// Run a git command in `repo_path`, returning stdout on success.
fn run_git(repo_path: &Path, args: &[&str]) -> Result<String, GitError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        return Err(GitError::Command {
            command: args.first().unwrap_or(&"").to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Working tree root of the repository containing `repo_path`
fn repository_root(repo_path: &Path) -> Result<PathBuf, GitError> {
    match run_git(repo_path, &["rev-parse", "--show-toplevel"]) {
        Ok(stdout) => Ok(PathBuf::from(stdout.trim_end_matches(['\n', '\r']))),
        Err(GitError::Command { .. }) => Err(GitError::NotARepository(repo_path.to_path_buf())),
        Err(e) => Err(e),
    }
}

fn ensure_head(root: &Path) -> Result<(), GitError> {
    match run_git(root, &["rev-parse", "--verify", "--quiet", "HEAD^{commit}"]) {
        Ok(_) => Ok(()),
        Err(GitError::Command { .. }) => Err(GitError::NoCommits),
        Err(e) => Err(e),
    }
}

fn split_nul(output: &str) -> impl Iterator<Item = &str> {
    output.split('\0').filter(|path| !path.is_empty())
}

/// Files that differ between HEAD and the working directory
pub fn changed_files(repo_path: &Path) -> Result<Vec<String>, GitError> {
    changed_files_with(repo_path, &ChangedFileOptions::default())
}

/// Like [`changed_files`], with control over untracked and deleted files
///
/// Paths are relative to the repository root, `/`-separated, sorted and
/// de-duplicated.
pub fn changed_files_with(
    repo_path: &Path,
    options: &ChangedFileOptions,
) -> Result<Vec<String>, GitError> {
    let root = repository_root(repo_path)?;
    ensure_head(&root)?;

    let mut args = vec!["diff", "--name-only", "--no-renames", "-z"];
    if !options.include_deleted {
        args.push("--diff-filter=d");
    }
    args.extend(["HEAD", "--"]);

    let diff = run_git(&root, &args)?;
    let mut files: BTreeSet<String> = split_nul(&diff).map(str::to_string).collect();

    if options.include_untracked {
        let others = run_git(&root, &["ls-files", "--others", "--exclude-standard", "-z"])?;
        files.extend(split_nul(&others).map(str::to_string));
    }

    debug!("{} changed files in {}", files.len(), root.display());
    Ok(files.into_iter().collect())
}

/// Changed files whose extension has a structural extractor
pub fn changed_source_files(repo_path: &Path) -> Result<Vec<String>, GitError> {
    let files = changed_files(repo_path)?;

    Ok(files
        .into_iter()
        .filter(|file| {
            Path::new(file)
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(crate::language::detect_language_from_extension)
                .is_some()
        })
        .collect())
}
