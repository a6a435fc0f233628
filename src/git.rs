//! # Git Module
//!
//! Resolves the branch shown in the status line by running the `git`
//! executable in the session's working directory.

use std::path::Path;
use std::process::Command;

use tracing::debug;

/// Run `git <args>` in `dir`, returning trimmed stdout on success.
fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let mut cmd = Command::new("git");
    cmd.args(args);
    // empty dir means "where we were started"
    if !dir.as_os_str().is_empty() {
        cmd.current_dir(dir);
    }
    let output = cmd
        .output()
        .map_err(|err| debug!(?args, %err, "git could not be spawned"))
        .ok()?;

    if !output.status.success() {
        debug!(?args, status = %output.status, "git query failed");
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Branch checked out in `dir`, or the short commit hash when HEAD is detached.
///
/// Any failure (no git, not a repository, no commits yet) yields `None`.
pub fn read_git_branch(dir: &Path) -> Option<String> {
    git_output(dir, &["symbolic-ref", "--short", "HEAD"])
        .or_else(|| {
            debug!(dir = %dir.display(), "no symbolic HEAD, trying short hash");
            git_output(dir, &["rev-parse", "--short", "HEAD"])
        })
        .filter(|branch| !branch.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    #[test]
    fn missing_directory_has_no_branch() {
        assert_eq!(read_git_branch(Path::new("/nonexistent/statusline/dir")), None);
    }

    #[test]
    fn reads_branch_of_fresh_repository() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let init = Command::new("git")
            .args(["init", "-q"])
            .current_dir(dir.path())
            .status()
            .unwrap();
        assert!(init.success());
        let set_head = Command::new("git")
            .args(["symbolic-ref", "HEAD", "refs/heads/feature/status"])
            .current_dir(dir.path())
            .status()
            .unwrap();
        assert!(set_head.success());

        assert_eq!(
            read_git_branch(dir.path()).as_deref(),
            Some("feature/status")
        );
    }

    #[test]
    fn detached_head_falls_back_to_short_hash() {
        if !git_available() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let git = |args: &[&str]| {
            Command::new("git")
                .args(args)
                .current_dir(dir.path())
                .env("GIT_AUTHOR_NAME", "statusline")
                .env("GIT_AUTHOR_EMAIL", "statusline@example.com")
                .env("GIT_COMMITTER_NAME", "statusline")
                .env("GIT_COMMITTER_EMAIL", "statusline@example.com")
                .output()
                .unwrap()
        };
        assert!(git(&["init", "-q"]).status.success());
        assert!(git(&["commit", "-q", "--allow-empty", "--no-gpg-sign", "-m", "init"])
            .status
            .success());
        assert!(git(&["checkout", "-q", "--detach"]).status.success());

        let expected = String::from_utf8(git(&["rev-parse", "--short", "HEAD"]).stdout).unwrap();
        let expected = expected.trim();
        assert!(!expected.is_empty());
        assert_eq!(read_git_branch(dir.path()).as_deref(), Some(expected));
    }
}
