//! Integration tests for the add / rm / ls commands.
//!
//! These tests use real git repositories created via tempfile and the git
//! CLI, and read the resulting config back with `git config`.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use git_track::cli::commands;
use git_track::engine::{Context, Session};

// =============================================================================
// Test Fixtures
// =============================================================================

const RELEASE_SPEC: &str = "+refs/heads/release*:refs/remotes/origin/release*";

/// Test fixture that creates a real git repository with remotes.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a repository with a single `origin` remote and an empty fetch list.
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init"]);
        run_git(
            dir.path(),
            &["remote", "add", "origin", "https://example.com/origin.git"],
        );
        run_git(dir.path(), &["config", "--unset-all", "remote.origin.fetch"]);

        Self { dir }
    }

    /// Get the path to the repository.
    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add another remote (with git's default fetch refspec).
    fn add_remote(&self, name: &str) {
        let url = format!("https://example.com/{}.git", name);
        run_git(self.path(), &["remote", "add", name, &url]);
    }

    /// Create a standard test context rooted at `cwd`.
    fn context_at(&self, cwd: PathBuf) -> Context {
        Context {
            cwd: Some(cwd),
            debug: false,
            quiet: true,
        }
    }

    /// Create a standard test context.
    fn context(&self) -> Context {
        self.context_at(self.path().to_path_buf())
    }

    fn session(&self) -> Session {
        Session::open(&self.context()).expect("failed to open session")
    }

    fn add(&self, branch: &str) {
        commands::add(self.session(), branch).expect("add failed");
    }

    fn rm(&self, branch: &str) {
        commands::remove(self.session(), branch).expect("rm failed");
    }

    fn ls(&self) -> Vec<String> {
        let mut buf = Vec::new();
        commands::list(&self.session().remotes, &mut buf).expect("ls failed");
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    /// Read `remote.<name>.fetch` with the git CLI.
    fn fetch_list(&self, remote: &str) -> Vec<String> {
        let output = Command::new("git")
            .args(["config", "--get-all", &format!("remote.{}.fetch", remote)])
            .current_dir(self.path())
            .output()
            .expect("git config failed");
        String::from_utf8(output.stdout)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }
}

/// Run a git command in the given directory.
fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn add_ls_rm_round_trip() {
    let repo = TestRepo::new();
    assert!(repo.fetch_list("origin").is_empty());

    repo.add("release");
    assert_eq!(repo.fetch_list("origin"), [RELEASE_SPEC]);

    assert_eq!(repo.ls(), ["release"]);

    repo.rm("release");
    assert!(repo.fetch_list("origin").is_empty());
    assert!(repo.ls().is_empty());
}

#[test]
fn works_from_nested_directory() {
    let repo = TestRepo::new();
    let nested = repo.path().join("a/b/c");
    std::fs::create_dir_all(&nested).unwrap();

    let session = Session::open(&repo.context_at(nested)).expect("open from subdir");
    commands::add(session, "release").unwrap();

    assert_eq!(repo.fetch_list("origin"), [RELEASE_SPEC]);
}

// =============================================================================
// add
// =============================================================================

#[test]
fn add_is_not_deduplicating() {
    let repo = TestRepo::new();
    repo.add("foo");
    repo.add("foo");

    assert_eq!(repo.fetch_list("origin").len(), 2);
    assert_eq!(repo.ls(), ["foo", "foo"]);
}

#[test]
fn add_appends_to_every_remote() {
    let repo = TestRepo::new();
    repo.add_remote("upstream");

    repo.add("release");

    assert_eq!(repo.fetch_list("origin"), [RELEASE_SPEC]);
    assert_eq!(
        repo.fetch_list("upstream"),
        ["+refs/heads/*:refs/remotes/upstream/*", RELEASE_SPEC]
    );
    // Default refspec decodes to an empty branch and is skipped
    assert_eq!(repo.ls(), ["release", "release"]);
}

#[test]
fn add_preserves_existing_order() {
    let repo = TestRepo::new();
    repo.add("b");
    repo.add("a");
    repo.add("c");

    assert_eq!(repo.ls(), ["b", "a", "c"]);
}

// =============================================================================
// rm
// =============================================================================

#[test]
fn rm_removes_all_occurrences() {
    let repo = TestRepo::new();
    repo.add("foo");
    repo.add("bar");
    repo.add("foo");

    repo.rm("foo");

    assert_eq!(
        repo.fetch_list("origin"),
        ["+refs/heads/bar*:refs/remotes/origin/bar*"]
    );
}

#[test]
fn rm_untracked_branch_leaves_list_unchanged() {
    let repo = TestRepo::new();
    repo.add_remote("upstream");
    repo.add("bar");
    let before_origin = repo.fetch_list("origin");
    let before_upstream = repo.fetch_list("upstream");

    repo.rm("foo");

    assert_eq!(repo.fetch_list("origin"), before_origin);
    assert_eq!(repo.fetch_list("upstream"), before_upstream);
}

#[test]
fn rm_is_exact_match() {
    let repo = TestRepo::new();
    repo.add("release");
    repo.add("release/v2");

    repo.rm("release");

    assert_eq!(repo.ls(), ["release/v2"]);
}

#[test]
fn rm_keeps_foreign_refspecs() {
    let repo = TestRepo::new();
    run_git(
        repo.path(),
        &["config", "--add", "remote.origin.fetch", "+refs/tags/*:refs/tags/*"],
    );
    repo.add("foo");

    repo.rm("foo");

    assert_eq!(repo.fetch_list("origin"), ["+refs/tags/*:refs/tags/*"]);
}

// =============================================================================
// ls
// =============================================================================

#[test]
fn ls_is_stable() {
    let repo = TestRepo::new();
    repo.add_remote("upstream");
    repo.add("x");
    repo.add("y");

    assert_eq!(repo.ls(), repo.ls());
}

#[test]
fn ls_does_not_write() {
    let repo = TestRepo::new();
    repo.add("foo");
    let config_path = repo.path().join(".git/config");
    let before = std::fs::read_to_string(&config_path).unwrap();

    repo.ls();

    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), before);
}

// =============================================================================
// Prerequisites
// =============================================================================

#[test]
fn open_fails_on_invalid_marker() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();

    let ctx = Context {
        cwd: Some(dir.path().to_path_buf()),
        ..Context::default()
    };
    let err = Session::open(&ctx).unwrap_err();
    assert!(format!("{:#}", err).contains("Unable to open repository"));
}
