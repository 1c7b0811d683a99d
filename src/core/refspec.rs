//! core::refspec
//!
//! Encoding between branch names and per-branch fetch refspecs.
//!
//! # Shape
//!
//! A tracked branch `<b>` is stored on a remote as the wildcard refspec
//!
//! ```text
//! +refs/heads/<b>*:refs/remotes/origin/<b>*
//! ```
//!
//! so tracking `release` also mirrors `release-1.0`, `release/2`, and so on.
//! Decoding strips the fixed `+refs/heads/` prefix and keeps everything up to
//! the first `*:`. Git's default refspec `+refs/heads/*:refs/remotes/origin/*`
//! therefore decodes to the empty branch.

use std::fmt;

/// Prefix every encoded refspec starts with.
pub const SOURCE_PREFIX: &str = "+refs/heads/";

/// Separator between the wildcard source and the destination.
pub const WILDCARD_MARKER: &str = "*:";

/// A fetch refspec as stored in `remote.<name>.fetch`.
///
/// The wrapped string is not validated. Values read from a repository may
/// have any shape; only values built with [`RefSpec::for_branch`] are
/// guaranteed to decode.
///
/// # Example
///
/// ```
/// use git_track::core::refspec::RefSpec;
///
/// let spec = RefSpec::for_branch("release");
/// assert_eq!(spec.as_str(), "+refs/heads/release*:refs/remotes/origin/release*");
/// assert_eq!(spec.branch(), Some("release"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RefSpec(String);

impl RefSpec {
    /// Wrap an existing refspec string.
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    /// Build the tracking refspec for a branch.
    ///
    /// Any string is accepted, including the empty one.
    pub fn for_branch(branch: &str) -> Self {
        Self(format!(
            "{SOURCE_PREFIX}{branch}*:refs/remotes/origin/{branch}*"
        ))
    }

    /// Recover the branch name this refspec tracks.
    ///
    /// Returns `None` if the refspec lacks the `+refs/heads/` prefix or the
    /// `*:` marker.
    ///
    /// # Example
    ///
    /// ```
    /// use git_track::core::refspec::RefSpec;
    ///
    /// let default = RefSpec::new("+refs/heads/*:refs/remotes/origin/*");
    /// assert_eq!(default.branch(), Some(""));
    ///
    /// let tags = RefSpec::new("refs/tags/*:refs/tags/*");
    /// assert_eq!(tags.branch(), None);
    /// ```
    pub fn branch(&self) -> Option<&str> {
        let rest = self.0.strip_prefix(SOURCE_PREFIX)?;
        rest.split_once(WILDCARD_MARKER).map(|(branch, _)| branch)
    }

    /// Check whether this refspec tracks exactly `branch`.
    pub fn tracks(&self, branch: &str) -> bool {
        self.branch() == Some(branch)
    }

    /// Get the refspec as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RefSpec {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RefSpec> for String {
    fn from(spec: RefSpec) -> Self {
        spec.0
    }
}

impl fmt::Display for RefSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod encode {
        use super::*;

        #[test]
        fn simple_branch() {
            assert_eq!(
                RefSpec::for_branch("release").as_str(),
                "+refs/heads/release*:refs/remotes/origin/release*"
            );
        }

        #[test]
        fn nested_branch() {
            assert_eq!(
                RefSpec::for_branch("team/feature").as_str(),
                "+refs/heads/team/feature*:refs/remotes/origin/team/feature*"
            );
        }

        #[test]
        fn empty_branch_is_well_formed() {
            let spec = RefSpec::for_branch("");
            assert_eq!(spec.as_str(), "+refs/heads/*:refs/remotes/origin/*");
            assert_eq!(spec.branch(), Some(""));
        }
    }

    mod decode {
        use super::*;

        #[test]
        fn round_trips() {
            for branch in ["main", "release/1.x", "feat-", "a.b_c", "日本"] {
                assert_eq!(RefSpec::for_branch(branch).branch(), Some(branch));
            }
        }

        #[test]
        fn stops_at_first_marker() {
            let spec = RefSpec::new("+refs/heads/foo*:bar*:refs/remotes/origin/foo*");
            assert_eq!(spec.branch(), Some("foo"));
        }

        #[test]
        fn missing_prefix() {
            assert_eq!(RefSpec::new("refs/heads/foo*:refs/remotes/origin/foo*").branch(), None);
            assert_eq!(RefSpec::new("").branch(), None);
        }

        #[test]
        fn missing_marker() {
            let spec = RefSpec::new("+refs/heads/main:refs/remotes/origin/main");
            assert_eq!(spec.branch(), None);
        }

        #[test]
        fn tracks_matches_exactly() {
            let spec = RefSpec::for_branch("release");
            assert!(spec.tracks("release"));
            assert!(!spec.tracks("releas"));
            assert!(!spec.tracks("release*"));
            assert!(!RefSpec::new("garbage").tracks(""));
        }
    }

    #[test]
    fn display_matches_as_str() {
        let spec = RefSpec::for_branch("x");
        assert_eq!(spec.to_string(), spec.as_str());
        assert_eq!(String::from(spec.clone()), spec.as_str());
    }
}
