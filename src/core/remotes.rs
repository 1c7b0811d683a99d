//! core::remotes
//!
//! In-memory snapshot of a repository's remotes and their fetch lists.
//!
//! # Lifecycle
//!
//! A [`RemoteConfig`] is loaded fresh by [`crate::git::Git::load_remotes`],
//! mutated by exactly one command, and written back wholesale by
//! [`crate::git::Git::save_remotes`]. Nothing here touches the disk.

use super::refspec::RefSpec;

/// A named remote and its ordered fetch refspecs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    name: String,
    fetch: Vec<RefSpec>,
}

impl Remote {
    /// Create a remote with the given fetch list.
    pub fn new(name: impl Into<String>, fetch: Vec<RefSpec>) -> Self {
        Self {
            name: name.into(),
            fetch,
        }
    }

    /// The remote's name (e.g. `origin`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fetch list, in configuration order.
    pub fn fetch(&self) -> &[RefSpec] {
        &self.fetch
    }

    /// Append the tracking refspec for `branch`.
    ///
    /// Duplicates are allowed; adding the same branch twice stores it twice.
    pub fn track(&mut self, branch: &str) -> &RefSpec {
        self.fetch.push(RefSpec::for_branch(branch));
        &self.fetch[self.fetch.len() - 1]
    }

    /// Drop every refspec that tracks exactly `branch`.
    ///
    /// Returns the number of refspecs removed. Refspecs that do not decode
    /// are always kept.
    pub fn untrack(&mut self, branch: &str) -> usize {
        let before = self.fetch.len();
        self.fetch.retain(|spec| !spec.tracks(branch));
        before - self.fetch.len()
    }

    /// Branches tracked by this remote, skipping refspecs that are empty or
    /// do not decode.
    pub fn tracked_branches(&self) -> impl Iterator<Item = &str> {
        self.fetch
            .iter()
            .filter_map(RefSpec::branch)
            .filter(|branch| !branch.is_empty())
    }
}

/// All remotes of a repository, in the order the repository lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteConfig {
    remotes: Vec<Remote>,
}

impl RemoteConfig {
    /// Build a snapshot from a list of remotes.
    pub fn new(remotes: Vec<Remote>) -> Self {
        Self { remotes }
    }

    /// Iterate over the remotes.
    pub fn remotes(&self) -> &[Remote] {
        &self.remotes
    }

    /// Look up a remote by name.
    #[cfg(test)]
    pub(crate) fn remote(&self, name: &str) -> Option<&Remote> {
        self.remotes.iter().find(|r| r.name == name)
    }

    /// Number of remotes.
    pub fn len(&self) -> usize {
        self.remotes.len()
    }

    /// Whether the repository has no remotes.
    pub fn is_empty(&self) -> bool {
        self.remotes.is_empty()
    }

    /// Append the tracking refspec for `branch` to every remote.
    ///
    /// Returns the number of remotes that received it.
    pub fn track(&mut self, branch: &str) -> usize {
        for remote in &mut self.remotes {
            remote.track(branch);
        }
        self.remotes.len()
    }

    /// Remove every refspec tracking `branch` from every remote.
    ///
    /// Returns how many refspecs each remote lost, in remote order.
    pub fn untrack(&mut self, branch: &str) -> Vec<usize> {
        self.remotes
            .iter_mut()
            .map(|remote| remote.untrack(branch))
            .collect()
    }

    /// Tracked branches across all remotes, remote by remote.
    ///
    /// A branch tracked on two remotes appears twice.
    pub fn tracked_branches(&self) -> Vec<&str> {
        self.remotes
            .iter()
            .flat_map(Remote::tracked_branches)
            .collect()
    }
}
