//! add command - Track a branch pattern on every remote

use crate::core::refspec::RefSpec;
use crate::engine::Session;
use crate::ui::output;
use anyhow::Result;

/// Append the tracking refspec for `branch` to every remote and persist.
///
/// No duplicate check is made: adding a branch twice stores it twice.
pub fn add(mut session: Session, branch: &str) -> Result<()> {
    let verbosity = session.verbosity;
    let count = session.remotes.track(branch);

    if count == 0 {
        output::warn("no remotes configured; nothing to track", verbosity);
    } else {
        output::debug(
            format!("added {} to {} remote(s)", RefSpec::for_branch(branch), count),
            verbosity,
        );
    }

    session.persist()
}
