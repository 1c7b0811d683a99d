//! rm command - Stop tracking a branch pattern

use crate::engine::Session;
use crate::ui::output;
use anyhow::Result;

/// Drop every refspec tracking `branch` from every remote and persist.
///
/// The configuration is written even when nothing matched.
pub fn remove(mut session: Session, branch: &str) -> Result<()> {
    let verbosity = session.verbosity;
    let removed = session.remotes.untrack(branch);

    for (remote, count) in session.remotes.remotes().iter().zip(&removed) {
        if *count > 0 {
            output::debug(
                format!("removed {} refspec(s) from {}", count, remote.name()),
                verbosity,
            );
        }
    }

    if removed.iter().sum::<usize>() == 0 {
        output::warn(
            format!("branch '{}' is not tracked by any remote", branch),
            verbosity,
        );
    }

    session.persist()
}
