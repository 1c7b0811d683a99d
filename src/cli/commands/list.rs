//! ls command - List tracked branch patterns

use std::io::Write;

use crate::core::remotes::RemoteConfig;
use anyhow::Result;

/// Write one tracked branch per line, remote by remote.
///
/// Refspecs that decode to an empty branch (git's default refspec) or do
/// not decode at all are skipped. Branches tracked on several remotes are
/// printed once per remote.
pub fn list(remotes: &RemoteConfig, out: &mut impl Write) -> Result<()> {
    for branch in remotes.tracked_branches() {
        writeln!(out, "{}", branch)?;
    }
    out.flush()?;
    Ok(())
}
