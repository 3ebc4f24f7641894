pub mod current;
pub mod init;
pub mod modes;
pub mod monitors;
pub mod restore;
pub mod set;

use dispmode_core::{Display, DisplayBackend, Monitor};

use crate::error::{CliError, CliResult};

/// Looks up the monitor at `index` in a fresh snapshot.
pub fn monitor_at<B: DisplayBackend>(display: &Display<B>, index: usize) -> CliResult<Monitor> {
    display
        .monitors()?
        .into_iter()
        .nth(index)
        .ok_or(CliError::NoSuchMonitor(index))
}
