use dispmode_core::{Display, DisplayBackend};

use super::monitor_at;
use crate::error::CliResult;

pub fn execute<B: DisplayBackend>(display: &Display<B>, index: usize) -> CliResult<()> {
    let monitor = monitor_at(display, index)?;
    display.restore_video_mode(&monitor);

    println!("{}: {}", monitor.adapter, display.current_video_mode(&monitor));
    Ok(())
}
