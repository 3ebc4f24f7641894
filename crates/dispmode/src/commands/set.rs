use std::thread;
use std::time::Duration;

use dispmode_core::config::FullscreenConfig;
use dispmode_core::{Display, DisplayBackend, SplitPolicy, VideoMode};

use super::monitor_at;
use crate::error::CliResult;

#[derive(clap::Args)]
pub struct SetArgs {
    /// Monitor index as shown by `dispmode monitors`
    pub index: usize,
    /// Width in pixels (defaults to the current width)
    #[arg(long)]
    pub width: Option<u32>,
    /// Height in pixels (defaults to the current height)
    #[arg(long)]
    pub height: Option<u32>,
    /// Total color bits per pixel (defaults to the current depth)
    #[arg(long)]
    pub bits: Option<u32>,
    /// Seconds to hold the mode before restoring (overrides the config)
    #[arg(long)]
    pub hold: Option<u64>,
}

impl SetArgs {
    /// Builds the requested mode; unset fields stay zero and are filled
    /// from the monitor's current mode.
    fn requested(&self) -> VideoMode {
        VideoMode::new(
            self.width.unwrap_or(0),
            self.height.unwrap_or(0),
            self.bits.unwrap_or(0),
            SplitPolicy::GreenBias,
        )
    }
}

pub fn execute<B: DisplayBackend>(
    display: &Display<B>,
    args: &SetArgs,
    config: &FullscreenConfig,
) -> CliResult<()> {
    let monitor = monitor_at(display, args.index)?;
    let guard = display.fullscreen(&monitor, &args.requested())?;

    let hold = args.hold.unwrap_or(config.hold_seconds);
    println!(
        "{}: switched to {}, restoring in {hold}s",
        monitor.adapter,
        guard.mode()
    );

    thread::sleep(Duration::from_secs(hold));
    guard.restore();

    println!("{}: restored {}", monitor.adapter, display.current_video_mode(&monitor));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(width: Option<u32>, height: Option<u32>, bits: Option<u32>) -> SetArgs {
        SetArgs {
            index: 0,
            width,
            height,
            bits,
            hold: None,
        }
    }

    #[test]
    fn requested_leaves_unset_fields_zero() {
        // Act
        let mode = args(Some(1280), None, None).requested();

        // Assert
        assert_eq!(mode.width, 1280);
        assert_eq!(mode.height, 0);
        assert_eq!(mode.bits_per_pixel(), 0);
    }

    #[test]
    fn requested_splits_sixteen_bits() {
        // Act
        let mode = args(Some(800), Some(600), Some(16)).requested();

        // Assert
        assert_eq!((mode.red_bits, mode.green_bits, mode.blue_bits), (5, 6, 5));
    }
}
