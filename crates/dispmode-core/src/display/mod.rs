//! Monitor enumeration and fullscreen mode switching.

#[cfg(test)]
mod fake;

use crate::mode::{self, MIN_BITS_PER_PIXEL};
use crate::{
    DeviceMode, DisplayBackend, DisplayError, DisplayResult, Monitor, SplitPolicy, VideoMode,
};

/// Initial capacity of the monitor list.
const MONITOR_CAPACITY: usize = 4;

/// Initial capacity of a video mode list.
const MODE_CAPACITY: usize = 128;

/// Handle to the OS display configuration.
///
/// All queries and mode changes go through the wrapped backend. The OS
/// state behind it is shared by the whole process, so a `Display` must
/// not be driven from several threads at once.
pub struct Display<B: DisplayBackend> {
    backend: B,
    split: SplitPolicy,
}

impl<B: DisplayBackend> Display<B> {
    /// Creates a handle using the default bit-split policy.
    pub fn new(backend: B) -> Self {
        Self::with_split_policy(backend, SplitPolicy::default())
    }

    /// Creates a handle that splits color depths with `split`.
    pub fn with_split_policy(backend: B, split: SplitPolicy) -> Self {
        Self { backend, split }
    }

    /// Returns the wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns a snapshot of the active, non-mirroring monitors.
    ///
    /// The primary monitor is always first. Any failure discards the
    /// whole list.
    pub fn monitors(&self) -> DisplayResult<Vec<Monitor>> {
        let mut monitors: Vec<Monitor> = Vec::new();
        let mut primary = 0;
        let mut index = 0;

        while let Some(adapter) = self.backend.adapter(index) {
            index += 1;

            if !adapter.is_usable() {
                crate::log_debug!(
                    "Skipping adapter {} (active: {}, mirroring: {})",
                    adapter.device_name,
                    adapter.state.active,
                    adapter.state.mirroring
                );
                continue;
            }

            let settings = self.backend.current_mode(&adapter.device_name);
            let device = self.backend.display_device(&adapter.device_name)?;

            grow(&mut monitors, MONITOR_CAPACITY)?;

            if adapter.state.primary {
                primary = monitors.len();
            }

            monitors.push(Monitor {
                name: device.description,
                width_mm: device.width_mm,
                height_mm: device.height_mm,
                x: settings.x,
                y: settings.y,
                primary: adapter.state.primary,
                adapter: adapter.device_name,
            });
        }

        if primary > 0 {
            monitors.swap(0, primary);
        }

        crate::log_debug!("Found {} monitor(s)", monitors.len());
        Ok(monitors)
    }

    /// Returns the primary monitor, if any monitor is active.
    pub fn primary_monitor(&self) -> DisplayResult<Option<Monitor>> {
        Ok(self.monitors()?.into_iter().next())
    }

    /// Releases a monitor returned by [`Display::monitors`].
    ///
    /// Only the platform handle is owned here, so this is a plain drop.
    pub fn destroy_monitor(&self, monitor: Monitor) {
        crate::log_debug!("Releasing monitor on {}", monitor.adapter);
        drop(monitor);
    }

    /// Returns every distinct video mode `monitor` supports.
    ///
    /// Modes below 15 bits per pixel are skipped and duplicates are dropped,
    /// keeping the OS enumeration order otherwise.
    pub fn video_modes(&self, monitor: &Monitor) -> DisplayResult<Vec<VideoMode>> {
        let mut modes: Vec<VideoMode> = Vec::new();
        let mut index = 0;

        while let Some(dm) = self.backend.mode(&monitor.adapter, index) {
            index += 1;

            if dm.bits_per_pixel < MIN_BITS_PER_PIXEL {
                continue;
            }

            let mode = VideoMode::new(dm.width, dm.height, dm.bits_per_pixel, self.split);
            if modes.contains(&mode) {
                continue;
            }

            grow(&mut modes, MODE_CAPACITY)?;
            modes.push(mode);
        }

        Ok(modes)
    }

    /// Returns the mode currently active on `monitor`.
    ///
    /// Reads as all zeros if the OS can't report it.
    pub fn current_video_mode(&self, monitor: &Monitor) -> VideoMode {
        let dm = self.backend.current_mode(&monitor.adapter);
        VideoMode::new(dm.width, dm.height, dm.bits_per_pixel, self.split)
    }

    /// Switches `monitor` to the supported mode closest to `requested`.
    ///
    /// Zero fields in `requested` are taken from the current mode. Returns
    /// the mode that was resolved. Nothing is sent to the OS when that mode
    /// is already active.
    pub fn set_video_mode(&self, monitor: &Monitor, requested: &VideoMode) -> DisplayResult<VideoMode> {
        self.apply_video_mode(monitor, requested)
            .map(|(best, _)| best)
    }

    /// Resolves and applies a mode; the flag is `false` when it was already active.
    fn apply_video_mode(
        &self,
        monitor: &Monitor,
        requested: &VideoMode,
    ) -> DisplayResult<(VideoMode, bool)> {
        let current = self.current_video_mode(monitor);
        let available = self.video_modes(monitor)?;
        let best = mode::choose_video_mode(&available, &requested.or_current(&current))?;

        if best == current {
            crate::log_debug!("{} already at {best}", monitor.adapter);
            return Ok((best, false));
        }

        let dm = DeviceMode {
            width: best.width,
            height: best.height,
            bits_per_pixel: mode::normalize_bits_per_pixel(best.bits_per_pixel()),
            ..Default::default()
        };

        if let Err(e) = self.backend.change_mode(&monitor.adapter, Some(&dm)) {
            crate::log_error!("Failed to set {best} on {}: {e}", monitor.adapter);
            return Err(e);
        }

        crate::log_info!("Set {} to {best}", monitor.adapter);
        Ok((best, true))
    }

    /// Reverts `monitor` to its default desktop mode.
    ///
    /// Best effort: a refusal is logged and otherwise ignored.
    pub fn restore_video_mode(&self, monitor: &Monitor) {
        restore(&self.backend, &monitor.adapter);
    }

    /// Applies a fullscreen mode that is restored when the guard drops.
    ///
    /// If the resolved mode was already active the guard restores nothing.
    pub fn fullscreen(&self, monitor: &Monitor, requested: &VideoMode) -> DisplayResult<ModeGuard<'_, B>> {
        let (mode, changed) = self.apply_video_mode(monitor, requested)?;
        Ok(ModeGuard {
            backend: &self.backend,
            adapter: monitor.adapter.clone(),
            mode,
            restored: !changed,
        })
    }
}

/// An applied fullscreen mode.
///
/// Dropping the guard reverts the adapter to its default mode.
pub struct ModeGuard<'a, B: DisplayBackend> {
    backend: &'a B,
    adapter: String,
    mode: VideoMode,
    restored: bool,
}

impl<B: DisplayBackend> ModeGuard<'_, B> {
    /// The mode that was applied.
    pub fn mode(&self) -> VideoMode {
        self.mode
    }

    /// Restores the default mode now instead of on drop.
    pub fn restore(mut self) {
        self.restore_once();
    }

    fn restore_once(&mut self) {
        if !self.restored {
            self.restored = true;
            restore(self.backend, &self.adapter);
        }
    }
}

impl<B: DisplayBackend> Drop for ModeGuard<'_, B> {
    fn drop(&mut self) {
        self.restore_once();
    }
}

fn restore<B: DisplayBackend>(backend: &B, adapter: &str) {
    match backend.change_mode(adapter, None) {
        Ok(()) => crate::log_info!("Restored default mode on {adapter}"),
        Err(e) => crate::log_warn!("Failed to restore default mode on {adapter}: {e}"),
    }
}

/// Makes room for one more element, doubling from `initial`.
fn grow<T>(list: &mut Vec<T>, initial: usize) -> DisplayResult<()> {
    if list.len() < list.capacity() {
        return Ok(());
    }
    let additional = if list.capacity() == 0 {
        initial
    } else {
        list.capacity()
    };
    list.try_reserve_exact(additional)
        .map_err(|_| DisplayError::OutOfMemory)
}
