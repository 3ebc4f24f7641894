use crate::{Adapter, DeviceMode, DisplayDevice, DisplayResult};

/// The OS display-configuration calls this crate depends on.
///
/// Display configuration is process-wide OS state. Routing every call
/// through this trait keeps that state out of the enumeration logic and
/// lets tests swap in a recording double. Implementations are not
/// expected to be thread-safe.
pub trait DisplayBackend {
    /// Returns the adapter at `index`, or `None` once the list is exhausted.
    fn adapter(&self, index: u32) -> Option<Adapter>;

    /// Returns the mode currently active on `device`.
    ///
    /// A failed query yields a zeroed [`DeviceMode`], not an error.
    fn current_mode(&self, device: &str) -> DeviceMode;

    /// Returns the supported mode at `index`, or `None` once exhausted.
    fn mode(&self, device: &str, index: u32) -> Option<DeviceMode>;

    /// Returns the name and physical size of the display on `device`.
    fn display_device(&self, device: &str) -> DisplayResult<DisplayDevice>;

    /// Applies `mode` to `device` for fullscreen use.
    ///
    /// `None` reverts the adapter to its default (registry) mode.
    fn change_mode(&self, device: &str, mode: Option<&DeviceMode>) -> DisplayResult<()>;
}
