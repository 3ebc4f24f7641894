use serde::Serialize;

/// A physical display attached to an active adapter.
///
/// Returned by [`Display::monitors`](crate::Display::monitors) and owned by
/// the caller. The `adapter` field is the platform handle used for every
/// later mode query; dropping the monitor releases it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Monitor {
    /// Human-readable display name.
    pub name: String,
    /// Physical width in millimeters.
    pub width_mm: i32,
    /// Physical height in millimeters.
    pub height_mm: i32,
    /// Left edge on the virtual desktop.
    pub x: i32,
    /// Top edge on the virtual desktop.
    pub y: i32,
    /// Whether the OS flagged this monitor as primary.
    pub primary: bool,
    /// Adapter device name (e.g. `\\.\DISPLAY1`).
    pub adapter: String,
}

/// State flags the OS reports for a display adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdapterState {
    /// Part of the desktop.
    pub active: bool,
    /// A pseudo-device that mirrors another adapter (remote desktop, capture drivers).
    pub mirroring: bool,
    /// The OS-designated primary display.
    pub primary: bool,
}

/// One display adapter as reported during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    pub device_name: String,
    pub state: AdapterState,
}

impl Adapter {
    /// Returns whether this adapter drives a monitor of its own.
    pub fn is_usable(&self) -> bool {
        self.state.active && !self.state.mirroring
    }
}

/// The part of an OS mode descriptor this crate reads or writes.
///
/// `Default` is the zeroed descriptor the OS leaves behind when a query fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceMode {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub x: i32,
    pub y: i32,
}

/// Details of the display attached to an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDevice {
    pub description: String,
    pub width_mm: i32,
    pub height_mm: i32,
}
