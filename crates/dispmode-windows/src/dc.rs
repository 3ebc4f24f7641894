use dispmode_core::{DisplayError, DisplayResult};
use windows::Win32::Graphics::Gdi::{CreateDCW, DeleteDC, GET_DEVICE_CAPS_INDEX, GetDeviceCaps, HDC};
use windows::core::{PCWSTR, w};

use crate::wide::to_wide;

/// An information device context for one display adapter.
///
/// Deleted on drop so the handle is released on every exit path.
pub struct DeviceContext {
    hdc: HDC,
}

impl DeviceContext {
    /// Creates a device context for the adapter named `device`.
    pub fn for_display(device: &str) -> DisplayResult<Self> {
        let device = to_wide(device);

        // SAFETY: both strings are NUL-terminated and outlive the call.
        let hdc = unsafe { CreateDCW(w!("DISPLAY"), PCWSTR(device.as_ptr()), PCWSTR::null(), None) };

        if hdc.is_invalid() {
            return Err(DisplayError::platform("Win32: Failed to create device context"));
        }
        Ok(Self { hdc })
    }

    /// Reads one `GetDeviceCaps` value.
    pub fn caps(&self, index: GET_DEVICE_CAPS_INDEX) -> i32 {
        // SAFETY: self.hdc is a live device context until drop.
        unsafe { GetDeviceCaps(Some(self.hdc), index) }
    }
}

impl Drop for DeviceContext {
    fn drop(&mut self) {
        // SAFETY: the handle came from CreateDCW and is deleted exactly once.
        unsafe {
            let _ = DeleteDC(self.hdc);
        }
    }
}
