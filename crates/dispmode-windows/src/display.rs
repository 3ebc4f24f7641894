use std::mem;

use dispmode_core::{
    Adapter, AdapterState, DeviceMode, DisplayBackend, DisplayDevice, DisplayError, DisplayResult,
};
use windows::Win32::Graphics::Gdi::{
    CDS_FULLSCREEN, ChangeDisplaySettingsExW, DEVMODEW, DISP_CHANGE, DISP_CHANGE_BADDUALVIEW,
    DISP_CHANGE_BADFLAGS, DISP_CHANGE_BADMODE, DISP_CHANGE_BADPARAM, DISP_CHANGE_FAILED,
    DISP_CHANGE_NOTUPDATED, DISP_CHANGE_RESTART, DISP_CHANGE_SUCCESSFUL, DISPLAY_DEVICE_ACTIVE,
    DISPLAY_DEVICE_MIRRORING_DRIVER, DISPLAY_DEVICE_PRIMARY_DEVICE, DISPLAY_DEVICE_STATE_FLAGS,
    DISPLAY_DEVICEW, DM_BITSPERPEL, DM_PELSHEIGHT, DM_PELSWIDTH, EDS_ROTATEDMODE,
    ENUM_CURRENT_SETTINGS, ENUM_DISPLAY_SETTINGS_FLAGS, ENUM_DISPLAY_SETTINGS_MODE,
    EnumDisplayDevicesW, EnumDisplaySettingsExW, HORZSIZE, VERTSIZE,
};
use windows::core::PCWSTR;

use crate::dc::DeviceContext;
use crate::wide::{from_wide, to_wide};

/// Display backend talking to the Win32 GDI display APIs.
///
/// Adapters are addressed by device name (e.g. `\\.\DISPLAY1`), which is
/// the handle stored in every [`dispmode_core::Monitor`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Display;

impl Win32Display {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayBackend for Win32Display {
    fn adapter(&self, index: u32) -> Option<Adapter> {
        let device = display_device(None, index)?;
        Some(Adapter {
            device_name: from_wide(&device.DeviceName),
            state: adapter_state(device.StateFlags),
        })
    }

    fn current_mode(&self, device: &str) -> DeviceMode {
        // Rotated mode keeps width/height in the orientation the desktop uses.
        settings(device, ENUM_CURRENT_SETTINGS, EDS_ROTATEDMODE).unwrap_or_default()
    }

    fn mode(&self, device: &str, index: u32) -> Option<DeviceMode> {
        settings(
            device,
            ENUM_DISPLAY_SETTINGS_MODE(index),
            ENUM_DISPLAY_SETTINGS_FLAGS(0),
        )
    }

    fn display_device(&self, device: &str) -> DisplayResult<DisplayDevice> {
        // The first display device attached to an adapter is its monitor.
        // An adapter with nothing attached still gets a (blank) name.
        let description = display_device(Some(device), 0)
            .map(|d| from_wide(&d.DeviceString))
            .unwrap_or_default();

        let dc = DeviceContext::for_display(device)?;

        Ok(DisplayDevice {
            description,
            width_mm: dc.caps(HORZSIZE),
            height_mm: dc.caps(VERTSIZE),
        })
    }

    fn change_mode(&self, device: &str, mode: Option<&DeviceMode>) -> DisplayResult<()> {
        let name = to_wide(device);

        let dm = mode.map(|m| DEVMODEW {
            dmSize: mem::size_of::<DEVMODEW>() as u16,
            dmFields: DM_PELSWIDTH | DM_PELSHEIGHT | DM_BITSPERPEL,
            dmPelsWidth: m.width,
            dmPelsHeight: m.height,
            dmBitsPerPel: m.bits_per_pixel,
            ..Default::default()
        });

        // SAFETY: name is NUL-terminated and dm (if any) is a fully sized
        // DEVMODEW; both outlive the call. A null DEVMODEW reverts the
        // adapter to its registry mode.
        let result = unsafe {
            ChangeDisplaySettingsExW(
                PCWSTR(name.as_ptr()),
                dm.as_ref().map(|d| d as *const DEVMODEW),
                None,
                CDS_FULLSCREEN,
                None,
            )
        };

        if result == DISP_CHANGE_SUCCESSFUL {
            Ok(())
        } else {
            Err(DisplayError::platform(format!(
                "Win32: Failed to set video mode ({})",
                describe_change(result)
            )))
        }
    }
}

/// Calls `EnumDisplayDevicesW` for the device at `index` under `parent`.
///
/// `None` as parent enumerates adapters; an adapter name enumerates the
/// monitors attached to it.
fn display_device(parent: Option<&str>, index: u32) -> Option<DISPLAY_DEVICEW> {
    let parent = parent.map(to_wide);
    let parent = parent
        .as_ref()
        .map_or(PCWSTR::null(), |p| PCWSTR(p.as_ptr()));

    let mut device = DISPLAY_DEVICEW {
        cb: mem::size_of::<DISPLAY_DEVICEW>() as u32,
        ..Default::default()
    };

    // SAFETY: cb is set as required and the buffer lives across the call.
    let found = unsafe { EnumDisplayDevicesW(parent, index, &mut device, 0) };
    found.as_bool().then_some(device)
}

/// Calls `EnumDisplaySettingsExW` and keeps the fields this crate uses.
fn settings(
    device: &str,
    mode: ENUM_DISPLAY_SETTINGS_MODE,
    flags: ENUM_DISPLAY_SETTINGS_FLAGS,
) -> Option<DeviceMode> {
    let name = to_wide(device);
    let mut dm = DEVMODEW {
        dmSize: mem::size_of::<DEVMODEW>() as u16,
        ..Default::default()
    };

    // SAFETY: dmSize is set and both buffers outlive the call.
    let found = unsafe { EnumDisplaySettingsExW(PCWSTR(name.as_ptr()), mode, &mut dm, flags) };
    if !found.as_bool() {
        return None;
    }

    // SAFETY: display devices fill the display variant of the union.
    let position = unsafe { dm.Anonymous1.Anonymous2.dmPosition };

    Some(DeviceMode {
        width: dm.dmPelsWidth,
        height: dm.dmPelsHeight,
        bits_per_pixel: dm.dmBitsPerPel,
        x: position.x,
        y: position.y,
    })
}

fn adapter_state(flags: DISPLAY_DEVICE_STATE_FLAGS) -> AdapterState {
    let has = |flag: DISPLAY_DEVICE_STATE_FLAGS| flags.0 & flag.0 != 0;
    AdapterState {
        active: has(DISPLAY_DEVICE_ACTIVE),
        mirroring: has(DISPLAY_DEVICE_MIRRORING_DRIVER),
        primary: has(DISPLAY_DEVICE_PRIMARY_DEVICE),
    }
}

fn describe_change(result: DISP_CHANGE) -> String {
    let name = match result {
        DISP_CHANGE_BADMODE => "mode not supported",
        DISP_CHANGE_FAILED => "driver failed the mode change",
        DISP_CHANGE_NOTUPDATED => "unable to write settings",
        DISP_CHANGE_RESTART => "restart required",
        DISP_CHANGE_BADFLAGS => "invalid flags",
        DISP_CHANGE_BADPARAM => "invalid parameter",
        DISP_CHANGE_BADDUALVIEW => "DualView capable system",
        _ => return format!("code {}", result.0),
    };
    name.to_string()
}
