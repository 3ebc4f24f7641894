//! In-memory display backend that records every mode change.

use std::cell::RefCell;

use crate::{
    Adapter, AdapterState, DeviceMode, DisplayBackend, DisplayDevice, DisplayError, DisplayResult,
};

pub struct FakeAdapter {
    pub adapter: Adapter,
    pub description: String,
    pub position: (i32, i32),
    pub default_mode: DeviceMode,
    pub current: Option<DeviceMode>,
    pub modes: Vec<DeviceMode>,
}

/// A recorded `change_mode` call: device plus requested mode (`None` = restore).
pub type ChangeCall = (String, Option<DeviceMode>);

#[derive(Default)]
pub struct FakeBackend {
    pub adapters: Vec<FakeAdapter>,
    pub changes: RefCell<Vec<ChangeCall>>,
    pub refuse_changes: bool,
    pub broken_dc: bool,
}

pub fn dm(width: u32, height: u32, bits_per_pixel: u32) -> DeviceMode {
    DeviceMode {
        width,
        height,
        bits_per_pixel,
        ..Default::default()
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active adapter whose default mode is the first of `modes`.
    pub fn with_adapter(mut self, name: &str, primary: bool, modes: Vec<DeviceMode>) -> Self {
        let index = self.adapters.len() as i32;
        let default_mode = modes.first().copied().unwrap_or_default();
        self.adapters.push(FakeAdapter {
            adapter: Adapter {
                device_name: name.into(),
                state: AdapterState {
                    active: true,
                    mirroring: false,
                    primary,
                },
            },
            description: format!("Generic Monitor {}", index + 1),
            position: (index * 1920, 0),
            default_mode,
            current: None,
            modes,
        });
        self
    }

    /// Starts the most recently added adapter in `mode` instead of its default.
    pub fn with_current(mut self, mode: DeviceMode) -> Self {
        if let Some(last) = self.adapters.last_mut() {
            last.current = Some(mode);
        }
        self
    }

    /// Adds an adapter with explicit state flags and no modes.
    pub fn with_state(mut self, name: &str, state: AdapterState) -> Self {
        self.adapters.push(FakeAdapter {
            adapter: Adapter {
                device_name: name.into(),
                state,
            },
            description: "Mirror".into(),
            position: (0, 0),
            default_mode: DeviceMode::default(),
            current: None,
            modes: Vec::new(),
        });
        self
    }

    pub fn change_count(&self) -> usize {
        self.changes.borrow().len()
    }

    fn find(&self, device: &str) -> Option<&FakeAdapter> {
        self.adapters.iter().find(|a| a.adapter.device_name == device)
    }

    fn current_of(&self, adapter: &FakeAdapter) -> DeviceMode {
        // Last change wins; a restore falls back to the registry default.
        let name = &adapter.adapter.device_name;
        let applied = self
            .changes
            .borrow()
            .iter()
            .rev()
            .find(|(device, _)| device == name)
            .map(|(_, mode)| *mode);
        match applied {
            Some(Some(mode)) => mode,
            Some(None) => adapter.default_mode,
            None => adapter.current.unwrap_or(adapter.default_mode),
        }
    }
}

impl DisplayBackend for FakeBackend {
    fn adapter(&self, index: u32) -> Option<Adapter> {
        self.adapters.get(index as usize).map(|a| a.adapter.clone())
    }

    fn current_mode(&self, device: &str) -> DeviceMode {
        let Some(adapter) = self.find(device) else {
            return DeviceMode::default();
        };
        DeviceMode {
            x: adapter.position.0,
            y: adapter.position.1,
            ..self.current_of(adapter)
        }
    }

    fn mode(&self, device: &str, index: u32) -> Option<DeviceMode> {
        self.find(device)?.modes.get(index as usize).copied()
    }

    fn display_device(&self, device: &str) -> DisplayResult<DisplayDevice> {
        if self.broken_dc {
            return Err(DisplayError::platform("failed to create device context"));
        }
        let adapter = self
            .find(device)
            .ok_or_else(|| DisplayError::platform("unknown device"))?;
        Ok(DisplayDevice {
            description: adapter.description.clone(),
            width_mm: 527,
            height_mm: 296,
        })
    }

    fn change_mode(&self, device: &str, mode: Option<&DeviceMode>) -> DisplayResult<()> {
        if self.refuse_changes && mode.is_some() {
            return Err(DisplayError::platform("Win32: Failed to set video mode"));
        }
        self.changes.borrow_mut().push((device.into(), mode.copied()));
        Ok(())
    }
}
