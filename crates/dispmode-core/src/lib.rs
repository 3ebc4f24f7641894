pub mod backend;
pub mod config;
pub mod display;
pub mod error;
pub mod log;
pub mod mode;
pub mod monitor;

pub use backend::DisplayBackend;
pub use display::{Display, ModeGuard};
pub use error::{DisplayError, DisplayResult};
pub use mode::{SplitPolicy, VideoMode};
pub use monitor::{Adapter, AdapterState, DeviceMode, DisplayDevice, Monitor};
