//! Win32 implementation of the dispmode display backend.
//!
//! The backend is compiled on Windows only; other targets get just the
//! string helpers so the workspace still builds.

/// Device context ownership.
#[cfg(windows)]
mod dc;

/// Display adapter and video mode queries (`EnumDisplayDevicesW` and friends).
#[cfg(windows)]
pub mod display;

/// UTF-16 string conversion.
mod wide;

#[cfg(windows)]
pub use display::Win32Display;
