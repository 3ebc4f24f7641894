//! Video modes and the helpers that compare, split and pick them.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{DisplayError, DisplayResult};

/// Modes with fewer total bits per pixel than this are never reported.
pub const MIN_BITS_PER_PIXEL: u32 = 15;

/// Depth requested from the OS when the resolved depth is out of range.
pub const FALLBACK_BITS_PER_PIXEL: u32 = 32;

/// A displayable configuration: resolution plus per-channel color depth.
///
/// Equality and ordering follow one comparison: total color depth first,
/// then pixel area, then width. Two modes that differ only in how the
/// same total depth is split across channels compare equal.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct VideoMode {
    pub width: u32,
    pub height: u32,
    pub red_bits: u32,
    pub green_bits: u32,
    pub blue_bits: u32,
}

impl VideoMode {
    /// Builds a mode by splitting `bits_per_pixel` across the three channels.
    pub fn new(width: u32, height: u32, bits_per_pixel: u32, policy: SplitPolicy) -> Self {
        let (red_bits, green_bits, blue_bits) = split_bpp(bits_per_pixel, policy);
        Self {
            width,
            height,
            red_bits,
            green_bits,
            blue_bits,
        }
    }

    /// Sum of the three channel depths.
    pub fn bits_per_pixel(&self) -> u32 {
        self.red_bits + self.green_bits + self.blue_bits
    }

    /// Screen area in pixels.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Fills zero width, height or color depth from `current`.
    ///
    /// Lets callers ask for "this resolution at whatever depth is active"
    /// or "this depth at the current resolution".
    pub fn or_current(&self, current: &VideoMode) -> VideoMode {
        let mut filled = *self;
        if filled.width == 0 {
            filled.width = current.width;
        }
        if filled.height == 0 {
            filled.height = current.height;
        }
        if filled.bits_per_pixel() == 0 {
            filled.red_bits = current.red_bits;
            filled.green_bits = current.green_bits;
            filled.blue_bits = current.blue_bits;
        }
        filled
    }
}

impl Ord for VideoMode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits_per_pixel()
            .cmp(&other.bits_per_pixel())
            .then_with(|| self.area().cmp(&other.area()))
            .then_with(|| self.width.cmp(&other.width))
    }
}

impl PartialOrd for VideoMode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VideoMode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VideoMode {}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} ({}/{}/{})",
            self.width, self.height, self.red_bits, self.green_bits, self.blue_bits
        )
    }
}

/// How leftover bits are handed out when a depth doesn't divide by three.
///
/// Drivers disagree on whether 16 bpp means 5/6/5 or 5/5/5, so the
/// choice is configurable rather than fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitPolicy {
    /// First spare bit to green, second to red (16 -> 5/6/5).
    #[default]
    GreenBias,
    /// Spare bits are dropped (16 -> 5/5/5).
    Even,
}

/// Splits a total bits-per-pixel value into red, green and blue depths.
///
/// 32 bpp carries 8 bits of padding or alpha and is treated as 24.
pub fn split_bpp(bits_per_pixel: u32, policy: SplitPolicy) -> (u32, u32, u32) {
    let bpp = if bits_per_pixel == 32 { 24 } else { bits_per_pixel };

    let base = bpp / 3;
    let (mut red, mut green, blue) = (base, base, base);

    if policy == SplitPolicy::GreenBias {
        let delta = bpp - base * 3;
        if delta >= 1 {
            green += 1;
        }
        if delta == 2 {
            red += 1;
        }
    }

    (red, green, blue)
}

/// Maps a requested total depth to one the OS is asked to apply.
///
/// Depths of 15 through 23 pass through; anything else becomes 32.
pub fn normalize_bits_per_pixel(bits_per_pixel: u32) -> u32 {
    if !(MIN_BITS_PER_PIXEL..24).contains(&bits_per_pixel) {
        FALLBACK_BITS_PER_PIXEL
    } else {
        bits_per_pixel
    }
}

/// Picks the supported mode closest to `desired`.
///
/// Candidates are visited in ascending order. Color depth distance
/// dominates; squared resolution distance breaks ties, and the first
/// (smallest) candidate wins a full tie.
pub fn choose_video_mode(available: &[VideoMode], desired: &VideoMode) -> DisplayResult<VideoMode> {
    let mut sorted: Vec<&VideoMode> = available.iter().collect();
    sorted.sort();

    let mut closest: Option<&VideoMode> = None;
    let mut least_color_diff = u64::MAX;
    let mut least_size_diff = u128::MAX;

    for candidate in sorted {
        let color_diff = i64::from(candidate.bits_per_pixel())
            .abs_diff(i64::from(desired.bits_per_pixel()));

        let dw = u128::from(candidate.width.abs_diff(desired.width));
        let dh = u128::from(candidate.height.abs_diff(desired.height));
        let size_diff = dw * dw + dh * dh;

        if color_diff < least_color_diff
            || (color_diff == least_color_diff && size_diff < least_size_diff)
        {
            closest = Some(candidate);
            least_color_diff = color_diff;
            least_size_diff = size_diff;
        }
    }

    closest.copied().ok_or(DisplayError::NoVideoModes)
}
