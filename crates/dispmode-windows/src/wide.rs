/// Encodes `s` as a NUL-terminated UTF-16 buffer for Win32 calls.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decodes a fixed-size UTF-16 buffer filled by Win32, stopping at the first NUL.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn from_wide(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_wide_appends_terminator() {
        // Act
        let wide = to_wide(r"\\.\DISPLAY1");

        // Assert
        assert_eq!(wide.len(), 13);
        assert_eq!(wide.last(), Some(&0));
    }

    #[test]
    fn from_wide_stops_at_first_nul() {
        // Arrange
        let mut buffer = [0u16; 32];
        for (slot, c) in buffer.iter_mut().zip("DELL U2720Q".encode_utf16()) {
            *slot = c;
        }
        buffer[20] = u16::from(b'x');

        // Act / Assert
        assert_eq!(from_wide(&buffer), "DELL U2720Q");
    }

    #[test]
    fn from_wide_without_terminator_uses_whole_buffer() {
        let buffer: Vec<u16> = "Generic PnP Monitor".encode_utf16().collect();

        assert_eq!(from_wide(&buffer), "Generic PnP Monitor");
    }

    #[test]
    fn round_trip_keeps_non_ascii_names() {
        let wide = to_wide("Écran intégré");

        assert_eq!(from_wide(&wide), "Écran intégré");
    }
}
