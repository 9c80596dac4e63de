/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mode dispatch for the SCIF rendering rules
//!
//! The mode byte in the header is parsed into a [`RenderMode`], a sum type
//! whose variants carry their validated payload fields. Unknown modes and
//! short payloads are rejected here, at parse time, so rendering itself
//! cannot fail.

use scif_core::bytestream::ZByteWriter;

use crate::constants::{
    SCIF_MODE_CHECKERBOARD, SCIF_MODE_HORIZONTAL_GRADIENT, SCIF_MODE_SOLID,
    SCIF_MODE_VERTICAL_GRADIENT
};
use crate::errors::ScifErrors;

/// A parsed rendering mode together with its payload colors
///
/// Colors are `[r, g, b]` triplets, one byte per channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RenderMode {
    /// Every pixel takes `color`
    Solid { color: [u8; 3] },
    /// Linear interpolation from `start` at the top row
    /// to `end` at the bottom row
    VerticalGradient { start: [u8; 3], end: [u8; 3] },
    /// Linear interpolation from `start` at the left column
    /// to `end` at the right column
    HorizontalGradient { start: [u8; 3], end: [u8; 3] },
    /// Alternating 8 pixel squares of `color_a` and `color_b`,
    /// `color_a` occupying the top left square
    Checkerboard { color_a: [u8; 3], color_b: [u8; 3] }
}

impl RenderMode {
    /// Return the number of payload bytes `mode` requires,
    /// or `None` if the mode byte is not a known mode
    pub const fn required_payload_size(mode: u8) -> Option<usize> {
        match mode {
            SCIF_MODE_SOLID => Some(3),
            SCIF_MODE_VERTICAL_GRADIENT
            | SCIF_MODE_HORIZONTAL_GRADIENT
            | SCIF_MODE_CHECKERBOARD => Some(6),
            _ => None
        }
    }

    /// Parse a mode byte and its payload into a `RenderMode`
    ///
    /// Payload bytes beyond what the mode requires are ignored,
    /// future revisions may append fields there.
    ///
    /// # Returns
    /// - On success: The parsed mode
    /// - On error: [`ScifErrors::UnknownMode`] for a mode byte outside
    ///   `1..=4`, [`ScifErrors::PayloadTooShort`] if the payload cannot
    ///   satisfy the mode
    pub fn from_payload(mode: u8, payload: &[u8]) -> Result<RenderMode, ScifErrors> {
        let Some(required) = Self::required_payload_size(mode) else {
            return Err(ScifErrors::UnknownMode(mode));
        };

        if payload.len() < required {
            return Err(ScifErrors::PayloadTooShort(required, payload.len()));
        }

        let first = [payload[0], payload[1], payload[2]];

        let parsed = match mode {
            SCIF_MODE_SOLID => RenderMode::Solid { color: first },
            _ => {
                let second = [payload[3], payload[4], payload[5]];

                match mode {
                    SCIF_MODE_VERTICAL_GRADIENT => RenderMode::VerticalGradient {
                        start: first,
                        end:   second
                    },
                    SCIF_MODE_HORIZONTAL_GRADIENT => RenderMode::HorizontalGradient {
                        start: first,
                        end:   second
                    },
                    SCIF_MODE_CHECKERBOARD => RenderMode::Checkerboard {
                        color_a: first,
                        color_b: second
                    },
                    // required_payload_size returned Some for it
                    _ => unreachable!()
                }
            }
        };
        Ok(parsed)
    }

    /// Return the mode byte written to the header for this mode
    pub const fn mode_byte(&self) -> u8 {
        match self {
            RenderMode::Solid { .. } => SCIF_MODE_SOLID,
            RenderMode::VerticalGradient { .. } => SCIF_MODE_VERTICAL_GRADIENT,
            RenderMode::HorizontalGradient { .. } => SCIF_MODE_HORIZONTAL_GRADIENT,
            RenderMode::Checkerboard { .. } => SCIF_MODE_CHECKERBOARD
        }
    }

    /// Return the number of payload bytes this mode writes
    pub const fn payload_size(&self) -> usize {
        match self {
            RenderMode::Solid { .. } => 3,
            RenderMode::VerticalGradient { .. }
            | RenderMode::HorizontalGradient { .. }
            | RenderMode::Checkerboard { .. } => 6
        }
    }

    /// Write this mode's payload bytes in wire order
    pub(crate) fn write_payload(&self, stream: &mut ZByteWriter) -> Result<(), &'static str> {
        match self {
            RenderMode::Solid { color } => stream.write_const_bytes(color),
            RenderMode::VerticalGradient { start, end }
            | RenderMode::HorizontalGradient { start, end } => {
                stream.write_const_bytes(start)?;
                stream.write_const_bytes(end)
            }
            RenderMode::Checkerboard { color_a, color_b } => {
                stream.write_const_bytes(color_a)?;
                stream.write_const_bytes(color_b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderMode;
    use crate::errors::ScifErrors;

    #[test]
    fn parse_rejects_unknown_mode() {
        let err = RenderMode::from_payload(99, &[0, 0, 0]).unwrap_err();

        assert!(matches!(err, ScifErrors::UnknownMode(99)));
    }

    #[test]
    fn parse_rejects_short_payload() {
        let err = RenderMode::from_payload(1, &[10, 20]).unwrap_err();

        assert!(matches!(err, ScifErrors::PayloadTooShort(3, 2)));
    }

    #[test]
    fn parse_ignores_trailing_bytes() {
        let mode = RenderMode::from_payload(1, &[1, 2, 3, 4, 5]).unwrap();

        assert_eq!(mode, RenderMode::Solid { color: [1, 2, 3] });
    }
}
