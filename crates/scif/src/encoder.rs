/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the SCIF image format

use alloc::vec;
use alloc::vec::Vec;

use scif_core::bytestream::ZByteWriter;

use crate::constants::{SCIF_HEADER_SIZE, SCIF_MAX_DIMENSION};
use crate::errors::ScifEncodeErrors;
use crate::modes::RenderMode;

/// A SCIF encoder
///
/// Encoding does no rendering, it packs the dimensions and the mode's
/// color fields into the fixed byte layout. Channel values are `u8` by
/// construction, so the only failure mode is a dimension that does not
/// fit the 16-bit header fields.
///
/// # Example
/// - Encode a 100 by 50 solid red image
/// ```
/// use scif::{RenderMode, ScifEncoder};
///
/// let mode = RenderMode::Solid { color: [255, 0, 0] };
/// let bytes = ScifEncoder::new(100, 50, mode).encode().unwrap();
///
/// assert_eq!(&bytes, &[0x00, 0x64, 0x00, 0x32, 0x01, 0xFF, 0x00, 0x00]);
/// ```
pub struct ScifEncoder {
    width:  usize,
    height: usize,
    mode:   RenderMode
}

impl ScifEncoder {
    /// Create a new encoder
    ///
    /// # Arguments
    /// - `width`: Image width in pixels, up to 65535
    /// - `height`: Image height in pixels, up to 65535
    /// - `mode`: The rendering rule and its colors
    pub const fn new(width: usize, height: usize, mode: RenderMode) -> ScifEncoder {
        ScifEncoder { width, height, mode }
    }

    /// Encode the image description returning a vector containing
    /// the encoded file, header included, or an error if the
    /// dimensions cannot be represented
    pub fn encode(&self) -> Result<Vec<u8>, ScifEncodeErrors> {
        if self.width > SCIF_MAX_DIMENSION {
            return Err(ScifEncodeErrors::TooLargeDimensions(self.width));
        }
        if self.height > SCIF_MAX_DIMENSION {
            return Err(ScifEncodeErrors::TooLargeDimensions(self.height));
        }

        let out_size = SCIF_HEADER_SIZE + self.mode.payload_size();

        let mut out = vec![0; out_size];
        let mut stream = ZByteWriter::new(&mut out);

        stream.write_u16_be_err(self.width as u16)?;
        stream.write_u16_be_err(self.height as u16)?;
        stream.write_u8_err(self.mode.mode_byte())?;

        self.mode.write_payload(&mut stream)?;

        debug_assert_eq!(stream.bytes_written(), out_size);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::{RenderMode, ScifDecoder, ScifEncoder};

    #[test]
    fn encode_solid_matches_wire_layout() {
        let mode = RenderMode::Solid { color: [255, 0, 0] };
        let bytes = ScifEncoder::new(100, 50, mode).encode().unwrap();

        assert_eq!(&bytes, &[0x00, 0x64, 0x00, 0x32, 0x01, 0xFF, 0x00, 0x00]);
    }

    #[test]
    fn encode_rejects_large_dimensions() {
        let mode = RenderMode::Solid { color: [0, 0, 0] };
        let err = ScifEncoder::new(65536, 1, mode).encode().unwrap_err();

        assert!(matches!(
            err,
            crate::ScifEncodeErrors::TooLargeDimensions(65536)
        ));
    }

    #[test]
    fn encode_decode_roundtrip() {
        let mode = RenderMode::Checkerboard {
            color_a: [255, 0, 0],
            color_b: [0, 0, 255]
        };
        let bytes = ScifEncoder::new(16, 16, mode).encode().unwrap();

        let mut decoder = ScifDecoder::new(&bytes);
        decoder.decode_headers().unwrap();

        assert_eq!(decoder.dimensions(), Some((16, 16)));
        assert_eq!(decoder.mode(), Some(4));
    }
}
