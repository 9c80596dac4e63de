/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use log::{info, trace};
use scif_core::bytestream::ZByteReader;
use scif_core::colorspace::ColorSpace;
use scif_core::options::{DecoderOptions, ZeroDimensionPolicy};

use crate::constants::{SCIF_HEADER_SIZE, TILE_SIZE};
use crate::errors::ScifErrors;
use crate::modes::RenderMode;

const SCIF_COLORSPACE: ColorSpace = ColorSpace::RGB;

/// A SCIF decoder and rasterizer
///
/// The decoder is initialized by calling [`new`](ScifDecoder::new) and either
/// of [`decode_headers`] to decode the fixed header or [`decode`] to return
/// the rasterized pixels.
///
/// Additional methods give details of the image, like width and height,
/// accessible after decoding headers.
///
/// SCIF stores no pixels, the file is a rendering rule. `decode` therefore
/// computes every pixel from the mode and its payload colors, it cannot
/// fail once the header and payload have parsed.
///
/// [`decode_headers`]:ScifDecoder::decode_headers
/// [`decode`]:ScifDecoder::decode
pub struct ScifDecoder<'a> {
    stream:          ZByteReader<'a>,
    width:           usize,
    height:          usize,
    mode:            u8,
    render_mode:     Option<RenderMode>,
    decoded_headers: bool,
    options:         DecoderOptions
}

impl<'a> ScifDecoder<'a> {
    /// Create a new decoder with the default options
    ///
    /// # Arguments
    /// - `data`: The raw scif bytes, header included
    pub fn new(data: &'a [u8]) -> ScifDecoder<'a> {
        ScifDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder that obeys specified restrictions
    ///
    /// E.g. can be used to set width and height limits or to reject
    /// zero sized images
    ///
    /// # Example
    /// ```
    /// use scif::ScifDecoder;
    /// use scif_core::options::DecoderOptions;
    /// // only decode images less than 10 in both width and height
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = ScifDecoder::new_with_options(&[], options);
    /// ```
    #[allow(clippy::redundant_field_names)]
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> ScifDecoder<'a> {
        ScifDecoder {
            stream:          ZByteReader::new(data),
            width:           0,
            height:          0,
            mode:            0,
            render_mode:     None,
            decoded_headers: false,
            options:         options
        }
    }

    /// Decode the fixed 5 byte SCIF header storing the image
    /// information into the decoder instance
    ///
    /// # Returns
    /// - On success: Nothing
    /// - On error: [`ScifErrors::TruncatedHeader`] if fewer than 5 bytes
    ///   are present, otherwise a generic error if a configured limit
    ///   is exceeded
    pub fn decode_headers(&mut self) -> Result<(), ScifErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.stream.has(SCIF_HEADER_SIZE) {
            return Err(ScifErrors::TruncatedHeader(self.stream.bytes_left()));
        }
        // 16 bit BE width and height, then the mode byte
        self.width = usize::from(self.stream.get_u16_be());
        self.height = usize::from(self.stream.get_u16_be());
        self.mode = self.stream.get_u8();

        info!("Image width: {}", self.width);
        info!("Image height: {}", self.height);
        trace!("Image mode: {}", self.mode);

        if self.width > self.options.max_width() {
            let msg = format!(
                "Width {} greater than max configured width {}",
                self.width,
                self.options.max_width()
            );
            return Err(ScifErrors::Generic(msg));
        }
        if self.height > self.options.max_height() {
            let msg = format!(
                "Height {} greater than max configured height {}",
                self.height,
                self.options.max_height()
            );
            return Err(ScifErrors::Generic(msg));
        }

        self.decoded_headers = true;
        Ok(())
    }

    /// Decode the file and rasterize it, returning raw RGB pixels,
    /// row-major, or an error
    ///
    /// A width or height of zero yields an empty vector under the
    /// default options, or [`ScifErrors::ZeroDimension`] when the
    /// options say to reject such images.
    pub fn decode(&mut self) -> Result<Vec<u8>, ScifErrors> {
        self.decode_headers()?;

        // reading the payload drains the stream, keep the parsed mode
        // around so repeated calls rasterize the same image
        let mode = match self.render_mode {
            Some(mode) => mode,
            None => {
                let mode = RenderMode::from_payload(self.mode, self.stream.remaining())?;
                self.render_mode = Some(mode);
                mode
            }
        };

        if self.width == 0 || self.height == 0 {
            return match self.options.zero_dimension_policy() {
                ZeroDimensionPolicy::EmitEmpty => Ok(vec![]),
                ZeroDimensionPolicy::Reject => Err(ScifErrors::ZeroDimension)
            };
        }

        let size = SCIF_COLORSPACE
            .num_components()
            .saturating_mul(self.width)
            .saturating_mul(self.height);

        let mut pixels = vec![0; size];

        self.render(&mode, &mut pixels);

        Ok(pixels)
    }

    /// Compute every pixel of the image according to the mode rule
    ///
    /// Caller ensures `pixels` is exactly `width * height * 3` bytes and
    /// both dimensions are non zero.
    fn render(&self, mode: &RenderMode, pixels: &mut [u8]) {
        let row_stride = self.width * SCIF_COLORSPACE.num_components();

        match mode {
            RenderMode::Solid { color } => {
                for px in pixels.chunks_exact_mut(3) {
                    px.copy_from_slice(color);
                }
            }
            RenderMode::VerticalGradient { start, end } => {
                // one color per row, computed once and splatted across it
                for (y, row) in pixels.chunks_exact_mut(row_stride).enumerate() {
                    let t = interpolation_parameter(y, self.height);
                    let color = interpolate_color(start, end, t);

                    for px in row.chunks_exact_mut(3) {
                        px.copy_from_slice(&color);
                    }
                }
            }
            RenderMode::HorizontalGradient { start, end } => {
                // every row is identical, render the first and copy it down
                let (first_row, rest) = pixels.split_at_mut(row_stride);

                for (x, px) in first_row.chunks_exact_mut(3).enumerate() {
                    let t = interpolation_parameter(x, self.width);
                    px.copy_from_slice(&interpolate_color(start, end, t));
                }
                for row in rest.chunks_exact_mut(row_stride) {
                    row.copy_from_slice(first_row);
                }
            }
            RenderMode::Checkerboard { color_a, color_b } => {
                for (y, row) in pixels.chunks_exact_mut(row_stride).enumerate() {
                    for (x, px) in row.chunks_exact_mut(3).enumerate() {
                        let color = if ((x / TILE_SIZE) + (y / TILE_SIZE)) % 2 == 0 {
                            color_a
                        } else {
                            color_b
                        };
                        px.copy_from_slice(color);
                    }
                }
            }
        }
    }

    /// Return the number of bytes [`decode`](Self::decode) will produce
    /// for this image, or `None` if headers have not been decoded
    pub const fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            return Some(
                SCIF_COLORSPACE
                    .num_components()
                    .saturating_mul(self.width)
                    .saturating_mul(self.height)
            );
        }
        None
    }

    /// Return the width and height of the image,
    /// or `None` if headers have not been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Return the raw mode byte read from the header,
    /// or `None` if headers have not been decoded
    ///
    /// The byte is returned as read, it may name a mode this
    /// decoder does not know
    pub const fn mode(&self) -> Option<u8> {
        if self.decoded_headers {
            return Some(self.mode);
        }
        None
    }

    /// Returns the default image colorspace.
    ///
    /// This is always RGB
    pub const fn colorspace(&self) -> ColorSpace {
        SCIF_COLORSPACE
    }
}

/// Normalized position of index `i` along a dimension of `n` pixels
///
/// Defined as exactly `0.0` for one pixel dimensions, the gradient
/// degenerates to the start color, never to NaN.
#[inline]
fn interpolation_parameter(i: usize, n: usize) -> f64 {
    if n > 1 {
        i as f64 / (n - 1) as f64
    } else {
        0.0
    }
}

/// Blend two colors channel-wise at position `t`
///
/// Channels round half away from zero (`f64::round`), then clamp to the
/// 8-bit range. Truncation or round-half-to-even would diverge from the
/// pinned test vectors on `.5` boundaries.
#[inline]
fn interpolate_color(start: &[u8; 3], end: &[u8; 3], t: f64) -> [u8; 3] {
    let channel = |s: u8, e: u8| {
        let value = f64::from(s) + (f64::from(e) - f64::from(s)) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    [
        channel(start[0], end[0]),
        channel(start[1], end[1]),
        channel(start[2], end[2])
    ]
}

#[cfg(test)]
mod tests {
    use super::{interpolate_color, interpolation_parameter};

    #[test]
    fn parameter_degenerates_to_zero() {
        assert_eq!(interpolation_parameter(0, 1), 0.0);
        assert_eq!(interpolation_parameter(0, 0), 0.0);
        assert_eq!(interpolation_parameter(4, 5), 1.0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // midpoint of 0..=255 at t = 0.5 is 127.5, away-from-zero gives 128
        assert_eq!(interpolate_color(&[0; 3], &[255; 3], 0.5), [128; 3]);
        // descending direction, 255 -> 0 at t = 0.5 is also 127.5
        assert_eq!(interpolate_color(&[255; 3], &[0; 3], 0.5), [128; 3]);
    }

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(interpolate_color(&[1, 2, 3], &[250, 251, 252], 0.0), [1, 2, 3]);
        assert_eq!(
            interpolate_color(&[1, 2, 3], &[250, 251, 252], 1.0),
            [250, 251, 252]
        );
    }
}
