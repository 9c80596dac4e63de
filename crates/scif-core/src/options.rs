/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global decoder options

/// What a decoder should do when it meets an image whose
/// width or height is zero
///
/// The SCIF format allows zero dimensions, a file saying `0x17` is a
/// well formed image with no pixels. Some callers prefer treating such
/// files as corrupt, so the behavior is a policy and not hardcoded.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ZeroDimensionPolicy {
    /// Return an empty pixel buffer, this is success and not an error
    ///
    /// This is the default
    EmitEmpty,
    /// Reject the image with an error
    Reject
}

/// Decoder options
///
/// Options are builder style, e.g. to configure a decoder that rejects
/// zero sized images
///
/// ```
/// use scif_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default().set_strict_mode(true);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:      usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:     usize,
    /// What to do with images whose width or height is zero
    ///
    /// - Default value: [`ZeroDimensionPolicy::EmitEmpty`]
    zero_dimension: ZeroDimensionPolicy
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Get the configured policy for images whose width or
    /// height is zero
    pub const fn zero_dimension_policy(&self) -> ZeroDimensionPolicy {
        self.zero_dimension
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set the policy for images whose width or height is zero
    pub fn set_zero_dimension_policy(mut self, policy: ZeroDimensionPolicy) -> Self {
        self.zero_dimension = policy;
        self
    }

    /// Set whether the decoder should be in strict mode
    ///
    /// Strict decoders reject zero sized images instead of
    /// returning an empty pixel buffer
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.zero_dimension = if yes {
            ZeroDimensionPolicy::Reject
        } else {
            ZeroDimensionPolicy::EmitEmpty
        };
        self
    }

    /// Return true whether the decoder is in strict mode
    /// and rejects zero sized images
    pub fn strict_mode(&self) -> bool {
        self.zero_dimension == ZeroDimensionPolicy::Reject
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:      1 << 14,
            max_height:     1 << 14,
            zero_dimension: ZeroDimensionPolicy::EmitEmpty
        }
    }
}
