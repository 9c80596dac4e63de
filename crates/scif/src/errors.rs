/*
 * Copyright (c) 2026.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
/// Errors possible during decoding and encoding.
use core::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur during decoding
pub enum ScifErrors {
    /// The input buffer is smaller than the fixed 5 byte header
    ///
    /// The argument is the number of bytes actually present
    TruncatedHeader(usize),
    /// The payload has fewer bytes than the mode requires
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes the mode requires
    /// - 2nd argument is the number of bytes actually present
    PayloadTooShort(usize, usize),
    /// The header contains a mode byte outside the known set
    ///
    /// The only supported modes are `1`, `2`, `3` and `4`
    UnknownMode(u8),
    /// The image width or height is zero and the decoder options
    /// say such images should be rejected
    ZeroDimension,
    /// Generic message
    Generic(String),
    /// Generic message that does not need heap allocation
    GenericStatic(&'static str)
}

impl Debug for ScifErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ScifErrors::TruncatedHeader(found) => {
                writeln!(f, "Truncated header, need 5 bytes but found {found}")
            }
            ScifErrors::PayloadTooShort(expected, found) => {
                writeln!(
                    f,
                    "Payload too short, mode requires {expected} bytes but found {found}"
                )
            }
            ScifErrors::UnknownMode(mode) => {
                writeln!(f, "Unknown mode {mode}, expected a value between 1 and 4")
            }
            ScifErrors::ZeroDimension => {
                writeln!(f, "Width or height is zero and strict mode is set")
            }
            ScifErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            ScifErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

impl From<&'static str> for ScifErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

/// Errors encountered during encoding
pub enum ScifEncodeErrors {
    /// Too large dimensions
    ///
    /// The dimensions cannot be encoded into the 16-bit header fields
    TooLargeDimensions(usize),

    Generic(&'static str)
}

impl Debug for ScifEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ScifEncodeErrors::TooLargeDimensions(found) => {
                writeln!(
                    f,
                    "Too large image dimensions {found}, SCIF can only encode dimensions up to {}",
                    u16::MAX
                )
            }
            ScifEncodeErrors::Generic(val) => {
                writeln!(f, "{}", val)
            }
        }
    }
}

impl From<&'static str> for ScifEncodeErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

impl Display for ScifErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl Display for ScifEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScifErrors {}

#[cfg(feature = "std")]
impl std::error::Error for ScifEncodeErrors {}
