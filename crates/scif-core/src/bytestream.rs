/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A bytestream reader and writer with endian aware reads and writes
//!
//! The readers and writers operate on in-memory byte slices, the
//! natural shape for a format whose whole file fits in a handful
//! of bytes.

pub use reader::{ZByteIoError, ZByteReader};
pub use writer::ZByteWriter;

mod reader;
mod writer;
