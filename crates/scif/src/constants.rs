/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Constants pinned by version 1 of the SCIF format

/// Size in bytes of the fixed SCIF header
/// (width + height + mode byte)
pub const SCIF_HEADER_SIZE: usize = 5;

/// Largest width or height encodable in the 16-bit header fields
pub const SCIF_MAX_DIMENSION: usize = u16::MAX as usize;

/// Edge length in pixels of a checkerboard square
///
/// Fixed in v1, future revisions may carry it in the payload
pub const TILE_SIZE: usize = 8;

pub const SCIF_MODE_SOLID: u8 = 1;
pub const SCIF_MODE_VERTICAL_GRADIENT: u8 = 2;
pub const SCIF_MODE_HORIZONTAL_GRADIENT: u8 = 3;
pub const SCIF_MODE_CHECKERBOARD: u8 = 4;
