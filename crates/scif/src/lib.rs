/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! SCIF is a tiny binary format describing images that can be generated
//! procedurally from a few bytes (solid fills, gradients, checkerboards).
//! It has the following format:
//! ```text
//! ╔════════╤══════════════════════════════════════════════════╗
//! ║ Bytes  │ Description                                      ║
//! ╠════════╪══════════════════════════════════════════════════╣
//! ║ 2      │ 16-Bit BE unsigned integer (width)               ║
//! ╟────────┼──────────────────────────────────────────────────╢
//! ║ 2      │ 16-Bit BE unsigned integer (height)              ║
//! ╟────────┼──────────────────────────────────────────────────╢
//! ║ 1      │ rendering mode (1..=4)                           ║
//! ╟────────┼──────────────────────────────────────────────────╢
//! ║ var    │ mode payload, one or two R,G,B color triplets    ║
//! ╚════════╧══════════════════════════════════════════════════╝
//! ```
//!
//! Decoding produces 8-bit RGB pixels, row-major. The pixels are not
//! stored in the file, they are computed per mode:
//!
//! | mode | payload | rule |
//! |------|---------|------|
//! | 1    | `R G B` | solid fill |
//! | 2    | `R1 G1 B1 R2 G2 B2` | vertical gradient, top to bottom |
//! | 3    | `R1 G1 B1 R2 G2 B2` | horizontal gradient, left to right |
//! | 4    | `R1 G1 B1 R2 G2 B2` | checkerboard, 8 pixel tiles |
//!
//! # Features
//! - Decoding and encoding
//! - `no_std` with `alloc` feature
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use modes::*;
pub use scif_core;

pub mod constants;
mod decoder;
mod encoder;
mod errors;
mod modes;
