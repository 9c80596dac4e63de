/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the scif crates
//!
//! This crate provides a set of core routines shared by the
//! SCIF decoder, encoder and command line tool.
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - Colorspace information shared by images
//! - Image decoder options
//!
//! This library is `#[no_std]` with the `alloc` feature needed for defining
//! `Vec` which we need for storing decoded bytes.
//!
//! # Features
//!  - `std`: Enables `std` facilities, e.g. implementing
//!    `std::error::Error` for error types.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod colorspace;
pub mod options;
