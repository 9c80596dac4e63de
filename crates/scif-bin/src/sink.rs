/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The PNG image sink
//!
//! The decoder hands us a raw RGB pixel buffer, this module is the
//! collaborator that turns it into something other programs understand.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::trace;

pub(crate) fn write_png(
    path: &Path, width: usize, height: usize, pixels: &[u8]
) -> Result<(), Box<dyn Error>> {
    // PNG has no notion of a zero sized image, a valid empty scif
    // file still cannot be exported
    if width == 0 || height == 0 {
        return Err("cannot export an image with zero width or height to PNG".into());
    }

    let file = File::create(path)?;
    let buffered = BufWriter::new(file);

    let mut encoder = png::Encoder::new(buffered, width as u32, height as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    writer.finish()?;

    trace!("Wrote {} pixels to {:?}", width * height, path);

    Ok(())
}
