/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::env::temp_dir;
use std::error::Error;
use std::time::UNIX_EPOCH;

use log::trace;

use crate::sink::write_png;

/// Rasterized images are shown by writing a temporary PNG
/// and handing it to the platform's default opener
pub(crate) fn open_in_default_app(
    width: usize, height: usize, pixels: &[u8]
) -> Result<(), Box<dyn Error>> {
    let time = format!(
        "{}.png",
        std::time::SystemTime::now()
            .duration_since(UNIX_EPOCH)?
            .as_secs()
    );
    let mut path = temp_dir();

    path.push(time);

    write_png(&path, width, height, pixels)?;
    trace!("Wrote temporary file to {:?}", path);

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(&path).spawn()?;
    }
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("start").arg(&path).spawn()?;
    }
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(&path).spawn()?;
    }

    Ok(())
}
