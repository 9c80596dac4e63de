/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::ArgMatches;
use log::info;
use scif::{RenderMode, ScifDecoder, ScifEncoder};

use crate::cmd_parsers::get_decoder_options;
use crate::show_gui::open_in_default_app;
use crate::sink::write_png;

/// Dispatch the chosen subcommand
pub(crate) fn execute(options: &ArgMatches) -> Result<(), Box<dyn Error>> {
    match options.subcommand() {
        Some(("save_solid", matches)) => {
            let mode = RenderMode::Solid { color: color(matches, ["r1", "g1", "b1"]) };
            save(matches, mode)
        }
        Some(("save_vgrad", matches)) => {
            let mode = RenderMode::VerticalGradient {
                start: color(matches, ["r1", "g1", "b1"]),
                end:   color(matches, ["r2", "g2", "b2"])
            };
            save(matches, mode)
        }
        Some(("save_hgrad", matches)) => {
            let mode = RenderMode::HorizontalGradient {
                start: color(matches, ["r1", "g1", "b1"]),
                end:   color(matches, ["r2", "g2", "b2"])
            };
            save(matches, mode)
        }
        Some(("save_checker", matches)) => {
            let mode = RenderMode::Checkerboard {
                color_a: color(matches, ["r1", "g1", "b1"]),
                color_b: color(matches, ["r2", "g2", "b2"])
            };
            save(matches, mode)
        }
        Some(("topng", matches)) => topng(matches),
        Some(("view", matches)) => view(matches),
        // clap rejects anything else, subcommand_required is set
        _ => unreachable!()
    }
}

fn color(matches: &ArgMatches, names: [&str; 3]) -> [u8; 3] {
    names.map(|name| *matches.get_one::<u8>(name).unwrap())
}

fn save(matches: &ArgMatches, mode: RenderMode) -> Result<(), Box<dyn Error>> {
    let out = matches.get_one::<PathBuf>("out").unwrap();
    let width = usize::from(*matches.get_one::<u16>("width").unwrap());
    let height = usize::from(*matches.get_one::<u16>("height").unwrap());

    let bytes = ScifEncoder::new(width, height, mode).encode()?;

    fs::write(out, &bytes)?;
    info!("Wrote {} bytes to {:?}", bytes.len(), out);

    Ok(())
}

/// Read and rasterize a scif file, returning its dimensions
/// and RGB pixels
fn decode_file(matches: &ArgMatches) -> Result<(usize, usize, Vec<u8>), Box<dyn Error>> {
    let in_file = matches.get_one::<PathBuf>("in").unwrap();

    info!("Reading {:?} to memory", in_file);
    let data = fs::read(in_file)?;

    let mut decoder = ScifDecoder::new_with_options(&data, get_decoder_options(matches));
    let pixels = decoder.decode()?;
    let (width, height) = decoder.dimensions().unwrap();

    Ok((width, height, pixels))
}

fn topng(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let out = matches.get_one::<PathBuf>("out").unwrap();
    let (width, height, pixels) = decode_file(matches)?;

    write_png(out, width, height, &pixels)?;
    info!("Wrote {:?}", out);

    Ok(())
}

fn view(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let (width, height, pixels) = decode_file(matches)?;

    open_in_default_app(width, height, &pixels)
}
