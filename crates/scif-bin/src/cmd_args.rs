/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

fn dimension_args() -> [Arg; 2] {
    [
        Arg::new("width")
            .help("Image width in pixels")
            .required(true)
            .value_parser(value_parser!(u16)),
        Arg::new("height")
            .help("Image height in pixels")
            .required(true)
            .value_parser(value_parser!(u16))
    ]
}

fn color_args(names: [&'static str; 3]) -> [Arg; 3] {
    names.map(|name| {
        Arg::new(name)
            .help("8-bit color channel value")
            .required(true)
            .value_parser(value_parser!(u8))
    })
}

fn save_command(name: &'static str, about: &'static str, two_colors: bool) -> Command {
    let cmd = Command::new(name)
        .about(about)
        .arg(
            Arg::new("out")
                .help("Output file to write the image to")
                .required(true)
                .value_parser(value_parser!(PathBuf))
        )
        .args(dimension_args())
        .args(color_args(["r1", "g1", "b1"]));

    if two_colors {
        cmd.args(color_args(["r2", "g2", "b2"]))
    } else {
        cmd
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("scif")
        .about("Encode, decode and rasterize SCIF images")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(save_command("save_solid",
            "Save a solid color image", false))
        .subcommand(save_command("save_vgrad",
            "Save a vertical gradient, first color on top", true))
        .subcommand(save_command("save_hgrad",
            "Save a horizontal gradient, first color on the left", true))
        .subcommand(save_command("save_checker",
            "Save a checkerboard of 8 pixel squares", true))
        .subcommand(Command::new("topng")
            .about("Rasterize a scif file and export it as PNG")
            .arg(Arg::new("in")
                .help("Input scif file to read")
                .required(true)
                .value_parser(value_parser!(PathBuf)))
            .arg(Arg::new("out")
                .help("Output png file to write")
                .required(true)
                .value_parser(value_parser!(PathBuf))))
        .subcommand(Command::new("view")
            .about("Rasterize a scif file and open it in the default image viewer")
            .arg(Arg::new("in")
                .help("Input scif file to read")
                .required(true)
                .value_parser(value_parser!(PathBuf))))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("DECODE")
            .help("Reject images whose width or height is zero")
            .long_help("Reject images whose width or height is zero.\nThe default is to treat them as valid empty images."))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("DECODE")
            .help("Maximum image width the decoder will accept")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("DECODE")
            .help("Maximum image height the decoder will accept")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
}

#[cfg(test)]
mod tests {
    use super::create_cmd_args;

    #[test]
    fn verify_cmd() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn channel_values_are_range_checked() {
        let result = create_cmd_args().try_get_matches_from([
            "scif",
            "save_solid",
            "out.scif",
            "4",
            "4",
            "256",
            "0",
            "0"
        ]);

        assert!(result.is_err());
    }
}
