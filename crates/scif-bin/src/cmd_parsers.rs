/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use scif_core::options::DecoderOptions;

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if *options.get_one::<bool>("debug").unwrap() {
        log_level = Level::Debug;
    } else if *options.get_one::<bool>("trace").unwrap() {
        log_level = Level::Trace;
    } else if *options.get_one::<bool>("warn").unwrap() {
        log_level = Level::Warn
    } else if *options.get_one::<bool>("info").unwrap() {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

/// Convert the command line flags into decoder options
/// respected by the scif decoder
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = *options.get_one::<usize>("max-width").unwrap();
    let max_height = *options.get_one::<usize>("max-height").unwrap();
    let strict_mode = *options.get_one::<bool>("strict").unwrap();

    DecoderOptions::default()
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_strict_mode(strict_mode)
}
