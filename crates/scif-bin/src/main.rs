/*
 * Copyright (c) 2026.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

mod cmd_args;
mod cmd_parsers;
mod commands;
mod show_gui;
mod sink;

fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    let result = commands::execute(&options);

    if let Err(reason) = result {
        println!();
        error!(" Could not complete command, reason {:?}", reason);

        println!();
        exit(-1);
    }
}
