#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use crate::core::system::System;
use std::process::ExitCode;

mod core;
mod interface;
mod model;
mod platform;
mod ui;
mod utils;

fn main() -> ExitCode {
    let system = match System::initialize() {
        Ok(system) => system,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let result = system.run();
    system.terminate();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
