// commands/mod.rs

//! # Commands Module
//!
//! One submodule per `logspec` subcommand, each exposing `command()` and
//! `execute()`.

pub mod check;
pub mod common_args;
pub mod env;
pub mod parse;

use std::process;

use logspec::cfg::helpers::LevelAssignment;
use logspec::utils::display::{render_assignment, OutputFormat};
use logspec::{print_error, print_info};

/// Prints an assignment, or a note when it is empty.
pub fn print_assignment(assignment: &LevelAssignment, format: OutputFormat) {
    if assignment.is_empty() && format == OutputFormat::Text {
        print_info!("No levels configured");
        return;
    }

    match render_assignment(assignment, format) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            print_error!("{}", e);
            process::exit(1);
        }
    }
}
