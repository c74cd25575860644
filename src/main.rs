//! spritegen - Command-line tool for generating pixel-art sprite sheets

use std::process::ExitCode;

use spritegen::cli;

fn main() -> ExitCode {
    cli::run()
}
