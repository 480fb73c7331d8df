use std::path::Path;

use clap::Parser;
use cmake_project_maker::{
    cli::{input::CliArgs, output::executors::SystemRunner},
    utils::logger::config_logger,
    worker::run_generator,
};
use color_eyre::Result;
use env_logger::Target;

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stdout)?;
    log::info!("Launching a new project generation");
    run_generator(&cli_args, Path::new("."), &SystemRunner)?;
    log::info!("Project successfully generated");

    Ok(())
}
