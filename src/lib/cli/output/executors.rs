//! Runs the external build tool over the generated project

use std::process::Command;

use color_eyre::{eyre::Context, Result};

use super::commands::ConfigureCommand;
use crate::error::GeneratorError;
use crate::utils::constants::error_messages;

/// What an external process left behind once it finished
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ToolOutput {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Launches external programs. Abstracted so the generator can be driven
/// without a real `CMake` installation
pub trait BuildToolRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput>;
}

/// Spawns the program as a child process and waits for it, capturing its output
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl BuildToolRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput> {
        log::trace!("Executing command => {program} {}", args.join(" "));

        let output = Command::new(program).args(args).output().map_err(|source| {
            GeneratorError::ExternalToolLaunch {
                program: program.to_owned(),
                source,
            }
        })?;

        Ok(ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs the `CMake` configure step. A non successful exit is reported as
/// [`GeneratorError::ExternalToolFailed`], there are no retries
pub fn run_configure_command(
    runner: &dyn BuildToolRunner,
    command: &ConfigureCommand,
) -> Result<ToolOutput> {
    let args = command.arguments();
    log::info!(
        "Configuring the project => {} {}",
        command.program,
        args.join(" ")
    );

    let output = runner
        .run(&command.program, &args)
        .with_context(|| error_messages::FAILURE_CONFIGURING_PROJECT)?;

    for line in output.stdout.lines() {
        log::info!("[{}] {line}", command.program);
    }
    for line in output.stderr.lines() {
        log::warn!("[{}] {line}", command.program);
    }

    if !output.success() {
        return Err(GeneratorError::ExternalToolFailed {
            program: command.program.clone(),
            code: output.code,
            stderr: output.stderr,
        }
        .into());
    }

    Ok(output)
}
