//! The command line that runs the `CMake` configure step over a generated project

use std::path::{Path, PathBuf};

use crate::cli::input::CliArgs;
use crate::utils::constants::{defaults, dir_names};

/// `cmake -S <source_dir> -B <build_dir> -G <generator> -DCMAKE_INSTALL_PREFIX=<install_prefix>`
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ConfigureCommand {
    pub program: String,
    pub source_dir: PathBuf,
    pub build_dir: PathBuf,
    pub generator: String,
    pub install_prefix: String,
}

impl ConfigureCommand {
    /// Assembles the command for the project called *project_name*, living at
    /// *project_root* inside *base_path*, honouring the overrides given on the CLI
    pub fn new(
        cli_args: &CliArgs,
        base_path: &Path,
        project_root: &Path,
        project_name: &str,
    ) -> Self {
        let build_dir = match cli_args.build_dir.as_deref() {
            Some(dir) => base_path.join(dir),
            None => base_path
                .join(dir_names::DEFAULT_BUILD_DIR)
                .join(project_name),
        };

        let install_prefix_base = cli_args
            .install_prefix
            .as_deref()
            .unwrap_or(defaults::INSTALL_PREFIX_BASE);

        Self {
            program: cli_args.cmake.clone(),
            source_dir: project_root.to_path_buf(),
            build_dir,
            generator: cli_args
                .generator
                .clone()
                .unwrap_or_else(|| defaults::GENERATOR.to_owned()),
            install_prefix: format!(
                "{}/{project_name}",
                install_prefix_base.trim_end_matches(['/', '\\'])
            ),
        }
    }

    pub fn arguments(&self) -> Vec<String> {
        vec![
            "-S".to_owned(),
            self.source_dir.to_string_lossy().into_owned(),
            "-B".to_owned(),
            self.build_dir.to_string_lossy().into_owned(),
            "-G".to_owned(),
            self.generator.clone(),
            format!("-DCMAKE_INSTALL_PREFIX={}", self.install_prefix),
        ]
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_default_configure_command() {
        let cli_args = CliArgs::parse_from(["", "schema.json"]);
        let base = Path::new("/work");
        let command = ConfigureCommand::new(&cli_args, base, &base.join("demo"), "demo");

        assert_eq!(command.program, "cmake");
        assert_eq!(command.build_dir, base.join("build").join("demo"));
        assert_eq!(command.generator, defaults::GENERATOR);
        assert_eq!(
            command.install_prefix,
            format!("{}/demo", defaults::INSTALL_PREFIX_BASE)
        );
        assert_eq!(
            command.arguments(),
            vec![
                "-S".to_owned(),
                base.join("demo").to_string_lossy().into_owned(),
                "-B".to_owned(),
                base.join("build").join("demo").to_string_lossy().into_owned(),
                "-G".to_owned(),
                defaults::GENERATOR.to_owned(),
                format!("-DCMAKE_INSTALL_PREFIX={}/demo", defaults::INSTALL_PREFIX_BASE),
            ]
        );
    }

    #[test]
    fn test_cli_overrides() {
        let cli_args = CliArgs::parse_from([
            "",
            "schema.json",
            "-G",
            "Ninja",
            "-B",
            "out",
            "--install-prefix",
            "/opt/",
            "--cmake",
            "/usr/bin/cmake",
        ]);
        let base = Path::new("/work");
        let command = ConfigureCommand::new(&cli_args, base, &base.join("demo"), "demo");

        assert_eq!(command.program, "/usr/bin/cmake");
        assert_eq!(command.generator, "Ninja");
        assert_eq!(command.build_dir, base.join("out"));
        assert_eq!(command.install_prefix, "/opt/demo");
    }
}
