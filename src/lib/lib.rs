pub mod cli;
pub mod cmake;
pub mod config_file;
pub mod error;
pub mod project_model;
pub mod utils;

/// The entry point for the execution of the program.
///
/// This module existence is motivated to let us run
/// integration tests for the whole operations of the program
/// without having to do fancy work about checking the
/// data sent to stdout/stderr
pub mod worker {
    use std::path::{Path, PathBuf};

    use clap::CommandFactory;
    use color_eyre::{eyre::Context, Result};

    use crate::{
        cli::{
            input::CliArgs,
            output::{
                commands::ConfigureCommand,
                executors::{self, BuildToolRunner},
            },
        },
        cmake,
        config_file::{self, SchemaFormat},
        error::GeneratorError,
        project_model::ProjectModel,
        utils::{
            self,
            constants::{error_messages, CMAKE_LISTS},
            template,
        },
    };

    /// The main work of the project. Loads the schema given on the CLI, lays
    /// down the project on disk and configures it with *runner*.
    ///
    /// The steps run strictly in sequence, and the first failure aborts the
    /// remaining ones, leaving in place whatever was already written
    pub fn run_generator(
        cli_args: &CliArgs,
        base_path: &Path,
        runner: &dyn BuildToolRunner,
    ) -> Result<()> {
        let schema_path = locate_schema_file(cli_args)?;

        let raw_schema = utils::reader::read_schema_file(schema_path)?;
        let schema =
            config_file::schema_from_str(&raw_schema, SchemaFormat::from_path(schema_path))
                .with_context(|| {
                    format!("{}: {:?}", error_messages::PARSE_SCHEMA_FILE, schema_path)
                })?;
        let model = utils::reader::build_model(schema)
            .with_context(|| error_messages::PROJECT_MODEL_MAPPING)?;

        let abs_base_path = determine_absolute_path_of_the_base_dir(cli_args, base_path)?;
        generate_project(cli_args, &abs_base_path, &model, runner)
    }

    fn generate_project(
        cli_args: &CliArgs,
        abs_base_path: &Path,
        model: &ProjectModel<'_>,
        runner: &dyn BuildToolRunner,
    ) -> Result<()> {
        let plan = template::plan_project_artifacts(abs_base_path, model);

        template::create_project_root(&plan)
            .with_context(|| error_messages::FAILURE_CREATING_PROJECT_ROOT)?;
        template::emit_artifacts(&plan).with_context(|| error_messages::FAILURE_EMITTING_ARTIFACTS)?;

        let build_script = cmake::render_build_script(model);
        utils::fs::create_file(&plan.root, CMAKE_LISTS, build_script.as_bytes())
            .with_context(|| error_messages::FAILURE_WRITING_BUILD_SCRIPT)?;
        log::info!("Generated {:?}", plan.root.join(CMAKE_LISTS));

        if cli_args.no_configure {
            log::info!("Skipping the CMake configure step");
            return Ok(());
        }

        let command = ConfigureCommand::new(cli_args, abs_base_path, &plan.root, &model.name);
        executors::run_configure_command(runner, &command)?;

        Ok(())
    }

    /// The schema path must be present on the command line, and point to a file
    fn locate_schema_file(cli_args: &CliArgs) -> Result<&Path> {
        let Some(schema_path) = cli_args.schema.as_deref() else {
            return Err(GeneratorError::MissingArgument { usage: usage() }.into());
        };

        if !schema_path.is_file() {
            return Err(GeneratorError::FileNotFound {
                path: schema_path.to_path_buf(),
                usage: usage(),
            }
            .into());
        }

        Ok(schema_path)
    }

    fn usage() -> String {
        CliArgs::command().render_usage().to_string()
    }

    /// Resolves the full path of the directory where the project is created. If the `--root`
    /// [`CliArgs`] arg is present, it is taken relative to *base_path*, otherwise
    /// *base_path* itself is used
    fn determine_absolute_path_of_the_base_dir(
        cli_args: &CliArgs,
        base_path: &Path,
    ) -> Result<PathBuf> {
        let base_dir = match cli_args.root.as_deref() {
            Some(root) => base_path.join(root),
            None => base_path.to_path_buf(),
        };

        utils::fs::get_absolute_path(&base_dir)
            .with_context(|| error_messages::FAILURE_GATHERING_BASE_ABS_PATH)
    }

}
