use std::path::PathBuf;

use clap::Parser;

use crate::utils::constants::CMAKE_DRIVER;

/// [`CliArgs`] is the command line arguments parser
///
/// #Test
/// ```rust
/// use clap::Parser;
/// use cmake_project_maker::cli::input::CliArgs;
///
/// let parser = CliArgs::parse_from(["", "-v", "schema.json"]);
/// assert_eq!(1, parser.verbose);
/// assert_eq!(parser.schema.unwrap().to_str(), Some("schema.json"));
/// assert_eq!(parser.cmake, "cmake");
/// assert!(!parser.no_configure);
///
/// let parser = CliArgs::parse_from(["", "--no-configure", "-G", "Ninja", "--root", "projects"]);
/// assert!(parser.schema.is_none());
/// assert!(parser.no_configure);
/// assert_eq!(parser.generator.as_deref(), Some("Ninja"));
/// assert_eq!(parser.root.as_deref(), Some("projects"));
/// ```
#[derive(Parser, Debug, PartialEq, Eq, Clone)]
#[command(name = "cmake-project-maker")]
#[command(author = "Zero Day Code")]
#[command(version)]
#[command(
    about = "Scaffolds a C++ CMake project from a JSON schema",
    long_about = "Creates the project directory, the source stubs and the CMakeLists.txt \
    described by a JSON schema, and runs the CMake configure step on it"
)]
pub struct CliArgs {
    #[arg(value_name = "SCHEMA", help = "The JSON (or .toml) schema of the project")]
    pub schema: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Maximum allowed verbosity level is: '-v'")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        help = "The directory where the project is created. Defaults to the current one"
    )]
    pub root: Option<String>,

    #[arg(short = 'G', long, help = "The CMake generator used to configure the project")]
    pub generator: Option<String>,

    #[arg(
        short = 'B',
        long,
        help = "The build directory. Defaults to <root>/build/<project_name>"
    )]
    pub build_dir: Option<PathBuf>,

    #[arg(
        long,
        help = "The base directory of the install prefix, the project name is appended to it"
    )]
    pub install_prefix: Option<String>,

    #[arg(long, default_value = CMAKE_DRIVER, help = "The CMake executable to run")]
    pub cmake: String,

    #[arg(long, help = "Stop after writing the CMakeLists.txt, without running CMake")]
    pub no_configure: bool,
}
