//! Constant value definitions to use across the whole program

pub const CMAKE_LISTS: &str = "CMakeLists.txt";
pub const CMAKE_DRIVER: &str = "cmake";
pub const ENTRY_POINT: &str = "main.cpp";

/// The names of the generated directories, not their paths
pub mod dir_names {
    pub const CMAKE_FRAGMENTS: &str = "cmake";
    pub const SOURCE: &str = "source";
    pub const DEFAULT_BUILD_DIR: &str = "build";
}

pub mod file_ext {
    pub const HEADER: &str = "hpp";
    pub const IMPLEMENTATION: &str = "cpp";
    pub const CMAKE_FRAGMENT: &str = "cmake";
    pub const TOML_SCHEMA: &str = "toml";
}

/// The names of the fragments shipped with the generator
pub mod fragment_names {
    pub const LIST_SUB_DIRS: &str = "ListSubDirs";
    pub const SOURCE_FILES: &str = "SourceFiles";
}

/// Values assumed for everything the schema leaves unspecified
pub mod defaults {
    pub const CXX_STANDARD: u32 = 23;
    pub const CXX_STANDARD_REQUIRED: &str = "ON";
    pub const MSVC_COMPILE_OPTIONS: &str = "/MP";
    pub const VS_PLATFORM_TOOLSET: &str = "v143";
    pub const CMAKE_MINIMUM_VERSION: &str = "3.14";

    pub const GENERATOR: &str = if cfg!(target_os = "windows") {
        "Visual Studio 17 2022"
    } else {
        "Unix Makefiles"
    };

    pub const INSTALL_PREFIX_BASE: &str = if cfg!(target_os = "windows") {
        "C:/Program Files"
    } else {
        "/usr/local"
    };
}

pub mod error_messages {
    pub const READ_SCHEMA_FILE: &str = "Could not read the project schema file";
    pub const PARSE_SCHEMA_FILE: &str = "Could not parse the project schema file";
    pub const PROJECT_MODEL_MAPPING: &str = "Error building the project model";
    pub const FAILURE_GATHERING_BASE_ABS_PATH: &str =
        "Unable to resolve the absolute path of the directory where the project is created";
    pub const FAILURE_CREATING_PROJECT_ROOT: &str = "Failed to create the project root";
    pub const FAILURE_EMITTING_ARTIFACTS: &str = "Failed to emit the project source stubs";
    pub const FAILURE_WRITING_BUILD_SCRIPT: &str = "Failed to write the CMakeLists.txt file";
    pub const FAILURE_CONFIGURING_PROJECT: &str = "The CMake configure step failed";
}
