//! The kind of final product the generated build script declares

use core::fmt;

use serde::{Deserialize, Serialize};

/// The different types of final products, as they are spelled on the schema
/// (`EXE`, `STATIC`, `SHARED`)
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default, Copy, Clone)]
pub enum TargetKind {
    #[default]
    #[serde(
        rename = "EXE",
        alias = "Exe",
        alias = "exe",
        alias = "Executable",
        alias = "executable"
    )]
    Executable,
    #[serde(
        rename = "STATIC",
        alias = "Static",
        alias = "static",
        alias = "StaticLib",
        alias = "static-lib",
        alias = "static_lib",
        alias = "staticlib"
    )]
    StaticLib,
    #[serde(
        rename = "SHARED",
        alias = "Shared",
        alias = "shared",
        alias = "SharedLib",
        alias = "shared-lib",
        alias = "shared_lib",
        alias = "DynamicLib",
        alias = "dylib"
    )]
    SharedLib,
}

impl TargetKind {
    /// The CMake command that declares a target of this kind
    pub fn cmake_command(&self) -> &'static str {
        match *self {
            TargetKind::Executable => "add_executable",
            TargetKind::StaticLib | TargetKind::SharedLib => "add_library",
        }
    }

    /// The library type keyword passed to `add_library`, if any
    pub fn library_keyword(&self) -> Option<&'static str> {
        match *self {
            TargetKind::Executable => None,
            TargetKind::StaticLib => Some("STATIC"),
            TargetKind::SharedLib => Some("SHARED"),
        }
    }

    /// Only executables get a generated entry point
    pub fn needs_entry_point(&self) -> bool {
        matches!(self, TargetKind::Executable)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for TargetKind {
    fn as_ref(&self) -> &str {
        match *self {
            TargetKind::Executable => "EXE",
            TargetKind::StaticLib => "STATIC",
            TargetKind::SharedLib => "SHARED",
        }
    }
}
