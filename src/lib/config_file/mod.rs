//! root file for the crate where the datastructures that holds the parsed
//! project schema lives.
pub mod cpp;
pub mod msvc;

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::{cpp::CppAttribute, msvc::MsvcAttribute};
use crate::error::GeneratorError;
use crate::project_model::target::TargetKind;
use crate::utils::constants::{defaults, file_ext, fragment_names};

/// ```rust
/// use cmake_project_maker::config_file::{ProjectSchema, VersionValue};
/// use cmake_project_maker::project_model::target::TargetKind;
///
/// const SCHEMA_MOCK: &str = r#"{
///     "project_name": "calculator",
///     "cpp": {
///         "target_link_libraries": ["fmt::fmt"],
///         "CXX_STANDARD": 20
///     },
///     "MSVC": {
///         "parent_visual_studio_filter": "Apps"
///     },
///     "source_files": ["math", "parser"],
///     "project_type": "STATIC",
///     "cmake_minimum_required_version": 3.2
/// }"#;
///
/// let config: ProjectSchema = serde_json::from_str(SCHEMA_MOCK)
///     .expect("A failure happened parsing the project schema");
///
/// assert_eq!(config.project_name, "calculator");
/// assert_eq!(config.cpp.target_link_libraries, vec!["fmt::fmt"]);
/// assert_eq!(config.cpp.cxx_standard, 20);
/// assert_eq!(config.msvc.parent_visual_studio_filter, "Apps");
/// assert_eq!(config.msvc.vs_platform_toolset, "v143");
/// assert_eq!(config.source_files, vec!["math", "parser"]);
/// assert_eq!(config.include_sub_directories, vec!["SourceFiles"]);
/// assert_eq!(config.project_type, TargetKind::StaticLib);
/// assert_eq!(config.cmake_minimum_required_version, VersionValue::Number(3.2));
/// ```
/// The [`ProjectSchema`] is the type that holds
/// the whole hierarchy of the project schema attributes
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProjectSchema<'a> {
    #[serde(borrow)]
    pub project_name: Cow<'a, str>,
    #[serde(borrow, default)]
    pub cpp: CppAttribute<'a>,
    #[serde(borrow, default, rename = "MSVC")]
    pub msvc: MsvcAttribute<'a>,
    #[serde(borrow, default)]
    pub source_files: Vec<Cow<'a, str>>,
    #[serde(borrow, default = "default_sub_directories")]
    pub include_sub_directories: Vec<Cow<'a, str>>,
    #[serde(default)]
    pub project_type: TargetKind,
    #[serde(default)]
    pub cmake_minimum_required_version: VersionValue,
}

fn default_sub_directories<'a>() -> Vec<Cow<'a, str>> {
    vec![Cow::Borrowed(fragment_names::SOURCE_FILES)]
}

/// A `CMake` boolean, which the schema may write either as a JSON
/// boolean or as any of the spellings that `CMake` accepts (`ON`, `OFF`,
/// `TRUE`, `NO`...)
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(untagged)]
pub enum CMakeBoolValue {
    Flag(bool),
    Text(String),
}

impl CMakeBoolValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CMakeBoolValue::Flag(flag) => Some(*flag),
            CMakeBoolValue::Text(text) => match text.trim().to_ascii_uppercase().as_str() {
                "ON" | "TRUE" | "YES" | "Y" | "1" => Some(true),
                "OFF" | "FALSE" | "NO" | "N" | "0" => Some(false),
                _ => None,
            },
        }
    }
}

/// The minimum required `CMake` version. Accepted as a number, the way most
/// schemas write it, or as a string, which is the only way of
/// expressing versions like `3.10` without losing the trailing zero
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(untagged)]
pub enum VersionValue {
    Number(f64),
    Text(String),
}

impl Default for VersionValue {
    fn default() -> Self {
        VersionValue::Text(defaults::CMAKE_MINIMUM_VERSION.to_owned())
    }
}

impl VersionValue {
    pub fn to_version_string(&self) -> String {
        match self {
            VersionValue::Number(number) => {
                let text = number.to_string();
                if text.contains('.') {
                    text
                } else {
                    format!("{text}.0")
                }
            }
            VersionValue::Text(text) => text.trim().to_owned(),
        }
    }
}

/// The document formats a schema can be written in
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum SchemaFormat {
    Json,
    Toml,
}

impl SchemaFormat {
    /// Any file with the `.toml` extension is read as TOML, everything else as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(file_ext::TOML_SCHEMA) => SchemaFormat::Toml,
            _ => SchemaFormat::Json,
        }
    }
}

pub fn schema_from_str(
    raw: &'_ str,
    format: SchemaFormat,
) -> Result<ProjectSchema<'_>, GeneratorError> {
    match format {
        SchemaFormat::Json => {
            serde_json::from_str(raw).map_err(|err| GeneratorError::parse(err.to_string()))
        }
        SchemaFormat::Toml => {
            toml::from_str(raw).map_err(|err| GeneratorError::parse(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_schema_takes_the_defaults() {
        let schema = schema_from_str(r#"{"project_name": "demo"}"#, SchemaFormat::Json)
            .expect("Failed to parse the minimal schema");

        assert_eq!(schema.project_name, "demo");
        assert_eq!(schema.cpp, CppAttribute::default());
        assert_eq!(schema.msvc, MsvcAttribute::default());
        assert!(schema.source_files.is_empty());
        assert_eq!(schema.include_sub_directories, vec!["SourceFiles"]);
        assert_eq!(schema.project_type, TargetKind::Executable);
        assert_eq!(schema.cmake_minimum_required_version.to_version_string(), "3.14");
    }

    #[test]
    fn test_missing_project_name_is_a_parse_error() {
        let result = schema_from_str(r#"{"source_files": ["foo"]}"#, SchemaFormat::Json);
        assert!(matches!(result, Err(GeneratorError::Parse(_))));
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let result = schema_from_str(r#"{"project_name": "demo""#, SchemaFormat::Json);
        assert!(matches!(result, Err(GeneratorError::Parse(_))));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = schema_from_str(
            r#"{"project_name": "demo", "cpp": {"CXX_STANDART": 20}}"#,
            SchemaFormat::Json,
        );
        assert!(matches!(result, Err(GeneratorError::Parse(_))));
    }

    #[test]
    fn test_escaped_strings_are_accepted() {
        let schema = schema_from_str(
            r#"{"project_name": "demo", "cpp": {"target_include_directories": ["C:\\libs\\include"]}}"#,
            SchemaFormat::Json,
        )
        .expect("Failed to parse a schema with escaped strings");

        assert_eq!(schema.cpp.target_include_directories, vec!["C:\\libs\\include"]);
    }

    #[test]
    fn test_toml_schema() {
        const SCHEMA_MOCK: &str = r#"
            project_name = "demo"
            source_files = ["foo"]
            project_type = "SHARED"
            cmake_minimum_required_version = "3.10"

            [cpp]
            CMAKE_CXX_STANDARD_REQUIRED = "OFF"
        "#;

        let schema = schema_from_str(SCHEMA_MOCK, SchemaFormat::Toml)
            .expect("Failed to parse the TOML schema");

        assert_eq!(schema.project_type, TargetKind::SharedLib);
        assert_eq!(schema.cpp.cxx_standard_required.as_bool(), Some(false));
        assert_eq!(schema.cmake_minimum_required_version.to_version_string(), "3.10");
    }

    #[test]
    fn test_schema_format_from_path() {
        assert_eq!(SchemaFormat::from_path(Path::new("p.json")), SchemaFormat::Json);
        assert_eq!(SchemaFormat::from_path(Path::new("p.TOML")), SchemaFormat::Toml);
        assert_eq!(SchemaFormat::from_path(Path::new("schema")), SchemaFormat::Json);
    }

    #[test]
    fn test_cmake_bool_spellings() {
        assert_eq!(CMakeBoolValue::Flag(false).as_bool(), Some(false));
        assert_eq!(CMakeBoolValue::Text("on".into()).as_bool(), Some(true));
        assert_eq!(CMakeBoolValue::Text("No".into()).as_bool(), Some(false));
        assert_eq!(CMakeBoolValue::Text("maybe".into()).as_bool(), None);
    }

    #[test]
    fn test_numeric_versions() {
        assert_eq!(VersionValue::Number(3.16).to_version_string(), "3.16");
        assert_eq!(VersionValue::Number(3.0).to_version_string(), "3.0");
    }
}
