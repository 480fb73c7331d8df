//! The compiler settings of the generated target
use std::borrow::Cow;

use serde::*;

use super::CMakeBoolValue;
use crate::utils::constants::defaults;

/// [`CppAttribute`] - The compiler related configuration of the project
/// * `target_include_directories` - Additional include directories, added to the target
/// as `PUBLIC` ones
/// * `target_link_libraries` - Libraries the target links against
/// * `CMAKE_CXX_STANDARD_REQUIRED` - Whether the standard is a hard requirement (a CMake
/// boolean, like `ON` or `OFF`)
/// * `CXX_STANDARD` - The `C++` standard of the target, defaults to the latest supported one
///
/// ### Tests
///
/// ```rust
/// use cmake_project_maker::config_file::{cpp::CppAttribute, CMakeBoolValue};
///
/// const SCHEMA_MOCK: &str = r#"{
///     "target_include_directories": ["include", "third_party/fmt/include"],
///     "CXX_STANDARD": 20
/// }"#;
///
/// let config: CppAttribute = serde_json::from_str(SCHEMA_MOCK)
///    .expect("A failure happened parsing the project schema");
///
/// assert_eq!(config.target_include_directories, vec!["include", "third_party/fmt/include"]);
/// assert!(config.target_link_libraries.is_empty());
/// assert_eq!(config.cxx_standard, 20);
/// assert_eq!(config.cxx_standard_required, CMakeBoolValue::Text("ON".to_owned()));
/// ```
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct CppAttribute<'a> {
    #[serde(borrow)]
    pub target_include_directories: Vec<Cow<'a, str>>,
    #[serde(borrow)]
    pub target_link_libraries: Vec<Cow<'a, str>>,
    #[serde(rename = "CMAKE_CXX_STANDARD_REQUIRED")]
    pub cxx_standard_required: CMakeBoolValue,
    #[serde(rename = "CXX_STANDARD")]
    pub cxx_standard: u32,
}

impl<'a> Default for CppAttribute<'a> {
    fn default() -> Self {
        Self {
            target_include_directories: Vec::new(),
            target_link_libraries: Vec::new(),
            cxx_standard_required: CMakeBoolValue::Text(defaults::CXX_STANDARD_REQUIRED.to_owned()),
            cxx_standard: defaults::CXX_STANDARD,
        }
    }
}
