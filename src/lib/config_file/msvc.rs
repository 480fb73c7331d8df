//! Visual Studio integration settings
use std::borrow::Cow;

use serde::*;

use crate::utils::constants::defaults;

/// [`MsvcAttribute`] - Settings that only apply when the project is generated for `MSVC`
/// * `parent_visual_studio_filter` - The solution folder that groups the target. Empty means
/// no folder at all
/// * `target_compile_options` - Whitespace separated flags for the compiler
/// * `VS_PLATFORM_TOOLSET` - The Visual Studio platform toolset
///
/// ### Tests
///
/// ```rust
/// use cmake_project_maker::config_file::msvc::MsvcAttribute;
///
/// const SCHEMA_MOCK: &str = r#"{
///     "parent_visual_studio_filter": "Libraries",
///     "VS_PLATFORM_TOOLSET": "v142"
/// }"#;
///
/// let config: MsvcAttribute = serde_json::from_str(SCHEMA_MOCK)
///    .expect("A failure happened parsing the project schema");
///
/// assert_eq!(config.parent_visual_studio_filter, "Libraries");
/// assert_eq!(config.target_compile_options, "/MP");
/// assert_eq!(config.vs_platform_toolset, "v142");
/// ```
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct MsvcAttribute<'a> {
    #[serde(borrow)]
    pub parent_visual_studio_filter: Cow<'a, str>,
    #[serde(borrow)]
    pub target_compile_options: Cow<'a, str>,
    #[serde(borrow, rename = "VS_PLATFORM_TOOLSET")]
    pub vs_platform_toolset: Cow<'a, str>,
}

impl<'a> Default for MsvcAttribute<'a> {
    fn default() -> Self {
        Self {
            parent_visual_studio_filter: Cow::Borrowed(""),
            target_compile_options: Cow::Borrowed(defaults::MSVC_COMPILE_OPTIONS),
            vs_platform_toolset: Cow::Borrowed(defaults::VS_PLATFORM_TOOLSET),
        }
    }
}
