use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::utils::constants::defaults;

/// The Visual Studio specific target settings
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct MsvcModel<'a> {
    /// The solution folder the target is grouped under
    pub folder: Option<Cow<'a, str>>,
    pub compile_options: Vec<Cow<'a, str>>,
    pub platform_toolset: Cow<'a, str>,
}

impl<'a> Default for MsvcModel<'a> {
    fn default() -> Self {
        Self {
            folder: None,
            compile_options: split_compile_options(defaults::MSVC_COMPILE_OPTIONS),
            platform_toolset: Cow::Borrowed(defaults::VS_PLATFORM_TOOLSET),
        }
    }
}

impl<'a> MsvcModel<'a> {
    /// Whether the settings differ in anything from the ones assumed
    /// when the schema says nothing about them
    pub fn is_customized(&self) -> bool {
        *self != Self::default()
    }
}

/// Splits the whitespace separated `target_compile_options` string into single flags
pub fn split_compile_options<'a>(options: &str) -> Vec<Cow<'a, str>> {
    options
        .split_whitespace()
        .map(|flag| Cow::Owned(flag.to_owned()))
        .collect()
}
