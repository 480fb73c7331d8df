use core::fmt;
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default, Clone)]
pub struct CompilerModel<'a> {
    pub cpp_standard: LanguageLevel,
    pub standard_required: bool,
    pub include_directories: Vec<Cow<'a, str>>,
    pub link_libraries: Vec<Cow<'a, str>>,
}

impl<'a> CompilerModel<'a> {
    /// The value of the `CXX_STANDARD_REQUIRED` target property
    pub fn standard_required_value(&self) -> &'static str {
        if self.standard_required {
            "ON"
        } else {
            "OFF"
        }
    }
}

/// The `C++` standards that `CMake` understands as a `CXX_STANDARD` value
#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize, Default)]
pub enum LanguageLevel {
    CPP98,
    CPP11,
    CPP14,
    CPP17,
    CPP20,
    #[default]
    CPP23,
    CPP26,
}

impl fmt::Display for LanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for LanguageLevel {
    fn as_ref(&self) -> &'static str {
        match *self {
            LanguageLevel::CPP98 => "98",
            LanguageLevel::CPP11 => "11",
            LanguageLevel::CPP14 => "14",
            LanguageLevel::CPP17 => "17",
            LanguageLevel::CPP20 => "20",
            LanguageLevel::CPP23 => "23",
            LanguageLevel::CPP26 => "26",
        }
    }
}

impl TryFrom<u32> for LanguageLevel {
    type Error = GeneratorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Ok(match value {
            98 => LanguageLevel::CPP98,
            11 => LanguageLevel::CPP11,
            14 => LanguageLevel::CPP14,
            17 => LanguageLevel::CPP17,
            20 => LanguageLevel::CPP20,
            23 => LanguageLevel::CPP23,
            26 => LanguageLevel::CPP26,
            other => {
                return Err(GeneratorError::parse(format!(
                    "unsupported CXX_STANDARD {other}, expected one of 98, 11, 14, 17, 20, 23, 26"
                )))
            }
        })
    }
}
