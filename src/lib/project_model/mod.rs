//! The validated, read-only representation of the user's project, mapped
//! from the schema by [`crate::utils::reader::build_model`]
pub mod compiler;
pub mod msvc;
pub mod sourceset;
pub mod target;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use self::{compiler::CompilerModel, msvc::MsvcModel, sourceset::SourceUnit, target::TargetKind};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct ProjectModel<'a> {
    pub name: Cow<'a, str>,
    pub cmake_minimum_version: Cow<'a, str>,
    pub kind: TargetKind,
    pub compiler: CompilerModel<'a>,
    pub msvc: MsvcModel<'a>,
    pub sources: Vec<SourceUnit<'a>>,
    /// Names of the `cmake/<name>.cmake` fragments included by the build script
    pub fragments: Vec<Cow<'a, str>>,
}

impl<'a> ProjectModel<'a> {
    pub fn includes_fragment(&self, name: &str) -> bool {
        self.fragments.iter().any(|fragment| fragment == name)
    }
}
