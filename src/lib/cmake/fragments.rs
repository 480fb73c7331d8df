//! The library of `.cmake` fragments that the generated projects include
//! from their `cmake` directory

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::project_model::ProjectModel;
use crate::utils::constants::fragment_names;

pub const LIST_SUB_DIRS: &str = include_str!("resources/ListSubDirs.cmake");
pub const SOURCE_FILES: &str = include_str!("resources/SourceFiles.cmake");

/// A fragment known by the generator
struct BuiltinFragment {
    name: &'static str,
    body: &'static str,
    /// Fragments that this one includes by itself
    requires: &'static [&'static str],
}

const BUILTIN_FRAGMENTS: &[BuiltinFragment] = &[
    BuiltinFragment {
        name: fragment_names::LIST_SUB_DIRS,
        body: LIST_SUB_DIRS,
        requires: &[],
    },
    BuiltinFragment {
        name: fragment_names::SOURCE_FILES,
        body: SOURCE_FILES,
        requires: &[fragment_names::LIST_SUB_DIRS],
    },
];

fn builtin(name: &str) -> Option<&'static BuiltinFragment> {
    BUILTIN_FRAGMENTS.iter().find(|fragment| fragment.name == name)
}

/// The contents written for the fragment called *name*. Names unknown to the
/// generator get a placeholder, so the `include()` of the build script always resolves
pub fn fragment_body(name: &str) -> Cow<'static, str> {
    match builtin(name) {
        Some(fragment) => Cow::Borrowed(fragment.body),
        None => Cow::Owned(format!(
            "# {name}.cmake\n# Placeholder fragment, included by the top level CMakeLists.txt\n"
        )),
    }
}

/// Every fragment the project needs on disk, keyed by name: the ones the
/// build script includes, in declaration order, followed by the builtin
/// fragments they depend on
pub fn required_fragments(model: &ProjectModel<'_>) -> IndexMap<String, Cow<'static, str>> {
    let mut fragments = IndexMap::new();

    for name in &model.fragments {
        fragments.insert(name.to_string(), fragment_body(name));
    }

    let mut pending: Vec<&'static str> = model
        .fragments
        .iter()
        .filter_map(|name| builtin(name))
        .flat_map(|fragment| fragment.requires.iter().copied())
        .collect();

    while let Some(dependency) = pending.pop() {
        if fragments.contains_key(dependency) {
            continue;
        }
        fragments.insert(dependency.to_owned(), fragment_body(dependency));
        if let Some(fragment) = builtin(dependency) {
            pending.extend(fragment.requires.iter().copied());
        }
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project_model::{
        compiler::CompilerModel, msvc::MsvcModel, target::TargetKind, ProjectModel,
    };

    fn model_with_fragments(fragments: &[&'static str]) -> ProjectModel<'static> {
        ProjectModel {
            name: Cow::Borrowed("demo"),
            cmake_minimum_version: Cow::Borrowed("3.14"),
            kind: TargetKind::Executable,
            compiler: CompilerModel::default(),
            msvc: MsvcModel::default(),
            sources: Vec::new(),
            fragments: fragments.iter().map(|f| Cow::Borrowed(*f)).collect(),
        }
    }

    #[test]
    fn test_source_files_pulls_its_dependency() {
        let fragments = required_fragments(&model_with_fragments(&["SourceFiles"]));

        let names: Vec<&str> = fragments.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["SourceFiles", "ListSubDirs"]);
        assert!(fragments["SourceFiles"].contains("file(GLOB_RECURSE SOURCES"));
        assert!(fragments["ListSubDirs"].contains("macro(list_sub_dirs result curdir)"));
    }

    #[test]
    fn test_unknown_fragments_get_a_placeholder() {
        let fragments = required_fragments(&model_with_fragments(&["Warnings"]));

        assert_eq!(fragments.len(), 1);
        assert!(fragments["Warnings"].starts_with("# Warnings.cmake"));
    }

    #[test]
    fn test_no_fragments() {
        assert!(required_fragments(&model_with_fragments(&[])).is_empty());
    }
}
