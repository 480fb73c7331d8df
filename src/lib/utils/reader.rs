use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

use color_eyre::{eyre::Context, Result};
use regex::Regex;

use crate::{
    config_file::{cpp::CppAttribute, msvc::MsvcAttribute, ProjectSchema},
    error::GeneratorError,
    project_model::{
        compiler::{CompilerModel, LanguageLevel},
        msvc::{split_compile_options, MsvcModel},
        sourceset::SourceUnit,
        ProjectModel,
    },
    utils::constants::error_messages,
};

/// Names that end up as a single path component, or as a `CMake` project name
fn plain_name_regex() -> &'static Regex {
    static PLAIN_NAME: OnceLock<Regex> = OnceLock::new();
    PLAIN_NAME.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.+-]+$").expect("valid regex"))
}

fn version_regex() -> &'static Regex {
    static VERSION: OnceLock<Regex> = OnceLock::new();
    VERSION.get_or_init(|| Regex::new(r"^\d+(\.\d+){0,3}$").expect("valid regex"))
}

/// Reads the raw contents of the schema document at *path*
pub fn read_schema_file(path: &Path) -> Result<String> {
    log::debug!("Reading the project schema at: {path:?}");
    std::fs::read_to_string(path)
        .with_context(|| format!("{}: {:?}", error_messages::READ_SCHEMA_FILE, path))
}

/// Maps a parsed [`ProjectSchema`] into the [`ProjectModel`] that drives the generation,
/// validating every value that ends up on a path or inside the build script
pub fn build_model(schema: ProjectSchema<'_>) -> Result<ProjectModel<'_>, GeneratorError> {
    let name = validate_project_name(schema.project_name)?;
    let cmake_minimum_version =
        validate_version(schema.cmake_minimum_required_version.to_version_string())?;

    let compiler = assemble_compiler_model(schema.cpp)?;
    let msvc = assemble_msvc_model(schema.msvc);
    let sources = assemble_source_units(schema.source_files)?;
    let fragments = assemble_fragments(schema.include_sub_directories)?;

    Ok(ProjectModel {
        name,
        cmake_minimum_version: Cow::Owned(cmake_minimum_version),
        kind: schema.project_type,
        compiler,
        msvc,
        sources,
        fragments,
    })
}

fn validate_project_name(name: Cow<'_, str>) -> Result<Cow<'_, str>, GeneratorError> {
    if is_plain_name(&name) {
        Ok(name)
    } else {
        Err(GeneratorError::parse(format!(
            "{name:?} is not a valid project name, use only letters, digits and `_.+-`"
        )))
    }
}

fn validate_version(version: String) -> Result<String, GeneratorError> {
    if version_regex().is_match(&version) {
        Ok(version)
    } else {
        Err(GeneratorError::parse(format!(
            "{version:?} is not a valid cmake_minimum_required_version"
        )))
    }
}

fn is_plain_name(name: &str) -> bool {
    plain_name_regex().is_match(name) && name != "." && name != ".."
}

fn assemble_compiler_model(
    config: CppAttribute<'_>,
) -> Result<CompilerModel<'_>, GeneratorError> {
    let cpp_standard = LanguageLevel::try_from(config.cxx_standard)?;
    let standard_required = config.cxx_standard_required.as_bool().ok_or_else(|| {
        GeneratorError::parse(format!(
            "CMAKE_CXX_STANDARD_REQUIRED must be a CMake boolean, found {:?}",
            config.cxx_standard_required
        ))
    })?;

    Ok(CompilerModel {
        cpp_standard,
        standard_required,
        include_directories: first_occurrences(
            non_blank_entries(
                config.target_include_directories,
                "target_include_directories",
            )?,
            "Include directory",
        ),
        link_libraries: non_blank_entries(config.target_link_libraries, "target_link_libraries")?,
    })
}

/// Drops the repetitions of any entry, keeping the first occurrence in place
fn first_occurrences<'a>(entries: Vec<Cow<'a, str>>, what: &str) -> Vec<Cow<'a, str>> {
    let mut unique: Vec<Cow<'a, str>> = Vec::with_capacity(entries.len());
    for entry in entries {
        if unique.contains(&entry) {
            log::warn!("{what} {entry:?} is declared more than once, ignoring the repetition");
            continue;
        }
        unique.push(entry);
    }
    unique
}

fn non_blank_entries<'a>(
    entries: Vec<Cow<'a, str>>,
    field: &str,
) -> Result<Vec<Cow<'a, str>>, GeneratorError> {
    if entries.iter().any(|entry| entry.trim().is_empty()) {
        return Err(GeneratorError::parse(format!(
            "{field} must not contain empty entries"
        )));
    }
    Ok(entries)
}

fn assemble_msvc_model(config: MsvcAttribute<'_>) -> MsvcModel<'_> {
    let folder = Some(config.parent_visual_studio_filter).filter(|folder| !folder.is_empty());

    MsvcModel {
        folder,
        compile_options: split_compile_options(&config.target_compile_options),
        platform_toolset: config.vs_platform_toolset,
    }
}

fn assemble_source_units(
    names: Vec<Cow<'_, str>>,
) -> Result<Vec<SourceUnit<'_>>, GeneratorError> {
    let mut units: Vec<SourceUnit<'_>> = Vec::with_capacity(names.len());

    for name in names {
        if !name.split('/').all(is_plain_name) {
            return Err(GeneratorError::parse(format!(
                "{name:?} is not a valid source file name, it must be a relative path \
                made of letters, digits and `_.+-`"
            )));
        }
        if units.iter().any(|unit| unit.name == name) {
            log::warn!("Source file {name:?} is declared more than once, ignoring the repetition");
            continue;
        }
        units.push(SourceUnit::new(name));
    }

    Ok(units)
}

fn assemble_fragments(names: Vec<Cow<'_, str>>) -> Result<Vec<Cow<'_, str>>, GeneratorError> {
    let mut fragments: Vec<Cow<'_, str>> = Vec::with_capacity(names.len());

    for name in names {
        if !is_plain_name(&name) {
            return Err(GeneratorError::parse(format!(
                "{name:?} is not a valid cmake fragment name"
            )));
        }
        if fragments.contains(&name) {
            log::warn!("Fragment {name:?} is included more than once, ignoring the repetition");
            continue;
        }
        fragments.push(name);
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_file::{schema_from_str, SchemaFormat};
    use crate::project_model::target::TargetKind;

    fn model_from(raw: &str) -> Result<ProjectModel<'_>, GeneratorError> {
        build_model(schema_from_str(raw, SchemaFormat::Json)?)
    }

    #[test]
    fn test_build_model_with_defaults() -> Result<()> {
        let model = model_from(r#"{"project_name": "demo", "source_files": ["foo"]}"#)?;

        assert_eq!(model.name, "demo");
        assert_eq!(model.cmake_minimum_version, "3.14");
        assert_eq!(model.kind, TargetKind::Executable);
        assert_eq!(model.compiler.cpp_standard, LanguageLevel::CPP23);
        assert!(model.compiler.standard_required);
        assert!(!model.msvc.is_customized());
        assert_eq!(model.sources, vec![SourceUnit::new("foo")]);
        assert_eq!(model.fragments, vec!["SourceFiles"]);

        Ok(())
    }

    #[test]
    fn test_empty_filter_means_no_folder() -> Result<()> {
        let model = model_from(
            r#"{"project_name": "demo", "MSVC": {"parent_visual_studio_filter": "", "target_compile_options": "/MP /W4"}}"#,
        )?;

        assert_eq!(model.msvc.folder, None);
        assert_eq!(model.msvc.compile_options, vec!["/MP", "/W4"]);
        assert!(model.msvc.is_customized());

        Ok(())
    }

    #[test]
    fn test_invalid_values_are_parse_errors() {
        let invalid_schemas = [
            r#"{"project_name": ""}"#,
            r#"{"project_name": "../escape"}"#,
            r#"{"project_name": "with space"}"#,
            r#"{"project_name": "demo", "cpp": {"CXX_STANDARD": 21}}"#,
            r#"{"project_name": "demo", "cpp": {"CMAKE_CXX_STANDARD_REQUIRED": "SURE"}}"#,
            r#"{"project_name": "demo", "cpp": {"target_link_libraries": [" "]}}"#,
            r#"{"project_name": "demo", "cmake_minimum_required_version": "three"}"#,
            r#"{"project_name": "demo", "source_files": ["/abs"]}"#,
            r#"{"project_name": "demo", "source_files": ["a/../../b"]}"#,
            r#"{"project_name": "demo", "include_sub_directories": ["nested/frag"]}"#,
        ];

        for raw in invalid_schemas {
            assert!(
                matches!(model_from(raw), Err(GeneratorError::Parse(_))),
                "The schema {raw} was accepted"
            );
        }
    }

    #[test]
    fn test_repeated_names_are_collapsed() -> Result<()> {
        let model = model_from(
            r#"{"project_name": "demo", "source_files": ["foo", "bar", "foo"], "include_sub_directories": ["A", "A"]}"#,
        )?;

        assert_eq!(model.sources, vec![SourceUnit::new("foo"), SourceUnit::new("bar")]);
        assert_eq!(model.fragments, vec!["A"]);

        Ok(())
    }

    #[test]
    fn test_repeated_include_directories_are_collapsed() -> Result<()> {
        let model = model_from(
            r#"{"project_name": "demo", "cpp": {"target_include_directories": ["include", "ext", "include"]}}"#,
        )?;

        assert_eq!(model.compiler.include_directories, vec!["include", "ext"]);

        Ok(())
    }

    #[test]
    fn test_nested_source_names_are_accepted() -> Result<()> {
        let model = model_from(r#"{"project_name": "demo", "source_files": ["net/socket"]}"#)?;
        assert_eq!(model.sources[0].file_stem(), "socket");
        Ok(())
    }
}
