//! Generation of the top level `CMakeLists.txt`.
//!
//! The build script is made of independent blocks, each one a pure function
//! from the [`ProjectModel`] to its text, or to nothing when the block does
//! not apply. They are concatenated in the order of [`BUILD_SCRIPT_BLOCKS`]:
//!
//! 1. `cmake_minimum_required`
//! 2. `project`
//! 3. `include` of the `cmake/` fragments
//! 4. the target declaration (`add_executable` or `add_library`)
//! 5. the language standard properties
//! 6. the `MSVC` only settings
//! 7. `target_include_directories`
//! 8. `target_link_libraries`
pub mod fragments;

use crate::project_model::ProjectModel;
use crate::utils::constants::{dir_names, file_ext, fragment_names, ENTRY_POINT};

/// A named piece of the build script
pub struct ScriptBlock {
    pub name: &'static str,
    pub render: fn(&ProjectModel<'_>) -> Option<String>,
}

pub const BUILD_SCRIPT_BLOCKS: [ScriptBlock; 8] = [
    ScriptBlock {
        name: "minimum_required",
        render: minimum_required,
    },
    ScriptBlock {
        name: "project",
        render: project,
    },
    ScriptBlock {
        name: "fragment_includes",
        render: fragment_includes,
    },
    ScriptBlock {
        name: "target",
        render: target,
    },
    ScriptBlock {
        name: "language_standard",
        render: language_standard,
    },
    ScriptBlock {
        name: "msvc_settings",
        render: msvc_settings,
    },
    ScriptBlock {
        name: "include_directories",
        render: include_directories,
    },
    ScriptBlock {
        name: "link_libraries",
        render: link_libraries,
    },
];

/// Renders every block that applies to *model*, in order, paired with its name
pub fn render_blocks(model: &ProjectModel<'_>) -> Vec<(&'static str, String)> {
    BUILD_SCRIPT_BLOCKS
        .iter()
        .filter_map(|block| {
            let text = (block.render)(model);
            match &text {
                Some(text) => log::debug!("Rendered the [{}] block:\n{text}", block.name),
                None => log::debug!("Skipping the [{}] block", block.name),
            }
            text.map(|text| (block.name, text))
        })
        .collect()
}

/// The full contents of the `CMakeLists.txt` file, one blank line between blocks
pub fn render_build_script(model: &ProjectModel<'_>) -> String {
    render_blocks(model)
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn minimum_required(model: &ProjectModel<'_>) -> Option<String> {
    Some(format!(
        "cmake_minimum_required(VERSION {})\n",
        model.cmake_minimum_version
    ))
}

pub fn project(model: &ProjectModel<'_>) -> Option<String> {
    Some(format!("project({})\n", model.name))
}

pub fn fragment_includes(model: &ProjectModel<'_>) -> Option<String> {
    if model.fragments.is_empty() {
        return None;
    }

    Some(
        model
            .fragments
            .iter()
            .map(|fragment| {
                format!(
                    "include(${{CMAKE_CURRENT_SOURCE_DIR}}/{}/{fragment}.{})\n",
                    dir_names::CMAKE_FRAGMENTS,
                    file_ext::CMAKE_FRAGMENT
                )
            })
            .collect(),
    )
}

/// Declares the target. When the `SourceFiles` fragment is included, the target
/// takes the globbed `SOURCES` and `HEADERS`, otherwise the generated files
/// are listed one by one
pub fn target(model: &ProjectModel<'_>) -> Option<String> {
    let command = model.kind.cmake_command();
    let head = match model.kind.library_keyword() {
        Some(keyword) => format!("{command}(${{PROJECT_NAME}} {keyword}"),
        None => format!("{command}(${{PROJECT_NAME}}"),
    };

    if model.includes_fragment(fragment_names::SOURCE_FILES) {
        return Some(format!("{head} ${{SOURCES}} ${{HEADERS}})\n"));
    }

    let sources = target_sources(model);
    if sources.is_empty() {
        return Some(format!("{head})\n"));
    }

    Some(multiline_command(&head, &sources))
}

/// The generated files, as the build script refers to them
fn target_sources(model: &ProjectModel<'_>) -> Vec<String> {
    let entry_point = model
        .kind
        .needs_entry_point()
        .then(|| ENTRY_POINT.to_owned());

    entry_point
        .into_iter()
        .chain(model.sources.iter().flat_map(|unit| {
            [file_ext::IMPLEMENTATION, file_ext::HEADER]
                .map(|ext| format!("{}/{}.{ext}", dir_names::SOURCE, unit.name))
        }))
        .collect()
}

pub fn language_standard(model: &ProjectModel<'_>) -> Option<String> {
    Some(format!(
        "set_property(TARGET ${{PROJECT_NAME}} PROPERTY CXX_STANDARD {})\n\
        set_property(TARGET ${{PROJECT_NAME}} PROPERTY CXX_STANDARD_REQUIRED {})\n",
        model.compiler.cpp_standard,
        model.compiler.standard_required_value()
    ))
}

/// Only emitted when any of the Visual Studio settings differs from its default
pub fn msvc_settings(model: &ProjectModel<'_>) -> Option<String> {
    let msvc = &model.msvc;
    if !msvc.is_customized() {
        return None;
    }

    let mut text = String::from("if(MSVC)\n");
    if let Some(folder) = &msvc.folder {
        text.push_str(&format!(
            "    set_target_properties(${{PROJECT_NAME}} PROPERTIES FOLDER {})\n",
            literal_argument(folder)
        ));
    }
    text.push_str(&format!(
        "    set_target_properties(${{PROJECT_NAME}} PROPERTIES VS_PLATFORM_TOOLSET {})\n",
        literal_argument(&msvc.platform_toolset)
    ));
    if !msvc.compile_options.is_empty() {
        let options: Vec<String> = msvc
            .compile_options
            .iter()
            .map(|option| argument(option))
            .collect();
        text.push_str(&format!(
            "    target_compile_options(${{PROJECT_NAME}} PRIVATE {})\n",
            options.join(" ")
        ));
    }
    text.push_str("endif()\n");

    Some(text)
}

pub fn include_directories(model: &ProjectModel<'_>) -> Option<String> {
    let directories = &model.compiler.include_directories;
    if directories.is_empty() {
        return None;
    }

    Some(multiline_command(
        "target_include_directories(${PROJECT_NAME} PUBLIC",
        directories,
    ))
}

pub fn link_libraries(model: &ProjectModel<'_>) -> Option<String> {
    let libraries = &model.compiler.link_libraries;
    if libraries.is_empty() {
        return None;
    }

    Some(multiline_command(
        "target_link_libraries(${PROJECT_NAME} PUBLIC",
        libraries,
    ))
}

/// `head` on its own line, one argument per indented line, and the closing parenthesis
fn multiline_command<I, S>(head: &str, arguments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = format!("{head}\n");
    for arg in arguments {
        text.push_str("    ");
        text.push_str(&argument(arg.as_ref()));
        text.push('\n');
    }
    text.push_str(")\n");
    text
}

/// Writes *value* as a single `CMake` argument, quoting it only when an unquoted
/// argument would be split or reinterpreted
fn argument(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\\' | ';' | '(' | ')' | '#'));

    if needs_quotes {
        quoted_argument(value)
    } else {
        value.to_owned()
    }
}

fn quoted_argument(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// A quoted argument where `${...}` is kept as text instead of being expanded
fn literal_argument(value: &str) -> String {
    quoted_argument(value).replace('$', "\\$")
}
