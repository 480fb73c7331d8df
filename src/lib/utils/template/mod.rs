pub mod resources;

use crate::cmake::fragments;
use crate::error::GeneratorError;
use crate::project_model::ProjectModel;
use crate::utils::{
    self,
    constants::{dir_names, file_ext, ENTRY_POINT},
    fs::ExistingFile,
};
use color_eyre::Result;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Every directory and file that a project needs on disk, besides its
/// `CMakeLists.txt`, computed up front so nothing is written before knowing
/// that nothing will be clobbered.
///
/// Base layout of a generated project:
///    - ./cmake
///        - SourceFiles.cmake
///        - ListSubDirs.cmake
///    - ./source
///        - <name>.hpp
///        - <name>.cpp
///    - main.cpp (executables only)
///    - CMakeLists.txt
#[derive(Debug, PartialEq, Eq)]
pub struct ArtifactPlan {
    pub root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: IndexMap<PathBuf, Cow<'static, str>>,
}

/// How many planned files were written, and how many were already there
#[derive(Debug, PartialEq, Eq, Default)]
pub struct EmissionSummary {
    pub written: usize,
    pub unchanged: usize,
}

pub fn plan_project_artifacts(base_path: &Path, model: &ProjectModel<'_>) -> ArtifactPlan {
    let root = base_path.join(model.name.as_ref());
    let fragments_dir = root.join(dir_names::CMAKE_FRAGMENTS);

    let mut files: IndexMap<PathBuf, Cow<'static, str>> = IndexMap::new();

    for (name, body) in fragments::required_fragments(model) {
        files.insert(
            fragments_dir.join(format!("{name}.{}", file_ext::CMAKE_FRAGMENT)),
            body,
        );
    }

    for unit in &model.sources {
        files.insert(
            root.join(unit.header_path()),
            Cow::Borrowed(resources::HEADER_STUB),
        );
        files.insert(
            root.join(unit.implementation_path()),
            Cow::Owned(resources::implementation_stub(unit)),
        );
    }

    if model.kind.needs_entry_point() {
        files.insert(root.join(ENTRY_POINT), Cow::Borrowed(resources::MAIN));
    }

    ArtifactPlan {
        directories: vec![fragments_dir, root.join(dir_names::SOURCE)],
        root,
        files,
    }
}

/// Fails with [`GeneratorError::AlreadyExists`] when any planned path is
/// occupied by something the generator would not have written itself.
/// Missing roots, empty roots and roots holding unrelated files are all fine.
///
/// Every directory between the root and a planned file must be either
/// missing or a directory, and must not be a planned file itself
pub fn check_project_root_available(plan: &ArtifactPlan) -> Result<()> {
    let mut conflicts: Vec<PathBuf> = Vec::new();
    let mut report_conflict = |path: &Path| {
        if !conflicts.iter().any(|conflict| conflict == path) {
            conflicts.push(path.to_path_buf());
        }
    };

    if is_occupied_by_a_non_directory(&plan.root) {
        report_conflict(&plan.root);
    }

    for dir in &plan.directories {
        if is_occupied_by_a_non_directory(dir) {
            report_conflict(dir);
        }
    }

    for (path, contents) in &plan.files {
        let parents = path
            .ancestors()
            .skip(1)
            .take_while(|dir| *dir != plan.root.as_path());
        for dir in parents {
            if plan.files.contains_key(dir) || is_occupied_by_a_non_directory(dir) {
                report_conflict(dir);
            }
        }

        if utils::fs::inspect_existing_file(path, contents.as_bytes())? == ExistingFile::Conflicting {
            report_conflict(path);
        }
    }

    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(GeneratorError::AlreadyExists(conflicts).into())
    }
}

fn is_occupied_by_a_non_directory(path: &Path) -> bool {
    path.exists() && !path.is_dir()
}

/// Creates the directory that holds the project, reusing it if it already exists
pub fn create_project_root(plan: &ArtifactPlan) -> Result<()> {
    check_project_root_available(plan)?;

    if plan.root.is_dir() {
        log::info!("Reusing the existing project root {:?}", plan.root);
    } else {
        log::info!("Creating the project root {:?}", plan.root);
    }
    utils::fs::create_directory(&plan.root)
}

/// Writes the fragments, the source stubs and the entry point. Files already
/// holding the planned contents are left untouched
pub fn emit_artifacts(plan: &ArtifactPlan) -> Result<EmissionSummary> {
    for dir in &plan.directories {
        utils::fs::create_directory(dir)?;
    }

    let mut summary = EmissionSummary::default();
    for (path, contents) in &plan.files {
        match utils::fs::inspect_existing_file(path, contents.as_bytes())? {
            ExistingFile::Identical => {
                log::debug!("{path:?} is already up to date");
                summary.unchanged += 1;
            }
            ExistingFile::Absent => {
                if let Some(parent) = path.parent() {
                    utils::fs::create_directory(parent)?;
                }
                utils::fs::write_file(path, contents.as_bytes())?;
                summary.written += 1;
            }
            ExistingFile::Conflicting => {
                return Err(GeneratorError::AlreadyExists(vec![path.clone()]).into())
            }
        }
    }

    log::info!(
        "Emitted the project files: {} written, {} already present",
        summary.written,
        summary.unchanged
    );
    Ok(summary)
}
