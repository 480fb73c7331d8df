use std::{
    fs::{DirBuilder, File},
    io::Write,
    path::{Path, PathBuf},
};

use color_eyre::Result;

use crate::error::GeneratorError;

/// Creates (or truncates) *filename* under *path* with the given contents
pub fn create_file<'a>(path: &Path, filename: &'a str, buff_write: &'a [u8]) -> Result<()> {
    write_file(&path.join(filename), buff_write)
}

pub fn write_file(file_path: &Path, buff_write: &[u8]) -> Result<()> {
    log::debug!("Writing file {file_path:?}");
    File::create(file_path)
        .and_then(|mut file| file.write_all(buff_write))
        .map_err(|source| filesystem_error(file_path, source))?;
    Ok(())
}

pub fn create_directory(path_create: &Path) -> Result<()> {
    DirBuilder::new()
        .recursive(true)
        .create(path_create)
        .map_err(|source| filesystem_error(path_create, source))?;
    Ok(())
}

/// What is found on the filesystem where a generated file should be placed
#[derive(Debug, PartialEq, Eq)]
pub enum ExistingFile {
    Absent,
    /// A file with exactly the contents that would be written
    Identical,
    /// Anything else: a file with other contents, a directory...
    Conflicting,
}

pub fn inspect_existing_file(file_path: &Path, expected: &[u8]) -> Result<ExistingFile> {
    if !file_path.exists() {
        return Ok(ExistingFile::Absent);
    }
    if !file_path.is_file() {
        return Ok(ExistingFile::Conflicting);
    }

    let current = std::fs::read(file_path).map_err(|source| filesystem_error(file_path, source))?;
    Ok(if current == expected {
        ExistingFile::Identical
    } else {
        ExistingFile::Conflicting
    })
}

/// Resolves *path* against the current working directory, without touching
/// the filesystem (the project root may not exist yet)
pub fn get_absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|source| filesystem_error(path, source).into())
}

fn filesystem_error(path: &Path, source: std::io::Error) -> GeneratorError {
    GeneratorError::Filesystem {
        path: path.to_path_buf(),
        source,
    }
}
