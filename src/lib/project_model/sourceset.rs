use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::constants::{dir_names, file_ext};

/// A logical source file of the project, declared on the schema by its base
/// name (optionally nested, like `net/socket`), that materializes as a
/// header and an implementation stub under the `source` directory
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SourceUnit<'a> {
    pub name: Cow<'a, str>,
}

impl<'a> SourceUnit<'a> {
    pub fn new<N: Into<Cow<'a, str>>>(name: N) -> Self {
        Self { name: name.into() }
    }

    /// The last component of the declared name, `socket` for `net/socket`
    pub fn file_stem(&self) -> &str {
        self.name
            .rsplit('/')
            .next()
            .unwrap_or(self.name.as_ref())
    }

    pub fn header_file_name(&self) -> String {
        format!("{}.{}", self.file_stem(), file_ext::HEADER)
    }

    /// Path of the header stub, relative to the project root
    pub fn header_path(&self) -> PathBuf {
        self.relative_path(file_ext::HEADER)
    }

    /// Path of the implementation stub, relative to the project root
    pub fn implementation_path(&self) -> PathBuf {
        self.relative_path(file_ext::IMPLEMENTATION)
    }

    fn relative_path(&self, extension: &str) -> PathBuf {
        let mut components: Vec<&str> = self.name.split('/').collect();
        components.pop();

        components
            .into_iter()
            .fold(Path::new(dir_names::SOURCE).to_path_buf(), |path, dir| {
                path.join(dir)
            })
            .join(format!("{}.{extension}", self.file_stem()))
    }
}
