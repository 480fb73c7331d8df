use crate::project_model::sourceset::SourceUnit;

pub const MAIN: &str = include_str!("main.cpp");

/// A header stub holds nothing but its include guard
pub const HEADER_STUB: &str = "#pragma once\n";

/// An implementation stub only includes its own header
pub fn implementation_stub(unit: &SourceUnit<'_>) -> String {
    format!("#include \"{}\"\n", unit.header_file_name())
}
