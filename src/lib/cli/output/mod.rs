pub mod commands;
pub mod executors;
