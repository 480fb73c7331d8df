//! The command line interface: what comes in through the arguments, and the
//! external commands that go out
pub mod input;
pub mod output;
