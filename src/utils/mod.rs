//! Small shared helpers

pub mod helper;
