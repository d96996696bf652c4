//! jucegen library
//!
//! Interactive generator for JUCE audio plugin projects (CMake + VS Code).

pub mod codes;
pub mod config;
pub mod error;
pub mod generator;
pub mod paths;
pub mod project;
pub mod prompt;
pub mod templates;
