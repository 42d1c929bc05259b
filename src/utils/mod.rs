//! Utility functions and helpers.

pub mod preflight;
pub mod settings;

pub use preflight::{check_displayplacer, check_fzf, check_git_repository};
pub use settings::{get_env_var, Settings};
