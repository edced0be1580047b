//! Planner settings shared by the binary and the console.

use std::path::PathBuf;

use crate::game_list::DEFAULT_LIST_FILE;

/// Catalog read at startup when no path is given.
pub const DEFAULT_CATALOG: &str = "games.csv";

/// Where the planner reads its catalog and saves the game list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub catalog: PathBuf,
    /// Target of `list save` without a file name.
    pub list_file: PathBuf,
}

impl PlannerConfig {
    pub fn new(catalog: impl Into<PathBuf>) -> Self {
        PlannerConfig {
            catalog: catalog.into(),
            ..Self::default()
        }
    }

    pub fn with_list_file(mut self, list_file: impl Into<PathBuf>) -> Self {
        self.list_file = list_file.into();
        self
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            catalog: PathBuf::from(DEFAULT_CATALOG),
            list_file: PathBuf::from(DEFAULT_LIST_FILE),
        }
    }
}
