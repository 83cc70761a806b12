use crate::command::CommandDescriptor;
use crate::render::Theme;
use std::path::{Path, PathBuf};

/// Parser executable used when none is given
pub const DEFAULT_PARSER: &str = "python";

/// Directory name holding the parser scripts, next to the executable
pub const SCRIPTS_DIR_NAME: &str = "python";

/// Panel output directory, relative to the working directory
pub const DEFAULT_OUT_DIR: &str = "metaview-panels";

/// Runtime settings for the viewer, built from command line flags
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Executable that runs the parser scripts
    pub parser: PathBuf,
    /// Directory containing `parse_star.py`, `parse_pkl.py`, ...
    pub scripts_dir: PathBuf,
    /// Where rendered panels are written
    pub out_dir: PathBuf,
    /// Theme selected on rendered panels
    pub theme: Theme,
}

impl ViewerConfig {
    /// Full path of the parser script for a command
    pub fn script_path(&self, descriptor: &CommandDescriptor) -> PathBuf {
        self.scripts_dir.join(descriptor.script)
    }

    pub fn parser(mut self, parser: impl Into<PathBuf>) -> Self {
        self.parser = parser.into();
        self
    }

    pub fn scripts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scripts_dir = dir.into();
        self
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            parser: PathBuf::from(DEFAULT_PARSER),
            scripts_dir: default_scripts_dir(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            theme: Theme::default(),
        }
    }
}

/// `python/` beside the running executable, or beside the working directory
/// if the executable path cannot be resolved
pub fn default_scripts_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join(SCRIPTS_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(SCRIPTS_DIR_NAME))
}
