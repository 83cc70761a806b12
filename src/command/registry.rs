use super::{CommandDescriptor, SUPPORTED_COMMANDS};
use crate::error::ViewerError;
use std::path::Path;

/// Lookup table over the registered viewer commands
pub struct CommandRegistry {
    commands: Vec<&'static CommandDescriptor>,
}

impl CommandRegistry {
    /// Create a registry holding every supported command
    pub fn new() -> Self {
        Self {
            commands: SUPPORTED_COMMANDS.iter().collect(),
        }
    }

    /// Register an additional command.
    ///
    /// Ids are unique: a descriptor with an id already present replaces the
    /// old one in its original position.
    pub fn register(&mut self, descriptor: &'static CommandDescriptor) {
        match self.commands.iter_mut().find(|c| c.id == descriptor.id) {
            Some(existing) => *existing = descriptor,
            None => self.commands.push(descriptor),
        }
    }

    /// Find a command by its identifier
    pub fn by_id(&self, id: &str) -> Result<&'static CommandDescriptor, ViewerError> {
        self.commands
            .iter()
            .copied()
            .find(|c| c.id == id)
            .ok_or_else(|| ViewerError::UnknownCommand(id.to_string()))
    }

    /// Find the command whose extension matches a file path.
    ///
    /// Matches on the lowercased extension, so `Movie.STAR` opens with the
    /// STAR viewer.
    pub fn for_path(&self, path: &Path) -> Result<&'static CommandDescriptor, ViewerError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        self.commands
            .iter()
            .copied()
            .find(|c| c.bare_extension() == ext)
            .ok_or_else(|| ViewerError::UnsupportedFile(path.display().to_string()))
    }

    /// Commands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &'static CommandDescriptor> + '_ {
        self.commands.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
