mod status;
mod terminal;


pub use status::StatusMessage;
pub use terminal::TerminalHost;

use crate::command::CommandDescriptor;
use crate::error::ViewerError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Capabilities the viewer needs from whatever is hosting it
#[async_trait]
pub trait Host: Send + Sync {
    /// Ask the user for a line of text. `None` means the prompt was dismissed.
    async fn prompt_input(&self, request: InputRequest) -> Result<Option<String>, ViewerError>;

    /// Show a status message until the returned guard is disposed or dropped
    fn set_status(&self, text: &str) -> StatusMessage;

    /// Show a status message that clears itself after `duration`
    fn flash_status(&self, text: &str, duration: Duration);

    /// Report an error to the user
    fn show_error(&self, text: &str);

    /// Open a display panel for a rendered page
    async fn create_panel(&self, spec: PanelSpec) -> Result<Panel, ViewerError>;
}

/// Prompt for a file path of one command's extension
#[derive(Debug, Clone)]
pub struct InputRequest {
    pub prompt: String,
    pub placeholder: String,
    descriptor: &'static CommandDescriptor,
}

impl InputRequest {
    pub fn for_command(descriptor: &'static CommandDescriptor) -> Self {
        Self {
            prompt: format!("Enter path to {} file.", descriptor.ext),
            placeholder: format!("e.g., /path/to/file{}", descriptor.ext),
            descriptor,
        }
    }

    /// Inline validation hosts can show while the user types
    pub fn validate(&self, value: &str) -> Result<(), String> {
        self.descriptor.validate_input(value)
    }
}

/// What a new panel should show
#[derive(Debug, Clone)]
pub struct PanelSpec {
    /// Panel kind, e.g. `starViewer`
    pub view_type: String,
    /// Tab title, the viewed file's base name
    pub title: String,
    pub html: String,
    pub enable_scripts: bool,
}

/// A panel the host has opened
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub id: Uuid,
    pub view_type: String,
    pub title: String,
    /// Where the host put the page, if it lives on disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PathBuf>,
    pub opened_at: DateTime<Utc>,
}
