// Public API exports
pub mod bridge;
pub mod command;
pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod tables;

// Re-export main types for convenience
pub use bridge::{InvocationResult, ParserInvocation};
pub use command::{CommandDescriptor, CommandRegistry, Outcome, SUPPORTED_COMMANDS, ViewerCommand};
pub use config::ViewerConfig;
pub use error::ViewerError;
pub use host::{Host, InputRequest, Panel, PanelSpec, StatusMessage, TerminalHost};
pub use render::{RenderedPage, Theme, render_page};
pub use tables::{TABLE_END, TABLE_START, TableFragment, extract_tables};
