mod descriptor;
mod handler;
mod registry;


pub use descriptor::{CommandDescriptor, SUPPORTED_COMMANDS};
pub use handler::{COMPLETE_FLASH, ERROR_FLASH, Outcome, ViewerCommand};
pub use registry::CommandRegistry;
