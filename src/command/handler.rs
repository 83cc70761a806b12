use super::CommandDescriptor;
use crate::bridge::ParserInvocation;
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::host::{Host, InputRequest, Panel, PanelSpec};
use crate::render::render_page;
use crate::tables::extract_tables;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long the "Error" status stays visible
pub const ERROR_FLASH: Duration = Duration::from_millis(2000);

/// How long the "Complete" status stays visible
pub const COMPLETE_FLASH: Duration = Duration::from_millis(2000);

/// Result of one command execution
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// No usable file path was obtained; the parser never ran
    Cancelled { message: String },
    /// The parser failed; no panel was opened
    Failed { message: String },
    /// Tables were rendered into a new panel
    Displayed { panel: Panel, tables: usize },
}

impl Outcome {
    pub fn is_displayed(&self) -> bool {
        matches!(self, Outcome::Displayed { .. })
    }
}

/// A viewer command bound to its configuration.
///
/// Executions share nothing but the static descriptor, so any number may
/// run at once, each with its own process and panel.
pub struct ViewerCommand<'a> {
    descriptor: &'static CommandDescriptor,
    config: &'a ViewerConfig,
}

impl<'a> ViewerCommand<'a> {
    pub fn new(descriptor: &'static CommandDescriptor, config: &'a ViewerConfig) -> Self {
        Self { descriptor, config }
    }

    pub fn descriptor(&self) -> &'static CommandDescriptor {
        self.descriptor
    }

    /// Run the command for `file`, prompting for a path when none is given.
    ///
    /// Errors are reserved for faults outside the normal flow: the parser
    /// could not be started or the panel could not be created.
    pub async fn execute(&self, host: &dyn Host, file: Option<PathBuf>) -> Result<Outcome, ViewerError> {
        let d = self.descriptor;

        let file = match file {
            Some(file) => file,
            None => match self.ask_for_path(host).await? {
                Some(file) => file,
                None => {
                    let message = d.no_file_message();
                    host.show_error(&message);
                    return Ok(Outcome::Cancelled { message });
                }
            },
        };

        let file = std::path::absolute(&file).unwrap_or(file);
        let file_name = base_name(&file);

        // Dropped on every early return, including spawn failure
        let status = host.set_status(&d.loading_status());

        let invocation = ParserInvocation::new(&self.config.parser, self.config.script_path(d), &file);
        let result = invocation.run().await?;

        if result.is_failure() {
            if result.exit_code == Some(0) {
                tracing::warn!(
                    command = d.id,
                    stderr = %result.stderr,
                    "parser exited 0 but wrote to stderr, reporting failure"
                );
            }
            status.dispose();
            host.flash_status(&d.error_status(), ERROR_FLASH);
            let message = d.parse_error_message(&file_name, result.error_text());
            host.show_error(&message);
            return Ok(Outcome::Failed { message });
        }

        let tables = extract_tables(&result.stdout);
        let page = render_page(&tables);
        tracing::info!(command = d.id, file = %file.display(), tables = tables.len(), "rendered");

        status.dispose();
        host.flash_status(&d.complete_status(), COMPLETE_FLASH);

        let panel = host
            .create_panel(PanelSpec {
                view_type: d.view_type(),
                title: file_name,
                html: page.into_html(),
                enable_scripts: true,
            })
            .await?;

        Ok(Outcome::Displayed {
            panel,
            tables: tables.len(),
        })
    }

    async fn ask_for_path(&self, host: &dyn Host) -> Result<Option<PathBuf>, ViewerError> {
        let entered = host
            .prompt_input(InputRequest::for_command(self.descriptor))
            .await?;

        Ok(entered
            .filter(|value| self.descriptor.validate_input(value).is_ok())
            .map(PathBuf::from))
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
