use super::{Host, InputRequest, Panel, PanelSpec, StatusMessage};
use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::render::Theme;
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use uuid::Uuid;

type Input = Box<dyn AsyncBufRead + Send + Unpin>;

/// Host for running the viewer from a shell.
///
/// Prompts read lines from stdin, status and errors go to stderr, and each
/// panel is written as an HTML file under the output directory.
pub struct TerminalHost {
    input: Mutex<Input>,
    out_dir: PathBuf,
    theme: Theme,
}

impl TerminalHost {
    pub fn new(config: &ViewerConfig) -> Self {
        Self::with_input(config, BufReader::new(tokio::io::stdin()))
    }

    /// Use a custom line source instead of stdin
    pub fn with_input(config: &ViewerConfig, input: impl AsyncBufRead + Send + Unpin + 'static) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
            out_dir: config.out_dir.clone(),
            theme: config.theme,
        }
    }
}

#[async_trait]
impl Host for TerminalHost {
    async fn prompt_input(&self, request: InputRequest) -> Result<Option<String>, ViewerError> {
        eprint!("{} ({}): ", request.prompt, request.placeholder);

        let mut line = String::new();
        let read = self
            .input
            .lock()
            .await
            .read_line(&mut line)
            .await
            .map_err(ViewerError::Prompt)?;

        // EOF dismisses the prompt
        if read == 0 {
            eprintln!();
            return Ok(None);
        }

        let value = line.trim_end_matches(['\r', '\n']).to_string();
        if let Err(hint) = request.validate(&value) {
            eprintln!("{}", hint);
        }
        Ok(Some(value))
    }

    fn set_status(&self, text: &str) -> StatusMessage {
        eprintln!("[status] {}", text);
        let text = text.to_string();
        StatusMessage::new(move || tracing::trace!(status = %text, "status cleared"))
    }

    fn flash_status(&self, text: &str, duration: Duration) {
        eprintln!("[status] {}", text);
        tracing::trace!(status = %text, ms = duration.as_millis() as u64, "status flashed");
    }

    fn show_error(&self, text: &str) {
        eprintln!("error: {}", text);
    }

    async fn create_panel(&self, spec: PanelSpec) -> Result<Panel, ViewerError> {
        let id = Uuid::new_v4();
        let path = self.out_dir.join(format!("{}-{}.html", spec.view_type, id));

        tokio::fs::create_dir_all(&self.out_dir)
            .await
            .map_err(|source| ViewerError::PanelWrite {
                path: self.out_dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, self.theme.apply(&spec.html))
            .await
            .map_err(|source| ViewerError::PanelWrite {
                path: path.clone(),
                source,
            })?;

        tracing::info!(
            title = %spec.title,
            view_type = %spec.view_type,
            scripts = spec.enable_scripts,
            path = %path.display(),
            "panel opened"
        );
        eprintln!("{} -> {}", spec.title, path.display());

        Ok(Panel {
            id,
            view_type: spec.view_type,
            title: spec.title,
            location: Some(path),
            opened_at: Utc::now(),
        })
    }
}
