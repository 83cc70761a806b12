use serde::Serialize;

/// Static binding of a file extension to its viewer command and parser script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    /// File extension including the dot (e.g. ".star")
    pub ext: &'static str,
    /// Human readable command name
    pub name: &'static str,
    /// Unique command identifier
    pub id: &'static str,
    /// Parser script file name
    pub script: &'static str,
}

/// Every file type the viewer knows about. Extend by adding entries.
pub static SUPPORTED_COMMANDS: [CommandDescriptor; 2] = [
    CommandDescriptor {
        ext: ".star",
        name: "View STAR File",
        id: "metadataViewer.viewStar",
        script: "parse_star.py",
    },
    CommandDescriptor {
        ext: ".pkl",
        name: "View PKL File",
        id: "metadataViewer.viewPkl",
        script: "parse_pkl.py",
    },
];

impl CommandDescriptor {
    /// Check an entered path. Returns the message to show when it is rejected.
    ///
    /// The suffix match is case-sensitive: `a.STAR` is not a `.star` file.
    pub fn validate_input(&self, value: &str) -> Result<(), String> {
        if value.is_empty() || !value.ends_with(self.ext) {
            return Err(format!("Enter valid {} file path.", self.ext));
        }
        Ok(())
    }

    /// Panel view type, e.g. `starViewer`
    pub fn view_type(&self) -> String {
        format!("{}Viewer", self.ext.replacen('.', "", 1).to_lowercase())
    }

    /// Extension without the leading dot, lowercased
    pub fn bare_extension(&self) -> String {
        self.ext.trim_start_matches('.').to_lowercase()
    }

    pub fn loading_status(&self) -> String {
        format!("{}: Loading", self.name)
    }

    pub fn error_status(&self) -> String {
        format!("{}: Error", self.name)
    }

    pub fn complete_status(&self) -> String {
        format!("{}: Complete", self.name)
    }

    pub fn no_file_message(&self) -> String {
        format!("{}: No {} file selected", self.name, self.ext)
    }

    pub fn parse_error_message(&self, file_name: &str, detail: &str) -> String {
        format!("{}: Error parsing {}: {}", self.name, file_name, detail)
    }
}
