use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// User-facing status messages.
///
/// Status lines go to stderr in human mode so `render` can stream HTML on
/// stdout; JSON modes emit one object per message on stdout unless the
/// output has been moved to stderr with [`Output::on_stderr`].
#[derive(Debug, Clone, Copy)]
pub struct Output {
    format: OutputFormat,
    quiet: bool,
    json_to_stderr: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self {
            format,
            quiet,
            json_to_stderr: false,
        }
    }

    /// Same settings, but JSON messages go to stderr too
    pub fn on_stderr(self) -> Self {
        Self {
            json_to_stderr: true,
            ..self
        }
    }

    /// Whether anything this output prints can land on stdout
    pub fn uses_stdout(&self) -> bool {
        self.format != OutputFormat::Human && !self.json_to_stderr
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✓".green(), msg.as_ref()),
            _ => self.print_json(&json!({ "type": "success", "message": msg.as_ref() })),
        }
    }

    /// Shown even in quiet mode
    pub fn error(&self, msg: impl AsRef<str>) {
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "✗".red(), msg.as_ref()),
            _ => self.print_json(&json!({ "type": "error", "message": msg.as_ref() })),
        }
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => eprintln!("{}", msg.as_ref()),
            _ => self.print_json(&json!({ "type": "info", "message": msg.as_ref() })),
        }
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        match self.format {
            OutputFormat::Human => eprintln!("{} {}", "⚠".yellow(), msg.as_ref()),
            _ => self.print_json(&json!({ "type": "warning", "message": msg.as_ref() })),
        }
    }

    /// Structured payload; ignored in human mode
    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet || self.format == OutputFormat::Human {
            return;
        }
        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        let line = match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(data).unwrap_or_default(),
            _ => serde_json::to_string(data).unwrap_or_default(),
        };
        if self.json_to_stderr {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_usage() {
        assert!(!Output::new(OutputFormat::Human, false).uses_stdout());
        assert!(Output::new(OutputFormat::Json, false).uses_stdout());
        assert!(!Output::new(OutputFormat::JsonPretty, false).on_stderr().uses_stdout());
    }
}
