pub mod json;
pub mod text;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::profile::{Navigator, Notifier};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

#[derive(Debug, Serialize)]
struct Notice<'a> {
    title: &'a str,
    body: &'a str,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(text_line),
            OutputMode::Json => json::print(json_value),
        }
    }
}

impl Notifier for Output {
    fn show_message(&self, title: &str, body: &str) {
        // JSON mode keeps stdout for the command's own result document.
        let printed = match self.mode {
            OutputMode::Text => text::print_line(&format!("{title}\n{body}")),
            OutputMode::Json => json::eprint(&Notice { title, body }),
        };
        if let Err(err) = printed {
            warn!(error = %err, "failed to print notice");
        }
    }
}

/// On the command line, going back means handing control back to the shell.
impl Navigator for Output {
    fn go_back(&self) {
        debug!("returning to caller");
    }
}
