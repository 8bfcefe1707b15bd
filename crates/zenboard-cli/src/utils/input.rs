//! Line input for interactive commands, backed by rustyline.

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::CliError;

/// A line editor with history, used by the coach loop and the simulator.
pub struct LinePrompt {
    editor: DefaultEditor,
}

impl LinePrompt {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Read one line, trimmed. Returns `None` on Ctrl+C or Ctrl+D.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim().to_string();
                if !line.is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::debug!(error = %e, "Could not record history entry");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompts once for a string. `None` means the user backed out.
pub fn prompt_string(prompt: &str) -> Result<Option<String>, CliError> {
    LinePrompt::new()?.read_line(prompt)
}

/// Whether a coach-loop line asks to leave.
pub fn is_exit_command(line: &str) -> bool {
    matches!(
        line.to_ascii_lowercase().as_str(),
        "/quit" | "/exit" | "quit" | "exit" | "/q"
    )
}
