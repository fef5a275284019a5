//! Answer orchestration methods
//!
//! Copying the answer to the clipboard and exporting the session.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};

use crate::{logic, App};

impl App {
    pub(crate) fn copy_answer(&mut self) {
        if !self.model.session.has_answer() {
            self.model.show_error_toast("Copy failed");
            return;
        }

        let text = self.model.session.answer.clone();
        match self.pipe_to_clipboard(&text) {
            Ok(()) => self.model.show_toast("Answer copied"),
            Err(e) => {
                tracing::warn!("Copy failed: {:#}", e);
                self.model.show_error_toast("Copy failed");
            }
        }
    }

    /// Send text to the configured clipboard command on stdin
    fn pipe_to_clipboard(&self, text: &str) -> Result<()> {
        let Some(command_line) = self.clipboard_command.as_deref() else {
            bail!("clipboard_command not configured");
        };

        let mut parts = command_line.split_whitespace();
        let Some(program) = parts.next() else {
            bail!("clipboard_command is empty");
        };

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to run '{}'", command_line))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(e).with_context(|| format!("Failed to write to '{}'", command_line));
            }
        }

        let status = child.wait()?;
        if !status.success() {
            bail!("'{}' exited with {}", command_line, status);
        }
        tracing::debug!("Copied {} bytes via {}", text.len(), command_line);
        Ok(())
    }

    pub(crate) fn export_session(&mut self) {
        match logic::report::export_session(&self.export_dir, &self.model) {
            Ok(path) => {
                tracing::info!("Session exported to {}", path.display());
                self.model
                    .show_toast(format!("Exported to {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("Export failed: {:#}", e);
                self.model.show_error_toast("Export failed");
            }
        }
    }
}
