/// Line-oriented editing shell driving an `EditSession`.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use memo_pad_config::AppConfig;
use memo_pad_core::history::history_config;
use memo_pad_core::{Document, EditSession};

use crate::command::{Command, HELP};

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads editing commands and applies them to a single document.
///
/// Every edit that changes the text is recorded in the session history;
/// cursor movement is not.
pub struct Shell {
    session: EditSession<Document>,
    config: AppConfig,
}

impl Shell {
    /// Creates a shell editing `initial_text`.
    pub fn new(initial_text: &str, config: AppConfig) -> Self {
        let session = EditSession::new(Document::from(initial_text), history_config(&config));
        Self { session, config }
    }

    /// Returns the editing session.
    pub fn session(&self) -> &EditSession<Document> {
        &self.session
    }

    /// Reads commands from `input` until EOF or `quit`.
    ///
    /// Bad commands are reported on `out` and skipped. The prompt is only
    /// printed when `interactive` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        interactive: bool,
    ) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if interactive {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            match Command::parse(&line) {
                Ok(cmd) => {
                    if self.execute(cmd, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => writeln!(out, "error: {e:#}")?,
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow> {
        tracing::debug!(?cmd, "executing");
        match cmd {
            Command::Type(text) => {
                self.session.edit(|d| d.insert_text(&text));
            }
            Command::Newline => {
                self.session.edit(|d| d.insert_newline());
            }
            Command::Backspace(n) => {
                if !self.session.edit(|d| d.backspace(n)) {
                    writeln!(out, "nothing to delete")?;
                }
            }
            Command::Delete(n) => {
                if !self.session.edit(|d| d.delete_forward(n)) {
                    writeln!(out, "nothing to delete")?;
                }
            }
            Command::Move(pos) => self.session.originator_mut().move_to(pos),
            Command::Left(n) => {
                let doc = self.session.originator_mut();
                for _ in 0..n {
                    doc.move_left();
                }
            }
            Command::Right(n) => {
                let doc = self.session.originator_mut();
                for _ in 0..n {
                    doc.move_right();
                }
            }
            Command::Home => self.session.originator_mut().move_to_start(),
            Command::End => self.session.originator_mut().move_to_end(),
            Command::Set(text) => {
                self.session.edit(|d| d.replace_all(&text));
            }
            Command::Undo(n) => {
                for _ in 0..n {
                    if let Err(e) = self.session.undo() {
                        writeln!(out, "{e}")?;
                        break;
                    }
                }
            }
            Command::Redo(n) => {
                for _ in 0..n {
                    if let Err(e) = self.session.redo() {
                        writeln!(out, "{e}")?;
                        break;
                    }
                }
            }
            Command::Show => self.show(out)?,
            Command::History => self.list_history(out)?,
            Command::Clear => {
                self.session.clear_history();
                writeln!(out, "history cleared")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let doc = self.session.originator();
        writeln!(out, "{}", doc.text())?;
        if self.config.show_cursor {
            writeln!(out, "[{}]", doc.cursor())?;
        }
        Ok(())
    }

    fn list_history<W: Write>(&self, out: &mut W) -> Result<()> {
        let history = self.session.history();
        let current = history.position();
        for (i, snap) in history.iter().enumerate() {
            let marker = if Some(i) == current { '*' } else { ' ' };
            writeln!(out, "{marker} {i:>3}  {:?}", snap.text())?;
        }
        Ok(())
    }
}
