/// Shell commands and their parser.
use anyhow::{bail, Context, Result};

use memo_pad_core::Position;

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert text at the cursor.
    Type(String),
    /// Insert a line break at the cursor.
    Newline,
    /// Delete characters before the cursor.
    Backspace(usize),
    /// Delete characters after the cursor.
    Delete(usize),
    /// Move the cursor (1-indexed line and column, as displayed).
    Move(Position),
    /// Move the cursor back, wrapping to the previous line.
    Left(usize),
    /// Move the cursor forward, wrapping to the next line.
    Right(usize),
    /// Cursor to start of document.
    Home,
    /// Cursor to end of document.
    End,
    /// Replace the whole document.
    Set(String),
    Undo(usize),
    Redo(usize),
    /// Print the document.
    Show,
    /// Print every snapshot with a marker on the current one.
    History,
    /// Forget history, keeping the current text.
    Clear,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  type <text>        insert text at the cursor
  newline            insert a line break
  backspace [n]      delete n chars before the cursor (default 1)
  delete [n]         delete n chars after the cursor (default 1)
  move <line> <col>  move the cursor (1-indexed)
  left [n]|right [n] move the cursor n chars (default 1)
  home | end         move to start / end of document
  set <text>         replace the whole document
  undo [n] | redo [n]
  show               print the document
  history            list snapshots
  clear              forget history, keep the text
  help | quit";

impl Command {
    /// Parses a non-empty input line.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands or malformed arguments.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (name, rest) = match line.trim_start().split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (line.trim(), ""),
        };

        let cmd = match name.to_ascii_lowercase().as_str() {
            "type" | "t" => {
                if rest.is_empty() {
                    bail!("type needs some text");
                }
                Self::Type(unescape(rest))
            }
            "newline" | "nl" => Self::Newline,
            "backspace" | "bs" => Self::Backspace(count(rest)?),
            "delete" | "del" => Self::Delete(count(rest)?),
            "move" | "mv" => Self::Move(position(rest)?),
            "left" | "l" => Self::Left(count(rest)?),
            "right" => Self::Right(count(rest)?),
            "home" => Self::Home,
            "end" => Self::End,
            "set" => Self::Set(unescape(rest)),
            "undo" | "u" => Self::Undo(count(rest)?),
            "redo" | "r" => Self::Redo(count(rest)?),
            "show" | "p" => Self::Show,
            "history" | "h" => Self::History,
            "clear" => Self::Clear,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(cmd)
    }
}

/// Parses an optional repeat count, defaulting to 1.
fn count(arg: &str) -> Result<usize> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Ok(1);
    }
    let n: usize = arg
        .parse()
        .with_context(|| format!("invalid count '{arg}'"))?;
    if n == 0 {
        bail!("count must be at least 1");
    }
    Ok(n)
}

/// Parses `<line> <col>` as displayed (1-indexed).
fn position(args: &str) -> Result<Position> {
    let mut parts = args.split_whitespace();
    let (Some(line), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("move needs <line> <col>");
    };
    let line: usize = line
        .parse()
        .with_context(|| format!("invalid line '{line}'"))?;
    let col: usize = col.parse().with_context(|| format!("invalid column '{col}'"))?;
    if line == 0 || col == 0 {
        bail!("line and column start at 1");
    }
    Ok(Position::new(line - 1, col - 1))
}

/// Expands `\n`, `\t` and `\\` so multi-line text fits on one input line.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
