// Full-screen presenter with differential rendering.

use std::fmt::Write;

use crate::terminal::Terminal;

const SYNC_START: &str = "\x1b[?2026h";
const SYNC_END: &str = "\x1b[?2026l";
const CLEAR_SCREEN: &str = "\x1b[2J";
const CLEAR_LINE: &str = "\x1b[2K";
const RESET: &str = "\x1b[0m";

/// Owns the terminal and pushes encoded rows to it.
///
/// Rows are addressed absolutely (the terminal is in the alternate screen),
/// so only rows that differ from the previous frame are rewritten. Every
/// frame is one `write` + `flush`, wrapped in synchronized-output markers.
pub struct Screen {
    terminal: Box<dyn Terminal>,
    /// Rows from the most recent present.
    previous_lines: Vec<String>,
    /// Next present rewrites every row after clearing the screen.
    full_redraw: bool,
    size: (u16, u16),
}

impl Screen {
    pub fn new(terminal: Box<dyn Terminal>) -> Self {
        let size = terminal.size();
        Screen {
            terminal,
            previous_lines: Vec::new(),
            full_redraw: true,
            size,
        }
    }

    /// Claim the terminal.
    pub fn start(&mut self) -> std::io::Result<()> {
        self.terminal.start()?;
        self.size = self.terminal.size();
        Ok(())
    }

    /// Release the terminal.
    pub fn stop(&mut self) {
        self.terminal.stop();
    }

    /// Terminal size as of the last start or sync.
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Present a frame, given as one encoded string per row.
    ///
    /// Rows at or below the terminal's last row are dropped: a cursor move
    /// past the bottom edge lands on the last row and would overwrite it.
    pub fn present(&mut self, mut lines: Vec<String>) {
        lines.truncate(self.size.1 as usize);
        let mut buffer = String::new();

        if self.full_redraw {
            buffer.push_str(CLEAR_SCREEN);
            for (row, line) in lines.iter().enumerate() {
                write_row(&mut buffer, row, line);
            }
            self.full_redraw = false;
        } else {
            let max_len = self
                .previous_lines
                .len()
                .max(lines.len())
                .min(self.size.1 as usize);
            for row in 0..max_len {
                let old = self.previous_lines.get(row);
                let new = lines.get(row);
                if old == new {
                    continue;
                }
                match new {
                    Some(line) => write_row(&mut buffer, row, line),
                    // Frame shrank: blank the stale row.
                    None => write_row(&mut buffer, row, ""),
                }
            }
        }

        if !buffer.is_empty() {
            let mut output = String::with_capacity(buffer.len() + SYNC_START.len() + SYNC_END.len());
            output.push_str(SYNC_START);
            output.push_str(&buffer);
            output.push_str(SYNC_END);
            self.terminal.write(&output);
            self.terminal.flush();
        }

        self.previous_lines = lines;
    }

    /// Re-read the terminal size and redraw the last frame from scratch.
    ///
    /// Returns the new size so the caller can resize its surface.
    pub fn sync(&mut self) -> (u16, u16) {
        self.size = self.terminal.size();
        self.full_redraw = true;
        let mut last = std::mem::take(&mut self.previous_lines);
        last.truncate(self.size.1 as usize);
        self.present(last);
        self.size
    }

    /// Rows from the most recent present.
    pub fn previous_lines(&self) -> &[String] {
        &self.previous_lines
    }

    pub fn terminal(&self) -> &dyn Terminal {
        &*self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut dyn Terminal {
        &mut *self.terminal
    }
}

fn write_row(buffer: &mut String, row: usize, line: &str) {
    let _ = write!(buffer, "\x1b[{};1H{CLEAR_LINE}{line}{RESET}", row + 1);
}
