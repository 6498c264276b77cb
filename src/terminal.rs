// Terminal abstraction: the real crossterm backend and a recording mock.

use std::any::Any;
use std::io::{self, Stdout, Write};

use crossterm::{cursor, execute, terminal};

/// The operations the screen needs from a terminal.
///
/// `write` and `flush` swallow I/O errors: once the terminal is up, a failed
/// frame is not worth stopping for. Only `start` can fail.
pub trait Terminal {
    /// Claim the display: raw mode, alternate screen, hidden cursor.
    fn start(&mut self) -> io::Result<()>;
    /// Give the display back. Safe to call more than once.
    fn stop(&mut self);
    fn write(&mut self, data: &str);
    fn flush(&mut self);
    /// Current size as `(columns, rows)`.
    fn size(&self) -> (u16, u16);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Terminal backed by stdout through crossterm.
pub struct CrosstermTerminal {
    out: Stdout,
    active: bool,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        CrosstermTerminal {
            out: io::stdout(),
            active: false,
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for CrosstermTerminal {
    fn start(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        // From here on, stop() must run even if the rest fails.
        self.active = true;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(
            self.out,
            cursor::Show,
            terminal::EnableLineWrap,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    fn write(&mut self, data: &str) {
        let _ = self.out.write_all(data.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }

    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        self.stop();
    }
}

/// In-memory terminal that records every write, for tests.
#[derive(Debug, Default)]
pub struct MockTerminal {
    pub width: u16,
    pub height: u16,
    pub started: bool,
    pub stopped: bool,
    pub writes: Vec<String>,
    pub flushes: usize,
    /// Make `start` fail, to exercise startup error paths.
    pub fail_start: bool,
}

impl MockTerminal {
    pub fn new(width: u16, height: u16) -> Self {
        MockTerminal {
            width,
            height,
            ..MockTerminal::default()
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// All writes concatenated.
    pub fn output(&self) -> String {
        self.writes.concat()
    }
}

impl Terminal for MockTerminal {
    fn start(&mut self) -> io::Result<()> {
        if self.fail_start {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "not a terminal"));
        }
        self.started = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }

    fn write(&mut self, data: &str) {
        self.writes.push(data.to_string());
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_records_lifecycle() {
        let mut term = MockTerminal::new(10, 5);
        term.start().unwrap();
        term.stop();
        assert!(term.started);
        assert!(term.stopped);
    }

    #[test]
    fn mock_start_failure() {
        let mut term = MockTerminal {
            fail_start: true,
            ..MockTerminal::new(10, 5)
        };
        assert!(term.start().is_err());
        assert!(!term.started);
    }

    #[test]
    fn mock_concatenates_writes() {
        let mut term = MockTerminal::new(10, 5);
        term.write("ab");
        term.write("cd");
        term.flush();
        assert_eq!(term.output(), "abcd");
        assert_eq!(term.flushes, 1);
    }

    #[test]
    fn mock_resize() {
        let mut term = MockTerminal::new(10, 5);
        term.set_size(3, 4);
        assert_eq!(term.size(), (3, 4));
    }

    #[test]
    fn downcast_through_trait_object() {
        let term: Box<dyn Terminal> = Box::new(MockTerminal::new(7, 7));
        assert!(term.as_any().downcast_ref::<MockTerminal>().is_some());
    }
}
