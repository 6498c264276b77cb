// Draws one frame of the visualization onto a surface.

use std::time::Duration;

use crate::config::Config;
use crate::screen::Screen;
use crate::stats::StatusLines;
use crate::surface::Surface;
use crate::terminal::Terminal;

const BAR_GLYPH: char = '█';
const TEXT_COLUMN: i32 = 1;

/// Everything a frame shows.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub sequence: &'a [u16],
    pub iterations: u64,
    pub elapsed: Duration,
    /// Set on the final frame. `draw` renders sorted and unsorted frames
    /// alike; the flag is for [`Present`] implementors that care.
    pub sorted: bool,
}

/// Clear `surface`, then draw one bar per element and the status block.
///
/// Bars grow upward from the bottom of the bar area and never exceed its
/// height; anything past the surface edge is clipped by the surface.
pub fn draw(frame: &Frame<'_>, surface: &mut Surface, config: &Config) {
    surface.clear();

    let height = config.height as i32;
    let bar_style = config.theme.bar;
    for (i, &value) in frame.sequence.iter().enumerate() {
        let x = i as i32 * config.bar_spacing as i32;
        for j in 0..(value as i32).min(height) {
            surface.set_content(x, height - j - 1, BAR_GLYPH, bar_style);
        }
    }

    let status = StatusLines::new(
        frame.sequence.len(),
        frame.iterations,
        frame.elapsed,
        config.show_estimate,
    );
    let first_row = config.status_row() as i32;
    for (offset, line) in status.lines().enumerate() {
        surface.put_str(TEXT_COLUMN, first_row + offset as i32, line, config.theme.text);
    }
}

/// Where the main loop sends frames.
pub trait Present {
    fn present(&mut self, frame: &Frame<'_>);
    /// The terminal changed size: adopt it and repaint what is on screen.
    fn sync(&mut self);
}

/// Draws frames onto a terminal-sized surface and hands them to a [`Screen`].
pub struct Renderer {
    config: Config,
    surface: Surface,
    screen: Screen,
}

impl Renderer {
    pub fn new(config: Config, terminal: Box<dyn Terminal>) -> Self {
        let screen = Screen::new(terminal);
        let (width, height) = screen.size();
        Renderer {
            surface: Surface::new(width, height, config.theme.screen),
            config,
            screen,
        }
    }

    /// Claim the terminal and size the surface to it.
    pub fn start(&mut self) -> std::io::Result<()> {
        self.screen.start()?;
        let (width, height) = self.screen.size();
        self.surface.resize(width, height);
        Ok(())
    }

    pub fn stop(&mut self) {
        self.screen.stop();
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }
}

impl Present for Renderer {
    fn present(&mut self, frame: &Frame<'_>) {
        draw(frame, &mut self.surface, &self.config);
        self.screen.present(self.surface.to_lines());
    }

    fn sync(&mut self) {
        let (width, height) = self.screen.sync();
        if self.surface.size() != (width, height) {
            self.surface.resize(width, height);
        }
    }
}
