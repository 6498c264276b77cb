// Character grid with per-cell styling, encoded to ANSI rows for the screen.

use crossterm::style::ContentStyle;
use unicode_width::UnicodeWidthChar;

/// One grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: ContentStyle,
}

impl Cell {
    fn blank(style: ContentStyle) -> Self {
        Cell { ch: ' ', style }
    }
}

/// The terminal's addressable grid.
///
/// Writes outside the grid are dropped, so callers never need to clip.
pub struct Surface {
    width: u16,
    height: u16,
    fill: ContentStyle,
    cells: Vec<Cell>,
}

impl Surface {
    /// A blank grid filled with `fill`.
    pub fn new(width: u16, height: u16, fill: ContentStyle) -> Self {
        Surface {
            width,
            height,
            fill,
            cells: vec![Cell::blank(fill); width as usize * height as usize],
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Adopt new dimensions. Contents are discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::blank(self.fill); width as usize * height as usize];
    }

    /// Reset every cell to a blank in the fill style.
    pub fn clear(&mut self) {
        let blank = Cell::blank(self.fill);
        self.cells.iter_mut().for_each(|cell| *cell = blank);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Place `ch` at `(x, y)`. Off-grid coordinates are ignored.
    pub fn set_content(&mut self, x: i32, y: i32, ch: char, style: ContentStyle) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write `text` left to right starting at `(x, y)`, advancing by each
    /// character's display width. Zero-width characters are skipped; wide
    /// characters leave their trailing column untouched.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, style: ContentStyle) {
        let mut col = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            self.set_content(col, y, ch, style);
            col += w;
        }
    }

    /// Encode each row as a string of styled runs.
    ///
    /// Adjacent cells sharing a style are emitted as one styled span, so a
    /// row costs one SGR sequence per color change rather than per cell.
    pub fn to_lines(&self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height as usize];
        }
        self.cells
            .chunks(self.width as usize)
            .map(encode_row)
            .collect()
    }
}

fn encode_row(row: &[Cell]) -> String {
    let mut line = String::new();
    let mut run = String::new();
    let mut run_style: Option<ContentStyle> = None;

    for cell in row {
        if run_style != Some(cell.style) {
            if let Some(style) = run_style {
                line.push_str(&style.apply(run.as_str()).to_string());
                run.clear();
            }
            run_style = Some(cell.style);
        }
        run.push(cell.ch);
    }
    if let Some(style) = run_style {
        line.push_str(&style.apply(run.as_str()).to_string());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn red() -> ContentStyle {
        ContentStyle {
            foreground_color: Some(Color::Red),
            ..ContentStyle::default()
        }
    }

    fn plain_text(surface: &Surface, y: i32) -> String {
        let (w, _) = surface.size();
        (0..w as i32)
            .map(|x| surface.get(x, y).map(|c| c.ch).unwrap_or('?'))
            .collect()
    }

    // ── Cells ───────────────────────────────────────────────────────

    #[test]
    fn new_surface_is_blank() {
        let surface = Surface::new(4, 2, ContentStyle::default());
        assert_eq!(plain_text(&surface, 0), "    ");
        assert_eq!(plain_text(&surface, 1), "    ");
    }

    #[test]
    fn set_content_writes_cell() {
        let mut surface = Surface::new(4, 2, ContentStyle::default());
        surface.set_content(2, 1, '█', red());
        let cell = surface.get(2, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style, red());
    }

    #[test]
    fn off_surface_writes_are_ignored() {
        let mut surface = Surface::new(3, 3, ContentStyle::default());
        surface.set_content(-1, 0, 'x', red());
        surface.set_content(0, -1, 'x', red());
        surface.set_content(3, 0, 'x', red());
        surface.set_content(0, 3, 'x', red());
        surface.set_content(i32::MAX, i32::MIN, 'x', red());
        for y in 0..3 {
            assert_eq!(plain_text(&surface, y), "   ");
        }
    }

    #[test]
    fn clear_restores_fill() {
        let fill = ContentStyle {
            background_color: Some(Color::Magenta),
            ..ContentStyle::default()
        };
        let mut surface = Surface::new(2, 1, fill);
        surface.set_content(0, 0, 'a', red());
        surface.clear();
        assert_eq!(surface.get(0, 0), Some(&Cell { ch: ' ', style: fill }));
    }

    #[test]
    fn resize_changes_dimensions() {
        let mut surface = Surface::new(2, 2, ContentStyle::default());
        surface.set_content(1, 1, 'a', red());
        surface.resize(5, 1);
        assert_eq!(surface.size(), (5, 1));
        assert_eq!(plain_text(&surface, 0), "     ");
        assert!(surface.get(1, 1).is_none());
    }

    // ── Text ────────────────────────────────────────────────────────

    #[test]
    fn put_str_writes_and_clips() {
        let mut surface = Surface::new(6, 1, ContentStyle::default());
        surface.put_str(1, 0, "hello world", red());
        assert_eq!(plain_text(&surface, 0), " hello");
    }

    #[test]
    fn put_str_advances_by_display_width() {
        let mut surface = Surface::new(5, 1, ContentStyle::default());
        surface.put_str(0, 0, "日a", red());
        assert_eq!(surface.get(0, 0).unwrap().ch, '日');
        assert_eq!(surface.get(1, 0).unwrap().ch, ' ');
        assert_eq!(surface.get(2, 0).unwrap().ch, 'a');
    }

    #[test]
    fn put_str_on_missing_row_is_noop() {
        let mut surface = Surface::new(5, 1, ContentStyle::default());
        surface.put_str(0, 4, "abc", red());
        assert_eq!(plain_text(&surface, 0), "     ");
    }

    // ── Encoding ────────────────────────────────────────────────────

    #[test]
    fn to_lines_one_line_per_row() {
        let surface = Surface::new(3, 4, ContentStyle::default());
        let lines = surface.to_lines();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l == "   "));
    }

    #[test]
    fn to_lines_emits_style_codes() {
        let mut surface = Surface::new(3, 1, ContentStyle::default());
        surface.set_content(1, 0, 'x', red());
        let line = &surface.to_lines()[0];
        assert!(line.starts_with(' '), "unstyled run first: {line:?}");
        assert!(line.contains('x'));
        assert!(line.contains("\x1b["), "styled run carries SGR: {line:?}");
    }

    #[test]
    fn to_lines_merges_equal_runs() {
        let mut surface = Surface::new(4, 1, ContentStyle::default());
        surface.put_str(0, 0, "abcd", red());
        let line = &surface.to_lines()[0];
        assert!(line.contains("abcd"), "one span for the whole run: {line:?}");
    }

    #[test]
    fn zero_width_surface_encodes_empty_rows() {
        let surface = Surface::new(0, 2, ContentStyle::default());
        assert_eq!(surface.to_lines(), vec![String::new(), String::new()]);
    }
}
