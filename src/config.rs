// Compile-time presets: geometry, pacing and colors.

use std::time::Duration;

use crossterm::style::{Color, ContentStyle};

/// Colors used when drawing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Fill for every cell after a clear.
    pub screen: ContentStyle,
    /// Bar cells.
    pub bar: ContentStyle,
    /// Status lines below the bars.
    pub text: ContentStyle,
}

impl Theme {
    /// White on hot pink with blue bars.
    pub fn hot_pink() -> Self {
        Theme {
            screen: styled(Color::White, Color::Rgb { r: 0xff, g: 0x69, b: 0xb4 }),
            bar: styled(Color::White, Color::Blue),
            text: fg_only(Color::White),
        }
    }

    /// Terminal defaults with green bars.
    pub fn dark() -> Self {
        Theme {
            screen: ContentStyle::default(),
            bar: styled(Color::Green, Color::DarkGreen),
            text: fg_only(Color::Grey),
        }
    }
}

fn styled(fg: Color, bg: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(fg),
        background_color: Some(bg),
        ..ContentStyle::default()
    }
}

fn fg_only(fg: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(fg),
        ..ContentStyle::default()
    }
}

/// Everything the program would otherwise hard-code.
///
/// Production picks one preset at compile time through [`Config::selected`];
/// tests build their own with tiny arrays and thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Height of the bar area in cells. Also the largest generated value.
    pub height: u16,
    /// Number of elements to sort.
    pub len: usize,
    /// Loop iterations between two redraws while unsorted.
    pub render_every: u64,
    /// Columns from one bar to the next.
    pub bar_spacing: u16,
    /// Show the `Estimated time` status line.
    pub show_estimate: bool,
    /// Sleep between ticks.
    pub tick_pause: Duration,
    pub theme: Theme,
}

impl Config {
    /// 15 elements, redraw every 150000 iterations, estimate line on.
    pub fn classic() -> Self {
        Config {
            height: 20,
            len: 15,
            render_every: 150_000,
            bar_spacing: 4,
            show_estimate: true,
            tick_pause: Duration::from_nanos(1),
            theme: Theme::hot_pink(),
        }
    }

    /// 12 elements, redraw every 500000 iterations, no estimate line.
    pub fn compact() -> Self {
        Config {
            len: 12,
            render_every: 500_000,
            show_estimate: false,
            theme: Theme::dark(),
            ..Config::classic()
        }
    }

    /// The preset chosen by the `compact` cargo feature.
    pub fn selected() -> Self {
        if cfg!(feature = "compact") {
            Config::compact()
        } else {
            Config::classic()
        }
    }

    /// First status row (speed). The others follow on consecutive rows.
    pub fn status_row(&self) -> u16 {
        self.height + 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_preset_values() {
        let config = Config::classic();
        assert_eq!(config.height, 20);
        assert_eq!(config.len, 15);
        assert_eq!(config.render_every, 150_000);
        assert!(config.show_estimate);
    }

    #[test]
    fn compact_overrides_only_variant_fields() {
        let config = Config::compact();
        assert_eq!(config.len, 12);
        assert_eq!(config.render_every, 500_000);
        assert!(!config.show_estimate);
        assert_eq!(config.height, Config::classic().height);
        assert_eq!(config.bar_spacing, Config::classic().bar_spacing);
    }

    #[test]
    fn status_rows_start_below_bars() {
        let config = Config::classic();
        assert_eq!(config.status_row(), 21);
    }

    #[test]
    fn default_is_classic() {
        assert_eq!(Config::default(), Config::classic());
    }

    #[test]
    fn theme_text_keeps_terminal_background() {
        assert_eq!(Theme::hot_pink().text.background_color, None);
    }
}
