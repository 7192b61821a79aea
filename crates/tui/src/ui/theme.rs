use clap::ValueEnum;
use engine::PALETTE_SIZE;
use ratatui::style::Color;
use serde::Deserialize;

/// Which palette the UI is drawn with. Toggled at runtime with `t`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub input: Color,
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub positive: Color,
    pub negative: Color,
    pub memo: Color,
    pub error: Color,
    pub chart: [Color; PALETTE_SIZE],
}

// indigo, cyan, teal, orange, pink, purple, yellow
const CHART: [Color; PALETTE_SIZE] = [
    Color::Rgb(79, 70, 229),
    Color::Rgb(6, 182, 212),
    Color::Rgb(20, 184, 166),
    Color::Rgb(249, 115, 22),
    Color::Rgb(236, 72, 153),
    Color::Rgb(168, 85, 247),
    Color::Rgb(234, 179, 8),
];

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            surface: Color::Rgb(31, 41, 55),
            input: Color::Rgb(55, 65, 81),
            text: Color::Rgb(243, 244, 246),
            text_muted: Color::Rgb(156, 163, 175),
            dim: Color::Rgb(107, 114, 128),
            accent: Color::Rgb(129, 140, 248),
            border: Color::Rgb(55, 65, 81),
            border_focused: Color::Rgb(99, 102, 241),
            positive: Color::Rgb(34, 197, 94),
            negative: Color::Rgb(239, 68, 68),
            memo: Color::Rgb(165, 180, 252),
            error: Color::Rgb(248, 113, 113),
            chart: CHART,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(243, 244, 246),
            surface: Color::Rgb(255, 255, 255),
            input: Color::Rgb(229, 231, 235),
            text: Color::Rgb(17, 24, 39),
            text_muted: Color::Rgb(107, 114, 128),
            dim: Color::Rgb(156, 163, 175),
            accent: Color::Rgb(79, 70, 229),
            border: Color::Rgb(229, 231, 235),
            border_focused: Color::Rgb(79, 70, 229),
            positive: Color::Rgb(22, 163, 74),
            negative: Color::Rgb(220, 38, 38),
            memo: Color::Rgb(99, 102, 241),
            error: Color::Rgb(220, 38, 38),
            chart: CHART,
        }
    }

    /// Colour of the chart slice with the given rank-derived index.
    pub fn chart_color(&self, color_index: usize) -> Color {
        self.chart[color_index % PALETTE_SIZE]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
