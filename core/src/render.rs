use alloc::format;
use core::fmt;

use crate::*;

pub mod glyphs {
    pub const WON: &str = "😄";
    pub const LOST: &str = "😵";
    pub const HIDDEN: &str = "🔲";
    pub const MINE: &str = "💣";
    pub const DETONATION: &str = "💥";
    pub const FLAG: &str = "🚩";
    pub const DIGITS: [&str; 9] = [
        "⬜️", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣",
    ];
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Rgb,
    pub bold: bool,
}

/// Minimal 2D drawing target.
///
/// Text is positioned by the top-left corner of its box.
pub trait Surface {
    fn fill_background(&mut self, color: Rgb);
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: TextStyle);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub status_background: Rgb,
    pub text: Rgb,
    /// Flag counter color once there are more flags than mines.
    pub warning: Rgb,
}

impl Palette {
    pub const DEFAULT: Self = Self {
        background: Rgb(255, 255, 255),
        status_background: Rgb(249, 249, 249),
        text: Rgb(15, 15, 15),
        warning: Rgb(248, 49, 47),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const INDICATOR_SIZE: f64 = 24.;

/// Draws the session as it is; never changes it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Renderer {
    pub geometry: BoardGeometry,
    pub palette: Palette,
}

impl Renderer {
    pub const fn new(geometry: BoardGeometry) -> Self {
        Self {
            geometry,
            palette: Palette::DEFAULT,
        }
    }

    pub fn draw(&self, session: &GameSession, surface: &mut impl Surface) {
        surface.fill_background(self.palette.background);

        let cell_style = TextStyle {
            size: self.geometry.cell_height - 2.,
            color: self.palette.text,
            bold: false,
        };
        for cell in session.board().iter() {
            let rect = self.geometry.cell_rect(cell.coords());
            surface.draw_text(cell_glyph(session, cell), rect.x, rect.y, cell_style);
        }

        self.draw_indicators(session, surface);
    }

    fn draw_indicators(&self, session: &GameSession, surface: &mut impl Surface) {
        let strip = self.geometry.status_rect(session.size());
        surface.fill_rect(strip, self.palette.status_background);

        let y = strip.y + (strip.height - INDICATOR_SIZE).max(0.) / 2.;
        let right = strip.x + strip.width;
        let style = TextStyle {
            size: INDICATOR_SIZE,
            color: self.palette.text,
            bold: true,
        };

        surface.draw_text(glyphs::MINE, strip.x + 5., y, style);
        surface.draw_text(
            &format!("{:02}", session.total_mines()),
            strip.x + 40.,
            y,
            style,
        );

        let flag_style = TextStyle {
            color: if session.flagged_count() > session.total_mines() {
                self.palette.warning
            } else {
                self.palette.text
            },
            ..style
        };
        surface.draw_text(glyphs::FLAG, right - 63., y, style);
        surface.draw_text(
            &format!("{:02}", session.flagged_count()),
            right - 28.,
            y,
            flag_style,
        );
    }
}

/// Glyph for one cell. On a finished game the empty-digit glyph doubles as the face.
pub fn cell_glyph(session: &GameSession, cell: &Cell) -> &'static str {
    match cell.state() {
        CellState::Hidden => glyphs::HIDDEN,
        CellState::Flagged => glyphs::FLAG,
        CellState::Revealed if cell.has_mine() => {
            if session.triggered_mine() == Some(cell.coords()) {
                glyphs::DETONATION
            } else {
                glyphs::MINE
            }
        }
        CellState::Revealed => match (cell.adjacent_mine_count(), session.status()) {
            (0, GameStatus::Won) => glyphs::WON,
            (0, GameStatus::Lost) => glyphs::LOST,
            (count, _) => glyphs::DIGITS[usize::from(count)],
        },
    }
}
