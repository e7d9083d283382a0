//! Plain-text board rendering.
//!
//! Each cell is a one-character marker followed by right-aligned content:
//!
//! - marker `>`: the square the knight stands on
//! - content: knight glyph or move number for visited squares, `*` for legal
//!   destinations, checkerboard fill otherwise
//!
//! ```text
//!    0 1 2
//!  0>1 : .
//!  1 : . *
//!  2 . * .
//! ```

use std::fmt::Write;

use crate::core::{Square, TourEngine};
use crate::prefs::VisitedStyle;

/// Characters used to draw the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub knight: char,
    pub legal: char,
    pub light: char,
    pub dark: char,
    pub current: char,
}

impl Glyphs {
    /// Unicode chess knight.
    pub const UNICODE: Self = Self {
        knight: '♞',
        legal: '*',
        light: '.',
        dark: ':',
        current: '>',
    };

    /// ASCII-only fallback for terminals without the knight glyph.
    pub const ASCII: Self = Self { knight: 'N', ..Self::UNICODE };
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Renders a tour as text.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer {
    style: VisitedStyle,
    glyphs: Glyphs,
}

impl TextRenderer {
    #[must_use]
    pub fn new(style: VisitedStyle) -> Self {
        Self { style, glyphs: Glyphs::default() }
    }

    /// Switch to ASCII glyphs.
    #[must_use]
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.glyphs = if ascii { Glyphs::ASCII } else { Glyphs::UNICODE };
        self
    }

    /// Use custom glyphs.
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Change the visited style.
    pub fn set_style(&mut self, style: VisitedStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn style(&self) -> VisitedStyle {
        self.style
    }

    /// Board grid with row and column headers.
    #[must_use]
    pub fn render_board(&self, engine: &TourEngine) -> String {
        let n = engine.size().get();
        let width = digits(engine.total_squares());
        let mut out = String::new();

        out.push_str("  ");
        for col in 0..n {
            let _ = write!(out, " {col:>width$}");
        }
        out.push('\n');

        for row in 0..n {
            let _ = write!(out, "{row:>2}");
            for col in 0..n {
                let square = Square::new(row as u8, col as u8);
                let marker = if engine.current() == Some(square) {
                    self.glyphs.current
                } else {
                    ' '
                };
                let _ = write!(out, "{marker}{:>width$}", self.cell(engine, square));
            }
            out.push('\n');
        }
        out
    }

    /// Board followed by the status line.
    #[must_use]
    pub fn render(&self, engine: &TourEngine) -> String {
        let mut out = self.render_board(engine);
        let _ = writeln!(out, "\n{}", engine.report());
        out
    }

    fn cell(&self, engine: &TourEngine, square: Square) -> String {
        if let Some(number) = engine.move_number(square) {
            return match self.style {
                VisitedStyle::Icon => self.glyphs.knight.to_string(),
                VisitedStyle::Number => number.to_string(),
            };
        }
        if engine.is_legal_move(square) {
            return self.glyphs.legal.to_string();
        }
        if (square.row() + square.col()) % 2 == 0 {
            self.glyphs.light.to_string()
        } else {
            self.glyphs.dark.to_string()
        }
    }
}

fn digits(mut value: usize) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardSize;

    fn engine(n: usize) -> TourEngine {
        TourEngine::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_empty_board() {
        let out = TextRenderer::new(VisitedStyle::Number).render_board(&engine(3));
        assert_eq!(out, "   0 1 2\n 0 . : .\n 1 : . :\n 2 . : .\n");
    }

    #[test]
    fn test_number_style() {
        let mut engine = engine(3);
        engine.place(Square::new(0, 0)).unwrap();

        let out = TextRenderer::new(VisitedStyle::Number).render_board(&engine);
        assert_eq!(out, "   0 1 2\n 0>1 : .\n 1 : . *\n 2 . * .\n");
    }

    #[test]
    fn test_icon_style_ascii() {
        let mut engine = engine(3);
        engine.place(Square::new(0, 0)).unwrap();
        engine.move_to(Square::new(1, 2)).unwrap();

        let out = TextRenderer::new(VisitedStyle::Icon).ascii(true).render_board(&engine);
        assert_eq!(out, "   0 1 2\n 0 N : .\n 1 : .>N\n 2 * : .\n");
    }

    #[test]
    fn test_wide_numbers() {
        let mut engine = engine(4);
        engine.place(Square::new(0, 0)).unwrap();

        let out = TextRenderer::new(VisitedStyle::Number).render_board(&engine);
        let first_row = out.lines().nth(1).unwrap();
        assert_eq!(out.lines().next().unwrap(), "    0  1  2  3");
        assert_eq!(first_row, " 0> 1  :  .  :");
    }

    #[test]
    fn test_render_includes_status() {
        let out = TextRenderer::default().render(&engine(5));
        assert!(out.ends_with("\nPlace the knight anywhere to begin.\n"));
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(64), 2);
        assert_eq!(digits(1024), 4);
    }
}
