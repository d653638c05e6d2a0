// grid.rs - The pixel screen and the operations commands perform on it

use std::fmt;

use log::{debug, trace};

use crate::command::Command;
use crate::error::{Bound, ScreenError, ScreenResult};

// Default screen size
pub const SCREEN_WIDTH: usize = 50;                   // Pixels per row
pub const SCREEN_HEIGHT: usize = 6;                   // Rows

pub type TRow = Vec<bool>;

/// Characters used when rendering a screen as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub lit: char,
    pub unlit: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { lit: '#', unlit: '.' }
    }
}

impl Glyphs {
    pub fn glyph(&self, lit: bool) -> char {
        if lit { self.lit } else { self.unlit }
    }
}

/// A fixed-size grid of pixels, row-major, all unlit at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: usize,
    height: usize,
    rows: Vec<TRow>,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![false; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Panics if `(row, col)` lies outside the screen.
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    pub fn row(&self, y: usize) -> Option<&[bool]> {
        self.rows.get(y).map(Vec::as_slice)
    }

    pub fn column(&self, x: usize) -> Option<TRow> {
        (x < self.width).then(|| self.rows.iter().map(|row| row[x]).collect())
    }

    /// Applies one command. Nothing is mutated when an error is returned.
    pub fn apply(&mut self, command: &Command) -> ScreenResult<()> {
        self.check(command)?;
        debug!("apply `{command}`");

        match *command {
            Command::Rect { width, height } => {
                for row in &mut self.rows[..height] {
                    row[..width].fill(true);
                }
            }
            Command::RotateRow { y, amount } => {
                let shift = amount.checked_rem(self.width).unwrap_or(0);
                if shift == 0 {
                    trace!("row {y}: shift of {amount} is a full turn");
                    return Ok(());
                }
                self.rows[y].rotate_right(shift);
            }
            Command::RotateColumn { x, amount } => {
                let shift = amount.checked_rem(self.height).unwrap_or(0);
                if shift == 0 {
                    trace!("column {x}: shift of {amount} is a full turn");
                    return Ok(());
                }
                // Rotate a snapshot, then write it back
                let mut column: TRow = self.rows.iter().map(|row| row[x]).collect();
                column.rotate_right(shift);
                for (row, lit) in self.rows.iter_mut().zip(column) {
                    row[x] = lit;
                }
            }
        }
        Ok(())
    }

    fn check(&self, command: &Command) -> ScreenResult<()> {
        let out_of_bounds = |bound, value, limit| ScreenError::OutOfBounds { bound, value, limit };
        match *command {
            Command::Rect { width, .. } if width > self.width => {
                Err(out_of_bounds(Bound::RectWidth, width, self.width))
            }
            Command::Rect { height, .. } if height > self.height => {
                Err(out_of_bounds(Bound::RectHeight, height, self.height))
            }
            Command::RotateRow { y, .. } if y >= self.height => {
                Err(out_of_bounds(Bound::Row, y, self.height))
            }
            Command::RotateColumn { x, .. } if x >= self.width => {
                Err(out_of_bounds(Bound::Column, x, self.width))
            }
            _ => Ok(()),
        }
    }

    /// Number of pixels whose state equals `lit`.
    pub fn count(&self, lit: bool) -> usize {
        self.rows.iter().flatten().filter(|&&cell| cell == lit).count()
    }

    pub fn count_lit(&self) -> usize {
        self.count(true)
    }

    pub fn count_unlit(&self) -> usize {
        self.count(false)
    }

    /// Renders the current state, one string per row. Each call starts afresh.
    pub fn rows(&self, glyphs: Glyphs) -> impl Iterator<Item = String> + '_ {
        self.rows
            .iter()
            .map(move |row| row.iter().map(|&lit| glyphs.glyph(lit)).collect::<String>())
    }

    pub fn render_with(&self, glyphs: Glyphs) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for line in self.rows(glyphs) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(Glyphs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_cells(screen: &Screen) -> Vec<(usize, usize)> {
        (0..screen.height())
            .flat_map(|r| (0..screen.width()).map(move |c| (r, c)))
            .filter(|&(r, c)| screen.is_lit(r, c))
            .collect()
    }

    #[test]
    fn new_screen_is_dark() {
        let screen = Screen::default();
        assert_eq!(screen.width(), 50);
        assert_eq!(screen.height(), 6);
        assert_eq!(screen.count_lit(), 0);
        assert_eq!(screen.count_unlit(), 300);
    }

    #[test]
    fn rect_lights_top_left_block() {
        let mut screen = Screen::new(7, 3);
        screen.apply(&Command::Rect { width: 3, height: 2 }).unwrap();
        assert_eq!(screen.count_lit(), 6);
        assert_eq!(
            lit_cells(&screen),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn every_fitting_rect_lights_exactly_its_area() {
        let (width, height) = (SCREEN_WIDTH, SCREEN_HEIGHT);
        for w in 0..=width {
            for h in 0..=height {
                let mut screen = Screen::new(width, height);
                screen.apply(&Command::Rect { width: w, height: h }).unwrap();
                assert_eq!(screen.count_lit(), w * h, "rect {w}x{h}");
                assert_eq!(screen.count_unlit(), width * height - w * h, "rect {w}x{h}");
            }
        }
    }

    #[test]
    fn rect_is_a_union_not_a_toggle() {
        let mut screen = Screen::new(7, 3);
        let rect = Command::Rect { width: 2, height: 2 };
        screen.apply(&rect).unwrap();
        screen.apply(&rect).unwrap();
        assert_eq!(screen.count_lit(), 4);
        screen.apply(&Command::Rect { width: 3, height: 1 }).unwrap();
        assert_eq!(screen.count_lit(), 5);
    }

    #[test]
    fn full_size_rect_is_allowed() {
        let mut screen = Screen::new(4, 2);
        screen.apply(&Command::Rect { width: 4, height: 2 }).unwrap();
        assert_eq!(screen.count_unlit(), 0);
    }

    #[test]
    fn rotate_row_wraps_right() {
        let mut screen = Screen::new(5, 2);
        screen.apply(&Command::Rect { width: 2, height: 1 }).unwrap();
        screen.apply(&Command::RotateRow { y: 0, amount: 4 }).unwrap();
        assert_eq!(screen.row(0), Some(&[true, false, false, false, true][..]));
        assert_eq!(screen.row(1), Some(&[false; 5][..]));
    }

    #[test]
    fn rotate_column_wraps_down() {
        let mut screen = Screen::new(3, 4);
        screen.apply(&Command::Rect { width: 1, height: 2 }).unwrap();
        screen.apply(&Command::RotateColumn { x: 0, amount: 3 }).unwrap();
        assert_eq!(screen.column(0), Some(vec![true, false, false, true]));
        assert_eq!(screen.column(1), Some(vec![false; 4]));
    }

    #[test]
    fn full_turn_rotations_are_no_ops() {
        let mut screen = Screen::new(5, 3);
        screen.apply(&Command::Rect { width: 2, height: 2 }).unwrap();
        let before = screen.clone();
        for command in [
            Command::RotateRow { y: 0, amount: 0 },
            Command::RotateRow { y: 1, amount: 5 },
            Command::RotateRow { y: 1, amount: 15 },
            Command::RotateColumn { x: 0, amount: 3 },
            Command::RotateColumn { x: 1, amount: 0 },
        ] {
            screen.apply(&command).unwrap();
            assert_eq!(screen, before, "{command} changed the screen");
        }
    }

    #[test]
    fn rotation_is_undone_by_its_complement() {
        let mut screen = Screen::new(7, 3);
        screen.apply(&Command::Rect { width: 3, height: 2 }).unwrap();
        screen.apply(&Command::RotateColumn { x: 1, amount: 1 }).unwrap();
        let before = screen.clone();
        for amount in 0..20 {
            screen.apply(&Command::RotateRow { y: 1, amount }).unwrap();
            let back = 7 - amount % 7;
            screen.apply(&Command::RotateRow { y: 1, amount: back }).unwrap();
            assert_eq!(screen, before, "row amount {amount}");

            screen.apply(&Command::RotateColumn { x: 1, amount }).unwrap();
            let back = 3 - amount % 3;
            screen.apply(&Command::RotateColumn { x: 1, amount: back }).unwrap();
            assert_eq!(screen, before, "column amount {amount}");
        }
    }

    #[test]
    fn out_of_bounds_commands_leave_screen_untouched() {
        let mut screen = Screen::new(7, 3);
        screen.apply(&Command::Rect { width: 1, height: 1 }).unwrap();
        let before = screen.clone();

        let cases = [
            (Command::Rect { width: 8, height: 1 }, Bound::RectWidth, 8, 7),
            (Command::Rect { width: 1, height: 4 }, Bound::RectHeight, 4, 3),
            (Command::RotateRow { y: 3, amount: 1 }, Bound::Row, 3, 3),
            (Command::RotateColumn { x: 7, amount: 1 }, Bound::Column, 7, 7),
        ];
        for (command, bound, value, limit) in cases {
            assert_eq!(
                screen.apply(&command),
                Err(ScreenError::OutOfBounds { bound, value, limit })
            );
            assert_eq!(screen, before);
        }
    }

    #[test]
    fn counts_always_cover_the_screen() {
        let mut screen = Screen::new(7, 3);
        for command in [
            Command::Rect { width: 3, height: 2 },
            Command::RotateColumn { x: 1, amount: 1 },
            Command::RotateRow { y: 0, amount: 4 },
            Command::Rect { width: 7, height: 1 },
        ] {
            screen.apply(&command).unwrap();
            assert_eq!(screen.count_lit() + screen.count_unlit(), 21);
        }
    }

    #[test]
    fn render_uses_glyphs_and_is_restartable() {
        let mut screen = Screen::new(3, 2);
        screen.apply(&Command::Rect { width: 1, height: 1 }).unwrap();
        let glyphs = Glyphs { lit: '@', unlit: '.' };

        let first: Vec<String> = screen.rows(glyphs).collect();
        let second: Vec<String> = screen.rows(glyphs).collect();
        assert_eq!(first, vec!["@..", "..."]);
        assert_eq!(first, second);

        screen.apply(&Command::RotateRow { y: 0, amount: 1 }).unwrap();
        assert_eq!(screen.to_string(), ".#.\n...\n");
    }
}
