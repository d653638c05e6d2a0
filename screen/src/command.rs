// command.rs - The three screen operations and their text form

use std::fmt;
use std::str::FromStr;

use crate::error::ScreenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Light the top-left `width` x `height` block.
    Rect { width: usize, height: usize },
    /// Shift row `y` right by `amount`, wrapping at the right edge.
    RotateRow { y: usize, amount: usize },
    /// Shift column `x` down by `amount`, wrapping at the bottom edge.
    RotateColumn { x: usize, amount: usize },
}

impl FromStr for Command {
    type Err = ScreenError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let unrecognized = || ScreenError::UnrecognizedCommand(line.to_string());
        let text = line.trim();

        if let Some(dims) = text.strip_prefix("rect ") {
            let (width, height) = dims.trim().split_once('x').ok_or_else(unrecognized)?;
            return Ok(Command::Rect {
                width:  parse_number(width).ok_or_else(unrecognized)?,
                height: parse_number(height).ok_or_else(unrecognized)?,
            });
        }

        if let Some(rest) = text.strip_prefix("rotate row y=") {
            let (y, amount) = parse_rotation(rest).ok_or_else(unrecognized)?;
            return Ok(Command::RotateRow { y, amount });
        }

        if let Some(rest) = text.strip_prefix("rotate column x=") {
            let (x, amount) = parse_rotation(rest).ok_or_else(unrecognized)?;
            return Ok(Command::RotateColumn { x, amount });
        }

        Err(unrecognized())
    }
}

// "<index> by <amount>"
fn parse_rotation(rest: &str) -> Option<(usize, usize)> {
    let (index, amount) = rest.split_once(" by ")?;
    Some((parse_number(index)?, parse_number(amount)?))
}

// Digits only, so signs and stray whitespace inside a field are rejected.
fn parse_number(field: &str) -> Option<usize> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::Rect { width, height }   => write!(f, "rect {width}x{height}"),
            Command::RotateRow { y, amount }    => write!(f, "rotate row y={y} by {amount}"),
            Command::RotateColumn { x, amount } => write!(f, "rotate column x={x} by {amount}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_forms() {
        assert_eq!("rect 3x2".parse::<Command>(), Ok(Command::Rect { width: 3, height: 2 }));
        assert_eq!("rotate row y=0 by 4".parse::<Command>(), Ok(Command::RotateRow { y: 0, amount: 4 }));
        assert_eq!(
            "rotate column x=1 by 1".parse::<Command>(),
            Ok(Command::RotateColumn { x: 1, amount: 1 })
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!("  rect 1x1\r".parse::<Command>(), Ok(Command::Rect { width: 1, height: 1 }));
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in [
            "spin row y=0 by 4",
            "rect 3",
            "rect 3x",
            "rect -1x2",
            "rotate row x=0 by 4",
            "rotate column x=1",
            "rotate column x=a by 2",
            "rotate row y=0 by +4",
            "",
        ] {
            assert_eq!(
                line.parse::<Command>(),
                Err(ScreenError::UnrecognizedCommand(line.to_string())),
                "{line:?} should not parse"
            );
        }
    }

    #[test]
    fn display_prints_canonical_text() {
        for text in ["rect 12x3", "rotate row y=5 by 49", "rotate column x=0 by 7"] {
            let command: Command = text.parse().unwrap();
            assert_eq!(command.to_string(), text);
        }
    }
}
