//! A small pixel screen driven by text commands.
//!
//! Three commands are understood, one per line:
//!
//! ```text
//! rect AxB                 light the top-left A wide, B tall block
//! rotate row y=A by B      shift row A right by B, wrapping
//! rotate column x=A by B   shift column A down by B, wrapping
//! ```
//!
//! ```
//! use screen::{Program, Screen};
//!
//! let program: Program = "rect 3x2\nrotate column x=1 by 1".parse().unwrap();
//! let mut screen = Screen::new(7, 3);
//! screen.run(&program).unwrap();
//! assert_eq!(screen.to_string(), "#.#....\n###....\n.#.....\n");
//! ```

pub mod command;
pub mod error;
pub mod grid;
pub mod program;
pub mod samples;

pub use command::Command;
pub use error::{Bound, LineError, ScreenError, ScreenResult};
pub use grid::{Glyphs, Screen, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use program::{Playback, Program, Step};
pub use samples::{Sample, SAMPLES};
