// samples.rs - Built-in command lists, selectable by name

use crate::error::LineError;
use crate::program::Program;

pub struct Sample {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub lines: &'static [&'static str],
}

impl Sample {
    pub fn program(&self) -> Result<Program, LineError> {
        Program::parse_lines(self.lines)
    }
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "Small screen",
        width: 7,
        height: 3,
        lines: &[
            "rect 3x2",
            "rotate column x=1 by 1",
            "rotate row y=0 by 4",
            "rotate column x=1 by 1",
        ],
    },
    Sample {
        name: "Corner",
        width: 50,
        height: 6,
        lines: &["rect 3x2"],
    },
    Sample {
        name: "Letter H",
        width: 50,
        height: 6,
        lines: &[
            "rect 1x6",
            "rotate row y=0 by 3",
            "rotate row y=1 by 3",
            "rotate row y=2 by 3",
            "rotate row y=3 by 3",
            "rotate row y=4 by 3",
            "rotate row y=5 by 3",
            "rect 1x6",
            "rect 3x1",
            "rotate column x=1 by 2",
            "rotate column x=2 by 2",
        ],
    },
    Sample {
        name: "Full sweep",
        width: 50,
        height: 6,
        lines: &[
            "rect 50x1",
            "rotate column x=0 by 1",
            "rect 50x1",
            "rotate row y=1 by 25",
            "rect 25x6",
            "rotate row y=5 by 123",
            "rotate column x=49 by 11",
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name.eq_ignore_ascii_case(name))
}
