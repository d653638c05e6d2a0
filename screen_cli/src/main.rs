// main.rs - Runs a screen program from a file, stdin, or a built-in sample

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::exit;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap::builder::TypedValueParser;
use log::{error, info};
use screen::{Glyphs, Program, SCREEN_HEIGHT, SCREEN_WIDTH, Screen, samples};

// Moves the cursor home and clears the terminal
const CLEAR: &str = "\x1b[H\x1b[2J";

#[derive(Debug, Parser)]
#[command(about = "Apply rect/rotate commands to a pixel screen and count lit pixels")]
struct Args {
    /// Command file; read from stdin when omitted
    input: Option<PathBuf>,

    /// Run a built-in sample instead of reading input
    #[arg(long, conflicts_with = "input")]
    sample: Option<String>,

    /// Screen width in pixels; samples bring their own size
    #[arg(long, conflicts_with = "sample", default_value_t = SCREEN_WIDTH, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    width: usize,

    /// Screen height in pixels; samples bring their own size
    #[arg(long, conflicts_with = "sample", default_value_t = SCREEN_HEIGHT, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    height: usize,

    /// Glyph for a lit pixel
    #[arg(long, default_value_t = '#')]
    lit: char,

    /// Glyph for an unlit pixel
    #[arg(long, default_value_t = '.')]
    unlit: char,

    /// Print the screen once all commands have run
    #[arg(short, long)]
    render: bool,

    /// Redraw the screen after every command
    #[arg(short, long)]
    animate: bool,

    /// Pause between animation frames
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
}

impl Args {
    fn glyphs(&self) -> Glyphs {
        Glyphs { lit: self.lit, unlit: self.unlit }
    }

    /// The program text and the screen size it should run on.
    fn load(&self) -> Result<(String, usize, usize)> {
        if let Some(name) = &self.sample {
            let sample = samples::find(name).ok_or_else(|| {
                let known: Vec<&str> = samples::SAMPLES.iter().map(|s| s.name).collect();
                anyhow!("unknown sample {name:?}; expected one of {known:?}")
            })?;
            return Ok((sample.lines.join("\n"), sample.width, sample.height));
        }

        let text = match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read commands from {}", path.display()))?,
            None => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read commands from stdin")?;
                text
            }
        };
        Ok((text, self.width, self.height))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    if let Err(e) = try_main() {
        error!("{e:#}");
        exit(1);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let (text, width, height) = args.load()?;
    let stdout = io::stdout();
    run(&args, &text, width, height, &mut stdout.lock())?;
    Ok(())
}

/// Parses and applies `text`, writing frames and the final count to `out`.
fn run(args: &Args, text: &str, width: usize, height: usize, out: &mut impl Write) -> Result<usize> {
    let program: Program = text.parse().context("invalid command")?;
    info!("loaded {} commands for a {width}x{height} screen", program.len());

    let glyphs = args.glyphs();
    let delay = Duration::from_millis(args.delay_ms);
    let mut screen = Screen::new(width, height);
    let mut frame_err = None;

    let result = screen.run_with(&program, |step, screen| {
        if !args.animate || frame_err.is_some() {
            return;
        }
        let frame = write!(out, "{CLEAR}{}\n{}", step.command, screen.render_with(glyphs))
            .and_then(|()| out.flush());
        if let Err(e) = frame {
            frame_err = Some(e);
            return;
        }
        thread::sleep(delay);
    });
    if let Some(e) = frame_err {
        return Err(e).context("failed to draw frame");
    }
    result.context("command failed")?;

    if args.render && !args.animate {
        write!(out, "{}", screen.render_with(glyphs))?;
    }
    let lit = screen.count_lit();
    writeln!(out, "{lit} pixels are lit")?;
    Ok(lit)
}
