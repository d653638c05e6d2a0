// main.rs - Animated viewer for screen programs
// Steps through the commands on a timer and paints the pixels with egui

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use clap::builder::TypedValueParser;
use screen::{Playback, Program, SAMPLES, SCREEN_HEIGHT, SCREEN_WIDTH};

mod ui;

#[derive(Debug, Parser)]
#[command(about = "Watch a pixel screen program run")]
struct Args {
    /// Command file; the first built-in sample is shown when omitted
    input: Option<PathBuf>,

    /// Screen width in pixels for the input file
    #[arg(long, requires = "input", default_value_t = SCREEN_WIDTH, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    width: usize,

    /// Screen height in pixels for the input file
    #[arg(long, requires = "input", default_value_t = SCREEN_HEIGHT, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    height: usize,

    /// Time between commands while running
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();
    let mut viewer = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read commands from {}", path.display()))?;
            let program: Program = text.parse().context("invalid command")?;
            ScreenViewer::new(Playback::new(program, args.width, args.height))
        }
        None => ScreenViewer::default(),
    };
    viewer.update_interval = Duration::from_millis(args.delay_ms);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Screen Viewer",
        options,
        Box::new(move |_cc| Box::new(viewer)),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}

/// Playback state plus display settings
pub struct ScreenViewer {
    pub playback: Playback,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub lit_color: Color32,
    pub unlit_color: Color32,
    pub selected_sample: usize,
}

impl Default for ScreenViewer {
    fn default() -> Self {
        let mut viewer = Self::new(Playback::new(Program::default(), SCREEN_WIDTH, SCREEN_HEIGHT));
        viewer.load_selected_sample();
        viewer
    }
}

/// Operations the UI drives
pub trait ScreenViewerInterface {
    fn advance(&mut self);
    fn restart(&mut self);
    fn load_selected_sample(&mut self);
    fn status(&self) -> String;
}

impl ScreenViewerInterface for ScreenViewer {
    fn advance(&mut self) {
        self.playback.step();
        if self.playback.is_finished() { self.is_running = false; }
    }

    fn restart(&mut self) {
        self.is_running = false;
        self.playback.reset();
    }

    fn load_selected_sample(&mut self) {
        let Some(sample) = SAMPLES.get(self.selected_sample) else { return };
        match sample.program() {
            Ok(program) => {
                self.is_running = false;
                self.playback = Playback::new(program, sample.width, sample.height);
            }
            Err(e) => log::error!("sample {}: {e}", sample.name),
        }
    }

    fn status(&self) -> String {
        if let Some(err) = self.playback.error() {
            return format!("Stopped: {err}: {}", err.source);
        }
        let total = self.playback.program().len();
        match self.playback.last_step() {
            Some(step) => format!(
                "Command {}/{} (line {}): {}",
                self.playback.position(), total, step.line_no, step.command
            ),
            None => format!("Ready: {total} commands"),
        }
    }
}

impl ScreenViewer {
    pub fn new(playback: Playback) -> Self {
        Self {
            playback,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(50),
            lit_color: Color32::from_rgb(0, 200, 0),
            unlit_color: Color32::from_rgb(40, 40, 40),
            selected_sample: 0,
        }
    }
}
