//! # NAVMORPH Driver
//!
//! Replays a scripted pointer session against the navigation overlay,
//! ticking the timeline at a fixed rate (or wall-clock), and reports the
//! resulting state. `--dump` prints the render commands after every step.
//!
//! ```text
//! navmorph --route /discography --script "toggle wait:0.5 hover:2 settle" --dump
//! RUST_LOG=navmorph_ui=debug navmorph
//! ```

mod script;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use navmorph_core::clock::TARGET_FRAME_TIME;
use navmorph_core::FrameClock;
use navmorph_ui::{MouseButton, NavConfig, NavError, Navbar, PointerEvent, RenderCommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::script::{ParseStepError, Step};

/// Frames a single `settle` step may run before giving up.
const SETTLE_LIMIT: u32 = 60 * 30;

#[derive(Parser, Debug)]
#[command(name = "navmorph", version, about = "Scripted driver for the NAVMORPH navigation overlay")]
struct Args {
    /// Navigation TOML file. Uses the bundled data when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Current route, compared exactly against each entry's path.
    #[arg(long, default_value = "/")]
    route: String,

    /// Fixed frame rate. `0` ticks with wall-clock time.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Frames to tick after every step.
    #[arg(long, default_value_t = 0)]
    frames_per_step: u32,

    /// Whitespace-separated steps, e.g. `toggle wait:0.3 hover:1 settle`.
    #[arg(long, default_value = "toggle settle hover:0 settle leave:0 toggle settle")]
    script: String,

    /// Print render commands after every step.
    #[arg(long)]
    dump: bool,
}

#[derive(Error, Debug)]
enum DriverError {
    #[error(transparent)]
    Config(#[from] NavError),
    #[error(transparent)]
    Script(#[from] ParseStepError),
}

struct Driver {
    navbar: Navbar,
    clock: FrameClock,
    frames: u64,
}

impl Driver {
    fn frame(&mut self) {
        if self.clock.fixed_step().is_none() {
            std::thread::sleep(TARGET_FRAME_TIME);
        }
        let dt = self.clock.next_step();
        self.navbar.tick(dt);
        self.frames += 1;
    }

    fn wait(&mut self, seconds: f32) {
        let mut elapsed = 0.0;
        let start = self.navbar.timeline().elapsed();
        while elapsed < seconds {
            self.frame();
            elapsed = self.navbar.timeline().elapsed() - start;
        }
    }

    fn settle(&mut self) {
        let mut frames = 0;
        while frames < SETTLE_LIMIT && !self.navbar.timeline().is_idle() {
            self.frame();
            frames += 1;
        }
        if frames == SETTLE_LIMIT {
            tracing::warn!(frames, "timeline still moving after settle limit");
        }
    }

    fn step(&mut self, step: &Step) {
        match step {
            Step::Toggle => {
                self.navbar.toggle();
            }
            Step::Hover(index) => {
                self.navbar.hover_start(*index);
            }
            Step::Leave(index) => {
                self.navbar.hover_end(*index);
            }
            Step::Social(index) => {
                self.navbar.social_hover_start(*index);
            }
            Step::Unsocial(index) => {
                self.navbar.social_hover_end(*index);
            }
            Step::Move(x, y) => {
                self.navbar.handle_pointer(PointerEvent::Moved { x: *x, y: *y });
            }
            Step::Click(x, y) => {
                self.navbar.handle_pointer(PointerEvent::Pressed {
                    x: *x,
                    y: *y,
                    button: MouseButton::Left,
                });
            }
            Step::Route(route) => self.navbar.set_route(route.clone()),
            Step::Wait(seconds) => self.wait(*seconds),
            Step::Settle => self.settle(),
        }
    }

    fn summary(&self) -> String {
        format!(
            "frame {:>5}  t={:>6.3}s  open={:<5}  panel={:?}  hovered={:?}  route={}",
            self.frames,
            self.navbar.timeline().elapsed(),
            self.navbar.is_open(),
            self.navbar.panel_phase(),
            self.navbar.hovered(),
            self.navbar.route(),
        )
    }
}

fn dump(commands: &[RenderCommand]) {
    let mut depth = 1;
    for command in commands {
        if matches!(command, RenderCommand::PopClip | RenderCommand::EndItem) {
            depth -= 1;
        }
        println!("{:indent$}{command:?}", "", indent = depth * 2);
        if matches!(command, RenderCommand::PushClip { .. } | RenderCommand::BeginItem { .. }) {
            depth += 1;
        }
    }
}

fn run(args: &Args) -> Result<(), DriverError> {
    let steps = script::parse(&args.script)?;
    let config = match &args.config {
        Some(path) => NavConfig::from_path(path)?,
        None => NavConfig::builtin()?,
    };
    let clock = if args.fps == 0 {
        FrameClock::realtime()
    } else {
        FrameClock::fixed(args.fps)
    };

    tracing::info!(steps = steps.len(), fps = args.fps, route = %args.route, "starting session");
    let mut driver = Driver {
        navbar: Navbar::new(config, args.route.clone()),
        clock,
        frames: 0,
    };

    for step in &steps {
        driver.step(step);
        for _ in 0..args.frames_per_step {
            driver.frame();
        }
        println!("{:<16} {}", format!("{step:?}"), driver.summary());
        if args.dump {
            dump(&driver.navbar.render());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "session failed");
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
