//! Rewind Breakout headless entry point
//!
//! Runs a scripted session against the simulation at a fixed frame delta and
//! prints the final frame as JSON. Usage: `rewind-breakout [tunables.json] [seed]`

use std::process::ExitCode;

use rewind_breakout::consts::*;
use rewind_breakout::platform::{ScriptedInput, step_input};
use rewind_breakout::renderer::{Frame, build_frame};
use rewind_breakout::sim::{EngineState, step};
use rewind_breakout::{SimError, Tunables};

/// Play, rewind at every depth, pause for a moment, then play again
fn demo_script() -> ScriptedInput {
    ScriptedInput::new()
        .play(120)
        .hold(1, 20)
        .play(60)
        .hold(2, 30)
        .play(60)
        .toggle_pause(30)
        .toggle_pause(1)
        .hold(3, 15)
        .play(90)
        .hold(4, 40)
        .play(120)
}

fn run(seed: u64, tunables: &Tunables) -> Result<Frame, SimError> {
    let mut script = demo_script();
    let mut state = EngineState::with_capacity(seed, tunables, script.len() as usize);
    let mut frame = None;

    while !script.is_finished() {
        let input = step_input(&script, CANVAS_SIZE);
        let current = step(&mut state, &input, tunables, FRAME_DT)?;
        if script.frame() % 60 == 0 {
            log::info!(
                "frame {}: tick {}, {} bricks standing",
                script.frame(),
                current.tick,
                current.bricks.len()
            );
        }
        frame = Some(current);
        script.next_frame();
    }

    match frame {
        Some(frame) => Ok(frame),
        None => build_frame(&state, tunables),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Rewind Breakout (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tunables = match args.next() {
        Some(path) => match Tunables::load(&path) {
            Ok(t) => t,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Tunables::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let frame = match run(seed, &tunables) {
        Ok(frame) => frame,
        Err(e) => {
            log::error!("simulation invariant broken: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&frame) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("failed to encode frame: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() -> ExitCode {
    // Browser hosts drive `step` themselves
    ExitCode::SUCCESS
}
