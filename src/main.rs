//! Road Dash entry point
//!
//! Runs the simulation at a fixed tick rate with the autopilot standing in
//! for the keyboard. A windowed frontend would feed real key state through
//! `TickInput` and hand `build_draw_list` output to its graphics backend.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;

use road_dash::Settings;
use road_dash::renderer::build_draw_list;
use road_dash::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error running game: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let settings = Settings::load();
    settings.validate()?;

    let seed = settings.resolve_seed();
    log::info!("Road Dash (native) starting with seed {}", seed);
    println!("=== Road Dash ===");
    println!("Autopilot: {}", if settings.autopilot { "on" } else { "off" });
    println!("Running {} frames", settings.session_frames);
    println!("=================");

    let mut state = GameState::new(seed);
    let frame_duration = settings.frame_duration();
    let mut next_frame = Instant::now();

    for frame in 0..settings.session_frames {
        let input = TickInput {
            idle_mode: settings.autopilot,
            quit: frame + 1 == settings.session_frames,
            ..Default::default()
        };

        tick(&mut state, &input);

        // Presentation stand-in: build the frame so draw cost is paid like a real run
        let draw_list = build_draw_list(&state);
        log::trace!(
            "frame {}: {} vertices, {} labels",
            frame,
            draw_list.vertices.len(),
            draw_list.labels.len()
        );

        for event in state.drain_events() {
            match event {
                GameEvent::Started | GameEvent::Restarted => {
                    log::info!("Go! (session {})", state.sessions);
                }
                GameEvent::Scored { points } => {
                    log::debug!("Passed {} obstacle(s), score {}", points, state.score);
                }
                GameEvent::Crashed { score } => {
                    println!("Crashed! Final score: {}", score);
                }
            }
        }

        if input.quit {
            break;
        }

        if settings.realtime {
            next_frame += frame_duration;
            let now = Instant::now();
            if next_frame > now {
                std::thread::sleep(next_frame - now);
            } else {
                // Fell behind; don't try to catch up
                next_frame = now;
            }
        }
    }

    if state.phase == GamePhase::Playing {
        println!("Still driving. Score: {}", state.score);
    }
    println!(
        "Sessions: {}  Best score: {}",
        state.sessions,
        state.best_score.max(state.score)
    );
    log::info!("Road Dash exiting after {} ticks", state.time_ticks);
    Ok(())
}
