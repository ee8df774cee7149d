//! Bounce Blitz entry point
//!
//! Runs the core headless: the window, GPU, and font subsystems are
//! external collaborators, so this binary drives the simulation from the
//! wall clock with a short scripted event feed standing in for the window
//! event queue, and logs the frames a renderer would consume.

use std::time::{Duration, Instant};

use bounce_blitz::camera::CameraRig;
use bounce_blitz::config::Config;
use bounce_blitz::consts::{SCR_HEIGHT, SCR_WIDTH};
use bounce_blitz::input::{InputEvent, InputRouter, Key};
use bounce_blitz::scene;
use bounce_blitz::sim::{FrameClock, GamePhase, GameState, tick};

/// Stand-in for the window's event queue: a steer tap and a camera drag
/// early in the run.
fn scripted_events(elapsed: f64, fed: &mut u32) -> Vec<InputEvent> {
    let script: [(f64, InputEvent); 6] = [
        (0.5, InputEvent::MouseMove { x: 400.0 }),
        (0.6, InputEvent::MouseMove { x: 430.0 }),
        (1.0, InputEvent::Key { key: Key::Forward, pressed: true }),
        (1.5, InputEvent::Key { key: Key::Forward, pressed: false }),
        (2.0, InputEvent::MouseButton { held: true }),
        (2.1, InputEvent::MouseMove { x: 470.0 }),
    ];
    let mut due = Vec::new();
    for (at, event) in script.iter().skip(*fed as usize) {
        if elapsed < *at {
            break;
        }
        due.push(*event);
        *fed += 1;
    }
    due
}

fn main() {
    env_logger::init();

    let config = Config::load();
    log::info!("Bounce Blitz starting, seed {}", config.seed);

    let mut state = GameState::new(&config);
    let mut router = InputRouter::new(CameraRig::new(&config.camera));
    let mut clock = FrameClock::new();
    let start = Instant::now();
    let aspect = SCR_WIDTH as f32 / SCR_HEIGHT as f32;
    let mut fed = 0u32;

    loop {
        let elapsed = start.elapsed().as_secs_f64();
        let dt = clock.tick(elapsed);

        for event in scripted_events(elapsed, &mut fed) {
            router.route(event);
        }

        let input = router.snapshot(state.ball.pos);
        if input.quit {
            log::info!("quit requested");
            break;
        }

        tick(&mut state, &input, dt);

        // The renderer and text overlay would consume this handoff here
        let frame = scene::compose(&state, router.camera(), aspect);
        if state.frame % 120 == 0 {
            log::info!(
                "{} | ball y {:.2}, bounces {}",
                frame.hud.text,
                state.ball.pos.y,
                state.platform.bounce_count
            );
        }

        if state.phase == GamePhase::GameOver {
            break;
        }

        // Present/swap stand-in: pace the loop near 60 Hz
        std::thread::sleep(Duration::from_millis(16));
    }

    log::info!("final score: {}", state.score);
}
