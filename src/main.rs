use anyhow::Result;
use combo_input::engine::input::{default_combos, InputManager};
use combo_input::FrameClock;
use gilrs::Gilrs;
use log::{info, warn};
use std::time::{Duration, Instant};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

/// Local players: keyboard/mouse + first gamepad, and a second gamepad
const NUM_PLAYERS: usize = 2;

/// Target time between input updates (~60 per second)
const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting combo input demo...");

    let combos = default_combos()?;
    let mut input = InputManager::new(NUM_PLAYERS);
    let mut clock = FrameClock::new();

    let mut gilrs = match Gilrs::new() {
        Ok(gilrs) => Some(gilrs),
        Err(e) => {
            warn!("Gamepad support unavailable: {}", e);
            None
        }
    };

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Combo Input")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 360))
        .with_resizable(true)
        .build(&event_loop)?;

    info!(
        "Window created, {} combos loaded for {} players",
        combos.len(),
        input.num_players()
    );

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(state, button);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    input.process_cursor_moved(position);
                }
                WindowEvent::Focused(false) => {
                    // Releases are not delivered while unfocused
                    input.reset_all();
                }
                _ => {}
            },
            Event::AboutToWait => {
                if let Some(gilrs) = gilrs.as_mut() {
                    while let Some(event) = gilrs.next_event() {
                        input.process_gamepad_event(&event);
                    }
                }

                input.update(clock.tick());

                for player in input.players() {
                    for combo in combos.triggered(player.recorder()) {
                        info!("Player {}: {}", player.player_id() + 1, combo.name());
                    }
                }

                elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
