//! Demo game for the overlay engine
//!
//! A stand-in "game" (a square drifting over a dark background) wired to the
//! overlay stack: HUD on the bottom, debug panel on F3, pause menu on
//! escape, and a quit confirmation dialog on top. Shows the intended loop
//! shape: translate events, offer them to the manager, handle only what no
//! overlay consumed, and gate world updates on `should_pause_game`.

use overlay_engine::overlays::{
    DebugOverlay, DialogOutcome, DialogOverlay, HudOverlay, MenuStyle, PauseMenuAction,
    PauseMenuOverlay,
};
use overlay_engine::{translate_event, InputEvent, OverlayConfig, OverlayManager, OverlaySettings};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::time::Instant;

const SCREEN_WIDTH: u32 = 640;
const SCREEN_HEIGHT: u32 = 360;

const OVERLAY_NAMES: [&str; 4] = ["hud", "debug", "pause_menu", "quit_dialog"];

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window("Overlay Engine Demo", SCREEN_WIDTH * 2, SCREEN_HEIGHT * 2)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;
    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    // Optional overrides from a local overlay_config.json, loaded up front
    // so overlay construction can honor the rendering defaults
    let config = if std::path::Path::new("overlay_config.json").exists() {
        match OverlayConfig::load("overlay_config.json") {
            Ok(config) => Some(config),
            Err(e) => {
                println!("Warning: could not load overlay config: {}", e);
                None
            }
        }
    } else {
        None
    };
    let text_scale = config
        .as_ref()
        .map(|c| c.rendering.default_font_size)
        .unwrap_or(2);

    // === Overlay stack ===

    let mut manager = OverlayManager::new();

    let (hud, hud_handle) = HudOverlay::new();
    manager
        .register("hud", Box::new(hud), OverlaySettings::default())
        .map_err(|e| e.to_string())?;

    let (debug, debug_handle) = DebugOverlay::new(SCREEN_WIDTH);
    manager
        .register(
            "debug",
            Box::new(debug),
            OverlaySettings {
                z_order: 200,
                input_priority: 10,
                ..Default::default()
            },
        )
        .map_err(|e| e.to_string())?;

    let (pause_menu, menu_handle) = PauseMenuOverlay::with_style(
        "PAUSED",
        vec!["RESUME".to_string(), "QUIT".to_string()],
        MenuStyle {
            text_scale,
            ..Default::default()
        },
    );
    manager
        .register(
            "pause_menu",
            Box::new(pause_menu),
            OverlaySettings {
                z_order: 100,
                input_priority: 100,
                pause_game: true,
                ..Default::default()
            },
        )
        .map_err(|e| e.to_string())?;

    let (quit_dialog, dialog_handle) = DialogOverlay::new(
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        "QUIT?",
        "PROGRESS WILL BE LOST",
        "YES",
        "NO",
    );
    manager
        .register(
            "quit_dialog",
            Box::new(quit_dialog),
            OverlaySettings {
                z_order: 300,
                input_priority: 300,
                pause_game: true,
                ..Default::default()
            },
        )
        .map_err(|e| e.to_string())?;

    manager.activate("hud").map_err(|e| e.to_string())?;

    if let Some(config) = &config {
        config.apply_to(&mut manager).map_err(|e| e.to_string())?;
    }

    // === Stand-in game state ===

    let mut world_x: f32 = 40.0;
    let mut elapsed: f32 = 0.0;
    let mut last_frame = Instant::now();

    'running: loop {
        // --- Input ---
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
            let Some(input) = translate_event(&event) else {
                continue;
            };
            if manager.dispatch_input(&input).is_some() {
                continue;
            }
            // Unconsumed events belong to the game
            match input {
                InputEvent::KeyDown {
                    key: Keycode::Escape,
                    ..
                } => manager.activate("pause_menu").map_err(|e| e.to_string())?,
                InputEvent::KeyDown {
                    key: Keycode::F3, ..
                } => {
                    manager.toggle("debug").map_err(|e| e.to_string())?;
                }
                _ => {}
            }
        }

        // --- Overlay results ---
        if let Some(action) = menu_handle.take_action() {
            manager.deactivate("pause_menu").map_err(|e| e.to_string())?;
            if let PauseMenuAction::Selected { label, .. } = action {
                if label == "QUIT" {
                    manager.activate("quit_dialog").map_err(|e| e.to_string())?;
                }
            }
        }
        if let Some(outcome) = dialog_handle.take_outcome() {
            match outcome {
                DialogOutcome::Confirmed => break 'running,
                DialogOutcome::Cancelled => {
                    manager.deactivate("quit_dialog").map_err(|e| e.to_string())?
                }
            }
        }

        // --- Update ---
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        if !manager.should_pause_game() {
            elapsed += dt;
            world_x += dt * 60.0;
            if world_x > SCREEN_WIDTH as f32 {
                world_x = -24.0;
            }

            // Fake vitals so the HUD has something to show
            let health = 0.55 + 0.45 * (elapsed * 0.7).sin();
            let stamina = 0.55 + 0.45 * (elapsed * 1.3).cos();
            hud_handle.set_health(health);
            hud_handle.set_stamina(stamina);
            hud_handle.set_status(if health < 0.3 { "LOW HEALTH!" } else { "" });
        }

        let active = OVERLAY_NAMES
            .iter()
            .filter(|name| manager.is_active(name))
            .count();
        debug_handle.set_counts(manager.len(), active);

        manager.update(dt);

        // --- Render ---
        canvas.set_draw_color(Color::RGB(22, 36, 30));
        canvas.clear();

        // The "game world"
        canvas.set_draw_color(Color::RGB(90, 160, 120));
        canvas.fill_rect(Rect::new(world_x as i32, 200, 24, 24))?;

        manager.render(&mut canvas)?;
        canvas.present();
    }

    manager.clear();
    Ok(())
}
