//! Headless controller walkthrough.
//!
//! Builds a small collision scene (ground plane, a wall, a platform),
//! wires a player controller to the input binding, and replays a scripted
//! input tape through a real-time tick loop, logging every semantic event
//! the controller fires. A stand-in for a rendering host, not a renderer.

mod config;

use std::time::Duration;

use anyhow::Result;
use controller::{PlayerCallbacks, PlayerController, PlayerOptions};
use engine_core::{Time, Vec3};
use input::{InputBinding, KeyCode};
use physics::CollisionScene;

use crate::config::SandboxConfig;

/// One scripted input, due at a given elapsed time.
enum Action {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseMove(f32, f32),
}

/// The walkthrough: walk forward into the wall, look around, jump, back up.
fn tape() -> Vec<(f32, Action)> {
    vec![
        (0.5, Action::KeyDown(KeyCode::KeyW)),
        (2.5, Action::KeyUp(KeyCode::KeyW)),
        (2.6, Action::MouseMove(400.0, 0.0)),
        (2.8, Action::MouseMove(400.0, -120.0)),
        (3.0, Action::KeyDown(KeyCode::Space)),
        (3.1, Action::KeyUp(KeyCode::Space)),
        (3.5, Action::KeyDown(KeyCode::KeyS)),
        (4.5, Action::KeyUp(KeyCode::KeyS)),
    ]
}

fn build_scene(scene: &mut CollisionScene) {
    scene.add_ground_plane();
    // Wall across the walking line and a low platform off to the side.
    scene.add_static_box(Vec3::new(0.0, 1.5, -8.5), Vec3::new(5.0, 1.5, 0.5));
    scene.add_static_box(Vec3::new(4.0, 0.25, -3.0), Vec3::new(1.5, 0.25, 1.5));
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting stride sandbox");

    let config = SandboxConfig::load();
    let mut scene = CollisionScene::new();
    build_scene(&mut scene);

    let options = PlayerOptions::new()
        .with_gravity(config.gravity)
        .with_speed(config.speed)
        .with_jump_speed(config.jump_speed)
        .with_mouse_sensitivity(config.mouse_sensitivity)
        .with_camera_offset(Vec3::new(0.0, 0.4, 0.0))
        .with_callbacks(
            PlayerCallbacks::new()
                .on_move(|e| log::debug!("move to {} (delta {})", e.position, e.delta))
                .on_move_change(|e| {
                    log::info!("move intent: forward {:?}, sidewise {:?}", e.forward, e.sidewise)
                })
                .on_turn(|e| log::debug!("turn to {} (delta {})", e.rotation, e.delta))
                .on_turn_change(|e| log::info!("turn intent: {:?}", e.direction))
                .on_jump(|| log::info!("jump"))
                .on_focus(|| log::info!("pointer captured"))
                .on_blur(|| log::info!("pointer released")),
        );

    let body = scene.add_player_body(Vec3::new(0.0, 1.0, 0.0), options.ellipsoid)?;
    let mut player = PlayerController::new(body, options);
    let mut binding = InputBinding::new(config.scheme());

    // Simulate the click-to-capture the host would forward.
    binding.engage(&mut player);

    let tape = tape();
    let mut cursor = 0;
    let mut time = Time::new();
    while time.elapsed_seconds() < config.duration_secs {
        time.update();

        while cursor < tape.len() && tape[cursor].0 <= time.elapsed_seconds() {
            match tape[cursor].1 {
                Action::KeyDown(key) => binding.on_key_down(&mut player, &mut scene, key, false),
                Action::KeyUp(key) => binding.on_key_up(&mut player, key),
                Action::MouseMove(dx, dy) => binding.on_mouse_move(&mut player, dx, dy),
            }
            cursor += 1;
        }

        binding.update(&mut player, &mut scene, time.frame_instant());
        std::thread::sleep(Duration::from_millis(16));
    }

    binding.detach(&mut player);
    let pose = player.camera_pose(&scene);
    log::info!(
        "walkthrough done after {} frames: body at {}, camera at {}",
        time.frame_count(),
        player.position(&scene),
        pose.position
    );
    Ok(())
}
