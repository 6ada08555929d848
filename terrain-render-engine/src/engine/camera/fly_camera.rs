use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use constants::camera::{
    CLIP_FAR, CLIP_NEAR, FLY_SPEED, FOV_MAX_DEGREES, FOV_MIN_DEGREES, LOOK_SENSITIVITY,
    PITCH_LIMIT, SPAWN_PITCH, SPAWN_POSITION, SPAWN_YAW, SPRINT_MULTIPLIER,
};

/// Fly camera orientation state. The camera entity's `Transform` is
/// derived from this every frame; nothing else mutates it.
#[derive(Resource)]
pub struct FlyCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub cursor_grabbed: bool,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            yaw: SPAWN_YAW,
            pitch: SPAWN_PITCH,
            cursor_grabbed: false,
        }
    }
}

/// One frame's worth of camera input, gathered from events in a single
/// place and then applied. Keeps input handling out of global state.
#[derive(Debug, Default, Clone, Copy)]
struct CameraInput {
    movement: Vec3,
    look_delta: Vec2,
    zoom_scroll: f32,
    sprint: bool,
    grab_cursor: bool,
    release_cursor: bool,
}

fn gather_input(
    keyboard: &ButtonInput<KeyCode>,
    mouse_button: &ButtonInput<MouseButton>,
    mouse_motion: &mut EventReader<MouseMotion>,
    scroll_events: &mut EventReader<MouseWheel>,
) -> CameraInput {
    let mut input = CameraInput::default();

    if keyboard.pressed(KeyCode::KeyW) {
        input.movement.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        input.movement.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        input.movement.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        input.movement.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::Space) {
        input.movement.y += 1.0;
    }
    if keyboard.pressed(KeyCode::ShiftLeft) {
        input.movement.y -= 1.0;
    }

    input.sprint = keyboard.pressed(KeyCode::ControlLeft);
    input.grab_cursor = mouse_button.just_pressed(MouseButton::Left);
    input.release_cursor = keyboard.just_pressed(KeyCode::Escape);

    input.look_delta = mouse_motion.read().map(|m| m.delta).sum();

    for ev in scroll_events.read() {
        input.zoom_scroll += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    input
}

/// Spawn the camera at the overview position, aimed at the terrain centre.
/// The rotation matches the controller's initial yaw/pitch so the view
/// does not jump on the first controlled frame.
pub fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            near: CLIP_NEAR,
            far: CLIP_FAR,
            ..default()
        }),
        Transform::from_translation(SPAWN_POSITION)
            .with_rotation(Quat::from_euler(EulerRot::YXZ, SPAWN_YAW, SPAWN_PITCH, 0.0)),
    ));
}

/// Apply the frame's input snapshot: mouse look while the cursor is
/// grabbed, WASD + Space/Shift flight relative to the view direction, and
/// scroll-wheel FOV zoom.
pub fn camera_controller(
    mut camera_query: Query<(&mut Transform, &mut Projection), With<Camera3d>>,
    mut fly_camera: ResMut<FlyCamera>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let input = gather_input(&keyboard, &mouse_button, &mut mouse_motion, &mut scroll_events);

    let Ok((mut transform, mut projection)) = camera_query.single_mut() else {
        return;
    };

    if let Ok(mut window) = windows.single_mut() {
        if input.grab_cursor && !fly_camera.cursor_grabbed {
            window.cursor_options.grab_mode = CursorGrabMode::Locked;
            window.cursor_options.visible = false;
            fly_camera.cursor_grabbed = true;
        }
        if input.release_cursor && fly_camera.cursor_grabbed {
            window.cursor_options.grab_mode = CursorGrabMode::None;
            window.cursor_options.visible = true;
            fly_camera.cursor_grabbed = false;
        }
    }

    if fly_camera.cursor_grabbed && input.look_delta != Vec2::ZERO {
        fly_camera.yaw -= input.look_delta.x * LOOK_SENSITIVITY;
        fly_camera.pitch -= input.look_delta.y * LOOK_SENSITIVITY;
        fly_camera.pitch = fly_camera.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    let rotation = Quat::from_euler(EulerRot::YXZ, fly_camera.yaw, fly_camera.pitch, 0.0);
    transform.rotation = rotation;

    if input.movement != Vec3::ZERO {
        let forward = rotation * Vec3::Z;
        let right = rotation * Vec3::X;

        let mut speed = FLY_SPEED;
        if input.sprint {
            speed *= SPRINT_MULTIPLIER;
        }

        let world_delta =
            right * input.movement.x + Vec3::Y * input.movement.y + forward * input.movement.z;
        transform.translation += world_delta.normalize() * speed * time.delta_secs();
    }

    if input.zoom_scroll.abs() > f32::EPSILON {
        if let Projection::Perspective(perspective) = &mut *projection {
            let fov_degrees = (perspective.fov.to_degrees() - input.zoom_scroll)
                .clamp(FOV_MIN_DEGREES, FOV_MAX_DEGREES);
            perspective.fov = fov_degrees.to_radians();
        }
    }
}
