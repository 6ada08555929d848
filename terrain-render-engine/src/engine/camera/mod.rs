//! First-person fly camera.

/// Fly camera resource, per-frame input snapshot and controller system.
pub mod fly_camera;
