//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the scene loading pipeline, camera controller,
/// water animation and UI overlay systems.
pub mod app_setup;

/// Application state machine and loading-to-running transition.
pub mod app_state;

/// Window configuration: title, resolution and vsync settings.
pub mod window_config;
