//! Core runtime systems for diagnostics.

/// FPS tracking for the on-screen performance overlay.
pub mod fps_tracking;
