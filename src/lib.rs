//! Projectile trajectory comparison: bundled simulation data, its parser and
//! loader, the load-status state machine driving the viewer, and the
//! simulation that produced the data.

pub mod data;
pub mod simulation;
pub mod state;
