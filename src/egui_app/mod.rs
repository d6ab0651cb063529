//! egui front end: UI state, the controller that mutates it, and the renderer.

pub mod controller;
pub mod state;
pub mod ui;
