//! egui front end: state, controller and renderer for the placement form.
pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
