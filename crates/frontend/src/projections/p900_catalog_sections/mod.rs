pub mod actions;
pub mod ui;
