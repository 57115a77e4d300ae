pub mod focus_window;
pub mod launch;
