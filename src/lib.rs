pub mod counter;
pub mod error;
pub mod gui;
pub mod indicator;
pub mod logging;
pub mod session;
pub mod settings;
pub mod surface;
pub mod viewport;
