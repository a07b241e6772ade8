#![deny(warnings)]
pub mod controller;
pub mod logging;
pub mod settings;
pub mod simulate;

pub use controller::GameController;
pub use settings::AudioSettings;
