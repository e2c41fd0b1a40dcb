pub mod calendar;
pub(crate) mod common;
pub mod export;
pub mod goal;
pub mod history;
pub mod log;
pub mod progress;
pub mod settings;
pub mod status;
