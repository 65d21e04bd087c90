pub mod config;

pub use config::{valid_swipe_threshold, PresenterConfig};
