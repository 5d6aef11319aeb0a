pub mod display;

pub use display::{DisplayError, TftDisplay, madctl_for};
