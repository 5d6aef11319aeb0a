#![cfg_attr(not(test), no_std)]

//! Board glue between the wrap engine and the ST7735R panel.

pub mod platform;
pub mod render;
