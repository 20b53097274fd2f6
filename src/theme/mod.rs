//! Theme for the Bento Brief page.
//!
//! Palette constants, motion timings, and the global stylesheet.

pub mod colors;
pub mod motion;
mod styles;

pub use styles::GLOBAL_STYLES;
