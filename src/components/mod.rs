//! UI components for the Bento Brief page.
//!
//! Presentational units only: no state, no context, no I/O.

mod bento_card;
mod icon_chip;
mod tag;

pub use bento_card::{BentoCard, CardAccent, CardSpan};
pub use icon_chip::{ChipSize, IconChip};
pub use tag::{Tag, TagColor};
