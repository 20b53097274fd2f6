//! Entrance and hover timing constants.
//!
//! Every value here is also baked into `GLOBAL_STYLES`; the stylesheet
//! tests keep the two in agreement. The entrance is a one-shot forward
//! reveal: no reverse, no cancellation, no dependency on external data.

#![allow(dead_code)]

/// Delay before the first card starts its entrance.
pub const ENTER_BASE_DELAY_MS: u32 = 200;

/// Gap between consecutive card entrances.
pub const ENTER_STAGGER_MS: u32 = 100;

/// Duration of a single card entrance.
pub const ENTER_DURATION_MS: u32 = 600;

/// Easing shared by the header and card entrances.
pub const ENTER_EASE: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Hover scale factor applied to cards. Reverts exactly on pointer exit.
pub const HOVER_SCALE: &str = "1.02";

/// Duration of the hover scale transition.
pub const HOVER_SCALE_MS: u32 = 300;

/// Header slide-down duration.
pub const HEADER_ENTER_MS: u32 = 800;

/// Badge scale-in delay and duration.
pub const BADGE_DELAY_MS: u32 = 200;
pub const BADGE_ENTER_MS: u32 = 600;

/// Footer fade-in delay and duration.
pub const FOOTER_DELAY_MS: u32 = 1500;
pub const FOOTER_FADE_MS: u32 = 800;

/// Entrance delay for the card at `index` in document order.
pub fn entrance_delay_ms(index: usize) -> u32 {
    ENTER_BASE_DELAY_MS + index as u32 * ENTER_STAGGER_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_card_waits_for_base_delay() {
        assert_eq!(entrance_delay_ms(0), 200);
    }

    #[test]
    fn delays_increase_by_one_stagger_step() {
        for index in 0..11 {
            assert_eq!(
                entrance_delay_ms(index + 1) - entrance_delay_ms(index),
                ENTER_STAGGER_MS
            );
        }
    }

    #[test]
    fn footer_enters_after_the_last_card_starts() {
        // Eleven cards on the page; the footer fade must not begin before
        // the last card's entrance delay has elapsed.
        assert!(FOOTER_DELAY_MS >= entrance_delay_ms(10));
    }
}
