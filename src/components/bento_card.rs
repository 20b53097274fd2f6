//! Bento Card Primitive
//!
//! Bordered, blurred-background panel with optional grid spans, an accent
//! wash, and a staggered one-shot entrance driven by its index.

use dioxus::prelude::*;

/// Grid span multiplier. A card covers one or two tracks; anything else
/// is unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardSpan {
    #[default]
    One,
    Two,
}

impl CardSpan {
    /// Column class, applied only at the grid breakpoint.
    pub fn col_class(&self) -> &'static str {
        match self {
            CardSpan::One => "",
            CardSpan::Two => "bento-card--cols-2",
        }
    }

    /// Row class, applied only at the grid breakpoint.
    pub fn row_class(&self) -> &'static str {
        match self {
            CardSpan::One => "",
            CardSpan::Two => "bento-card--rows-2",
        }
    }
}

/// Closed set of background washes for cards. `Ink` is the inverted dark
/// variant; the rest are pastel gradients.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardAccent {
    Blue,
    Amber,
    Emerald,
    Rose,
    Violet,
    Cyan,
    Indigo,
    Ink,
}

impl CardAccent {
    pub const ALL: [CardAccent; 8] = [
        CardAccent::Blue,
        CardAccent::Amber,
        CardAccent::Emerald,
        CardAccent::Rose,
        CardAccent::Violet,
        CardAccent::Cyan,
        CardAccent::Indigo,
        CardAccent::Ink,
    ];

    /// CSS class carrying the wash for this accent.
    pub fn class(&self) -> &'static str {
        match self {
            CardAccent::Blue => "accent-blue",
            CardAccent::Amber => "accent-amber",
            CardAccent::Emerald => "accent-emerald",
            CardAccent::Rose => "accent-rose",
            CardAccent::Violet => "accent-violet",
            CardAccent::Cyan => "accent-cyan",
            CardAccent::Indigo => "accent-indigo",
            CardAccent::Ink => "accent-ink",
        }
    }
}

/// Bento grid panel
///
/// Entrance delay is `base + index * step` (see `theme::motion`), wired
/// through the `--index` custom property. Hover scales the card up by a
/// fixed factor and reverts on pointer exit; both are pure CSS, so cards
/// stay mutually independent.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     BentoCard {
///         index: 0,
///         col_span: CardSpan::Two,
///         row_span: CardSpan::Two,
///         accent: CardAccent::Blue,
///         div { "content" }
///     }
/// }
/// ```
#[component]
pub fn BentoCard(
    /// Position in the entrance order (drives the stagger delay)
    index: usize,
    /// Columns covered at the grid breakpoint
    #[props(default)]
    col_span: CardSpan,
    /// Rows covered at the grid breakpoint
    #[props(default)]
    row_span: CardSpan,
    /// Optional background wash
    #[props(default = None)]
    accent: Option<CardAccent>,
    /// Card contents (hand-placed markup)
    children: Element,
) -> Element {
    let col_class = col_span.col_class();
    let row_class = row_span.row_class();
    let accent_class = accent.map(|a| a.class()).unwrap_or("");

    rsx! {
        div {
            class: "bento-card {col_class} {row_class} {accent_class}",
            style: "--index: {index}",

            div { class: "bento-card__body", {children} }

            // Decorative top-left highlight layer
            div { class: "bento-card__sheen", "aria-hidden": "true" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_cover_one_or_two_tracks() {
        assert_eq!(CardSpan::One.col_class(), "");
        assert_eq!(CardSpan::Two.col_class(), "bento-card--cols-2");
        assert_eq!(CardSpan::One.row_class(), "");
        assert_eq!(CardSpan::Two.row_class(), "bento-card--rows-2");
    }

    #[test]
    fn default_span_is_a_single_track() {
        assert_eq!(CardSpan::default(), CardSpan::One);
    }

    #[test]
    fn accent_classes_are_distinct() {
        for (i, a) in CardAccent::ALL.iter().enumerate() {
            for b in &CardAccent::ALL[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
    }
}
