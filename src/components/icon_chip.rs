//! Icon Chip Component
//!
//! Single glyph on a tinted rounded square, the recurring icon motif
//! inside cards.

use dioxus::prelude::*;

use super::TagColor;

/// Chip size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ChipSize {
    /// 2rem square, for feature rows
    #[default]
    Small,
    /// 3rem square, for card leads
    Large,
}

impl ChipSize {
    pub fn class(&self) -> &'static str {
        match self {
            ChipSize::Small => "",
            ChipSize::Large => "icon-chip--lg",
        }
    }
}

/// Tinted square holding a decorative glyph
///
/// Tints reuse the tag palette so chips and tags stay in the same five
/// families.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconChip { glyph: "💡", tint: TagColor::Violet, size: ChipSize::Large }
/// }
/// ```
#[component]
pub fn IconChip(
    /// Glyph rendered inside the chip
    glyph: String,
    /// Background tint (defaults to blue)
    #[props(default)]
    tint: TagColor,
    /// Chip size (defaults to small)
    #[props(default)]
    size: ChipSize,
) -> Element {
    let tint_class = match tint {
        TagColor::Blue => "icon-chip--blue",
        TagColor::Amber => "icon-chip--amber",
        TagColor::Emerald => "icon-chip--emerald",
        TagColor::Rose => "icon-chip--rose",
        TagColor::Violet => "icon-chip--violet",
    };
    let size_class = size.class();

    rsx! {
        div {
            class: "icon-chip {size_class} {tint_class}",
            "aria-hidden": "true",
            span { "{glyph}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_small() {
        assert_eq!(ChipSize::default(), ChipSize::Small);
        assert_eq!(ChipSize::Small.class(), "");
    }

    #[test]
    fn large_size_has_its_own_class() {
        assert_eq!(ChipSize::Large.class(), "icon-chip--lg");
    }
}
