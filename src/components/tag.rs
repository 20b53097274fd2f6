//! Tag Component
//!
//! Inline pill label with a fixed five-color palette.

use dioxus::prelude::*;

/// Closed set of tag colors. Each maps to a fixed background/text/border
/// triple in the stylesheet; anything outside the set is unrepresentable.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TagColor {
    #[default]
    Blue,
    Amber,
    Emerald,
    Rose,
    Violet,
}

impl TagColor {
    pub const ALL: [TagColor; 5] = [
        TagColor::Blue,
        TagColor::Amber,
        TagColor::Emerald,
        TagColor::Rose,
        TagColor::Violet,
    ];

    /// CSS class carrying the color triple for this key.
    pub fn class(&self) -> &'static str {
        match self {
            TagColor::Blue => "tag--blue",
            TagColor::Amber => "tag--amber",
            TagColor::Emerald => "tag--emerald",
            TagColor::Rose => "tag--rose",
            TagColor::Violet => "tag--violet",
        }
    }
}

/// Properties for the Tag component
#[derive(Clone, PartialEq, Props)]
pub struct TagProps {
    /// Color key (defaults to blue)
    #[props(default)]
    pub color: TagColor,
    /// Label content
    pub children: Element,
}

/// Small rounded pill categorizing a content block
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Tag { color: TagColor::Emerald, "Two paths" }
/// }
/// ```
#[component]
pub fn Tag(props: TagProps) -> Element {
    let color_class = props.color.class();

    rsx! {
        span { class: "tag {color_class}",
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_exactly_five_colors() {
        assert_eq!(TagColor::ALL.len(), 5);
    }

    #[test]
    fn class_mapping_matches_the_fixed_table() {
        assert_eq!(TagColor::Blue.class(), "tag--blue");
        assert_eq!(TagColor::Amber.class(), "tag--amber");
        assert_eq!(TagColor::Emerald.class(), "tag--emerald");
        assert_eq!(TagColor::Rose.class(), "tag--rose");
        assert_eq!(TagColor::Violet.class(), "tag--violet");
    }

    #[test]
    fn classes_are_distinct() {
        for (i, a) in TagColor::ALL.iter().enumerate() {
            for b in &TagColor::ALL[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
    }

    #[test]
    fn default_color_is_blue() {
        assert_eq!(TagColor::default(), TagColor::Blue);
    }
}
