//! The Bento Brief page.
//!
//! One component tree, rendered once: header, eleven hand-placed cards in
//! entrance order, footer. No loops over data, no shared state, no
//! handlers that touch anything outside their own element.

use dioxus::prelude::*;

use crate::components::{BentoCard, CardAccent, CardSpan, ChipSize, IconChip, Tag, TagColor};

/// The full page: header, bento grid, footer. Entrance indices run 0..=10
/// in document order.
#[component]
pub fn Home() -> Element {
    rsx! {
        PageHeader {}

        main { class: "page-main",
            div { class: "bento-grid",

                // Core insight
                BentoCard {
                    index: 0,
                    col_span: CardSpan::Two,
                    row_span: CardSpan::Two,
                    accent: CardAccent::Blue,
                    div { class: "stack-between",
                        div {
                            Tag { "Core insight" }
                            h2 { class: "card-title card-title--hero",
                                "Many interests are a superpower"
                            }
                            p { class: "card-text",
                                "Industrial-age specialization is winding down. We are living "
                                "through a second Renaissance: the printing press democratized "
                                "knowledge and produced da Vinci, and the internet has collapsed "
                                "distribution costs and is producing a new generation of generalists."
                            }
                        }
                        div { class: "feature-list",
                            div { class: "feature-row",
                                IconChip { glyph: "📚", tint: TagColor::Blue }
                                div {
                                    h4 { class: "feature-lead", "Self-education" }
                                    p { class: "feature-desc",
                                        "Steer your own learning instead of renting it from institutions"
                                    }
                                }
                            }
                            div { class: "feature-row",
                                IconChip { glyph: "🎯", tint: TagColor::Emerald }
                                div {
                                    h4 { class: "feature-lead", "Self-interest" }
                                    p { class: "feature-desc",
                                        "Follow what excites you, not what an organization needs from you"
                                    }
                                }
                            }
                            div { class: "feature-row",
                                IconChip { glyph: "⚡", tint: TagColor::Violet }
                                div {
                                    h4 { class: "feature-lead", "Self-reliance" }
                                    p { class: "feature-desc", "Stop outsourcing your judgment" }
                                }
                            }
                        }
                    }
                }

                // Quote
                BentoCard {
                    index: 1,
                    col_span: CardSpan::Two,
                    accent: CardAccent::Amber,
                    span { class: "quote-glyph", "aria-hidden": "true", "❝" }
                    blockquote { class: "quote-text",
                        "A man whose whole life is spent performing a few simple operations "
                        "generally becomes as stupid and ignorant as it is possible for a "
                        "human creature to become."
                    }
                    cite { class: "quote-cite", "Adam Smith, The Wealth of Nations" }
                }

                // Two paths
                BentoCard {
                    index: 2,
                    row_span: CardSpan::Two,
                    accent: CardAccent::Emerald,
                    Tag { color: TagColor::Emerald, "Two paths" }
                    h3 { class: "card-title", "Growth route vs. skill route" }
                    div { class: "path-list",
                        div { class: "path-panel",
                            div { class: "path-head",
                                span { "aria-hidden": "true", "🚀" }
                                span { "Growth route ⭐" }
                            }
                            ul { class: "path-items",
                                li { "• Chase your own goal (the brand)" }
                                li { "• Share what you learn (the content)" }
                                li { "• Help others get there faster (the product)" }
                            }
                        }
                        div { class: "path-panel path-panel--muted",
                            div { class: "path-head",
                                span { "aria-hidden": "true", "🗂" }
                                span { "Skill route" }
                            }
                            ul { class: "path-items",
                                li { "• Learn one skill" }
                                li { "• Teach that skill" }
                                li { "• Sell products around it" }
                            }
                            p { class: "path-note", "Tends to turn into a second 9-to-5" }
                        }
                    }
                }

                // Four themes
                BentoCard {
                    index: 3,
                    Tag { color: TagColor::Violet, "Four themes" }
                    h3 { class: "card-title", "Evergreen directions" }
                    div { class: "mini-grid",
                        div { class: "theme-tile theme-tile--rose",
                            span { class: "tile-emoji", "aria-hidden": "true", "💪" }
                            span { class: "tile-label", "Health" }
                        }
                        div { class: "theme-tile theme-tile--amber",
                            span { class: "tile-emoji", "aria-hidden": "true", "💰" }
                            span { class: "tile-label", "Wealth" }
                        }
                        div { class: "theme-tile theme-tile--blue",
                            span { class: "tile-emoji", "aria-hidden": "true", "❤️" }
                            span { class: "tile-label", "Relationships" }
                        }
                        div { class: "theme-tile theme-tile--emerald",
                            span { class: "tile-emoji", "aria-hidden": "true", "😊" }
                            span { class: "tile-label", "Happiness" }
                        }
                    }
                }

                // Attention economy
                BentoCard {
                    index: 4,
                    accent: CardAccent::Rose,
                    span { class: "card-glyph", "aria-hidden": "true", "📈" }
                    h3 { class: "card-title", "Attention is the scarcest moat" }
                    p { class: "card-text card-text--sm",
                        "When anyone can write the content and build the software, who wins? "
                        span { class: "em-rose", "The one who gets seen." }
                    }
                }

                // Swipe file
                BentoCard {
                    index: 5,
                    col_span: CardSpan::Two,
                    accent: CardAccent::Violet,
                    div { class: "feature-row",
                        IconChip {
                            glyph: "💡",
                            tint: TagColor::Violet,
                            size: ChipSize::Large,
                        }
                        div {
                            Tag { color: TagColor::Violet, "Core method" }
                            h3 { class: "card-title", "Build an idea museum" }
                            p { class: "card-text card-text--sm",
                                "A swipe file is external storage for your brain: gather honey "
                                "as you browse, draw it out when you create. The moment an idea "
                                "strikes you as useful, write it down."
                            }
                            div { class: "pill-row", style: "margin-top: 1rem;",
                                span { class: "plain-pill", "Hooks and one-liners" }
                                span { class: "plain-pill", "Content structures" }
                                span { class: "plain-pill", "Story frames" }
                                span { class: "plain-pill", "Topic angles" }
                            }
                        }
                    }
                }

                // Content creation
                BentoCard {
                    index: 6,
                    row_span: CardSpan::Two,
                    span { class: "card-glyph", "aria-hidden": "true", "🧭" }
                    h3 { class: "card-title", "Content is a novel perspective" }
                    div { class: "step-list",
                        div { class: "step-panel",
                            span { class: "step-label", "Step 1" }
                            p { class: "step-text",
                                "Keep the idea museum open everywhere you read"
                            }
                        }
                        div { class: "step-panel",
                            span { class: "step-label", "Step 2" }
                            p { class: "step-text",
                                "Curate 3-5 high-signal sources for idea density"
                            }
                        }
                        div { class: "step-panel",
                            span { class: "step-label", "Step 3" }
                            p { class: "step-text", "One idea, a thousand framings" }
                        }
                    }
                }

                // Brand definition
                BentoCard {
                    index: 7,
                    col_span: CardSpan::Two,
                    accent: CardAccent::Cyan,
                    span { class: "card-glyph", "aria-hidden": "true", "👥" }
                    h3 { class: "card-title", "A brand is an environment, not an avatar" }
                    p { class: "card-text", style: "margin-bottom: 1rem;",
                        "A brand is the small world you invite people into. Not the first "
                        "impression of your profile page, but "
                        span { class: "em-cyan",
                            "what stays in their head after following you for 3-6 months."
                        }
                    }
                    div { class: "arrow-chain",
                        span { "Your story" }
                        span { "aria-hidden": "true", "→" }
                        span { "Worldview" }
                        span { "aria-hidden": "true", "→" }
                        span { "Philosophy of life" }
                    }
                }

                // System economy
                BentoCard {
                    index: 8,
                    col_span: CardSpan::Two,
                    accent: CardAccent::Indigo,
                    div {
                        class: "feature-row",
                        style: "align-items: center; margin-bottom: 1rem;",
                        IconChip { glyph: "🧱", tint: TagColor::Blue }
                        Tag { "End state" }
                    }
                    h3 { class: "card-title", "Systems are the new product" }
                    p { class: "card-text", style: "margin-bottom: 1rem;",
                        "We are entering a system economy. People don't want a solution to "
                        "the problem, they want "
                        span { class: "em-indigo", "your solution" }
                        ", the one built on your lived experience."
                    }
                    div { class: "callout-panel",
                        span { class: "callout-lead", "Worked example: " }
                        "a two-hour writing pipeline, going from dried-up content ideas to "
                        "every post for the week drafted in two hours a day and reused "
                        "across platforms."
                    }
                }

                // Final quote
                BentoCard {
                    index: 9,
                    col_span: CardSpan::Two,
                    accent: CardAccent::Ink,
                    blockquote { class: "final-quote",
                        "Many interests are not the problem. "
                        span { class: "final-accent", "Having no container" }
                        " is."
                    }
                    div { class: "final-row",
                        div { class: "final-chip", "aria-hidden": "true", "🎯" }
                        div {
                            p { class: "final-lead", "The core move" }
                            p { class: "final-note",
                                "Become the container: let every interest feed one body of work"
                            }
                        }
                    }
                }

                // Action list
                BentoCard {
                    index: 10,
                    col_span: CardSpan::Two,
                    h3 { class: "card-title", style: "margin-top: 0;", "Start this week" }
                    div { class: "action-grid",
                        div { class: "action-item",
                            span { class: "action-number", "1" }
                            p { class: "action-text", "Take notes in public" }
                        }
                        div { class: "action-item",
                            span { class: "action-number", "2" }
                            p { class: "action-text", "Start the idea museum" }
                        }
                        div { class: "action-item",
                            span { class: "action-number", "3" }
                            p { class: "action-text", "Pick 3-5 high-signal sources" }
                        }
                        div { class: "action-item",
                            span { class: "action-number", "4" }
                            p { class: "action-text", "Deconstruct content you love" }
                        }
                        div { class: "action-item",
                            span { class: "action-number", "5" }
                            p { class: "action-text", "Rewrite one idea five ways" }
                        }
                        div { class: "action-item",
                            span { class: "action-number", "6" }
                            p { class: "action-text", "Assemble your own pipeline" }
                        }
                    }
                }
            }
        }

        PageFooter {}
    }
}

/// Title block with badge, gradient headline, and subtitle.
#[component]
fn PageHeader() -> Element {
    rsx! {
        header { class: "page-header",
            div { class: "header-inner",
                div { class: "header-badge",
                    span { class: "badge-glyph", "aria-hidden": "true", "✦" }
                    span { class: "badge-label", "Dan Koe" }
                }
                h1 { class: "page-title",
                    "If you have many interests,"
                    br {}
                    span { class: "title-accent", "don't waste the next 2-3 years" }
                }
                p { class: "page-subtitle",
                    "Multiple interests are not a weakness. They are a superpower in the "
                    "AI era: become a generalist and build a creative life that holds all "
                    "of them."
                }
            }
        }
    }
}

/// Attribution lines, fading in after the grid has settled.
#[component]
fn PageFooter() -> Element {
    rsx! {
        footer { class: "page-footer",
            p { class: "footer-line",
                "Compiled from Dan Koe's talk on multi-interest careers, personal "
                "branding, and content systems."
            }
            p { class: "footer-hint", "Don't make your future self regret the wait. Start now." }
        }
    }
}
