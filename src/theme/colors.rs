//! Color constants for the bento page.
//!
//! Airy glassmorphism palette: slate ink on warm white, five pastel accent
//! families shared by tags, icon chips, and card washes.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#f8fafc";
pub const CARD_FILL: &str = "rgba(255, 255, 255, 0.8)";
pub const CARD_BORDER: &str = "rgba(255, 255, 255, 0.5)";

// === INK (Text) ===
pub const INK: &str = "#0f172a";
pub const INK_SOFT: &str = "#475569";
pub const INK_MUTED: &str = "#64748b";
pub const INK_FAINT: &str = "#94a3b8";

// === TITLE GRADIENT ===
pub const TITLE_FROM: &str = "#2563eb";
pub const TITLE_TO: &str = "#7c3aed";

// === BLUE (Insight, Links) ===
pub const BLUE_WASH: &str = "#eff6ff";
pub const BLUE_TINT: &str = "#dbeafe";
pub const BLUE_TEXT: &str = "#1d4ed8";

// === AMBER (Quotes, Highlights) ===
pub const AMBER_WASH: &str = "#fffbeb";
pub const AMBER_TINT: &str = "#fef3c7";
pub const AMBER_TEXT: &str = "#b45309";
pub const AMBER_GLYPH: &str = "#f59e0b";

// === EMERALD (Growth) ===
pub const EMERALD_WASH: &str = "#ecfdf5";
pub const EMERALD_TINT: &str = "#d1fae5";
pub const EMERALD_TEXT: &str = "#047857";

// === ROSE (Urgency) ===
pub const ROSE_WASH: &str = "#fff1f2";
pub const ROSE_TINT: &str = "#ffe4e6";
pub const ROSE_TEXT: &str = "#be123c";

// === VIOLET (Method) ===
pub const VIOLET_WASH: &str = "#f5f3ff";
pub const VIOLET_TINT: &str = "#ede9fe";
pub const VIOLET_TEXT: &str = "#6d28d9";

// === DARK CARD ===
pub const DARK_FROM: &str = "#0f172a";
pub const DARK_TO: &str = "#1e293b";
pub const DARK_ACCENT: &str = "#93c5fd";
