//! Global CSS styles for the Bento Brief page.
//!
//! One stylesheet, injected once at the app root. Entrance animations use
//! `animation-fill-mode: backwards` so the hidden first keyframe applies
//! during the stagger delay, while the element's resting styles (and the
//! hover transition) take over once the animation completes.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #f8fafc;
  --card-fill: rgba(255, 255, 255, 0.8);
  --card-border: rgba(255, 255, 255, 0.5);

  /* INK (Text) */
  --ink: #0f172a;
  --ink-soft: #475569;
  --ink-muted: #64748b;
  --ink-faint: #94a3b8;

  /* Typography */
  --font-sans: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto,
    'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.25rem;
  --text-2xl: 1.5rem;
  --text-3xl: 1.875rem;
  --text-hero: 3.75rem;

  /* Motion */
  --enter-base: 200ms;
  --enter-step: 100ms;
  --enter-duration: 600ms;
  --enter-ease: cubic-bezier(0.22, 1, 0.36, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: linear-gradient(135deg, #f8fafc 0%, #ffffff 50%, rgba(239, 246, 255, 0.3) 100%);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page Header === */
.page-header {
  padding: 3rem 1.5rem;
  animation: header-enter 800ms var(--enter-ease) backwards;
}

.header-inner {
  max-width: 80rem;
  margin: 0 auto;
  text-align: center;
}

.header-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.6);
  backdrop-filter: blur(8px);
  border: 1px solid rgba(226, 232, 240, 0.6);
  margin-bottom: 1.5rem;
  animation: badge-enter 600ms ease backwards;
  animation-delay: 200ms;
}

.badge-glyph {
  color: #f59e0b;
}

.badge-label {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-soft);
}

.page-title {
  font-size: 2.5rem;
  font-weight: 700;
  color: var(--ink);
  letter-spacing: -0.025em;
  line-height: 1.1;
  margin-bottom: 1rem;
}

.title-accent {
  background: linear-gradient(90deg, #2563eb, #7c3aed);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.page-subtitle {
  font-size: var(--text-lg);
  color: var(--ink-soft);
  max-width: 42rem;
  margin: 0 auto;
  line-height: 1.7;
}

/* === Bento Grid === */
.page-main {
  padding: 0 1.5rem 4rem;
}

.bento-grid {
  max-width: 80rem;
  margin: 0 auto;
  display: grid;
  grid-template-columns: 1fr;
  gap: 1rem;
}

/* === Bento Card === */
.bento-card {
  position: relative;
  overflow: hidden;
  border-radius: 1.5rem;
  background: var(--card-fill);
  backdrop-filter: blur(24px);
  border: 1px solid var(--card-border);
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.04);
  transition: transform 300ms ease-out, box-shadow 500ms ease;
  animation: card-enter var(--enter-duration) var(--enter-ease) backwards;
  animation-delay: calc(var(--enter-base) + var(--index) * var(--enter-step));
}

.bento-card:hover {
  transform: scale(1.02);
  box-shadow: 0 8px 40px rgba(0, 0, 0, 0.08);
}

.bento-card__body {
  position: relative;
  z-index: 1;
  height: 100%;
  padding: 1.5rem;
}

.bento-card__sheen {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, rgba(255, 255, 255, 0.4), transparent 60%);
  pointer-events: none;
}

/* Accent washes */
.accent-blue {
  background: linear-gradient(135deg, rgba(239, 246, 255, 0.8), rgba(238, 242, 255, 0.8));
}

.accent-amber {
  background: linear-gradient(135deg, rgba(255, 251, 235, 0.8), rgba(255, 247, 237, 0.8));
}

.accent-emerald {
  background: linear-gradient(135deg, rgba(236, 253, 245, 0.8), rgba(240, 253, 250, 0.8));
}

.accent-rose {
  background: linear-gradient(135deg, rgba(255, 241, 242, 0.8), rgba(253, 242, 248, 0.8));
}

.accent-violet {
  background: linear-gradient(135deg, rgba(245, 243, 255, 0.8), rgba(250, 245, 255, 0.8));
}

.accent-cyan {
  background: linear-gradient(135deg, rgba(236, 254, 255, 0.8), rgba(240, 249, 255, 0.8));
}

.accent-indigo {
  background: linear-gradient(135deg, rgba(238, 242, 255, 0.8), rgba(239, 246, 255, 0.8));
}

.accent-ink {
  background: linear-gradient(135deg, #0f172a, #1e293b);
  border-color: rgba(255, 255, 255, 0.1);
  color: #ffffff;
}

/* === Tags === */
.tag {
  display: inline-flex;
  align-items: center;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: var(--text-xs);
  font-weight: 500;
  border: 1px solid transparent;
}

.tag--blue {
  background: #eff6ff;
  color: #1d4ed8;
  border-color: #dbeafe;
}

.tag--amber {
  background: #fffbeb;
  color: #b45309;
  border-color: #fef3c7;
}

.tag--emerald {
  background: #ecfdf5;
  color: #047857;
  border-color: #d1fae5;
}

.tag--rose {
  background: #fff1f2;
  color: #be123c;
  border-color: #ffe4e6;
}

.tag--violet {
  background: #f5f3ff;
  color: #6d28d9;
  border-color: #ede9fe;
}

/* === Icon Chips === */
.icon-chip {
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
  width: 2rem;
  height: 2rem;
  border-radius: 0.75rem;
  font-size: 1rem;
}

.icon-chip--lg {
  width: 3rem;
  height: 3rem;
  border-radius: 1rem;
  font-size: 1.5rem;
}

.icon-chip--blue { background: #dbeafe; }
.icon-chip--amber { background: #fef3c7; }
.icon-chip--emerald { background: #d1fae5; }
.icon-chip--rose { background: #ffe4e6; }
.icon-chip--violet { background: #ede9fe; }

/* === Card Interiors === */
.stack-between {
  height: 100%;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  gap: 1.5rem;
}

.card-title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--ink);
  margin: 0.75rem 0 0.5rem;
}

.card-title--hero {
  font-size: var(--text-2xl);
  margin-top: 1rem;
  margin-bottom: 1rem;
}

.card-text {
  color: var(--ink-soft);
  line-height: 1.7;
}

.card-text--sm {
  font-size: var(--text-sm);
}

.card-glyph {
  font-size: 1.75rem;
  line-height: 1;
  margin-bottom: 0.75rem;
  display: block;
}

.em-rose { color: #e11d48; font-weight: 600; }
.em-cyan { color: #0891b2; font-weight: 600; }
.em-indigo { color: #4f46e5; font-weight: 600; }

/* Feature rows (icon chip + lead + one-liner) */
.feature-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.feature-row {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
}

.feature-lead {
  font-weight: 600;
  color: var(--ink);
  font-size: var(--text-base);
}

.feature-desc {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

/* Quote card */
.quote-glyph {
  font-size: 2.25rem;
  color: #f59e0b;
  line-height: 1;
  margin-bottom: 1rem;
  display: block;
}

.quote-text {
  font-size: var(--text-xl);
  font-weight: 500;
  color: #1e293b;
  line-height: 1.6;
}

.quote-cite {
  display: block;
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--ink-muted);
  font-style: normal;
}

/* Path panels (growth vs. skill) */
.path-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-top: 1rem;
}

.path-panel {
  padding: 1rem;
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.6);
  border: 1px solid #d1fae5;
}

.path-panel--muted {
  background: rgba(248, 250, 252, 0.6);
  border-color: #f1f5f9;
}

.path-head {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
  font-weight: 600;
  color: var(--ink);
}

.path-panel--muted .path-head {
  color: #334155;
}

.path-items {
  list-style: none;
  font-size: var(--text-sm);
  color: var(--ink-soft);
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.path-note {
  font-size: var(--text-xs);
  color: var(--ink-faint);
  margin-top: 0.5rem;
}

/* Theme tiles (2x2 mini grid) */
.mini-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.5rem;
}

.theme-tile {
  padding: 0.75rem;
  border-radius: 0.75rem;
  text-align: center;
  border: 1px solid transparent;
}

.tile-emoji {
  font-size: 1.5rem;
}

.tile-label {
  display: block;
  font-size: var(--text-sm);
  font-weight: 500;
  margin-top: 0.25rem;
}

.theme-tile--rose { background: #fff1f2; border-color: #ffe4e6; }
.theme-tile--rose .tile-label { color: #be123c; }
.theme-tile--amber { background: #fffbeb; border-color: #fef3c7; }
.theme-tile--amber .tile-label { color: #b45309; }
.theme-tile--blue { background: #eff6ff; border-color: #dbeafe; }
.theme-tile--blue .tile-label { color: #1d4ed8; }
.theme-tile--emerald { background: #ecfdf5; border-color: #d1fae5; }
.theme-tile--emerald .tile-label { color: #047857; }

/* Step panels */
.step-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.step-panel {
  padding: 0.75rem;
  border-radius: 0.75rem;
  background: #f8fafc;
  border: 1px solid #f1f5f9;
}

.step-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: #334155;
  display: block;
}

.step-text {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

/* Plain pills */
.pill-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.plain-pill {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.6);
  font-size: var(--text-sm);
  color: var(--ink-soft);
  border: 1px solid #ede9fe;
}

/* Arrow chain */
.arrow-chain {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: #0e7490;
}

/* Inner callout */
.callout-panel {
  padding: 1rem;
  border-radius: 0.75rem;
  background: rgba(255, 255, 255, 0.6);
  border: 1px solid #e0e7ff;
  font-size: var(--text-sm);
  color: #334155;
  line-height: 1.7;
}

.callout-lead {
  font-weight: 600;
}

/* Final quote (dark card) */
.final-quote {
  font-size: var(--text-xl);
  font-weight: 500;
  color: #ffffff;
  line-height: 1.6;
}

.final-accent {
  color: #93c5fd;
}

.final-row {
  margin-top: 1.5rem;
  display: flex;
  align-items: center;
  gap: 1rem;
}

.final-chip {
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.1);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
  flex-shrink: 0;
}

.final-lead {
  font-weight: 600;
  color: #ffffff;
}

.final-note {
  font-size: var(--text-sm);
  color: var(--ink-faint);
}

/* Action list */
.action-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 0.75rem;
}

.action-item {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

.action-number {
  width: 1.5rem;
  height: 1.5rem;
  border-radius: 9999px;
  background: #dbeafe;
  color: #2563eb;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: var(--text-sm);
  font-weight: 700;
  flex-shrink: 0;
}

.action-text {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

/* === Page Footer === */
.page-footer {
  padding: 2rem 1.5rem;
  text-align: center;
  animation: fade-in 800ms ease backwards;
  animation-delay: 1500ms;
}

.footer-line {
  font-size: var(--text-sm);
  color: var(--ink-muted);
}

.footer-hint {
  font-size: var(--text-xs);
  color: var(--ink-faint);
  margin-top: 0.5rem;
}

/* === Keyframes === */
@keyframes header-enter {
  from { opacity: 0; transform: translateY(-20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes badge-enter {
  from { opacity: 0; transform: scale(0.9); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes card-enter {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Responsive Layout === */
@media (min-width: 768px) {
  .page-header {
    padding: 3rem 1.5rem 3.5rem;
  }

  .page-title {
    font-size: var(--text-hero);
  }

  .bento-grid {
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
  }

  .bento-card--cols-2 {
    grid-column: span 2;
  }

  .bento-card--rows-2 {
    grid-row: span 2;
  }

  .bento-card__body {
    padding: 2rem;
  }

  .card-title--hero {
    font-size: var(--text-3xl);
  }

  .quote-text {
    font-size: var(--text-2xl);
  }
}

@media (min-width: 1024px) {
  .bento-grid {
    grid-template-columns: repeat(4, 1fr);
  }
}

/* === Accessibility === */
*:focus-visible {
  outline: 2px solid #2563eb;
  outline-offset: 2px;
}

@media (prefers-reduced-motion: reduce) {
  *,
  *::before,
  *::after {
    animation-duration: 0.01ms !important;
    animation-iteration-count: 1 !important;
    transition-duration: 0.01ms !important;
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CardAccent, TagColor};
    use crate::theme::{colors, motion};

    #[test]
    fn stagger_rule_uses_the_shared_motion_constants() {
        assert!(GLOBAL_STYLES
            .contains("animation-delay: calc(var(--enter-base) + var(--index) * var(--enter-step))"));
        assert!(GLOBAL_STYLES.contains(&format!("--enter-base: {}ms", motion::ENTER_BASE_DELAY_MS)));
        assert!(GLOBAL_STYLES.contains(&format!("--enter-step: {}ms", motion::ENTER_STAGGER_MS)));
        assert!(GLOBAL_STYLES.contains(&format!("--enter-duration: {}ms", motion::ENTER_DURATION_MS)));
        assert!(GLOBAL_STYLES.contains(motion::ENTER_EASE));
    }

    #[test]
    fn hover_scale_matches_motion_constant() {
        assert!(GLOBAL_STYLES.contains(&format!("scale({})", motion::HOVER_SCALE)));
        assert!(GLOBAL_STYLES.contains(&format!("transform {}ms ease-out", motion::HOVER_SCALE_MS)));
    }

    #[test]
    fn header_and_footer_timings_match_motion_constants() {
        assert!(GLOBAL_STYLES.contains(&format!("header-enter {}ms", motion::HEADER_ENTER_MS)));
        assert!(GLOBAL_STYLES.contains(&format!("badge-enter {}ms", motion::BADGE_ENTER_MS)));
        assert!(GLOBAL_STYLES.contains(&format!("fade-in {}ms", motion::FOOTER_FADE_MS)));
        assert!(GLOBAL_STYLES.contains(&format!("animation-delay: {}ms", motion::FOOTER_DELAY_MS)));
        assert!(GLOBAL_STYLES.contains(&format!("animation-delay: {}ms", motion::BADGE_DELAY_MS)));
    }

    #[test]
    fn entrance_keyframes_are_declared() {
        for name in ["header-enter", "badge-enter", "card-enter", "fade-in"] {
            assert!(
                GLOBAL_STYLES.contains(&format!("@keyframes {}", name)),
                "missing keyframes {}",
                name
            );
        }
    }

    #[test]
    fn grid_breakpoints_are_declared() {
        assert!(GLOBAL_STYLES.contains("grid-template-columns: 1fr"));
        assert!(GLOBAL_STYLES.contains("@media (min-width: 768px)"));
        assert!(GLOBAL_STYLES.contains("repeat(3, 1fr)"));
        assert!(GLOBAL_STYLES.contains("@media (min-width: 1024px)"));
        assert!(GLOBAL_STYLES.contains("repeat(4, 1fr)"));
    }

    #[test]
    fn span_classes_only_exist_behind_the_grid_breakpoint() {
        // Span rules live inside the 768px media query; the narrow layout
        // is strictly single-column.
        let narrow = &GLOBAL_STYLES[..GLOBAL_STYLES.find("@media (min-width: 768px)").unwrap()];
        assert!(!narrow.contains("grid-column: span"));
        assert!(!narrow.contains("grid-row: span"));
    }

    #[test]
    fn every_tag_color_has_a_rule() {
        for color in TagColor::ALL {
            assert!(
                GLOBAL_STYLES.contains(&format!(".{} {{", color.class())),
                "missing rule for {:?}",
                color
            );
        }
    }

    #[test]
    fn every_card_accent_has_a_rule() {
        for accent in CardAccent::ALL {
            assert!(
                GLOBAL_STYLES.contains(&format!(".{} {{", accent.class())),
                "missing rule for {:?}",
                accent
            );
        }
    }

    #[test]
    fn palette_constants_appear_in_the_stylesheet() {
        for value in [
            colors::PAPER,
            colors::CARD_FILL,
            colors::CARD_BORDER,
            colors::INK,
            colors::TITLE_FROM,
            colors::TITLE_TO,
            colors::BLUE_TEXT,
            colors::AMBER_TEXT,
            colors::EMERALD_TEXT,
            colors::ROSE_TEXT,
            colors::VIOLET_TEXT,
            colors::DARK_FROM,
            colors::DARK_TO,
            colors::DARK_ACCENT,
        ] {
            assert!(GLOBAL_STYLES.contains(value), "missing palette value {}", value);
        }
    }

    #[test]
    fn reduced_motion_override_is_present() {
        assert!(GLOBAL_STYLES.contains("@media (prefers-reduced-motion: reduce)"));
    }
}
