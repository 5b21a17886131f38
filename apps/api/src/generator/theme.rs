//! Archetype colour themes and the global stylesheet built from them.

use serde::Serialize;

use crate::selection::archetype::Archetype;
use crate::selection::layout::PageDensity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub accent: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    /// Google font loaded by `app/layout.tsx`.
    pub font: &'static str,
    pub dark: bool,
}

impl Theme {
    pub fn for_archetype(archetype: Archetype) -> Self {
        match archetype {
            Archetype::Technical => Theme {
                accent: "#22d3ee",
                background: "#020617",
                foreground: "#e2e8f0",
                muted: "#64748b",
                font: "JetBrains_Mono",
                dark: true,
            },
            Archetype::Creative => Theme {
                accent: "#f472b6",
                background: "#0f0a1a",
                foreground: "#fdf4ff",
                muted: "#a78bfa",
                font: "Space_Grotesk",
                dark: true,
            },
            Archetype::Business => Theme {
                accent: "#2563eb",
                background: "#ffffff",
                foreground: "#0f172a",
                muted: "#64748b",
                font: "Inter",
                dark: false,
            },
            Archetype::General => Theme {
                accent: "#8b5cf6",
                background: "#0a0a0a",
                foreground: "#fafafa",
                muted: "#a1a1aa",
                font: "Inter",
                dark: true,
            },
        }
    }
}

/// `app/globals.css`: Tailwind layers, theme variables and density-driven spacing.
pub fn globals_css(theme: &Theme, density: PageDensity) -> String {
    format!(
        r#"@tailwind base;
@tailwind components;
@tailwind utilities;

:root {{
  --accent: {accent};
  --background: {background};
  --foreground: {foreground};
  --muted: {muted};
  --section-spacing: {spacing};
  color-scheme: {scheme};
}}

body {{
  background: var(--background);
  color: var(--foreground);
}}

.section {{
  padding-top: var(--section-spacing);
  padding-bottom: var(--section-spacing);
}}

.section-heading {{
  color: var(--accent);
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 2rem;
  text-align: center;
}}
"#,
        accent = theme.accent,
        background = theme.background,
        foreground = theme.foreground,
        muted = theme.muted,
        spacing = density.section_spacing(),
        scheme = if theme.dark { "dark" } else { "light" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_archetype_has_distinct_accent() {
        let accents: Vec<_> = [
            Archetype::Technical,
            Archetype::Creative,
            Archetype::Business,
            Archetype::General,
        ]
        .into_iter()
        .map(|a| Theme::for_archetype(a).accent)
        .collect();
        let mut deduped = accents.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), accents.len());
    }

    #[test]
    fn test_business_theme_is_light() {
        assert!(!Theme::for_archetype(Archetype::Business).dark);
        let css = globals_css(&Theme::for_archetype(Archetype::Business), PageDensity::Balanced);
        assert!(css.contains("color-scheme: light;"));
        assert!(css.contains("--accent: #2563eb;"));
    }

    #[test]
    fn test_density_controls_spacing() {
        let theme = Theme::for_archetype(Archetype::General);
        assert!(globals_css(&theme, PageDensity::Airy).contains("--section-spacing: 7rem;"));
        assert!(globals_css(&theme, PageDensity::Dense).contains("--section-spacing: 3rem;"));
    }
}
