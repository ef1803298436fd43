//! Theme catalogue and stylesheet assembly.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Visual themes a portfolio can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Modern,
    Minimalist,
    Creative,
    Dark,
    Gradient,
    Neon,
    Ocean,
    Sunset,
    Forest,
    Royal,
    Monochrome,
    Pastel,
}

impl Theme {
    pub const ALL: [Theme; 12] = [
        Theme::Modern,
        Theme::Minimalist,
        Theme::Creative,
        Theme::Dark,
        Theme::Gradient,
        Theme::Neon,
        Theme::Ocean,
        Theme::Sunset,
        Theme::Forest,
        Theme::Royal,
        Theme::Monochrome,
        Theme::Pastel,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Minimalist => "minimalist",
            Theme::Creative => "creative",
            Theme::Dark => "dark",
            Theme::Gradient => "gradient",
            Theme::Neon => "neon",
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Royal => "royal",
            Theme::Monochrome => "monochrome",
            Theme::Pastel => "pastel",
        }
    }

    /// Look up a theme, falling back to [`Theme::Modern`] for unknown ids.
    pub fn resolve(theme_id: &str) -> Self {
        theme_id.parse().unwrap_or_else(|_| {
            if !theme_id.trim().is_empty() {
                tracing::warn!("Unknown theme '{}', using modern", theme_id);
            }
            Theme::default()
        })
    }

    /// Override block appended to the base stylesheet.
    pub fn css(self) -> &'static str {
        match self {
            Theme::Modern => MODERN_CSS,
            Theme::Minimalist => MINIMALIST_CSS,
            Theme::Creative => CREATIVE_CSS,
            Theme::Dark => DARK_CSS,
            Theme::Gradient => GRADIENT_CSS,
            Theme::Neon => NEON_CSS,
            Theme::Ocean => OCEAN_CSS,
            Theme::Sunset => SUNSET_CSS,
            Theme::Forest => FOREST_CSS,
            Theme::Royal => ROYAL_CSS,
            Theme::Monochrome => MONOCHROME_CSS,
            Theme::Pastel => PASTEL_CSS,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown theme: {}", wanted))
    }
}

/// Base stylesheet followed by the block for `theme_id`.
pub fn stylesheet(theme_id: &str) -> String {
    let theme = Theme::resolve(theme_id);
    let mut css = String::with_capacity(BASE_CSS.len() + theme.css().len());
    css.push_str(BASE_CSS);
    css.push_str(theme.css());
    css
}

const BASE_CSS: &str = r#"/* Base Styles */
:root {
  --primary-color: #667eea;
  --secondary-color: #764ba2;
  --accent-color: #f093fb;
  --text-color: #333333;
  --text-light: #666666;
  --bg-color: #ffffff;
  --bg-alt: #f8f9fa;
  --nav-bg: rgba(33, 37, 41, 0.95);
  --hero-bg: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
  --shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
  --shadow-lg: 0 10px 30px rgba(0, 0, 0, 0.15);
  --transition: all 0.3s ease;
  --radius: 8px;
  --radius-lg: 15px;
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
  scroll-padding-top: 80px;
}

body {
  font-family: 'Inter', 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
  line-height: 1.6;
  color: var(--text-color);
  background: var(--bg-color);
}

h1, h2, h3, h4, h5, h6 {
  font-weight: 600;
  line-height: 1.2;
}

.section-padding {
  padding: 100px 0;
}

.section-title {
  font-size: 2.5rem;
  margin-bottom: 1rem;
  color: var(--text-color);
}

.section-divider {
  width: 60px;
  height: 4px;
  margin: 0 auto 1.5rem;
  border-radius: 2px;
  background: var(--primary-color);
}

.section-subtitle {
  color: var(--text-light);
}

/* Navigation */
.navbar {
  background: var(--nav-bg);
  transition: var(--transition);
}

.navbar.scrolled {
  box-shadow: var(--shadow);
}

.nav-link.active {
  color: var(--accent-color) !important;
}

/* Hero */
.hero-section {
  background: var(--hero-bg);
  color: #ffffff;
  position: relative;
}

.hero-title {
  font-size: 3.5rem;
  font-weight: 700;
}

.hero-subtitle {
  font-size: 1.5rem;
  opacity: 0.9;
}

.hero-photo {
  width: 320px;
  height: 320px;
  object-fit: cover;
  border-radius: 50%;
  box-shadow: var(--shadow-lg);
}

.hero-placeholder {
  text-align: center;
  font-size: 12rem;
  opacity: 0.6;
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
}

.scroll-link {
  color: #ffffff;
  font-size: 1.5rem;
}

.social-links a,
.footer-social a {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 44px;
  height: 44px;
  margin-right: 0.5rem;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.15);
  color: #ffffff;
  transition: var(--transition);
}

.social-links a:hover,
.footer-social a:hover {
  background: var(--accent-color);
  transform: translateY(-3px);
}

/* About */
.about-text {
  font-size: 1.15rem;
  color: var(--text-light);
}

.info-item {
  display: flex;
  gap: 0.75rem;
  align-items: flex-start;
}

/* Skills */
.skills-container {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
}

.skill-item {
  display: inline-flex;
  gap: 0.5rem;
  align-items: center;
  padding: 10px 20px;
  border-radius: 50px;
  background: linear-gradient(45deg, var(--primary-color), var(--secondary-color));
  color: #ffffff;
  box-shadow: var(--shadow);
}

.skill-level {
  font-size: 0.75rem;
  opacity: 0.85;
}

/* Projects */
.project-card {
  background: var(--bg-color);
  border-radius: var(--radius-lg);
  overflow: hidden;
  box-shadow: var(--shadow);
  transition: var(--transition);
}

.project-image {
  position: relative;
  height: 200px;
  overflow: hidden;
}

.project-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.6);
  opacity: 0;
  transition: var(--transition);
}

.project-card:hover .project-overlay {
  opacity: 1;
}

.project-placeholder {
  height: 200px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 4rem;
  color: #ffffff;
  background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
}

.project-content {
  padding: 1.5rem;
}

.project-tech {
  font-size: 0.85rem;
  color: var(--primary-color);
}

.project-description {
  color: var(--text-light);
}

/* Contact */
.contact-form .form-control {
  border-radius: var(--radius);
}

/* Footer */
.footer-social {
  text-align: right;
}

.back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  width: 48px;
  height: 48px;
  border: none;
  border-radius: 50%;
  background: var(--primary-color);
  color: #ffffff;
  opacity: 0;
  visibility: hidden;
  transition: var(--transition);
}

.back-to-top.visible {
  opacity: 1;
  visibility: visible;
}
"#;

const MODERN_CSS: &str = r#"
/* Theme: modern */
.navbar {
  backdrop-filter: blur(10px);
}
"#;

const MINIMALIST_CSS: &str = r#"
/* Theme: minimalist */
:root {
  --primary-color: #2c3e50;
  --secondary-color: #34495e;
  --accent-color: #95a5a6;
  --hero-bg: #ffffff;
  --nav-bg: rgba(255, 255, 255, 0.98);
}

.hero-section,
.scroll-link {
  color: var(--text-color);
}

.nav-link {
  color: var(--text-color) !important;
}

.skill-item {
  background: transparent;
  color: var(--text-color);
  border: 1px solid var(--primary-color);
  box-shadow: none;
}
"#;

const CREATIVE_CSS: &str = r#"
/* Theme: creative */
:root {
  --primary-color: #ff6b6b;
  --secondary-color: #feca57;
  --accent-color: #48dbfb;
}

.project-card {
  transform: rotate(-1deg);
}

.project-card:hover {
  transform: rotate(0) scale(1.02);
}
"#;

const DARK_CSS: &str = r#"
/* Theme: dark */
:root {
  --primary-color: #bb86fc;
  --secondary-color: #3700b3;
  --accent-color: #03dac6;
  --text-color: #e0e0e0;
  --text-light: #a0a0a0;
  --bg-color: #121212;
  --bg-alt: #1e1e1e;
  --nav-bg: rgba(18, 18, 18, 0.95);
  --hero-bg: #121212;
}

.bg-light {
  background: var(--bg-alt) !important;
}
"#;

const GRADIENT_CSS: &str = r#"
/* Theme: gradient */
:root {
  --primary-color: #f093fb;
  --secondary-color: #f5576c;
  --accent-color: #4facfe;
  --hero-bg: linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%);
}
"#;

const NEON_CSS: &str = r#"
/* Theme: neon */
:root {
  --primary-color: #39ff14;
  --secondary-color: #ff00ff;
  --accent-color: #00ffff;
  --text-color: #f0f0f0;
  --text-light: #b0b0b0;
  --bg-color: #0a0a0a;
  --bg-alt: #111111;
  --nav-bg: rgba(10, 10, 10, 0.95);
  --hero-bg: #0a0a0a;
}

.hero-title .text-primary {
  text-shadow: 0 0 10px var(--primary-color), 0 0 20px var(--primary-color);
}

.skill-item {
  background: transparent;
  border: 1px solid var(--accent-color);
  box-shadow: 0 0 8px var(--accent-color);
}
"#;

const OCEAN_CSS: &str = r#"
/* Theme: ocean */
:root {
  --primary-color: #0077b6;
  --secondary-color: #00b4d8;
  --accent-color: #90e0ef;
  --bg-alt: #e0f7fa;
}
"#;

const SUNSET_CSS: &str = r#"
/* Theme: sunset */
:root {
  --primary-color: #ff7e5f;
  --secondary-color: #feb47b;
  --accent-color: #ffd194;
  --bg-alt: #fff4ec;
}
"#;

const FOREST_CSS: &str = r#"
/* Theme: forest */
:root {
  --primary-color: #2d6a4f;
  --secondary-color: #40916c;
  --accent-color: #95d5b2;
  --bg-alt: #edf6f0;
}
"#;

const ROYAL_CSS: &str = r#"
/* Theme: royal */
:root {
  --primary-color: #4b0082;
  --secondary-color: #9b59b6;
  --accent-color: #f1c40f;
}

.section-divider {
  background: var(--accent-color);
}
"#;

const MONOCHROME_CSS: &str = r#"
/* Theme: monochrome */
:root {
  --primary-color: #000000;
  --secondary-color: #444444;
  --accent-color: #888888;
  --hero-bg: #111111;
}

img {
  filter: grayscale(100%);
}
"#;

const PASTEL_CSS: &str = r#"
/* Theme: pastel */
:root {
  --primary-color: #a29bfe;
  --secondary-color: #fab1a0;
  --accent-color: #ffeaa7;
  --text-color: #2d3436;
  --hero-bg: linear-gradient(135deg, #ffeaa7, #fab1a0);
  --nav-bg: rgba(255, 234, 167, 0.95);
}

.hero-section,
.scroll-link {
  color: var(--text-color);
}

#skills.bg-light {
  background: #fce4ec !important;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_a_marked_block() {
        for theme in Theme::ALL {
            let css = stylesheet(theme.id());
            assert!(css.starts_with("/* Base Styles */"));
            assert!(css.contains(&format!("/* Theme: {} */", theme.id())));
        }
    }

    #[test]
    fn unknown_theme_falls_back_to_modern() {
        assert_eq!(stylesheet("vaporwave"), stylesheet("modern"));
        assert_eq!(stylesheet(""), stylesheet("modern"));
        assert_eq!(Theme::resolve("vaporwave"), Theme::Modern);
    }

    #[test]
    fn theme_ids_are_case_insensitive() {
        assert_eq!("Ocean".parse::<Theme>(), Ok(Theme::Ocean));
        assert!(stylesheet("NEON").contains("/* Theme: neon */"));
    }
}
