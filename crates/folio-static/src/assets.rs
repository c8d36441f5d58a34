//! Stylesheet and script assets for the exported site.

use folio_model::Theme;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate `styles.css`: the theme palette followed by the layout rules.
    ///
    /// Palette values are written verbatim. When `minify` is set only the
    /// layout rules are minified, so colors are never rewritten.
    pub fn generate_css(theme: &Theme, minify: bool) -> String {
        let layout = if minify {
            match Self::minify_css(LAYOUT_CSS) {
                Ok(css) => css,
                Err(e) => {
                    tracing::warn!("Falling back to unminified CSS: {}", e);
                    LAYOUT_CSS.to_string()
                }
            }
        } else {
            LAYOUT_CSS.to_string()
        };

        format!("{}\n{}", Self::palette_block(theme), layout)
    }

    /// The `:root` block declaring the five theme colors.
    ///
    /// Only the colors come from the theme; its id and name stay out of the
    /// stylesheet.
    pub fn palette_block(theme: &Theme) -> String {
        let colors = &theme.colors;
        format!(
            "/* Portfolio Website Styles */\n:root {{\n    --primary: {};\n    --secondary: {};\n    --accent: {};\n    --background: {};\n    --text: {};\n}}\n",
            colors.primary, colors.secondary, colors.accent, colors.background, colors.text
        )
    }

    /// Generate `script.js`. The script does not depend on portfolio data.
    pub fn generate_js() -> &'static str {
        SITE_JS
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

// Layout rules. Colors come only from the palette custom properties.
const LAYOUT_CSS: &str = r#"* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    --border-radius: 0.75rem;
    --transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: var(--text);
    background: var(--background);
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

/* Hero */
.hero {
    background: linear-gradient(135deg, var(--primary), var(--accent));
    color: #ffffff;
    padding: 6rem 0;
    text-align: center;
    position: relative;
    overflow: hidden;
}

.hero-title {
    font-size: 3.5rem;
    font-weight: 700;
    margin-bottom: 1rem;
}

.hero-subtitle {
    font-size: 1.5rem;
    font-weight: 400;
    margin-bottom: 2rem;
    opacity: 0.9;
}

.hero-description {
    font-size: 1.1rem;
    max-width: 600px;
    margin: 0 auto 2rem;
    opacity: 0.9;
}

.hero-description p + p {
    margin-top: 0.75rem;
}

.contact-info {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 2rem;
    margin-bottom: 2rem;
}

.contact-item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-size: 0.9rem;
}

.contact-item a {
    color: inherit;
}

.social-links {
    display: flex;
    justify-content: center;
    gap: 1rem;
}

.social-link {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 2.5rem;
    height: 2.5rem;
    background: rgba(255, 255, 255, 0.2);
    border-radius: 50%;
    color: #ffffff;
    transition: var(--transition);
}

.social-link:hover {
    background: rgba(255, 255, 255, 0.3);
    transform: translateY(-2px);
}

.section-nav {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 1.5rem;
    margin-top: 2.5rem;
}

.section-nav a {
    color: #ffffff;
    text-decoration: none;
    font-weight: 500;
    opacity: 0.85;
}

.section-nav a:hover {
    opacity: 1;
}

/* Sections */
.section {
    padding: 4rem 0;
}

.section:nth-child(even) {
    background: var(--secondary);
}

.section-title {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    margin-bottom: 3rem;
    font-size: 2.5rem;
    font-weight: 600;
    color: var(--primary);
}

.card {
    background: var(--background);
    border: 1px solid var(--secondary);
    border-radius: var(--border-radius);
    box-shadow: var(--shadow);
}

/* Skills */
.skills-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
}

.skill-category {
    padding: 2rem;
}

.skill-category-title {
    margin-bottom: 1rem;
    font-size: 1.25rem;
    font-weight: 600;
    color: var(--primary);
}

.skill-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.skill-tag {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    background: var(--primary);
    color: #ffffff;
    font-size: 0.875rem;
    font-weight: 500;
}

.skill-level {
    padding: 0.125rem 0.5rem;
    border-radius: 9999px;
    background: rgba(255, 255, 255, 0.2);
    font-size: 0.75rem;
}

/* Timeline */
.timeline {
    max-width: 800px;
    margin: 0 auto;
    position: relative;
}

.timeline-item {
    position: relative;
    margin-bottom: 2rem;
    padding: 2rem;
}

.timeline-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    flex-wrap: wrap;
    gap: 1rem;
    margin-bottom: 0.5rem;
}

.timeline-title {
    font-size: 1.25rem;
    font-weight: 600;
}

.timeline-date {
    display: flex;
    align-items: center;
    gap: 0.25rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--primary);
}

.timeline-company {
    margin-bottom: 1rem;
    font-weight: 500;
    color: var(--primary);
}

.timeline-description,
.project-description {
    margin-bottom: 1rem;
}

.timeline-description p + p,
.project-description p + p {
    margin-top: 0.5rem;
}

/* Tech tags */
.tech-tags {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.tech-tag {
    padding: 0.25rem 0.75rem;
    border: 1px solid var(--primary);
    border-radius: 9999px;
    background: var(--secondary);
    color: var(--text);
    font-size: 0.75rem;
    font-weight: 500;
}

/* Projects */
.projects-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
    gap: 2rem;
}

.project-card {
    overflow: hidden;
    transition: var(--transition);
}

.project-card:hover {
    transform: translateY(-4px);
    box-shadow: var(--shadow-lg);
}

.project-card.featured {
    border: 2px solid var(--primary);
}

.project-image {
    width: 100%;
    height: 200px;
    overflow: hidden;
}

.project-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.project-content {
    padding: 1.5rem;
}

.project-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 1rem;
    margin-bottom: 1rem;
}

.project-title {
    font-size: 1.25rem;
    font-weight: 600;
}

.featured-badge {
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: var(--primary);
    color: #ffffff;
    font-size: 0.75rem;
    font-weight: 500;
}

.project-links {
    display: flex;
    gap: 0.75rem;
    margin-top: 1rem;
}

.project-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: var(--border-radius);
    background: var(--primary);
    color: #ffffff;
    text-decoration: none;
    font-size: 0.875rem;
    font-weight: 500;
    transition: var(--transition);
}

.project-link:hover {
    background: var(--accent);
    transform: translateY(-1px);
}

/* Reveal on scroll */
.reveal {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.reveal.visible {
    opacity: 1;
    transform: translateY(0);
}

/* Footer */
.footer {
    padding: 2rem 0;
    background: var(--text);
    color: var(--background);
    text-align: center;
}

@media (max-width: 768px) {
    .hero-title {
        font-size: 2.5rem;
    }

    .hero-subtitle {
        font-size: 1.25rem;
    }

    .contact-info {
        gap: 1rem;
    }

    .timeline-header,
    .project-header {
        flex-direction: column;
    }

    .projects-grid {
        grid-template-columns: 1fr;
    }
}

@media (max-width: 480px) {
    .hero {
        padding: 4rem 0;
    }

    .hero-title {
        font-size: 2rem;
    }

    .section {
        padding: 3rem 0;
    }

    .section-title {
        font-size: 2rem;
    }

    .contact-info {
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
    }
}
"#;

const SITE_JS: &str = r##"// Portfolio website behavior
document.addEventListener('DOMContentLoaded', function () {
  'use strict';

  // Icons
  if (window.lucide) {
    window.lucide.createIcons();
  }

  // Smooth scrolling for in-page anchors
  document.querySelectorAll('a[href^="#"]').forEach(function (anchor) {
    anchor.addEventListener('click', function (e) {
      const id = anchor.getAttribute('href');
      const target = id && id.length > 1 ? document.querySelector(id) : null;
      if (target) {
        e.preventDefault();
        target.scrollIntoView({ behavior: 'smooth', block: 'start' });
      }
    });
  });

  // Reveal timeline items and project cards as they scroll into view
  const revealed = document.querySelectorAll('.timeline-item, .project-card');

  if (!('IntersectionObserver' in window)) {
    return;
  }

  const observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (entry.isIntersecting) {
        entry.target.classList.add('visible');
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

  revealed.forEach(function (el) {
    el.classList.add('reveal');
    observer.observe(el);
  });
});
"##;
