//! Template engine for rendering the exported page and README.

use minijinja::{context, Environment};
use serde::Serialize;

use folio_model::{PersonalInfo, SocialLinks};

use crate::generator::SkillGroup;

/// A collection entry paired with its rendered markdown description.
#[derive(Debug, Clone, Serialize)]
pub struct Rendered<'a, T> {
    pub item: &'a T,
    /// Description HTML from the markdown renderer; empty when absent
    pub html: String,
}

/// A link in the hero navigation to a rendered section.
#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

/// Context for rendering `index.html`.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext<'a> {
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Footer and author name
    pub owner: String,
    /// `<body>` class
    pub theme_id: &'a str,
    pub personal: &'a PersonalInfo,
    pub social: &'a SocialLinks,
    /// Rendered `about` markdown
    pub about_html: String,
    pub nav: Vec<NavLink>,
    pub skill_groups: Vec<SkillGroup<'a>>,
    pub experiences: Vec<Rendered<'a, folio_model::Experience>>,
    pub education: Vec<Rendered<'a, folio_model::Education>>,
    pub projects: Vec<Rendered<'a, folio_model::Project>>,
}

/// Template engine using minijinja.
///
/// `index.html` is rendered with HTML auto-escaping, so every interpolated
/// plain-text field is escaped. Markdown HTML is inserted with `|safe`.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("level", format_level);

        env.add_template("index.html", INDEX_TEMPLATE)
            .expect("Failed to add index template");

        env.add_template("README.md", README_TEMPLATE)
            .expect("Failed to add README template");

        Self { env }
    }

    /// Render the site's `index.html`.
    pub fn render_page(&self, page: &PageContext<'_>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            title => &page.title,
            description => &page.description,
            owner => &page.owner,
            theme_id => page.theme_id,
            personal => page.personal,
            social => page.social,
            about_html => &page.about_html,
            nav => &page.nav,
            skill_groups => &page.skill_groups,
            experiences => &page.experiences,
            education => &page.education,
            projects => &page.projects,
        })
    }

    /// Render the site's `README.md`.
    pub fn render_readme(&self, name: &str) -> Result<String, minijinja::Error> {
        self.env.get_template("README.md")?.render(context! { name => name })
    }
}

/// Whole levels print without a fractional part: `7`, not `7.0`.
fn format_level(level: f64) -> String {
    level.to_string()
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <meta name="description" content="{{ description }}">
    <meta name="author" content="{{ owner }}">

    <!-- Open Graph -->
    <meta property="og:type" content="website">
    <meta property="og:title" content="{{ title }}">
    <meta property="og:description" content="{{ description }}">

    <!-- Twitter -->
    <meta property="twitter:card" content="summary_large_image">
    <meta property="twitter:title" content="{{ title }}">
    <meta property="twitter:description" content="{{ description }}">

    <link rel="stylesheet" href="styles.css">
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    <script src="https://unpkg.com/lucide@latest/dist/umd/lucide.js"></script>
</head>
<body class="{{ theme_id }}">
    <header class="hero">
        <div class="container">
            {% if personal.name %}
            <h1 class="hero-title">{{ personal.name }}</h1>
            {% endif %}
            {% if personal.title %}
            <h2 class="hero-subtitle">{{ personal.title }}</h2>
            {% endif %}
            {% if about_html %}
            <div class="hero-description">{{ about_html|safe }}</div>
            {% endif %}

            <div class="contact-info">
                {% if personal.email %}
                <div class="contact-item"><i data-lucide="mail"></i> <a href="mailto:{{ personal.email }}">{{ personal.email }}</a></div>
                {% endif %}
                {% if personal.phone %}
                <div class="contact-item"><i data-lucide="phone"></i> {{ personal.phone }}</div>
                {% endif %}
                {% if personal.location %}
                <div class="contact-item"><i data-lucide="map-pin"></i> {{ personal.location }}</div>
                {% endif %}
                {% if personal.website %}
                <div class="contact-item"><i data-lucide="globe"></i> <a href="{{ personal.website }}">Website</a></div>
                {% endif %}
            </div>

            <div class="social-links">
                {% for network in ["github", "linkedin", "twitter", "instagram", "dribbble"] %}
                {% if social[network] %}
                <a href="{{ social[network] }}" target="_blank" rel="noopener noreferrer" class="social-link" aria-label="{{ network }}"><i data-lucide="{{ network }}"></i></a>
                {% endif %}
                {% endfor %}
            </div>
            {% if nav %}

            <nav class="section-nav">
                {% for link in nav %}
                <a href="#{{ link.id }}">{{ link.label }}</a>
                {% endfor %}
            </nav>
            {% endif %}
        </div>
    </header>

    <main>
        {% if skill_groups %}
        <section id="skills" class="section skills-section">
            <div class="container">
                <h3 class="section-title">Skills &amp; Expertise</h3>
                <div class="skills-grid">
                    {% for group in skill_groups %}
                    <div class="skill-category card">
                        <h4 class="skill-category-title">{{ group.category }}</h4>
                        <div class="skill-tags">
                            {% for skill in group.skills %}
                            <span class="skill-tag">{{ skill.name }} <span class="skill-level">{{ skill.level|level }}/10</span></span>
                            {% endfor %}
                        </div>
                    </div>
                    {% endfor %}
                </div>
            </div>
        </section>
        {% endif %}
        {% if experiences %}
        <section id="experience" class="section experience-section">
            <div class="container">
                <h3 class="section-title"><i data-lucide="briefcase"></i> Work Experience</h3>
                <div class="timeline">
                    {% for exp in experiences %}
                    <div class="timeline-item card">
                        <div class="timeline-header">
                            <h4 class="timeline-title">{{ exp.item.position }}</h4>
                            {% if exp.item.duration %}
                            <span class="timeline-date"><i data-lucide="calendar"></i> {{ exp.item.duration }}</span>
                            {% endif %}
                        </div>
                        <p class="timeline-company">{{ exp.item.company }}</p>
                        {% if exp.html %}
                        <div class="timeline-description">{{ exp.html|safe }}</div>
                        {% endif %}
                        {% if exp.item.technologies %}
                        <div class="tech-tags">
                            {% for tech in exp.item.technologies %}
                            <span class="tech-tag">{{ tech }}</span>
                            {% endfor %}
                        </div>
                        {% endif %}
                    </div>
                    {% endfor %}
                </div>
            </div>
        </section>
        {% endif %}
        {% if education %}
        <section id="education" class="section education-section">
            <div class="container">
                <h3 class="section-title"><i data-lucide="graduation-cap"></i> Education</h3>
                <div class="timeline">
                    {% for edu in education %}
                    <div class="timeline-item card">
                        <div class="timeline-header">
                            <h4 class="timeline-title">{{ edu.item.degree }}</h4>
                            {% if edu.item.duration %}
                            <span class="timeline-date"><i data-lucide="calendar"></i> {{ edu.item.duration }}</span>
                            {% endif %}
                        </div>
                        <p class="timeline-company">{{ edu.item.institution }}</p>
                        {% if edu.html %}
                        <div class="timeline-description">{{ edu.html|safe }}</div>
                        {% endif %}
                    </div>
                    {% endfor %}
                </div>
            </div>
        </section>
        {% endif %}
        {% if projects %}
        <section id="projects" class="section projects-section">
            <div class="container">
                <h3 class="section-title">Featured Projects</h3>
                <div class="projects-grid">
                    {% for project in projects %}
                    <div class="project-card card{% if project.item.featured %} featured{% endif %}" data-project-id="{{ project.item.id }}">
                        {% if project.item.image %}
                        <div class="project-image"><img src="{{ project.item.image }}" alt="{{ project.item.title }}"></div>
                        {% endif %}
                        <div class="project-content">
                            <div class="project-header">
                                <h4 class="project-title">{{ project.item.title }}</h4>
                                {% if project.item.featured %}
                                <span class="featured-badge">Featured</span>
                                {% endif %}
                            </div>
                            {% if project.html %}
                            <div class="project-description">{{ project.html|safe }}</div>
                            {% endif %}
                            {% if project.item.technologies %}
                            <div class="tech-tags">
                                {% for tech in project.item.technologies %}
                                <span class="tech-tag">{{ tech }}</span>
                                {% endfor %}
                            </div>
                            {% endif %}
                            {% if project.item.liveUrl or project.item.githubUrl %}
                            <div class="project-links">
                                {% if project.item.liveUrl %}
                                <a href="{{ project.item.liveUrl }}" target="_blank" rel="noopener noreferrer" class="project-link"><i data-lucide="external-link"></i> Demo</a>
                                {% endif %}
                                {% if project.item.githubUrl %}
                                <a href="{{ project.item.githubUrl }}" target="_blank" rel="noopener noreferrer" class="project-link"><i data-lucide="github"></i> Code</a>
                                {% endif %}
                            </div>
                            {% endif %}
                        </div>
                    </div>
                    {% endfor %}
                </div>
            </div>
        </section>
        {% endif %}
    </main>

    <footer class="footer">
        <div class="container">
            <p>&copy; {{ owner }}. Built with Folio</p>
        </div>
    </footer>

    <script src="script.js"></script>
</body>
</html>
"##;

const README_TEMPLATE: &str = r#"# {{ name }} Website

This is a portfolio website generated with Folio.

## Structure

- `index.html` - the portfolio page
- `styles.css` - theme colors and layout
- `script.js` - icons, smooth scrolling and scroll animations
- `README.md` - this file

## Hosting

The site is plain static files and can be hosted anywhere:

- **Netlify**: drag and drop the folder onto https://app.netlify.com/drop
- **Vercel**: import the folder as a static project
- **GitHub Pages**: push the files to a repository and enable Pages
- **Any web server**: copy the files into the document root

## Customization

- Change the `:root` colors at the top of `styles.css` to adjust the theme
- Edit `index.html` to add or remove sections
- Extend `script.js` for more interactivity

## Browser Support

Works in all modern browsers (Chrome, Firefox, Safari, Edge).
"#;
