//! Documentation files shipped next to the generated site.

use folio_wizard::PortfolioRecord;
use serde::Serialize;

use crate::clock::Clock;
use crate::emitter::social_links;
use crate::templates::{SkillView, SocialLink, TemplateEngine};
use crate::themes::Theme;

/// Rendered documentation files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Documents {
    /// `README.md`
    pub readme: String,
    /// `DEPLOY.md`
    pub deploy: String,
    /// `LICENSE`
    pub license: String,
    /// `.gitignore`
    pub gitignore: String,
}

/// Which optional files ship with the site, so the README lists only those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    /// `DEPLOY.md`, `LICENSE` and `.gitignore`
    pub include_docs: bool,
    /// `responsive.css` and `utils.js`
    pub include_extras: bool,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            include_docs: true,
            include_extras: true,
        }
    }
}

/// Context for rendering `README.md`.
#[derive(Debug, Clone, Serialize)]
pub struct ReadmeContext {
    pub name: String,
    pub about: String,
    /// Display name of the resolved theme
    pub theme: String,
    pub include_contact: bool,
    pub project_count: usize,
    pub skills: Vec<SkillView>,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social: Vec<SocialLink>,
    pub include_docs: bool,
    pub include_extras: bool,
    /// `YYYY-MM-DD`
    pub updated: String,
}

impl Documents {
    pub fn render(
        templates: &TemplateEngine,
        record: &PortfolioRecord,
        clock: &dyn Clock,
        options: DocumentOptions,
    ) -> Result<Self, minijinja::Error> {
        Ok(Self {
            readme: templates.render_readme(&readme_context(record, clock, options))?,
            deploy: DEPLOY_GUIDE.to_string(),
            license: license(&record.personal.name, clock.year()),
            gitignore: GITIGNORE.to_string(),
        })
    }
}

fn readme_context(
    record: &PortfolioRecord,
    clock: &dyn Clock,
    options: DocumentOptions,
) -> ReadmeContext {
    let p = &record.personal;

    ReadmeContext {
        name: p.name.clone(),
        about: p.about.clone(),
        theme: capitalize(Theme::resolve(&record.theme_id).id()),
        include_contact: record.features.include_contact,
        project_count: record.projects.len(),
        skills: record
            .skills
            .iter()
            .map(|s| SkillView {
                name: s.name.clone(),
                level: s.level.to_string(),
            })
            .collect(),
        email: p.email.clone(),
        phone: p.phone.clone(),
        location: p.location.clone(),
        social: social_links(record),
        include_docs: options.include_docs,
        include_extras: options.include_extras,
        updated: clock.today().format("%Y-%m-%d").to_string(),
    }
}

pub(crate) const README_TEMPLATE: &str = r##"# {{ name }}'s Portfolio

Personal portfolio website showcasing skills, projects, and experience.

## About

{{ about }}

**Theme:** {{ theme }}

## Features

- Responsive layout
- {{ theme }} theme
- Smooth scrolling and scroll animations
- Contact form{% if not include_contact %} (disabled){% endif %}
- {{ project_count }} featured projects
{% if skills %}
## Skills
{% for skill in skills %}
- {{ skill.name }} ({{ skill.level }})
{%- endfor %}
{% endif %}
## Getting Started

1. Extract the archive
2. Open `index.html` in a browser
{%- if include_docs %}

See [DEPLOY.md](DEPLOY.md) for hosting instructions.
{%- endif %}

## Project Structure

```
index.html
README.md
{%- if include_docs %}
DEPLOY.md
LICENSE
{%- endif %}
assets/css/style.css
{%- if include_extras %}
assets/css/responsive.css
{%- endif %}
assets/js/script.js
{%- if include_extras %}
assets/js/utils.js
{%- endif %}
assets/images/
```

## Contact

- **Email:** {{ email or "Not provided" }}
- **Phone:** {{ phone or "Not provided" }}
- **Location:** {{ location or "Not provided" }}
{%- for link in social %}
- **{{ link.label }}:** {{ link.url }}
{%- endfor %}

## License

MIT.{% if include_docs %} See [LICENSE](LICENSE).{% endif %}

---

*Last Updated: {{ updated }}*
"##;

fn license(name: &str, year: i32) -> String {
    format!(
        r#"MIT License

Copyright (c) {} {}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#,
        year, name
    )
}

/// Capitalize first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

const DEPLOY_GUIDE: &str = r#"# Deployment Guide

## GitHub Pages

1. Create a repository named `your-username.github.io`
2. Push the extracted files to the `main` branch
3. In Settings > Pages, deploy from the `main` branch

```bash
git init
git add .
git commit -m "Initial commit"
git remote add origin https://github.com/your-username/your-username.github.io.git
git branch -M main
git push -u origin main
```

## Netlify

Drag the extracted folder onto the Netlify deploy page, or import the
repository. Leave the build command empty and publish the root directory.

## Vercel

Import the repository with the "Other" framework preset and no build command.

## Traditional Hosting

Upload every file to `public_html` (or `www`) over FTP or the hosting file
manager. Keep `index.html` at the root.

## Troubleshooting

- Images not loading: paths must stay relative (no leading `/`)
- Styles missing: check `assets/css/style.css` was uploaded
- Old version showing: clear the browser cache
"#;

const GITIGNORE: &str = r#"# Operating system files
.DS_Store
Thumbs.db
desktop.ini

# Editor files
.vscode/
.idea/
*.swp
*~

# Logs
*.log

# Dependencies and build output
node_modules/
dist/
build/

# Environment
.env
.env.local
"#;
