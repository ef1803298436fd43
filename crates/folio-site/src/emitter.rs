//! Site emitter.

use std::sync::Arc;

use folio_wizard::{PortfolioRecord, ProjectRecord};

use crate::assets::AssetPipeline;
use crate::clock::{Clock, SystemClock};
use crate::docs::{DocumentOptions, Documents};
use crate::templates::{PageContext, ProjectView, SkillView, SocialLink, TemplateEngine};
use crate::themes::stylesheet;

/// Where image `src` attributes point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLinks {
    /// Embed data URIs directly (live preview)
    #[default]
    Inline,
    /// Reference files under `assets/images/` (packaged site)
    Bundled,
}

/// Path of the profile photo inside a packaged site.
pub const PROFILE_IMAGE_PATH: &str = "assets/images/profile.jpg";

/// Path of a project image inside a packaged site. `number` starts at 1.
pub fn project_image_path(number: usize) -> String {
    format!("assets/images/project-{}.jpg", number)
}

/// The three text artifacts that make up a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteArtifacts {
    /// `index.html`
    pub markup: String,
    /// `assets/css/style.css`
    pub stylesheet: String,
    /// `assets/js/script.js`
    pub behavior_script: String,
}

/// Errors that can occur during emission.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),
}

/// Renders portfolio records into site artifacts.
///
/// Output depends only on the record and the injected clock.
pub struct SiteEmitter {
    templates: TemplateEngine,
    clock: Arc<dyn Clock>,
}

impl Default for SiteEmitter {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl SiteEmitter {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            templates: TemplateEngine::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Render all three artifacts.
    pub fn emit(
        &self,
        record: &PortfolioRecord,
        images: ImageLinks,
    ) -> Result<SiteArtifacts, EmitError> {
        let markup = self.markup(record, images)?;

        tracing::debug!(
            "Emitted site for {} ({} skills, {} projects)",
            record.personal.name,
            record.skills.len(),
            record.projects.len()
        );

        Ok(SiteArtifacts {
            markup,
            stylesheet: stylesheet(&record.theme_id),
            behavior_script: AssetPipeline::behavior_script().to_string(),
        })
    }

    /// Render `index.html`.
    pub fn markup(&self, record: &PortfolioRecord, images: ImageLinks) -> Result<String, EmitError> {
        let context = self.page_context(record, images);

        self.templates
            .render_page(&context)
            .map_err(|e: minijinja::Error| EmitError::TemplateError(e.to_string()))
    }

    /// Render the documentation files.
    pub fn documents(
        &self,
        record: &PortfolioRecord,
        options: DocumentOptions,
    ) -> Result<Documents, EmitError> {
        Documents::render(&self.templates, record, self.clock.as_ref(), options)
            .map_err(|e| EmitError::TemplateError(e.to_string()))
    }

    fn page_context(&self, record: &PortfolioRecord, images: ImageLinks) -> PageContext {
        let p = &record.personal;

        let keywords = record
            .skills
            .iter()
            .map(|s| s.name.as_str())
            .chain(["portfolio", p.title.as_str()])
            .collect::<Vec<_>>()
            .join(", ");

        let photo_src = record.photo.as_ref().map(|photo| match images {
            ImageLinks::Inline => photo.as_str().to_string(),
            ImageLinks::Bundled => PROFILE_IMAGE_PATH.to_string(),
        });

        PageContext {
            name: p.name.clone(),
            title: p.title.clone(),
            description: p.about.chars().take(160).collect(),
            keywords,
            about: p.about.clone(),
            email: p.email.clone(),
            phone: p.phone.clone(),
            location: p.location.clone(),
            website: p.website.clone(),
            photo_src,
            social: social_links(record),
            skills: record
                .skills
                .iter()
                .map(|s| SkillView {
                    name: s.name.clone(),
                    level: s.level.to_string(),
                })
                .collect(),
            projects: record
                .projects
                .iter()
                .enumerate()
                .map(|(i, project)| project_view(project, i + 1, images))
                .collect(),
            include_contact: record.features.include_contact,
            include_resume: record.features.include_resume,
            year: self.clock.year(),
        }
    }
}

pub(crate) fn social_links(record: &PortfolioRecord) -> Vec<SocialLink> {
    let p = &record.personal;
    [
        (&p.linkedin, "LinkedIn", "fa-linkedin"),
        (&p.github, "GitHub", "fa-github"),
        (&p.twitter, "Twitter", "fa-twitter"),
    ]
    .into_iter()
    .filter(|(url, _, _)| !url.is_empty())
    .map(|(url, label, icon)| SocialLink {
        url: url.clone(),
        label,
        icon,
    })
    .collect()
}

fn project_view(project: &ProjectRecord, number: usize, images: ImageLinks) -> ProjectView {
    let image_src = project.image.as_ref().map(|image| match images {
        ImageLinks::Inline => image.as_str().to_string(),
        ImageLinks::Bundled => project_image_path(number),
    });

    ProjectView {
        name: project.name.clone(),
        technologies: project.technologies.clone(),
        description: project.description.clone(),
        live_url: project.live_url.clone(),
        source_url: project.source_url.clone(),
        image_src,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use folio_wizard::{Features, ImageRef, PersonalInfo, SkillLevel, SkillRecord};
    use pretty_assertions::assert_eq;

    fn emitter() -> SiteEmitter {
        SiteEmitter::new(Arc::new(FixedClock::ymd(2026, 3, 14)))
    }

    fn project(name: &str, image: Option<ImageRef>) -> ProjectRecord {
        ProjectRecord {
            name: name.to_string(),
            technologies: "Rust".to_string(),
            description: format!("{} description", name),
            live_url: String::new(),
            source_url: String::new(),
            image,
        }
    }

    fn record() -> PortfolioRecord {
        PortfolioRecord {
            theme_id: "ocean".to_string(),
            personal: PersonalInfo {
                name: "Margaret Hamilton".to_string(),
                title: "Software Engineer".to_string(),
                about: "Flight software.".to_string(),
                ..Default::default()
            },
            photo: None,
            skills: vec![
                SkillRecord {
                    name: "Assembly".to_string(),
                    level: SkillLevel::Expert,
                },
                SkillRecord {
                    name: "Testing".to_string(),
                    level: SkillLevel::Advanced,
                },
            ],
            projects: vec![project("Apollo Guidance", None)],
            features: Features {
                include_contact: false,
                include_resume: false,
                include_blog: false,
            },
        }
    }

    #[test]
    fn contact_section_follows_flag() {
        let emitter = emitter();
        let mut r = record();

        let html = emitter.markup(&r, ImageLinks::Inline).unwrap();
        assert_eq!(html.matches(r#"id="contactForm""#).count(), 0);
        assert!(!html.contains(r##"href="#contact""##));

        r.features.include_contact = true;
        let html = emitter.markup(&r, ImageLinks::Inline).unwrap();
        assert_eq!(html.matches(r#"id="contactForm""#).count(), 1);
        assert_eq!(html.matches(r#"<section id="contact""#).count(), 1);
    }

    #[test]
    fn resume_link_follows_flag() {
        let emitter = emitter();
        let mut r = record();

        assert!(!emitter.markup(&r, ImageLinks::Inline).unwrap().contains("Download Resume"));

        r.features.include_resume = true;
        assert!(emitter.markup(&r, ImageLinks::Inline).unwrap().contains("Download Resume"));
    }

    #[test]
    fn blog_flag_changes_nothing() {
        let emitter = emitter();
        let mut r = record();
        let before = emitter.emit(&r, ImageLinks::Inline).unwrap();

        r.features.include_blog = true;
        let after = emitter.emit(&r, ImageLinks::Inline).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn social_links_only_for_filled_profiles() {
        let emitter = emitter();
        let mut r = record();
        r.personal.github = "https://github.com/mh".to_string();

        let html = emitter.markup(&r, ImageLinks::Inline).unwrap();

        assert!(html.contains(r#"aria-label="GitHub""#));
        assert!(!html.contains(r#"aria-label="LinkedIn""#));
        assert!(!html.contains(r#"aria-label="Twitter""#));
    }

    #[test]
    fn project_image_or_placeholder_in_order() {
        let emitter = emitter();
        let mut r = record();
        r.projects = vec![
            project("Alpha", Some(ImageRef::from_bytes("image/png", b"img"))),
            project("Beta", None),
        ];

        let html = emitter.markup(&r, ImageLinks::Bundled).unwrap();

        let alpha = html.find("Alpha description").unwrap();
        let beta = html.find("Beta description").unwrap();
        assert!(alpha < beta);

        let image = html.find("project-1.jpg").unwrap();
        let placeholder = html.find("project-placeholder").unwrap();
        assert!(image < alpha);
        assert!(alpha < placeholder && placeholder < beta);
        assert_eq!(html.matches(r#"class="project-image""#).count(), 1);
        assert_eq!(html.matches(r#"class="project-placeholder""#).count(), 1);
        assert!(!html.contains("project-2.jpg"));
    }

    #[test]
    fn inline_images_embed_data_uris() {
        let emitter = emitter();
        let mut r = record();
        r.photo = Some(ImageRef::from_bytes("image/jpeg", b"face"));

        let inline = emitter.markup(&r, ImageLinks::Inline).unwrap();
        let bundled = emitter.markup(&r, ImageLinks::Bundled).unwrap();

        assert!(inline.contains("data:image"));
        assert!(!inline.contains("profile.jpg"));
        assert!(bundled.contains("profile.jpg"));
        assert!(!bundled.contains("hero-placeholder"));
    }

    #[test]
    fn skills_render_in_record_order() {
        let html = emitter().markup(&record(), ImageLinks::Inline).unwrap();

        let assembly = html.find(">Assembly<").unwrap();
        let testing = html.find(">Testing<").unwrap();
        assert!(assembly < testing);
        assert!(html.contains(r#"content="Assembly, Testing, portfolio, Software Engineer""#));
    }

    #[test]
    fn output_is_deterministic_for_a_fixed_clock() {
        let r = record();

        let first = emitter().emit(&r, ImageLinks::Bundled).unwrap();
        let second = emitter().emit(&r, ImageLinks::Bundled).unwrap();

        assert_eq!(first, second);
        assert!(first.markup.contains("&copy; 2026 Margaret Hamilton"));
    }

    #[test]
    fn stylesheet_follows_theme_with_fallback() {
        let emitter = emitter();
        let mut r = record();

        let ocean = emitter.emit(&r, ImageLinks::Inline).unwrap();
        assert!(ocean.stylesheet.contains("/* Theme: ocean */"));

        r.theme_id = "no-such-theme".to_string();
        let fallback = emitter.emit(&r, ImageLinks::Inline).unwrap();
        assert!(fallback.stylesheet.contains("/* Theme: modern */"));
        assert_eq!(fallback.behavior_script, ocean.behavior_script);
    }

    #[test]
    fn description_is_truncated_to_160_chars() {
        let mut r = record();
        r.personal.about = "é".repeat(200);

        let html = emitter().markup(&r, ImageLinks::Inline).unwrap();

        let expected = format!(r#"<meta name="description" content="{}">"#, "é".repeat(160));
        assert!(html.contains(&expected));
    }
}
