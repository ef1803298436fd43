//! Finalize-and-package pipeline.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;

use folio_site::{
    project_image_path, AssetPipeline, Clock, DocumentOptions, EmitError, ImageLinks, SiteEmitter,
    PROFILE_IMAGE_PATH,
};
use folio_wizard::PortfolioRecord;

use crate::archive::{Archive, ArchiveError};
use crate::images::{decode_data_uri, DecodeError};

/// Packaging options.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Ship `DEPLOY.md`, `LICENSE` and `.gitignore` next to the README
    pub include_docs: bool,
    /// Ship `responsive.css` and `utils.js`
    pub include_extras: bool,
    /// Minify the theme stylesheet
    pub minify: bool,
    /// Pause before assembling, so a progress indicator has something to show
    pub progress_delay: Duration,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            include_docs: true,
            include_extras: true,
            minify: false,
            progress_delay: Duration::ZERO,
        }
    }
}

/// A finished package.
#[derive(Debug, Clone)]
pub struct Package {
    /// Suggested download name, e.g. `ada-lovelace-portfolio.zip`
    pub file_name: String,
    pub archive: Archive,
    /// Zip bytes
    pub bytes: Vec<u8>,
}

/// Errors that can occur while packaging.
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("Failed to decode profile photo: {0}")]
    Photo(#[source] DecodeError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Turns finalized records into site archives.
pub struct Packager {
    emitter: SiteEmitter,
    options: PackageOptions,
}

impl Packager {
    pub fn new(clock: Arc<dyn Clock>, options: PackageOptions) -> Self {
        Self {
            emitter: SiteEmitter::new(clock),
            options,
        }
    }

    pub fn options(&self) -> &PackageOptions {
        &self.options
    }

    /// Build the zip for a finalized record.
    ///
    /// Nothing is returned unless every step succeeds.
    pub async fn package(&self, record: &PortfolioRecord) -> Result<Package, PackageError> {
        if !self.options.progress_delay.is_zero() {
            tokio::time::sleep(self.options.progress_delay).await;
        }

        let archive = self.assemble(record, ImageLinks::Bundled)?;
        let bytes = archive.to_zip()?;
        let file_name = archive_file_name(&record.personal.name);

        tracing::info!(
            "Packaged {} ({} files, {} bytes)",
            file_name,
            archive.len(),
            bytes.len()
        );

        Ok(Package {
            file_name,
            archive,
            bytes,
        })
    }

    /// Lay out the full site as an in-memory file map.
    ///
    /// With [`ImageLinks::Inline`] the markup embeds images directly, which
    /// is what a local preview wants; the image files are written either way.
    pub fn assemble(
        &self,
        record: &PortfolioRecord,
        links: ImageLinks,
    ) -> Result<Archive, PackageError> {
        let mut archive = Archive::new();

        let photo = match &record.photo {
            Some(photo) => Some(decode_data_uri(photo).map_err(PackageError::Photo)?),
            None => None,
        };

        // Projects whose image fails to decode fall back to the placeholder.
        let mut record = record.clone();
        let mut project_images = Vec::new();
        for (i, project) in record.projects.iter_mut().enumerate() {
            let Some(image) = &project.image else {
                continue;
            };
            match decode_data_uri(image) {
                Ok(bytes) => project_images.push((project_image_path(i + 1), bytes)),
                Err(e) => {
                    tracing::warn!("Skipping image for project '{}': {}", project.name, e);
                    project.image = None;
                }
            }
        }

        let site = self.emitter.emit(&record, links)?;
        let docs = self.emitter.documents(
            &record,
            DocumentOptions {
                include_docs: self.options.include_docs,
                include_extras: self.options.include_extras,
            },
        )?;

        archive.add_text("index.html", site.markup)?;
        archive.add_text("README.md", docs.readme)?;
        if self.options.include_docs {
            archive.add_text("DEPLOY.md", docs.deploy)?;
            archive.add_text("LICENSE", docs.license)?;
            archive.add_text(".gitignore", docs.gitignore)?;
        }

        let stylesheet = if self.options.minify {
            match AssetPipeline::minify_css(&site.stylesheet) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("Failed to minify stylesheet, using original: {}", e);
                    site.stylesheet
                }
            }
        } else {
            site.stylesheet
        };
        archive.add_text("assets/css/style.css", stylesheet)?;
        archive.add_text("assets/js/script.js", site.behavior_script)?;
        if self.options.include_extras {
            archive.add_text("assets/css/responsive.css", AssetPipeline::responsive_css())?;
            archive.add_text("assets/js/utils.js", AssetPipeline::utility_script())?;
        }

        if let Some(bytes) = photo {
            archive.add_binary(PROFILE_IMAGE_PATH, bytes)?;
        }
        for (path, bytes) in project_images {
            archive.add_binary(&path, bytes)?;
        }

        tracing::debug!(
            "Assembled {} files ({} bytes)",
            archive.len(),
            archive.total_bytes()
        );

        Ok(archive)
    }
}

/// Download name for a portfolio owner: `Ada  Lovelace` → `ada-lovelace-portfolio.zip`.
pub fn archive_file_name(name: &str) -> String {
    static WHITESPACE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

    let slug = WHITESPACE_RE
        .replace_all(name.trim(), "-")
        .to_lowercase()
        .replace(['/', '\\'], "-");

    if slug.is_empty() {
        "portfolio.zip".to_string()
    } else {
        format!("{}-portfolio.zip", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_site::FixedClock;
    use folio_wizard::{Features, ImageRef, PersonalInfo, ProjectRecord};
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Read};
    use std::time::Instant;

    fn packager(options: PackageOptions) -> Packager {
        Packager::new(Arc::new(FixedClock::ymd(2026, 5, 1)), options)
    }

    fn project(name: &str, image: Option<ImageRef>) -> ProjectRecord {
        ProjectRecord {
            name: name.to_string(),
            technologies: String::new(),
            description: format!("{} description", name),
            live_url: String::new(),
            source_url: String::new(),
            image,
        }
    }

    fn record() -> PortfolioRecord {
        PortfolioRecord {
            theme_id: "sunset".to_string(),
            personal: PersonalInfo {
                name: "Ada Lovelace".to_string(),
                title: "Analyst".to_string(),
                about: "Notes on the engine.".to_string(),
                ..Default::default()
            },
            photo: Some(ImageRef::from_bytes("image/jpeg", &[0xFF, 0xD8, 0x00, 0x7F])),
            skills: Vec::new(),
            projects: vec![
                project("Engine", Some(ImageRef::from_bytes("image/png", &[1, 2, 3]))),
                project("Notes", None),
                project("Loom", Some(ImageRef::from_bytes("image/png", &[9, 8]))),
            ],
            features: Features::default(),
        }
    }

    fn read_entry(bytes: &[u8], name: &str) -> Vec<u8> {
        let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = zip.by_name(name).unwrap();
        let mut out = Vec::new();
        file.read_to_end(&mut out).unwrap();
        out
    }

    #[tokio::test]
    async fn package_contains_full_layout() {
        let package = packager(PackageOptions::default())
            .package(&record())
            .await
            .unwrap();

        let zip = zip::ZipArchive::new(Cursor::new(package.bytes.as_slice())).unwrap();
        let mut names: Vec<_> = zip.file_names().map(str::to_string).collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                ".gitignore",
                "DEPLOY.md",
                "LICENSE",
                "README.md",
                "assets/css/responsive.css",
                "assets/css/style.css",
                "assets/images/profile.jpg",
                "assets/images/project-1.jpg",
                "assets/images/project-3.jpg",
                "assets/js/script.js",
                "assets/js/utils.js",
                "index.html",
            ]
        );
        assert_eq!(package.file_name, "ada-lovelace-portfolio.zip");
    }

    #[tokio::test]
    async fn images_survive_losslessly() {
        let package = packager(PackageOptions::default())
            .package(&record())
            .await
            .unwrap();

        assert_eq!(
            read_entry(&package.bytes, "assets/images/profile.jpg"),
            vec![0xFF, 0xD8, 0x00, 0x7F]
        );
        assert_eq!(
            read_entry(&package.bytes, "assets/images/project-1.jpg"),
            vec![1, 2, 3]
        );
        assert_eq!(
            read_entry(&package.bytes, "assets/images/project-3.jpg"),
            vec![9, 8]
        );

        let html = String::from_utf8(read_entry(&package.bytes, "index.html")).unwrap();
        assert!(html.contains("project-3.jpg"));
        assert!(!html.contains("data:image"));
    }

    #[tokio::test]
    async fn optional_files_can_be_left_out() {
        let options = PackageOptions {
            include_docs: false,
            include_extras: false,
            ..Default::default()
        };
        let package = packager(options).package(&record()).await.unwrap();

        assert!(package.archive.contains("README.md"));
        assert!(!package.archive.contains("DEPLOY.md"));
        assert!(!package.archive.contains("LICENSE"));
        assert!(!package.archive.contains(".gitignore"));
        assert!(!package.archive.contains("assets/css/responsive.css"));
        assert!(!package.archive.contains("assets/js/utils.js"));

        let readme = package.archive.get("README.md").unwrap();
        let readme = std::str::from_utf8(readme.as_bytes()).unwrap();
        assert!(!readme.contains("utils.js"));
        assert!(!readme.contains("DEPLOY.md"));
    }

    #[tokio::test]
    async fn text_entries_are_stable_for_a_fixed_clock() {
        let packager = packager(PackageOptions::default());

        let first = packager.package(&record()).await.unwrap();
        let second = packager.package(&record()).await.unwrap();

        assert_eq!(first.archive, second.archive);
    }

    #[tokio::test]
    async fn bad_photo_fails_the_package() {
        let mut r = record();
        r.photo = Some(ImageRef::parse("data:image/jpeg;base64,!!!").unwrap());

        let result = packager(PackageOptions::default()).package(&r).await;

        assert!(matches!(result, Err(PackageError::Photo(_))));
    }

    #[tokio::test]
    async fn bad_project_image_falls_back_to_placeholder() {
        let mut r = record();
        r.projects[0].image = Some(ImageRef::parse("data:image/png;base64,!!!").unwrap());

        let package = packager(PackageOptions::default()).package(&r).await.unwrap();

        assert!(!package.archive.contains("assets/images/project-1.jpg"));
        assert!(package.archive.contains("assets/images/project-3.jpg"));

        let html = String::from_utf8(read_entry(&package.bytes, "index.html")).unwrap();
        assert!(!html.contains("project-1.jpg"));
        assert_eq!(html.matches(r#"class="project-placeholder""#).count(), 2);
    }

    #[tokio::test]
    async fn minified_stylesheet_is_smaller() {
        let plain = packager(PackageOptions::default())
            .package(&record())
            .await
            .unwrap();
        let minified = packager(PackageOptions {
            minify: true,
            ..Default::default()
        })
        .package(&record())
        .await
        .unwrap();

        let plain_css = plain.archive.get("assets/css/style.css").unwrap();
        let minified_css = minified.archive.get("assets/css/style.css").unwrap();
        assert!(minified_css.len() < plain_css.len());
    }

    #[tokio::test]
    async fn waits_for_progress_delay() {
        let options = PackageOptions {
            progress_delay: Duration::from_millis(50),
            ..Default::default()
        };

        let started = Instant::now();
        packager(options).package(&record()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn inline_assembly_embeds_images() {
        let archive = packager(PackageOptions::default())
            .assemble(&record(), ImageLinks::Inline)
            .unwrap();

        let html = archive.get("index.html").unwrap();
        let html = std::str::from_utf8(html.as_bytes()).unwrap();
        assert!(html.contains("data:image"));
        assert!(archive.contains("assets/images/profile.jpg"));
    }

    #[test]
    fn file_name_slugifies_whitespace() {
        assert_eq!(archive_file_name("Ada Lovelace"), "ada-lovelace-portfolio.zip");
        assert_eq!(
            archive_file_name("  Grace \t Brewster  Hopper "),
            "grace-brewster-hopper-portfolio.zip"
        );
        assert_eq!(archive_file_name("AC/DC"), "ac-dc-portfolio.zip");
        assert_eq!(archive_file_name("   "), "portfolio.zip");
    }
}
