//! CLI commands.

pub mod build;
pub mod init;
pub mod preview;
pub mod wizard;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use folio_archive::Packager;
use folio_wizard::{PortfolioRecord, Profile, Wizard};

/// Load a profile file and replay it into a fresh wizard.
pub fn wizard_from_profile(path: &Path) -> Result<Wizard> {
    let profile = Profile::load(path)
        .with_context(|| format!("Failed to load profile {}", path.display()))?;
    let base_dir = path.parent().unwrap_or(Path::new("."));

    let mut wizard = Wizard::new();
    profile
        .apply(base_dir, &mut wizard)
        .with_context(|| format!("Profile {} is incomplete", path.display()))?;

    Ok(wizard)
}

/// Finalize the wizard and write its archive into `output`.
///
/// The wizard's generation state records the outcome either way.
pub async fn generate(wizard: &mut Wizard, packager: &Packager, output: &Path) -> Result<PathBuf> {
    let record = wizard.begin_generation()?;

    let result = write_package(packager, &record, output).await;
    match &result {
        Ok(_) => wizard.finish_generation(Ok(())),
        Err(e) => wizard.finish_generation(Err(format!("{:#}", e))),
    }

    result
}

async fn write_package(packager: &Packager, record: &PortfolioRecord, output: &Path) -> Result<PathBuf> {
    let package = packager.package(record).await?;

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let path = output.join(&package.file_name);
    fs::write(&path, &package.bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use folio_archive::PackageOptions;
    use folio_site::FixedClock;
    use folio_wizard::{GenerationState, ImageRef, Step};
    use tempfile::tempdir;

    fn packager() -> Packager {
        Packager::new(Arc::new(FixedClock::ymd(2026, 1, 2)), PackageOptions::default())
    }

    fn ready_wizard() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.select_theme("forest");
        let personal = wizard.personal_mut();
        personal.name = "Grace Hopper".to_string();
        personal.title = "Rear Admiral".to_string();
        personal.about = "Compilers.".to_string();

        let id = wizard.projects()[0].id();
        if let Some(draft) = wizard.project_mut(id) {
            draft.name = "A-0".to_string();
            draft.description = "The first compiler.".to_string();
        }

        while wizard.step() != Step::Review {
            wizard.advance().unwrap();
        }
        wizard
    }

    #[tokio::test]
    async fn generate_writes_archive_and_marks_success() {
        let temp = tempdir().unwrap();
        let mut wizard = ready_wizard();

        let path = generate(&mut wizard, &packager(), temp.path()).await.unwrap();

        assert_eq!(path, temp.path().join("grace-hopper-portfolio.zip"));
        assert!(path.exists());
        assert_eq!(wizard.generation(), &GenerationState::Succeeded);
    }

    #[tokio::test]
    async fn generate_failure_leaves_wizard_usable() {
        let temp = tempdir().unwrap();
        let mut wizard = ready_wizard();
        wizard.set_photo(Some(ImageRef::parse("data:image/jpeg;base64,%%%").unwrap()));

        let result = generate(&mut wizard, &packager(), temp.path()).await;

        assert!(result.is_err());
        assert!(matches!(wizard.generation(), GenerationState::Failed { .. }));
        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);

        wizard.set_photo(None);
        generate(&mut wizard, &packager(), temp.path()).await.unwrap();
        assert_eq!(wizard.generation(), &GenerationState::Succeeded);
    }

    #[tokio::test]
    async fn generate_requires_review_step() {
        let temp = tempdir().unwrap();
        let mut wizard = Wizard::new();

        assert!(generate(&mut wizard, &packager(), temp.path()).await.is_err());
        assert_eq!(wizard.generation(), &GenerationState::Ready);
    }

    #[test]
    fn loads_profile_relative_to_its_directory() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join("me.png"), [0x89, b'P', b'N', b'G']).unwrap();
        let path = temp.path().join("portfolio.yaml");
        std::fs::write(
            &path,
            "personal:\n  name: Ada\n  title: Analyst\n  about: Notes.\nphoto: me.png\nprojects:\n  - name: Note G\n    description: Bernoulli.\n",
        )
        .unwrap();

        let wizard = wizard_from_profile(&path).unwrap();

        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(wizard.photo().map(|p| p.mime()), Some("image/png"));
    }
}
