//! Interactive wizard session.
//!
//! Each input line is one command applied to the wizard controller. Input
//! errors are printed and the session carries on.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use folio_archive::Packager;
use folio_site::{SystemClock, Theme};
use folio_wizard::{
    GenerationState, ImageRef, PersonalField, ProjectField, ProjectId, SkillLevel, Wizard,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::ConfigFile;

/// Optional site sections that can be toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Contact,
    Resume,
    Blog,
}

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contact" => Ok(Flag::Contact),
            "resume" => Ok(Flag::Resume),
            "blog" => Ok(Flag::Blog),
            other => Err(format!("Unknown flag: {} (expected contact, resume or blog)", other)),
        }
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Theme(String),
    Set(PersonalField, String),
    SkillAdd(SkillLevel, String),
    SkillRemove(usize),
    ProjectAdd,
    ProjectRemove(usize),
    ProjectSet(usize, ProjectField, String),
    /// `None` clears the image
    ProjectImage(usize, Option<PathBuf>),
    Photo(Option<PathBuf>),
    Flag(Flag, bool),
    Next,
    Back,
    Status,
    Generate,
    Help,
    Quit,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Quit,
}

/// Parse one input line. Item numbers are 1-based.
pub fn parse(line: &str) -> Result<Command, String> {
    let (word, rest) = split_word(line);

    let command = match word.to_lowercase().as_str() {
        "theme" => {
            if rest.is_empty() {
                return Err("Usage: theme <id>".to_string());
            }
            Command::Theme(rest.to_string())
        }
        "set" => {
            let (field, value) = split_word(rest);
            Command::Set(field.parse()?, value.to_string())
        }
        "skill" => match split_word(rest) {
            ("add", args) => {
                let (level, name) = split_word(args);
                let level = level.parse::<SkillLevel>().map_err(|e| e.to_string())?;
                Command::SkillAdd(level, name.to_string())
            }
            ("rm", n) => Command::SkillRemove(parse_number(n)?),
            _ => return Err("Usage: skill add <level> <name> | skill rm <n>".to_string()),
        },
        "project" => match split_word(rest) {
            ("add", _) => Command::ProjectAdd,
            ("rm", n) => Command::ProjectRemove(parse_number(n)?),
            (n, args) if !n.is_empty() => {
                let number = parse_number(n)?;
                let (field, value) = split_word(args);
                if field.eq_ignore_ascii_case("image") {
                    Command::ProjectImage(number, optional_path(value))
                } else {
                    Command::ProjectSet(number, field.parse()?, value.to_string())
                }
            }
            _ => {
                return Err(
                    "Usage: project add | project rm <n> | project <n> <field> <value>".to_string(),
                )
            }
        },
        "photo" => Command::Photo(optional_path(rest)),
        "flag" => {
            let (name, state) = split_word(rest);
            let on = match state.to_lowercase().as_str() {
                "on" => true,
                "off" => false,
                _ => return Err("Usage: flag <contact|resume|blog> on|off".to_string()),
            };
            Command::Flag(name.parse()?, on)
        }
        "next" => Command::Next,
        "back" => Command::Back,
        "status" => Command::Status,
        "generate" => Command::Generate,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command: {} (try 'help')", other)),
    };

    Ok(command)
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s, ""),
    }
}

fn parse_number(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("Expected an item number starting at 1, got '{}'", s.trim())),
    }
}

fn optional_path(s: &str) -> Option<PathBuf> {
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(PathBuf::from(s))
    }
}

/// A wizard bound to a packager and an output directory.
pub struct Session {
    wizard: Wizard,
    packager: Packager,
    output: PathBuf,
    base_dir: PathBuf,
}

impl Session {
    pub fn new(packager: Packager, output: PathBuf, base_dir: PathBuf) -> Self {
        Self {
            wizard: Wizard::new(),
            packager,
            output,
            base_dir,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Apply a command. Errors are meant for the user; the wizard is unchanged.
    pub async fn execute(&mut self, command: Command) -> Result<Outcome> {
        let reply = match command {
            Command::Theme(id) => {
                let theme = id.parse::<Theme>().map_err(|_| {
                    let known: Vec<_> = Theme::ALL.iter().map(|t| t.id()).collect();
                    anyhow!("Unknown theme '{}'. Available: {}", id, known.join(", "))
                })?;
                self.wizard.select_theme(theme.id());
                format!("Theme set to {}", theme.id())
            }
            Command::Set(field, value) => {
                *self.wizard.personal_mut().field_mut(field) = value;
                format!("Updated {}", field.as_str())
            }
            Command::SkillAdd(level, name) => {
                self.wizard.add_skill(&name, level)?;
                format!("Added {} ({})", name.trim(), level)
            }
            Command::SkillRemove(n) => {
                check_number(n, self.wizard.skills().len(), "skill")?;
                let skill = self.wizard.remove_skill(n - 1);
                format!("Removed {}", skill.name)
            }
            Command::ProjectAdd => {
                let position = self.wizard.add_project();
                format!("Added project #{}", position + 1)
            }
            Command::ProjectRemove(n) => {
                check_number(n, self.wizard.projects().len(), "project")?;
                self.wizard.remove_project(n - 1);
                format!("Removed project #{}", n)
            }
            Command::ProjectSet(n, field, value) => {
                let id = self.project_id(n)?;
                if let Some(draft) = self.wizard.project_mut(id) {
                    *draft.field_mut(field) = value;
                }
                format!("Updated project #{}", n)
            }
            Command::ProjectImage(n, path) => {
                let id = self.project_id(n)?;
                let image = self.load_image(path.as_deref())?;
                if let Some(draft) = self.wizard.project_mut(id) {
                    draft.image = image;
                }
                format!("Updated image for project #{}", n)
            }
            Command::Photo(path) => {
                let image = self.load_image(path.as_deref())?;
                let reply = match &image {
                    Some(image) => format!("Photo set ({})", image.mime()),
                    None => "Photo cleared".to_string(),
                };
                self.wizard.set_photo(image);
                reply
            }
            Command::Flag(flag, on) => {
                let features = self.wizard.features_mut();
                match flag {
                    Flag::Contact => features.include_contact = on,
                    Flag::Resume => features.include_resume = on,
                    Flag::Blog => features.include_blog = on,
                }
                format!("{:?} {}", flag, if on { "on" } else { "off" })
            }
            Command::Next => {
                let step = self.wizard.advance()?;
                format!("Step {}", step)
            }
            Command::Back => format!("Step {}", self.wizard.retreat()),
            Command::Status => self.status(),
            Command::Generate => {
                let path = super::generate(&mut self.wizard, &self.packager, &self.output).await?;
                format!("Portfolio generated: {}", path.display())
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Reply(reply))
    }

    fn project_id(&self, n: usize) -> Result<ProjectId> {
        check_number(n, self.wizard.projects().len(), "project")?;
        Ok(self.wizard.projects()[n - 1].id())
    }

    fn load_image(&self, path: Option<&Path>) -> Result<Option<ImageRef>> {
        match path {
            Some(path) => Ok(Some(ImageRef::from_file(&self.base_dir.join(path))?)),
            None => Ok(None),
        }
    }

    /// Summary of everything entered so far.
    pub fn status(&self) -> String {
        let w = &self.wizard;
        let mut lines = vec![format!("Step {}", w.step())];

        let theme = if w.theme_id().is_empty() {
            "(default)"
        } else {
            w.theme_id()
        };
        lines.push(format!("Theme: {}", theme));

        let missing = w.personal().missing_required();
        if missing.is_empty() {
            lines.push(format!("Personal: {}, {}", w.personal().name, w.personal().title));
        } else {
            lines.push(format!("Personal: missing {}", missing.join(", ")));
        }
        lines.push(format!(
            "Photo: {}",
            w.photo().map(|p| p.mime()).unwrap_or("none")
        ));

        lines.push("Skills:".to_string());
        for (i, skill) in w.skills().iter().enumerate() {
            lines.push(format!("  {}. {} ({})", i + 1, skill.name, skill.level));
        }

        // Unnamed projects are left out of the site.
        lines.push("Projects:".to_string());
        for (i, draft) in w.projects().iter().enumerate() {
            let (name, mark) = if draft.name.trim().is_empty() {
                ("(untitled)", " [skipped]")
            } else if draft.is_complete() {
                (draft.name.trim(), "")
            } else {
                (draft.name.trim(), " [no description]")
            };
            let image = if draft.image.is_some() { " [image]" } else { "" };
            lines.push(format!("  {}. {}{}{}", i + 1, name, image, mark));
        }

        let f = w.features();
        lines.push(format!(
            "Flags: contact={} resume={} blog={}",
            on_off(f.include_contact),
            on_off(f.include_resume),
            on_off(f.include_blog)
        ));

        let generation = match w.generation() {
            GenerationState::Ready => "ready".to_string(),
            GenerationState::InProgress => "in progress".to_string(),
            GenerationState::Succeeded => "done".to_string(),
            GenerationState::Failed { message } => format!("failed: {}", message),
        };
        lines.push(format!("Generation: {}", generation));

        lines.join("\n")
    }
}

fn check_number(n: usize, len: usize, what: &str) -> Result<()> {
    if n == 0 || n > len {
        return Err(anyhow!("No {} #{} (have {})", what, n, len));
    }
    Ok(())
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Run the interactive wizard on stdin/stdout.
pub async fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let config = ConfigFile::load(config_path)?;
    let output = output.unwrap_or_else(|| config.site.output.clone());
    let packager = Packager::new(Arc::new(SystemClock), config.package_options(None));

    let mut session = Session::new(packager, output, PathBuf::from("."));
    println!("Portfolio wizard. Type 'help' for commands.");
    println!("Step {}", session.wizard().step());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match session.execute(command).await {
            Ok(Outcome::Reply(reply)) => println!("{}", reply),
            Ok(Outcome::Quit) => break,
            Err(e) => println!("{:#}", e),
        }
    }

    Ok(())
}

const HELP: &str = "Commands:
  theme <id>                      choose a theme
  set <field> <value>             name, title, about, email, phone, location,
                                  website, linkedin, github, twitter
  skill add <level> <name>        Beginner, Intermediate, Advanced or Expert
  skill rm <n>
  project add
  project rm <n>
  project <n> <field> <value>     name, tech, desc, live, source
  project <n> image <path|none>
  photo <path|none>
  flag <contact|resume|blog> on|off
  next | back | status
  generate                        write the archive (review step only)
  quit";
