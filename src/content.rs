// SPDX-License-Identifier: MPL-2.0
//! Portfolio content model.
//!
//! The page is data-driven: profile, skills, and projects come from a
//! `portfolio.toml` document. A sample document is embedded in the binary and
//! used whenever no user content is found, so the application always has
//! something to render.

use crate::app::paths;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONTENT_FILE: &str = "portfolio.toml";

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

/// Who the portfolio belongs to.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A single skill row with a proficiency level.
///
/// The level is kept as the raw string from the document; see
/// [`Skill::level_percent`] for how it becomes a percentage.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub level: String,
}

impl Skill {
    /// Parses the declared level into an integer percentage.
    ///
    /// Unparsable values degrade to 0 rather than erroring; out-of-range
    /// values are clamped into 0..=100.
    pub fn level_percent(&self) -> u8 {
        self.level
            .trim()
            .parse::<i64>()
            .map(|v| v.clamp(0, 100) as u8)
            .unwrap_or(0)
    }
}

/// A project card.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The whole page: one profile plus optional skill and project lists.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Default for Portfolio {
    fn default() -> Self {
        let embedded = Asset::get("default.toml").expect("embedded default content missing");
        let text = String::from_utf8_lossy(embedded.data.as_ref()).to_string();
        toml::from_str(&text).expect("embedded default content must parse")
    }
}

/// Loads portfolio content.
///
/// Resolution order: the explicit `--content` path, then `portfolio.toml` in
/// the config directory, then the embedded sample. A file that exists but
/// fails to parse degrades to the sample with a warning key, mirroring
/// `config::load`.
pub fn load(explicit: Option<PathBuf>) -> (Portfolio, Option<String>) {
    let candidate = explicit.or_else(|| {
        paths::get_app_config_dir().map(|mut dir| {
            dir.push(CONTENT_FILE);
            dir
        })
    });

    if let Some(path) = candidate {
        if path.exists() {
            match load_from_path(&path) {
                Ok(portfolio) => return (portfolio, None),
                Err(_) => {
                    return (
                        Portfolio::default(),
                        Some("notification-content-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Portfolio::default(), None)
}

/// Loads portfolio content from a specific path.
pub fn load_from_path(path: &Path) -> Result<Portfolio> {
    let text = fs::read_to_string(path)?;
    toml::from_str(&text).map_err(|err| Error::Content(err.to_string()))
}
