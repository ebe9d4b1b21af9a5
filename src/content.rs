use std::sync::LazyLock;

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::typewriter::RoleList;

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> =
    LazyLock::new(|| Portfolio::load(PORTFOLIO_FILE));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
}

#[derive(Deserialize, Debug, Clone)]
pub struct Portfolio {
    pub owner: Owner,
    pub roles: RoleList,
    pub about: About,
    pub skills: Vec<SkillCategory>,
    pub experience: Experience,
    pub projects: Vec<Project>,
    pub resume: ResumeAsset,
    pub contact: Contact,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Owner {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub intro: String,
    pub profile_image: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub highlights: Vec<AboutHighlight>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AboutHighlight {
    pub title: String,
    pub caption: String,
    /// Text color class for the title.
    pub accent: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Experience {
    pub title: String,
    pub summary: String,
    pub details: String,
    pub placeholder: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    pub title: String,
    pub overview: String,
    pub tools: Vec<String>,
    pub code_url: String,
    pub demo_url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ResumeAsset {
    pub path: String,
    pub filename: String,
    pub blurb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub pitch: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Portfolio {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = ContentAssets::get(name).ok_or_else(|| ContentError::Missing(name.to_string()))?;
        Self::parse(&file.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|e| ContentError::Parse(e.to_string()))
    }
}

/// Site content embedded at build time, parsed on first use.
pub fn portfolio() -> Result<&'static Portfolio, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

/// Year the site was built, for the copyright line.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}
