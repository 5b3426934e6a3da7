use http::Uri;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// Alpha suffix used for skill tile backgrounds.
pub const TILE_ALPHA: u8 = 0x20;

pub static PORTFOLIO: LazyLock<Result<Portfolio, PortfolioError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("Portfolio content not found")]
    Missing,
    #[error("Couldn't parse portfolio: {0}")]
    Parse(String),
    #[error("Portfolio field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("Invalid link: {0}")]
    InvalidLink(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// A `#RRGGBB` display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color([u8; 3]);

impl Color {
    pub fn rgb(self) -> [u8; 3] {
        self.0
    }

    /// CSS hex colour with an alpha channel appended, e.g. `#47A24820`.
    pub fn tinted(self, alpha: u8) -> String {
        format!("{self}{alpha:02X}")
    }
}

impl FromStr for Color {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PortfolioError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let mut rgb = [0u8; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }
        Ok(Self(rgb))
    }
}

impl TryFrom<String> for Color {
    type Error = PortfolioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Mongodb,
    Express,
    React,
    Nodejs,
    Typescript,
    Postgresql,
    Figma,
    Tailwindcss,
}

impl SkillIcon {
    /// Devicon font class.
    pub fn class(self) -> &'static str {
        match self {
            SkillIcon::Mongodb => "devicon-mongodb-plain",
            SkillIcon::Express => "devicon-express-original",
            SkillIcon::React => "devicon-react-original",
            SkillIcon::Nodejs => "devicon-nodejs-plain",
            SkillIcon::Typescript => "devicon-typescript-plain",
            SkillIcon::Postgresql => "devicon-postgresql-plain",
            SkillIcon::Figma => "devicon-figma-plain",
            SkillIcon::Tailwindcss => "devicon-tailwindcss-original",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Github,
    Linkedin,
}

impl ContactKind {
    pub fn class(self) -> &'static str {
        match self {
            ContactKind::Github => "devicon-github-plain",
            ContactKind::Linkedin => "devicon-linkedin-plain",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: SkillIcon,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub kind: ContactKind,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    pub headline: String,
    pub tagline: String,
    #[serde(default)]
    pub bio: Vec<String>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
}

impl Portfolio {
    pub fn parse(content: &str) -> Result<Self, PortfolioError> {
        let portfolio: Portfolio =
            serde_json::from_str(content).map_err(|e| PortfolioError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), PortfolioError> {
        non_empty("owner", &self.owner)?;
        non_empty("headline", &self.headline)?;
        for project in &self.projects {
            non_empty("projects.title", &project.title)?;
            check_link(&project.link)?;
        }
        for skill in &self.skills {
            non_empty("skills.name", &skill.name)?;
        }
        for contact in &self.contacts {
            non_empty("contacts.label", &contact.label)?;
            check_link(&contact.link)?;
        }
        Ok(())
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), PortfolioError> {
    if value.trim().is_empty() {
        Err(PortfolioError::EmptyField(field))
    } else {
        Ok(())
    }
}

fn check_link(link: &str) -> Result<(), PortfolioError> {
    let invalid = || PortfolioError::InvalidLink(link.to_string());
    let uri = link.parse::<Uri>().map_err(|_| invalid())?;
    match (uri.scheme_str(), uri.authority()) {
        (Some("http" | "https"), Some(_)) => Ok(()),
        _ => Err(invalid()),
    }
}

fn load() -> Result<Portfolio, PortfolioError> {
    let file = Content::get(PORTFOLIO_FILE).ok_or(PortfolioError::Missing)?;
    let content =
        std::str::from_utf8(&file.data).map_err(|e| PortfolioError::Parse(e.to_string()))?;
    Portfolio::parse(content)
}

/// The embedded portfolio, parsed on first access.
pub fn portfolio() -> Result<&'static Portfolio, PortfolioError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}
