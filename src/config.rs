use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::social::{RawSocialLink, SocialLink, SocialPlatform};

/// Placeholder in `linkTitle` replaced with `SITE.title`.
const TITLE_PLACEHOLDER: &str = "{title}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    #[serde(rename = "SITE")]
    pub site: SiteConfig,
    #[serde(rename = "LOGO_IMAGE")]
    pub logo_image: LogoConfig,
    #[serde(rename = "SOCIALS")]
    pub socials: Vec<SocialLink>
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub website: String,
    pub author: String,
    pub desc: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub light_and_dark_mode: bool,
    pub post_per_page: u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoConfig {
    pub enable: bool,
    pub svg: bool,
    pub width: u32,
    pub height: u32
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            svg: true,
            width: 216,
            height: 46
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "SITE")]
    site: SiteConfig,
    #[serde(rename = "LOGO_IMAGE", default)]
    logo_image: LogoConfig,
    #[serde(rename = "SOCIALS", default)]
    socials: Vec<RawSocialLink>
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(s)?;
        raw.site.validate()?;
        raw.logo_image.validate()?;

        let socials = raw
            .socials
            .into_iter()
            .enumerate()
            .map(|(index, link)| resolve_social(index, link, &raw.site.title))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded {} social links", socials.len());

        Ok(Config {
            site: raw.site,
            logo_image: raw.logo_image,
            socials
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Reading config from {}", path.display());
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|l| l.active)
    }
}

impl SiteConfig {
    /// Canonical origin. Infallible on a loaded config.
    pub fn website_url(&self) -> Result<Url, ConfigError> {
        parse_website(&self.website)
    }

    /// Social preview image resolved against the site origin, treated as a
    /// directory whether or not `website` ends with `/`. `None` leaves the
    /// choice of image to the renderer.
    pub fn og_image_url(&self) -> Result<Option<Url>, ConfigError> {
        let Some(image) = &self.og_image else {
            return Ok(None);
        };
        let mut base = self.website_url()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(image)
            .map(Some)
            .map_err(|e| ConfigError::Invalid(format!("SITE.ogImage `{}`: {}", image, e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        parse_website(&self.website)?;
        if self.post_per_page < 1 {
            return Err(ConfigError::Invalid(format!(
                "SITE.postPerPage must be at least 1, got {}",
                self.post_per_page
            )));
        }
        if self.og_image.as_deref().is_some_and(|i| i.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "SITE.ogImage must not be empty, omit it to use the default".to_string()
            ));
        }
        if self.title.contains(TITLE_PLACEHOLDER) {
            return Err(ConfigError::Invalid(format!(
                "SITE.title must not contain `{}`",
                TITLE_PLACEHOLDER
            )));
        }
        if self.title.trim().is_empty() {
            warn!("SITE.title is empty");
        }
        Ok(())
    }
}

impl LogoConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.enable {
            return Ok(());
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "LOGO_IMAGE width and height must be positive when enabled, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

fn parse_website(website: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(website)
        .map_err(|e| ConfigError::Invalid(format!("SITE.website `{}`: {}", website, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid(format!(
            "SITE.website must be an http(s) URL, got scheme `{}`",
            other
        )))
    }
}

fn resolve_social(index: usize, raw: RawSocialLink, title: &str) -> Result<SocialLink, ConfigError> {
    let name = raw
        .name
        .parse::<SocialPlatform>()
        .map_err(|e| ConfigError::UnknownSocialPlatform { index, name: e.0 })?;
    let href = Url::parse(&raw.href).map_err(|e| {
        ConfigError::Invalid(format!("SOCIALS[{}].href `{}`: {}", index, raw.href, e))
    })?;
    if !matches!(href.scheme(), "http" | "https" | "mailto") {
        return Err(ConfigError::Invalid(format!(
            "SOCIALS[{}].href must be an http(s) or mailto URI, got scheme `{}`",
            index,
            href.scheme()
        )));
    }
    Ok(SocialLink {
        name,
        href: raw.href,
        link_title: raw.link_title.replace(TITLE_PLACEHOLDER, title),
        active: raw.active
    })
}
