use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Platforms the renderer has icons for. Identifiers are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Github,
    Facebook,
    Instagram,
    LinkedIn,
    Mail,
    Twitter,
    Twitch,
    YouTube,
    WhatsApp,
    Pinterest,
    Discord,
    GitLab,
    Reddit,
    Skype,
    Steam,
    Telegram,
    Mastodon,
    CodePen
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 18] = [
        SocialPlatform::Github,
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::LinkedIn,
        SocialPlatform::Mail,
        SocialPlatform::Twitter,
        SocialPlatform::Twitch,
        SocialPlatform::YouTube,
        SocialPlatform::WhatsApp,
        SocialPlatform::Pinterest,
        SocialPlatform::Discord,
        SocialPlatform::GitLab,
        SocialPlatform::Reddit,
        SocialPlatform::Skype,
        SocialPlatform::Steam,
        SocialPlatform::Telegram,
        SocialPlatform::Mastodon,
        SocialPlatform::CodePen
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SocialPlatform::Github => "Github",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Mail => "Mail",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Twitch => "Twitch",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::WhatsApp => "WhatsApp",
            SocialPlatform::Pinterest => "Pinterest",
            SocialPlatform::Discord => "Discord",
            SocialPlatform::GitLab => "GitLab",
            SocialPlatform::Reddit => "Reddit",
            SocialPlatform::Skype => "Skype",
            SocialPlatform::Steam => "Steam",
            SocialPlatform::Telegram => "Telegram",
            SocialPlatform::Mastodon => "Mastodon",
            SocialPlatform::CodePen => "CodePen"
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown social platform `{0}`")]
pub struct UnknownPlatform(pub String);

impl FromStr for SocialPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocialPlatform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: SocialPlatform,
    pub href: String,
    pub link_title: String,
    pub active: bool
}

/// Social entry as written in the config file, before the platform name is
/// checked and `{title}` is filled in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSocialLink {
    pub name: String,
    pub href: String,
    pub link_title: String,
    pub active: bool
}

/// Ordered subsequence of `links` that should be displayed.
pub fn active_socials(links: &[SocialLink]) -> Vec<SocialLink> {
    links.iter().filter(|l| l.active).cloned().collect()
}
