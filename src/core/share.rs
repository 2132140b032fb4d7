use std::{fmt, str::FromStr};

use crate::{core::navigation::Route, error::ParseError};

pub const FEEDBACK_EMAIL: &str = "goldnoamai@gmail.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    LinkedIn,
    Facebook,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 3] = [
        SharePlatform::Twitter,
        SharePlatform::LinkedIn,
        SharePlatform::Facebook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SharePlatform::Twitter => "Twitter",
            SharePlatform::LinkedIn => "LinkedIn",
            SharePlatform::Facebook => "Facebook",
        }
    }

    /// Share-intent URL for `page_url`. Only Twitter carries the title.
    pub fn share_url(self, page_url: &str, title: &str) -> String {
        let url = urlencoding::encode(page_url);
        match self {
            SharePlatform::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={url}",
                urlencoding::encode(title)
            ),
            SharePlatform::LinkedIn => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={url}")
            }
            SharePlatform::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={url}")
            }
        }
    }
}

impl fmt::Display for SharePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SharePlatform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(SharePlatform::Twitter),
            "linkedin" => Ok(SharePlatform::LinkedIn),
            "facebook" => Ok(SharePlatform::Facebook),
            _ => Err(ParseError::Platform(s.to_string())),
        }
    }
}

/// Absolute URL of `route` under `site_url`.
pub fn page_url(site_url: &str, route: &Route) -> String {
    format!("{}{route}", site_url.trim_end_matches('/'))
}

pub fn feedback_mailto() -> String {
    format!("mailto:{FEEDBACK_EMAIL}")
}
