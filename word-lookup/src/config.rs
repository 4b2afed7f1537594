use std::env;
use std::time::Duration;

use colored::Color;

/// Colours and page text of the terminal surface, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub color: bool,
    pub title: String,
    pub tagline: String,
    pub accent: Color,
    pub text: Color,
    pub info: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: true,
            title: "📖 Stylish Dictionary App".to_owned(),
            tagline: "Type any English word and get its meaning, pronunciation, and example sentences."
                .to_owned(),
            accent: Color::TrueColor { r: 0x0F, g: 0x4C, b: 0x75 },
            text: Color::TrueColor { r: 0x1B, g: 0x26, b: 0x2C },
            info: Color::TrueColor { r: 0x32, g: 0x82, b: 0xB8 },
            success: Color::TrueColor { r: 0x2E, g: 0x8B, b: 0x57 },
            error: Color::TrueColor { r: 0xC0, g: 0x39, b: 0x2B },
            muted: Color::TrueColor { r: 0x39, g: 0x3E, b: 0x46 },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Entries endpoint; the word is appended as the last path segment
    pub api_url: String,
    /// No timeout unless configured
    pub timeout_seconds: Option<u64>,
    pub theme: Theme,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = var("DICTIONARY_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| dictionary::default_api_url().to_owned());

        let timeout_seconds = var("DICTIONARY_TIMEOUT_SECONDS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|seconds| *seconds > 0);

        // https://no-color.org/
        let color = var("NO_COLOR").map_or(true, |v| v.is_empty());

        Config {
            api_url,
            timeout_seconds,
            theme: Theme {
                color,
                ..Theme::default()
            },
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
