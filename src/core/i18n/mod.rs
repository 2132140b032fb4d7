mod en;
mod he;
mod shared;

use std::{fmt, str::FromStr};

use crate::{core::catalogue::ContentKey, error::ParseError};

/// Localized text for one catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectDetails {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectTable {
    pub master_cpp: ProjectDetails,
    pub testing_tools: ProjectDetails,
    pub agentic_stack: ProjectDetails,
    pub networking: ProjectDetails,
    pub ai_tools: ProjectDetails,
    pub sbc: ProjectDetails,
    pub python: ProjectDetails,
    pub machine_learning: ProjectDetails,
    pub design_patterns: ProjectDetails,
}

impl ProjectTable {
    pub fn get(&self, key: ContentKey) -> &ProjectDetails {
        match key {
            ContentKey::MasterCpp => &self.master_cpp,
            ContentKey::TestingTools => &self.testing_tools,
            ContentKey::AgenticStack => &self.agentic_stack,
            ContentKey::Networking => &self.networking,
            ContentKey::AiTools => &self.ai_tools,
            ContentKey::Sbc => &self.sbc,
            ContentKey::Python => &self.python,
            ContentKey::MachineLearning => &self.machine_learning,
            ContentKey::DesignPatterns => &self.design_patterns,
        }
    }
}

/// Every user-facing string for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer_rights: &'static str,
    pub feedback: &'static str,
    pub visit_site: &'static str,
    pub go_to_site: &'static str,
    pub search_placeholder: &'static str,
    pub no_results: &'static str,
    pub share: &'static str,
    pub export_results: &'static str,
    pub clear: &'static str,
    pub font_size: &'static str,
    pub projects: ProjectTable,
}

impl Translation {
    pub fn project(&self, key: ContentKey) -> &ProjectDetails {
        self.projects.get(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
    Hi,
    Ru,
    He,
    De,
    Es,
    Fr,
}

impl Language {
    /// Menu order.
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Zh,
        Language::Hi,
        Language::Ru,
        Language::He,
        Language::De,
        Language::Es,
        Language::Fr,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Hi => "hi",
            Language::Ru => "ru",
            Language::He => "he",
            Language::De => "de",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Name shown in the language switcher, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
            Language::Hi => "हिन्दी",
            Language::Ru => "Русский",
            Language::He => "עברית",
            Language::De => "Deutsch",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }

    /// Locale handed to the speech synthesizer.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Language::He => "he-IL",
            Language::Zh => "zh-CN",
            Language::Es => "es-ES",
            Language::Fr => "fr-FR",
            _ => "en-US",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::He)
    }

    pub fn translation(self) -> &'static Translation {
        match self {
            Language::En => &en::EN,
            Language::He => &he::HE,
            Language::Zh => &shared::ZH,
            Language::Hi => &shared::HI,
            Language::Ru => &shared::RU,
            Language::De => &shared::DE,
            Language::Es => &shared::ES,
            Language::Fr => &shared::FR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        // Accept region-qualified tags such as "he-IL" or "en_US".
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == primary)
            .ok_or_else(|| ParseError::Language(s.to_string()))
    }
}
