//! Speaker and language catalog for the Luxembourgish VITS model.

use std::fmt;

use clap::ValueEnum;

/// Speaker voice selection.
///
/// The model ships with eight embedded voices; the name is passed to the
/// synthesis backend verbatim.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Speaker {
    Bernard,
    Bunny,
    Ed,
    Guy,
    #[default]
    Judith,
    Kerstin,
    Linda,
    Thorsten,
}

impl Speaker {
    /// All speakers known to the model.
    pub const ALL: [Speaker; 8] = [
        Speaker::Bernard,
        Speaker::Bunny,
        Speaker::Ed,
        Speaker::Guy,
        Speaker::Judith,
        Speaker::Kerstin,
        Speaker::Linda,
        Speaker::Thorsten,
    ];

    /// Returns the speaker name as the backend expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::Bernard => "Bernard",
            Speaker::Bunny => "Bunny",
            Speaker::Ed => "Ed",
            Speaker::Guy => "Guy",
            Speaker::Judith => "Judith",
            Speaker::Kerstin => "Kerstin",
            Speaker::Linda => "Linda",
            Speaker::Thorsten => "Thorsten",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language selection.
///
/// Each human-readable language maps to the engine-specific locale code the
/// model was trained with.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    #[value(alias = "x-lb")]
    Luxembourgish,

    #[value(alias = "x-de")]
    German,

    #[value(alias = "fr-fr")]
    French,

    #[value(alias = "en")]
    English,

    #[value(alias = "pt-br")]
    Portuguese,
}

impl Language {
    /// All languages the model supports.
    pub const ALL: [Language; 5] = [
        Language::Luxembourgish,
        Language::German,
        Language::French,
        Language::English,
        Language::Portuguese,
    ];

    /// Returns the engine-specific language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Luxembourgish => "x-lb",
            Language::German => "x-de",
            Language::French => "fr-fr",
            Language::English => "en",
            Language::Portuguese => "pt-br",
        }
    }

    /// Returns the human-readable language name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Luxembourgish => "Luxembourgish",
            Language::German => "German",
            Language::French => "French",
            Language::English => "English",
            Language::Portuguese => "Portuguese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
