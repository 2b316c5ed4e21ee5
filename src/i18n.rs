//! Static label table: four languages, nine keys

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ru,
    Fr,
    De,
}

/// Every label the widget renders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Search,
    Temperature,
    Humidity,
    Wind,
    Pressure,
    Theme,
    Language,
    NotFound,
    Loading,
}

impl Label {
    pub const ALL: [Label; 9] = [
        Label::Search,
        Label::Temperature,
        Label::Humidity,
        Label::Wind,
        Label::Pressure,
        Label::Theme,
        Label::Language,
        Label::NotFound,
        Label::Loading,
    ];
}

impl Language {
    /// Selector order
    pub const ALL: [Language; 4] = [Language::Ru, Language::En, Language::Fr, Language::De];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Name shown in the language selector
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
            Language::Fr => "Français",
            Language::De => "Deutsch",
        }
    }

    /// Next language in selector order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|l| l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn label(&self, key: Label) -> &'static str {
        label(*self, key)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language '{0}' (expected one of: en, ru, fr, de)")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            "fr" => Ok(Language::Fr),
            "de" => Ok(Language::De),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

/// Look up a label. The match is exhaustive, so every pair resolves.
pub fn label(language: Language, key: Label) -> &'static str {
    match language {
        Language::En => match key {
            Label::Search => "Search city...",
            Label::Temperature => "Temperature",
            Label::Humidity => "Humidity",
            Label::Wind => "Wind Speed",
            Label::Pressure => "Pressure",
            Label::Theme => "Toggle Theme",
            Label::Language => "Language",
            Label::NotFound => "City not found",
            Label::Loading => "Loading...",
        },
        Language::Ru => match key {
            Label::Search => "Поиск города...",
            Label::Temperature => "Температура",
            Label::Humidity => "Влажность",
            Label::Wind => "Скорость ветра",
            Label::Pressure => "Давление",
            Label::Theme => "Сменить тему",
            Label::Language => "Язык",
            Label::NotFound => "Город не найден",
            Label::Loading => "Загрузка...",
        },
        Language::Fr => match key {
            Label::Search => "Rechercher une ville...",
            Label::Temperature => "Température",
            Label::Humidity => "Humidité",
            Label::Wind => "Vitesse du vent",
            Label::Pressure => "Pression",
            Label::Theme => "Changer de thème",
            Label::Language => "Langue",
            Label::NotFound => "Ville non trouvée",
            Label::Loading => "Chargement...",
        },
        Language::De => match key {
            Label::Search => "Stadt suchen...",
            Label::Temperature => "Temperatur",
            Label::Humidity => "Luftfeuchtigkeit",
            Label::Wind => "Windgeschwindigkeit",
            Label::Pressure => "Luftdruck",
            Label::Theme => "Thema wechseln",
            Label::Language => "Sprache",
            Label::NotFound => "Stadt nicht gefunden",
            Label::Loading => "Laden...",
        },
    }
}
