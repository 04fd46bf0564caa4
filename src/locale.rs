//! Localized screen text
//!
//! Every caller-visible string is looked up here by `(MessageId, Locale)`.
//! Lookups never fail: a missing translation falls back to English, and a
//! missing English entry falls back to the message id itself.

mod tips;

pub use tips::{exercise_advice, nutrition_advice, tips};

use crate::metric::Band;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported caller locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Rw,
}

impl Locale {
    #[cfg(test)]
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Rw];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Rw => "rw",
        }
    }

    /// Parse a locale code, tolerating case and region suffixes (`fr-RW`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or_default();
        match lang {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            "rw" => Some(Locale::Rw),
            _ => None,
        }
    }

    /// Locale picked from the language menu (`1`, `2`, `3`)
    pub fn from_menu_choice(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Locale::En),
            "2" => Some(Locale::Fr),
            "3" => Some(Locale::Rw),
            _ => None,
        }
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Locale::parse(&value).unwrap_or_default()
    }
}

impl From<Locale> for &'static str {
    fn from(value: Locale) -> Self {
        value.code()
    }
}

/// Identifiers for every localized fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    Welcome,
    SelectLanguage,
    EnterWeight,
    EnterHeight,
    InputExample,
    ResultHeading,
    MetricLabel,
    CategoryLabel,
    WouldYouLike,
    OptionGetTips,
    OptionCalculateAgain,
    TipsQuestion,
    OptionShowTips,
    OptionNoThanks,
    TipsHeading,
    OptionRecalculate,
    OptionEndSession,
    InvalidWeight,
    InvalidHeight,
    Goodbye,
    GenericError,
    BandLow,
    BandNormal,
    BandHigh,
    BandVeryHigh,
}

impl MessageId {
    /// Stable key, used as the last-resort fallback text
    pub fn key(self) -> &'static str {
        match self {
            MessageId::Welcome => "welcome",
            MessageId::SelectLanguage => "select_language",
            MessageId::EnterWeight => "enter_weight",
            MessageId::EnterHeight => "enter_height",
            MessageId::InputExample => "input_example",
            MessageId::ResultHeading => "result_heading",
            MessageId::MetricLabel => "metric_label",
            MessageId::CategoryLabel => "category_label",
            MessageId::WouldYouLike => "would_you_like",
            MessageId::OptionGetTips => "option_get_tips",
            MessageId::OptionCalculateAgain => "option_calculate_again",
            MessageId::TipsQuestion => "tips_question",
            MessageId::OptionShowTips => "option_show_tips",
            MessageId::OptionNoThanks => "option_no_thanks",
            MessageId::TipsHeading => "tips_heading",
            MessageId::OptionRecalculate => "option_recalculate",
            MessageId::OptionEndSession => "option_end_session",
            MessageId::InvalidWeight => "invalid_weight",
            MessageId::InvalidHeight => "invalid_height",
            MessageId::Goodbye => "goodbye",
            MessageId::GenericError => "generic_error",
            MessageId::BandLow => "band_low",
            MessageId::BandNormal => "band_normal",
            MessageId::BandHigh => "band_high",
            MessageId::BandVeryHigh => "band_very_high",
        }
    }

    pub fn for_band(band: Band) -> Self {
        match band {
            Band::Low => MessageId::BandLow,
            Band::Normal => MessageId::BandNormal,
            Band::High => MessageId::BandHigh,
            Band::VeryHigh => MessageId::BandVeryHigh,
        }
    }
}

/// Language menu lines, shown untranslated so every caller can find theirs
pub const LANGUAGE_OPTIONS: &str = "1. English\n2. Français\n3. Kinyarwanda";

// ============================================================================
// Catalogs
// ============================================================================

const CATALOG_EN: &[(MessageId, &str)] = &[
    (MessageId::Welcome, "Welcome to BMI Calculator"),
    (MessageId::SelectLanguage, "Please select your language:"),
    (MessageId::EnterWeight, "Please enter your weight in kilograms (KG):"),
    (MessageId::EnterHeight, "Please enter your height in centimeters (CM):"),
    (MessageId::InputExample, "Example:"),
    (MessageId::ResultHeading, "Your BMI Result:"),
    (MessageId::MetricLabel, "BMI:"),
    (MessageId::CategoryLabel, "Category:"),
    (MessageId::WouldYouLike, "Would you like to:"),
    (MessageId::OptionGetTips, "1. Get health tips"),
    (MessageId::OptionCalculateAgain, "2. Calculate again"),
    (
        MessageId::TipsQuestion,
        "Would you like to receive health tips based on your BMI?",
    ),
    (MessageId::OptionShowTips, "1. Yes, show me tips"),
    (MessageId::OptionNoThanks, "2. No, thank you"),
    (MessageId::TipsHeading, "Health Tips:"),
    (MessageId::OptionRecalculate, "1. Calculate BMI again"),
    (MessageId::OptionEndSession, "2. End session"),
    (
        MessageId::InvalidWeight,
        "Invalid weight! Please enter a valid weight between 1-500 KG.",
    ),
    (
        MessageId::InvalidHeight,
        "Invalid height! Please enter a valid height between 1-300 CM.",
    ),
    (
        MessageId::Goodbye,
        "Thank you for using BMI Calculator. Stay healthy!",
    ),
    (MessageId::GenericError, "An error occurred. Please try again."),
    (MessageId::BandLow, "Underweight"),
    (MessageId::BandNormal, "Normal Weight"),
    (MessageId::BandHigh, "Overweight"),
    (MessageId::BandVeryHigh, "Obese"),
];

const CATALOG_FR: &[(MessageId, &str)] = &[
    (MessageId::Welcome, "Bienvenue au Calculateur d'IMC"),
    (MessageId::SelectLanguage, "Veuillez sélectionner votre langue:"),
    (
        MessageId::EnterWeight,
        "Veuillez entrer votre poids en kilogrammes (KG):",
    ),
    (
        MessageId::EnterHeight,
        "Veuillez entrer votre taille en centimètres (CM):",
    ),
    (MessageId::InputExample, "Exemple:"),
    (MessageId::ResultHeading, "Votre Résultat IMC:"),
    (MessageId::MetricLabel, "IMC:"),
    (MessageId::CategoryLabel, "Catégorie:"),
    (MessageId::WouldYouLike, "Voulez-vous:"),
    (MessageId::OptionGetTips, "1. Obtenir des conseils de santé"),
    (MessageId::OptionCalculateAgain, "2. Recalculer"),
    (
        MessageId::TipsQuestion,
        "Voulez-vous recevoir des conseils de santé basés sur votre IMC?",
    ),
    (MessageId::OptionShowTips, "1. Oui, montrez-moi des conseils"),
    (MessageId::OptionNoThanks, "2. Non, merci"),
    (MessageId::TipsHeading, "Conseils de Santé:"),
    (MessageId::OptionRecalculate, "1. Recalculer l'IMC"),
    (MessageId::OptionEndSession, "2. Terminer la session"),
    (
        MessageId::InvalidWeight,
        "Poids invalide! Veuillez entrer un poids valide entre 1-500 KG.",
    ),
    (
        MessageId::InvalidHeight,
        "Taille invalide! Veuillez entrer une taille valide entre 1-300 CM.",
    ),
    (
        MessageId::Goodbye,
        "Merci d'avoir utilisé le Calculateur d'IMC. Restez en bonne santé!",
    ),
    (
        MessageId::GenericError,
        "Une erreur s'est produite. Veuillez réessayer.",
    ),
    (MessageId::BandLow, "Insuffisance pondérale"),
    (MessageId::BandNormal, "Poids normal"),
    (MessageId::BandHigh, "Surpoids"),
    (MessageId::BandVeryHigh, "Obèse"),
];

const CATALOG_RW: &[(MessageId, &str)] = &[
    (MessageId::Welcome, "Murakaza neza kuri Kalkulateri ya BMI"),
    (MessageId::SelectLanguage, "Nyamuneka hitamo ururimi rwawe:"),
    (
        MessageId::EnterWeight,
        "Nyamuneka andika ibiro byawe mu magiramu (KG):",
    ),
    (
        MessageId::EnterHeight,
        "Nyamuneka andika uburebure bwawe mu masentimetero (CM):",
    ),
    (MessageId::InputExample, "Urugero:"),
    (MessageId::ResultHeading, "Ibiro byawe bya BMI:"),
    (MessageId::MetricLabel, "BMI:"),
    (MessageId::CategoryLabel, "Umutekano:"),
    (MessageId::WouldYouLike, "Ese ushaka:"),
    (MessageId::OptionGetTips, "1. Kubona inama z'ubuzima"),
    (MessageId::OptionCalculateAgain, "2. Kubarenga"),
    (
        MessageId::TipsQuestion,
        "Ese ushaka kubona inama z'ubuzima kubera BMI yawe?",
    ),
    (MessageId::OptionShowTips, "1. Yego, nyereka inama"),
    (MessageId::OptionNoThanks, "2. Oya, urakoze"),
    (MessageId::TipsHeading, "Inama z'Ubuzima:"),
    (MessageId::OptionRecalculate, "1. Kubarenga BMI"),
    (MessageId::OptionEndSession, "2. Kurangiza"),
    (
        MessageId::InvalidWeight,
        "Ibiro ntabwo ari byo! Nyamuneka andika ibiro byemewe hagati ya 1-500 KG.",
    ),
    (
        MessageId::InvalidHeight,
        "Uburebure ntabwo ari bwo! Nyamuneka andika uburebure bwemewe hagati ya 1-300 CM.",
    ),
    (
        MessageId::Goodbye,
        "Urakoze kwifashisha Kalkulateri ya BMI. Komeza kuba ufite ubuzima!",
    ),
    (
        MessageId::GenericError,
        "Hari ikibazo. Nyamuneka ongera ugerageze.",
    ),
    (MessageId::BandLow, "Ibiro bike"),
    (MessageId::BandNormal, "Ibiro by'ubusanzwe"),
    (MessageId::BandHigh, "Ibiro byinshi"),
    (MessageId::BandVeryHigh, "Ibiro byinshi cyane"),
];

fn catalog() -> &'static HashMap<(Locale, MessageId), &'static str> {
    static CATALOG: OnceLock<HashMap<(Locale, MessageId), &'static str>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        [
            (Locale::En, CATALOG_EN),
            (Locale::Fr, CATALOG_FR),
            (Locale::Rw, CATALOG_RW),
        ]
        .into_iter()
        .flat_map(|(locale, entries)| {
            entries
                .iter()
                .map(move |(id, text)| ((locale, *id), *text))
        })
        .collect()
    })
}

/// Look up `id` in `locale`, falling back to English and then to the key.
pub fn text(id: MessageId, locale: Locale) -> &'static str {
    let table = catalog();
    table
        .get(&(locale, id))
        .or_else(|| table.get(&(Locale::default(), id)))
        .copied()
        .unwrap_or_else(|| id.key())
}

/// Localized display label for a band
pub fn band_label(band: Band, locale: Locale) -> &'static str {
    text(MessageId::for_band(band), locale)
}
