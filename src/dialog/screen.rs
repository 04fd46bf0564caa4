//! Screens produced by transitions and their localized rendering

use crate::locale::{self, band_label, text, Locale, MessageId, LANGUAGE_OPTIONS};
use crate::metric::Band;

/// Prefix for screens that expect another input
pub const CONTINUE_PREFIX: &str = "CON ";
/// Prefix for screens that close the USSD session
pub const END_PREFIX: &str = "END ";

const WEIGHT_EXAMPLE: &str = "70";
const HEIGHT_EXAMPLE: &str = "170";

/// A screen to send back to the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    LanguageMenu,
    WeightPrompt,
    HeightPrompt,
    InvalidWeight,
    InvalidHeight,
    Result { metric: f64, band: Band },
    TipsQuestion,
    /// Tips for the band; general advice when none was computed
    Tips { band: Option<Band> },
    Goodbye,
    /// Generic failure text, never carries details
    Error,
}

impl Screen {
    /// Whether this screen ends the USSD session
    pub fn is_terminal(&self) -> bool {
        matches!(self, Screen::Goodbye | Screen::Error)
    }

    /// Render with the `CON `/`END ` prefix the gateway expects.
    pub fn render(&self, locale: Locale) -> String {
        let prefix = if self.is_terminal() {
            END_PREFIX
        } else {
            CONTINUE_PREFIX
        };
        format!("{prefix}{}", self.body(locale))
    }

    fn body(&self, locale: Locale) -> String {
        let t = |id| text(id, locale);
        match self {
            Screen::LanguageMenu => format!(
                "{}\n{}\n\n{LANGUAGE_OPTIONS}",
                t(MessageId::Welcome),
                t(MessageId::SelectLanguage)
            ),
            Screen::WeightPrompt => format!(
                "{}\n{} {WEIGHT_EXAMPLE}",
                t(MessageId::EnterWeight),
                t(MessageId::InputExample)
            ),
            Screen::HeightPrompt => format!(
                "{}\n{} {HEIGHT_EXAMPLE}",
                t(MessageId::EnterHeight),
                t(MessageId::InputExample)
            ),
            Screen::InvalidWeight => t(MessageId::InvalidWeight).to_string(),
            Screen::InvalidHeight => t(MessageId::InvalidHeight).to_string(),
            Screen::Result { metric, band } => format!(
                "{}\n{} {metric:.1}\n{} {}\n\n{}\n{}\n{}",
                t(MessageId::ResultHeading),
                t(MessageId::MetricLabel),
                t(MessageId::CategoryLabel),
                band_label(*band, locale),
                t(MessageId::WouldYouLike),
                t(MessageId::OptionGetTips),
                t(MessageId::OptionCalculateAgain)
            ),
            Screen::TipsQuestion => format!(
                "{}\n\n{}\n{}",
                t(MessageId::TipsQuestion),
                t(MessageId::OptionShowTips),
                t(MessageId::OptionNoThanks)
            ),
            Screen::Tips { band } => format!(
                "{}\n{}\n\n{}\n{}\n{}",
                t(MessageId::TipsHeading),
                locale::tips(*band, locale),
                t(MessageId::WouldYouLike),
                t(MessageId::OptionRecalculate),
                t(MessageId::OptionEndSession)
            ),
            Screen::Goodbye => t(MessageId::Goodbye).to_string(),
            Screen::Error => t(MessageId::GenericError).to_string(),
        }
    }
}
