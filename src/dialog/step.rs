//! Steps derived from the accumulated USSD input
//!
//! The gateway resends the caller's whole history joined by `*` on every
//! request. The number of live tokens picks the handler; the last token is
//! the caller's answer. Earlier `98`/`99` tokens are folded away first so
//! the count keeps matching the dialog position after back or home.

/// Separator between inputs in the accumulated string
pub const DELIMITER: char = '*';
/// Final token meaning "go back one screen"
pub const BACK_TOKEN: &str = "98";
/// Final token meaning "start over"
pub const HOME_TOKEN: &str = "99";

/// What the current request asks the dialog to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// No input yet: show the first screen
    Start,
    Back,
    Home,
    ChooseLanguage(String),
    EnterMass(String),
    EnterHeight(String),
    /// Answer on the result screen
    ResultChoice(String),
    /// Answer to "would you like tips?"
    TipsChoice(String),
    /// Answer on the tips screen; also any token past the sixth
    AfterTips(String),
}

/// Split the accumulated input into trimmed tokens. Blank input has none.
pub fn split_input(input: &str) -> Vec<&str> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(DELIMITER).map(str::trim).collect()
}

/// Tokens still in effect once earlier back and home tokens are applied:
/// `98` drops the token before it, `99` drops everything before it.
pub fn effective_tokens<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    let mut live = Vec::with_capacity(tokens.len());
    for &token in tokens {
        match token {
            BACK_TOKEN => {
                live.pop();
            }
            HOME_TOKEN => live.clear(),
            _ => live.push(token),
        }
    }
    live
}

impl Step {
    pub fn from_input(input: &str) -> Self {
        Self::from_tokens(&split_input(input))
    }

    pub fn from_tokens(tokens: &[&str]) -> Self {
        let Some(last) = tokens.last() else {
            return Step::Start;
        };
        let answer = (*last).to_string();
        match *last {
            BACK_TOKEN => Step::Back,
            HOME_TOKEN => Step::Home,
            _ => match effective_tokens(tokens).len() {
                1 => Step::ChooseLanguage(answer),
                2 => Step::EnterMass(answer),
                3 => Step::EnterHeight(answer),
                4 => Step::ResultChoice(answer),
                5 => Step::TipsChoice(answer),
                _ => Step::AfterTips(answer),
            },
        }
    }
}
