//! Pure state transition function
//!
//! Given the same session and step, `transition` always produces the same
//! result and performs no I/O. The returned session is a new snapshot; the
//! input session is never mutated.

use super::state::{Assessment, CollectedInputs, DialogState, Session, Snapshot};
use super::{Screen, Step};
use crate::locale::Locale;
use crate::metric::{self, MetricError};
use thiserror::Error;

/// Result of a transition
#[derive(Debug, Clone)]
pub struct Transition {
    pub session: Session,
    pub screen: Screen,
}

impl Transition {
    fn new(session: Session, screen: Screen) -> Self {
        Self { session, screen }
    }

    /// Session unchanged, screen re-rendered
    fn stay(session: &Session, screen: Screen) -> Self {
        Self::new(session.clone(), screen)
    }
}

/// Failures that reach the caller as the generic error screen
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("{state:?} handler needs a {missing} that was never collected")]
    MissingInput {
        state: DialogState,
        missing: &'static str,
    },
    #[error("metric engine rejected collected inputs: {0}")]
    Metric(#[from] MetricError),
}

/// Apply `step` to `session`.
///
/// # Errors
///
/// Returns [`DialogError`] when the handler chosen by the input length needs
/// collected data the session does not have.
pub fn transition(session: &Session, step: Step) -> Result<Transition, DialogError> {
    match step {
        Step::Start => Ok(start(session)),
        Step::Back => back(session),
        Step::Home => Ok(Transition::new(session.reset_home(), Screen::LanguageMenu)),
        Step::ChooseLanguage(token) => Ok(choose_language(session, &token)),
        Step::EnterMass(token) => Ok(enter_mass(session, &token)),
        Step::EnterHeight(token) => enter_height(session, &token),
        Step::ResultChoice(token) => result_choice(session, &token),
        Step::TipsChoice(token) => Ok(tips_choice(session, &token)),
        Step::AfterTips(token) => Ok(after_tips(session, &token)),
    }
}

fn start(session: &Session) -> Transition {
    let mut next = session.clone();
    next.state = DialogState::LanguageSelect;
    Transition::new(next, Screen::LanguageMenu)
}

fn choose_language(session: &Session, token: &str) -> Transition {
    match Locale::from_menu_choice(token) {
        Some(locale) => {
            let mut next = session.advanced_to(DialogState::WeightInput);
            next.locale = locale;
            Transition::new(next, Screen::WeightPrompt)
        }
        None => Transition::stay(session, Screen::LanguageMenu),
    }
}

fn enter_mass(session: &Session, token: &str) -> Transition {
    match metric::parse_mass(token) {
        Ok(mass) => {
            let mut next = session.advanced_to(DialogState::HeightInput);
            next.inputs = CollectedInputs {
                mass_kg: Some(mass),
                ..CollectedInputs::default()
            };
            Transition::new(next, Screen::HeightPrompt)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected mass input");
            Transition::stay(session, Screen::InvalidWeight)
        }
    }
}

fn enter_height(session: &Session, token: &str) -> Result<Transition, DialogError> {
    let height = match metric::parse_height(token) {
        Ok(height) => height,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected height input");
            return Ok(Transition::stay(session, Screen::InvalidHeight));
        }
    };
    let mass = session.inputs.mass_kg.ok_or(DialogError::MissingInput {
        state: DialogState::HeightInput,
        missing: "mass",
    })?;

    let value = metric::compute_metric(mass, height)?;
    let assessment = Assessment {
        metric: value,
        band: metric::classify(value),
    };

    let mut next = session.advanced_to(DialogState::Result);
    next.inputs.height_cm = Some(height);
    next.inputs.assessment = Some(assessment);
    Ok(Transition::new(next, result_screen(assessment)))
}

fn result_choice(session: &Session, token: &str) -> Result<Transition, DialogError> {
    match token {
        "1" => Ok(Transition::new(
            session.advanced_to(DialogState::TipsQuestion),
            Screen::TipsQuestion,
        )),
        "2" => Ok(calculate_again(session)),
        _ => {
            let assessment = require_assessment(session, DialogState::Result)?;
            Ok(Transition::stay(session, result_screen(assessment)))
        }
    }
}

fn tips_choice(session: &Session, token: &str) -> Transition {
    match token {
        "1" => {
            let band = session.inputs.assessment.map(|a| a.band);
            Transition::new(
                session.advanced_to(DialogState::TipsResult),
                Screen::Tips { band },
            )
        }
        "2" => Transition::stay(session, Screen::Goodbye),
        _ => Transition::stay(session, Screen::TipsQuestion),
    }
}

fn after_tips(session: &Session, token: &str) -> Transition {
    match token {
        "1" => calculate_again(session),
        _ => Transition::stay(session, Screen::Goodbye),
    }
}

fn calculate_again(session: &Session) -> Transition {
    let mut next = session.advanced_to(DialogState::WeightInput);
    next.inputs = CollectedInputs::default();
    Transition::new(next, Screen::WeightPrompt)
}

fn back(session: &Session) -> Result<Transition, DialogError> {
    let mut next = session.clone();
    let Some(snapshot) = next.history.pop() else {
        return Ok(Transition::new(session.reset_home(), Screen::LanguageMenu));
    };
    next.inputs = restored_inputs(&session.inputs, &snapshot);
    next.state = snapshot.state;
    next.locale = snapshot.locale;
    let screen = screen_for(&next)?;
    Ok(Transition::new(next, screen))
}

/// Inputs for a snapshot being returned to. The value the caller typed on
/// the restored screen is kept so it survives the trip back.
fn restored_inputs(current: &CollectedInputs, snapshot: &Snapshot) -> CollectedInputs {
    let mut inputs = snapshot.inputs.clone();
    match snapshot.state {
        DialogState::WeightInput => inputs.mass_kg = inputs.mass_kg.or(current.mass_kg),
        DialogState::HeightInput => inputs.height_cm = inputs.height_cm.or(current.height_cm),
        _ => {}
    }
    inputs
}

/// Screen that re-presents `session.state`
fn screen_for(session: &Session) -> Result<Screen, DialogError> {
    Ok(match session.state {
        DialogState::LanguageSelect => Screen::LanguageMenu,
        DialogState::WeightInput => Screen::WeightPrompt,
        DialogState::HeightInput => Screen::HeightPrompt,
        DialogState::Result => result_screen(require_assessment(session, DialogState::Result)?),
        DialogState::TipsQuestion => Screen::TipsQuestion,
        DialogState::TipsResult => Screen::Tips {
            band: session.inputs.assessment.map(|a| a.band),
        },
    })
}

fn require_assessment(session: &Session, state: DialogState) -> Result<Assessment, DialogError> {
    session.inputs.assessment.ok_or(DialogError::MissingInput {
        state,
        missing: "computed BMI",
    })
}

fn result_screen(assessment: Assessment) -> Screen {
    Screen::Result {
        metric: assessment.metric,
        band: assessment.band,
    }
}
