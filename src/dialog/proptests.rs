//! Property-based tests for the dialog state machine
//!
//! These tests verify key invariants hold across arbitrary step sequences.

use super::state::MAX_HISTORY;
use super::transition::Transition;
use super::*;
use crate::locale::Locale;
use crate::metric::{classify, compute_metric, parse_mass};
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("1".to_string()),
        Just("2".to_string()),
        Just("3".to_string()),
        (1u32..600).prop_map(|n| n.to_string()),
        (1u32..3000).prop_map(|n| format!("{}.{}", n / 10, n % 10)),
        "[a-z]{1,4}",
        Just(String::new()),
        Just("-5".to_string()),
    ]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Start),
        Just(Step::Back),
        Just(Step::Home),
        arb_token().prop_map(Step::ChooseLanguage),
        arb_token().prop_map(Step::EnterMass),
        arb_token().prop_map(Step::EnterHeight),
        arb_token().prop_map(Step::ResultChoice),
        arb_token().prop_map(Step::TipsChoice),
        arb_token().prop_map(Step::AfterTips),
    ]
}

/// Apply steps the way the controller does: failures keep the old session.
fn apply_all(steps: Vec<Step>) -> Vec<(Session, Step, Result<Transition, DialogError>)> {
    let mut session = Session::new("prop", "caller");
    let mut trace = Vec::new();
    for step in steps {
        let result = transition(&session, step.clone());
        let next = match &result {
            Ok(t) => t.session.clone(),
            Err(_) => session.clone(),
        };
        trace.push((session, step, result));
        session = next;
    }
    trace
}

/// What the caller does next when driving the dialog through the gateway
#[derive(Debug, Clone)]
enum CallerAction {
    /// Give a valid answer for the current screen; the number picks which one
    Answer(u8),
    Back,
    Home,
}

fn arb_caller_action() -> impl Strategy<Value = CallerAction> {
    prop_oneof![
        3 => (1u8..=3).prop_map(CallerAction::Answer),
        1 => Just(CallerAction::Back),
        1 => Just(CallerAction::Home),
    ]
}

/// A valid forward answer and the state it leads to. The tips screen is
/// left out: its answers end or restart the dialog.
fn forward_answer(state: DialogState, pick: u8) -> Option<(String, DialogState)> {
    let pick = u32::from(pick);
    match state {
        DialogState::LanguageSelect => Some((pick.to_string(), DialogState::WeightInput)),
        DialogState::WeightInput => Some(((40 + pick * 10).to_string(), DialogState::HeightInput)),
        DialogState::HeightInput => Some(((150 + pick * 10).to_string(), DialogState::Result)),
        DialogState::Result => Some(("1".to_string(), DialogState::TipsQuestion)),
        DialogState::TipsQuestion => Some(("1".to_string(), DialogState::TipsResult)),
        DialogState::TipsResult => None,
    }
}

proptest! {
    #[test]
    fn accumulated_input_follows_dialog_through_back_and_home(
        actions in proptest::collection::vec(arb_caller_action(), 0..40)
    ) {
        let mut session = transition(&Session::new("prop", "caller"), Step::from_input(""))
            .unwrap()
            .session;
        let mut tokens: Vec<String> = Vec::new();

        for action in actions {
            let (token, expected) = match action {
                CallerAction::Answer(pick) => match forward_answer(session.state, pick) {
                    Some((token, next)) => (token, Some(next)),
                    None => continue,
                },
                CallerAction::Back => ("98".to_string(), None),
                CallerAction::Home => ("99".to_string(), Some(DialogState::LanguageSelect)),
            };
            tokens.push(token);
            let input = tokens.join("*");

            let result = transition(&session, Step::from_input(&input));
            prop_assert!(result.is_ok(), "{:?} failed on {:?}", input, result.as_ref().err());
            let t = result.unwrap();
            if let Some(expected) = expected {
                prop_assert_eq!(t.session.state, expected, "after {:?}", input);
            }
            session = t.session;
        }
    }

    #[test]
    fn history_never_exceeds_cap(steps in proptest::collection::vec(arb_step(), 0..60)) {
        for (_, _, result) in apply_all(steps) {
            if let Ok(t) = result {
                prop_assert!(t.session.history.len() <= MAX_HISTORY);
            }
        }
    }

    #[test]
    fn assessment_implies_validated_inputs(steps in proptest::collection::vec(arb_step(), 0..40)) {
        for (_, _, result) in apply_all(steps) {
            if let Ok(t) = result {
                if let Some(assessment) = t.session.inputs.assessment {
                    prop_assert!(t.session.inputs.mass_kg.is_some());
                    prop_assert!(t.session.inputs.height_cm.is_some());
                    prop_assert_eq!(assessment.band, classify(assessment.metric));
                }
            }
        }
    }

    #[test]
    fn home_always_resets(steps in proptest::collection::vec(arb_step(), 0..30)) {
        for (before, step, result) in apply_all(steps) {
            if step == Step::Home {
                let t = result.unwrap();
                prop_assert_eq!(t.session.state, DialogState::LanguageSelect);
                prop_assert!(t.session.inputs.is_empty());
                prop_assert!(t.session.history.is_empty());
                prop_assert_eq!(t.session.locale, before.locale);
                prop_assert_eq!(t.screen, Screen::LanguageMenu);
            }
        }
    }

    #[test]
    fn invalid_mass_changes_nothing(steps in proptest::collection::vec(arb_step(), 0..30)) {
        for (before, step, result) in apply_all(steps) {
            if let Step::EnterMass(token) = &step {
                if parse_mass(token).is_err() {
                    let t = result.unwrap();
                    prop_assert_eq!(&t.session, &before);
                    prop_assert_eq!(t.screen, Screen::InvalidWeight);
                }
            }
        }
    }

    #[test]
    fn locale_changes_only_on_language_or_back(steps in proptest::collection::vec(arb_step(), 0..40)) {
        for (before, step, result) in apply_all(steps) {
            if let Ok(t) = result {
                if t.session.locale != before.locale {
                    let allowed = matches!(step, Step::Back)
                        || matches!(&step, Step::ChooseLanguage(tok) if Locale::from_menu_choice(tok).is_some());
                    prop_assert!(allowed, "locale changed on {:?}", step);
                }
            }
        }
    }

    #[test]
    fn only_missing_input_errors(steps in proptest::collection::vec(arb_step(), 0..40)) {
        for (_, _, result) in apply_all(steps) {
            if let Err(e) = result {
                prop_assert!(matches!(e, DialogError::MissingInput { .. }), "unexpected {:?}", e);
            }
        }
    }

    #[test]
    fn screens_carry_protocol_prefix(steps in proptest::collection::vec(arb_step(), 0..30)) {
        for (_, _, result) in apply_all(steps) {
            if let Ok(t) = result {
                let out = t.screen.render(t.session.locale);
                if t.screen.is_terminal() {
                    prop_assert!(out.starts_with("END "));
                } else {
                    prop_assert!(out.starts_with("CON "));
                }
            }
        }
    }

    #[test]
    fn happy_path_matches_engine(mass in 1u32..=500, height in 50u32..=300, lang in 1u32..=3) {
        let lang = lang.to_string();
        let steps = vec![
            Step::Start,
            Step::ChooseLanguage(lang),
            Step::EnterMass(mass.to_string()),
            Step::EnterHeight(height.to_string()),
        ];
        let trace = apply_all(steps);
        let (_, _, last) = trace.into_iter().last().unwrap();
        let t = last.unwrap();
        let expected = compute_metric(f64::from(mass), f64::from(height)).unwrap();
        let assessment = t.session.inputs.assessment.unwrap();
        prop_assert!((assessment.metric - expected).abs() < 1e-9);
        prop_assert_eq!(assessment.band, classify(expected));
        prop_assert_eq!(t.session.state, DialogState::Result);
        prop_assert_eq!(t.session.history.len(), 3);
    }
}
