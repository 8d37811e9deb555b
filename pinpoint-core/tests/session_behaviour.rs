#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for the game session state machine.

use std::cell::RefCell;

use pinpoint_core::{
    AnswerSet, CandidateId, CandidateSet, Feedback, GameSession, GeoPoint, MatchResult, Round,
    RoundConfig, SessionState, StartError,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Candidate indices that coincide with the answer points.
const ANSWER_CANDIDATES: [usize; 7] = [0, 3, 7, 8, 10, 14, 18];

fn point(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon).expect("valid point")
}

fn candidates() -> Vec<GeoPoint> {
    [
        (-23.62909, -46.56753),
        (-23.62554, -46.57502),
        (-23.64662, -46.57615),
        (-23.64019, -46.57460),
        (-23.61782, -46.56961),
        (-23.61835, -46.57463),
        (-23.60667, -46.56602),
        (-23.63209, -46.56488),
        (-23.62274, -46.55676),
        (-23.61319, -46.57705),
        (-23.61590, -46.56925),
        (-23.63309, -46.58313),
        (-23.62187, -46.58150),
        (-23.62503, -46.55721),
        (-23.63547, -46.55407),
        (-23.61743, -46.55275),
        (-23.63500, -46.55839),
        (-23.62896, -46.57504),
        (-23.64273, -46.56068),
        (-23.62710, -46.56801),
    ]
    .into_iter()
    .map(|(lat, lon)| point(lat, lon))
    .collect()
}

fn seven_pick_round() -> Round {
    let candidates = candidates();
    let answers = ANSWER_CANDIDATES
        .iter()
        .map(|index| *candidates.get(*index).expect("answer candidate exists"))
        .collect();
    Round::new(
        CandidateSet::new(candidates),
        AnswerSet::new(answers),
        RoundConfig::default(),
    )
    .expect("valid round")
}

/// Scenario state shared by every step.
pub struct SessionWorld {
    session: RefCell<GameSession>,
    start_error: RefCell<Option<StartError>>,
}

#[fixture]
/// Build a fresh `SessionWorld` for each scenario run.
pub fn world() -> SessionWorld {
    SessionWorld {
        session: RefCell::new(GameSession::new(seven_pick_round())),
        start_error: RefCell::new(None),
    }
}

#[given("a new seven-pick session")]
fn new_session(world: &SessionWorld) {
    *world.session.borrow_mut() = GameSession::new(seven_pick_round());
}

#[when("the player starts with a blank name")]
fn start_blank(world: &SessionWorld) {
    let result = world.session.borrow_mut().on_start_requested("   ");
    *world.start_error.borrow_mut() = result.err();
}

#[when("the player starts as \"Ana\"")]
fn start_as_ana(world: &SessionWorld) {
    world
        .session
        .borrow_mut()
        .on_start_requested("Ana")
        .expect("name is valid");
}

#[when("the player picks every answer point")]
fn pick_every_answer(world: &SessionWorld) {
    let mut session = world.session.borrow_mut();
    for index in ANSWER_CANDIDATES {
        session.on_candidate_clicked(CandidateId::new(index));
    }
}

#[when("the player picks one answer point")]
fn pick_one_answer(world: &SessionWorld) {
    world
        .session
        .borrow_mut()
        .on_candidate_clicked(CandidateId::new(0));
}

#[when("the player picks one more candidate")]
fn pick_one_more(world: &SessionWorld) {
    world
        .session
        .borrow_mut()
        .on_candidate_clicked(CandidateId::new(1));
}

#[when("the player submits")]
fn submit(world: &SessionWorld) {
    world.session.borrow_mut().on_submit();
}

#[then("the session is still waiting")]
fn still_waiting(world: &SessionWorld) {
    assert_eq!(world.session.borrow().state(), SessionState::Waiting);
}

#[then("the player is asked for a name")]
fn asked_for_name(world: &SessionWorld) {
    assert_eq!(*world.start_error.borrow(), Some(StartError::EmptyName));
}

#[then("the session is finished")]
fn is_finished(world: &SessionWorld) {
    assert_eq!(world.session.borrow().state(), SessionState::Finished);
}

#[then("the session is still playing")]
fn still_playing(world: &SessionWorld) {
    assert_eq!(world.session.borrow().state(), SessionState::Playing);
}

#[then("the result is 7 of 7 with perfect feedback")]
fn perfect_result(world: &SessionWorld) {
    let session = world.session.borrow();
    let outcome = session.outcome().expect("round was scored");
    assert!(matches!(
        outcome.result,
        MatchResult::Hits {
            hits: 7,
            out_of: 7,
            ..
        }
    ));
    assert_eq!(outcome.feedback(), Feedback::Perfect);
}

#[then("the selection holds one pick")]
fn holds_one(world: &SessionWorld) {
    assert_eq!(world.session.borrow().selection().size(), 1);
}

#[then("the selection holds seven picks")]
fn holds_seven(world: &SessionWorld) {
    let session = world.session.borrow();
    assert_eq!(session.selection().size(), 7);
    assert!(!session.selection().contains(CandidateId::new(1)));
}

#[then("a second submit is ignored")]
fn second_submit_ignored(world: &SessionWorld) {
    assert!(world.session.borrow_mut().on_submit().is_none());
}

#[scenario(path = "tests/features/session.feature", index = 0)]
fn blank_name_keeps_waiting(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/session.feature", index = 1)]
fn every_answer_is_perfect(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/session.feature", index = 2)]
fn incomplete_submit_is_ignored(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/session.feature", index = 3)]
fn eighth_pick_is_ignored(world: SessionWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/session.feature", index = 4)]
fn finished_session_is_frozen(world: SessionWorld) {
    let _ = world;
}
