//! Round lifecycle: waiting for a name, playing, finished.
//!
//! [`GameSession`] owns everything a round needs and exposes three command
//! handlers for a UI adapter to call from its input events:
//! [`GameSession::on_start_requested`], [`GameSession::on_candidate_clicked`]
//! and [`GameSession::on_submit`]. Each returns the [`SessionEvent`] the
//! presentation layer should render, or `None` when the command was ignored.
//! Commands that arrive in the wrong state are silent no-ops.
//!
//! Transitions only move forward. A finished session stays finished; a new
//! round needs a new session.

use geo::Rect;
use log::{debug, info};
use thiserror::Error;

use crate::{
    AnswerSet, CandidateId, Feedback, GeoPoint, MatchResult, RankingEntry, Round,
    ScoringStrategy, SelectionChange, SelectionSet, strategy_for,
};

/// Message shown when the start screen is submitted without a name.
pub const EMPTY_NAME_MESSAGE: &str = "Enter your name to start!";

/// Lifecycle state of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the player to enter a name.
    Waiting,
    /// Accepting picks.
    Playing,
    /// Scored; picks are frozen.
    Finished,
}

/// Errors returned by [`GameSession::on_start_requested`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The name was empty once surrounding whitespace was removed.
    #[error("Enter your name to start!")]
    EmptyName,
}

/// A player name with surrounding whitespace removed; never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Trim and validate a raw name.
    ///
    /// # Errors
    /// Returns [`StartError::EmptyName`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, StartError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StartError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the presentation layer should render after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The round started; hide the start screen and fit the map.
    Started {
        /// Validated player name.
        player: PlayerName,
        /// Bounds of the candidate markers.
        viewport: Option<Rect<f64>>,
    },
    /// A candidate was picked or unpicked.
    SelectionChanged {
        /// Highlight to add or remove.
        change: SelectionChange,
        /// Picks after the change.
        size: usize,
        /// Whether submit is now available.
        ready: bool,
    },
    /// The round was scored.
    Finished(RoundOutcome),
}

/// Scored result of a finished round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    /// Player who played the round.
    pub player: PlayerName,
    /// Score produced by the round's strategy.
    pub result: MatchResult,
    /// Answers to reveal on the map.
    pub answers: AnswerSet,
    /// Picks in the order they were made.
    pub picks: Vec<CandidateId>,
}

impl RoundOutcome {
    /// Feedback band for the result.
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.result.feedback()
    }

    /// Leaderboard row for the round.
    #[must_use]
    pub fn ranking_entry(&self) -> RankingEntry {
        RankingEntry::new(self.player.as_str(), &self.result)
    }
}

/// State machine binding a round, a selection and a scoring strategy.
#[derive(Debug)]
pub struct GameSession {
    round: Round,
    strategy: Box<dyn ScoringStrategy>,
    state: SessionState,
    player: Option<PlayerName>,
    selection: SelectionSet,
    outcome: Option<RoundOutcome>,
}

impl GameSession {
    /// Start a session scored by the strategy the round is configured with.
    #[must_use]
    pub fn new(round: Round) -> Self {
        let strategy = strategy_for(round.config());
        Self::with_strategy(round, strategy)
    }

    /// Start a session with an explicit strategy.
    #[must_use]
    pub fn with_strategy(round: Round, strategy: Box<dyn ScoringStrategy>) -> Self {
        let selection = SelectionSet::new(round.config().max_selections);
        Self {
            round,
            strategy,
            state: SessionState::Waiting,
            player: None,
            selection,
            outcome: None,
        }
    }

    /// Handle the start button.
    ///
    /// Ignored unless the session is waiting.
    ///
    /// # Errors
    /// Returns [`StartError::EmptyName`] when `name` is blank; the session
    /// keeps waiting.
    pub fn on_start_requested(&mut self, name: &str) -> Result<Option<SessionEvent>, StartError> {
        if self.state != SessionState::Waiting {
            debug!("ignoring start request while {:?}", self.state);
            return Ok(None);
        }
        let player = PlayerName::parse(name)?;
        info!("round started for {player}");
        self.state = SessionState::Playing;
        self.player = Some(player.clone());
        Ok(Some(SessionEvent::Started {
            player,
            viewport: self.round.candidates().bounds(),
        }))
    }

    /// Handle a click on a candidate marker.
    ///
    /// Ignored unless the session is playing, when the candidate is unknown,
    /// or when adding would exceed the selection cap.
    pub fn on_candidate_clicked(&mut self, id: CandidateId) -> Option<SessionEvent> {
        if self.state != SessionState::Playing {
            debug!("ignoring click on {id} while {:?}", self.state);
            return None;
        }
        if self.round.candidates().get(id).is_none() {
            debug!("ignoring click on unknown candidate {id}");
            return None;
        }
        let change = self.selection.toggle(id)?;
        Some(SessionEvent::SelectionChanged {
            change,
            size: self.selection.size(),
            ready: self.selection.is_complete(),
        })
    }

    /// Handle the submit button.
    ///
    /// Scores the round and finishes the session. Ignored unless the session
    /// is playing with a complete selection.
    pub fn on_submit(&mut self) -> Option<SessionEvent> {
        if !self.can_submit() {
            debug!(
                "ignoring submit while {:?} with {}/{} picks",
                self.state,
                self.selection.size(),
                self.selection.capacity()
            );
            return None;
        }
        let player = self.player.clone()?;
        let picks = self.selection.chosen().to_vec();
        let points: Vec<GeoPoint> = picks
            .iter()
            .filter_map(|id| self.round.candidates().get(*id))
            .collect();
        let result = self.strategy.score(&points, self.round.answers().points());
        info!("round finished for {player}: {result}");

        let outcome = RoundOutcome {
            player,
            result,
            answers: self.round.answers().clone(),
            picks,
        };
        self.state = SessionState::Finished;
        self.outcome = Some(outcome.clone());
        Some(SessionEvent::Finished(outcome))
    }

    /// Report whether submit would be accepted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == SessionState::Playing && self.selection.is_complete()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Player name once the round has started.
    #[must_use]
    pub const fn player(&self) -> Option<&PlayerName> {
        self.player.as_ref()
    }

    /// Current picks.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Round being played.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Result once the session has finished.
    #[must_use]
    pub const fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }
}
