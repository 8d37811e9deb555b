//! Line-oriented terminal adapter for [`GameSession`].
//!
//! Each input line becomes one session command; each returned
//! [`SessionEvent`] is rendered as text.

use std::io::{self, BufRead, Write};

use pinpoint_core::{
    CandidateId, GameSession, MatchResult, Round, RoundOutcome, SelectionChange, SessionEvent,
    SessionState,
};
use pinpoint_data::Boundary;

/// A command typed at the play prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TerminalCommand {
    /// Pick or unpick the candidate with this one-based label.
    Toggle(usize),
    /// Show every candidate with its selection marker.
    List,
    /// Score the picks.
    Submit,
    /// Show the command summary.
    Help,
    /// Leave without scoring.
    Quit,
}

impl TerminalCommand {
    /// Parse one trimmed input line.
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_lowercase();
        match word.as_str() {
            "list" | "ls" => Some(Self::List),
            "submit" => Some(Self::Submit),
            "help" | "?" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            other => other
                .strip_prefix('#')
                .unwrap_or(other)
                .parse()
                .ok()
                .map(Self::Toggle),
        }
    }
}

pub(crate) struct Terminal<'io> {
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
}

impl<'io> Terminal<'io> {
    pub(crate) fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { input, output }
    }

    pub(crate) fn output(&mut self) -> &mut (dyn Write + 'io) {
        &mut *self.output
    }

    /// Read one line after printing `prompt`; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    pub(crate) fn intro(
        &mut self,
        title: Option<&str>,
        boundary: Option<&Boundary>,
        session: &GameSession,
    ) -> io::Result<()> {
        let round = session.round();
        match title {
            Some(title) => writeln!(self.output, "Pinpoint: {title}")?,
            None => writeln!(self.output, "Pinpoint")?,
        }
        if let Some(boundary) = boundary {
            writeln!(
                self.output,
                "City outline loaded ({} shape(s)).",
                boundary.shape_count()
            )?;
        }
        writeln!(
            self.output,
            "Pick {} of the {} points, then submit.",
            round.config().max_selections,
            round.candidates().len()
        )
    }

    /// Run the round until it is scored or the player leaves.
    pub(crate) fn play(
        &mut self,
        session: &mut GameSession,
        preset_name: Option<&str>,
    ) -> io::Result<Option<RoundOutcome>> {
        if !self.start(session, preset_name)? {
            return Ok(None);
        }
        self.list(session)?;
        self.help(session)?;
        loop {
            let prompt = format!(
                "[{}/{}] > ",
                session.selection().size(),
                session.selection().capacity()
            );
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match TerminalCommand::parse(&line) {
                Some(TerminalCommand::Toggle(label)) => self.toggle(session, label)?,
                Some(TerminalCommand::List) => self.list(session)?,
                Some(TerminalCommand::Help) => self.help(session)?,
                Some(TerminalCommand::Quit) => return Ok(None),
                Some(TerminalCommand::Submit) => {
                    if let Some(SessionEvent::Finished(outcome)) = session.on_submit() {
                        return Ok(Some(outcome));
                    }
                    let selection = session.selection();
                    writeln!(
                        self.output,
                        "Pick {} more point(s) before submitting.",
                        selection.capacity().saturating_sub(selection.size())
                    )?;
                }
                None if line.is_empty() => {}
                None => writeln!(
                    self.output,
                    "Unknown command '{line}'. Type help to see the commands."
                )?,
            }
        }
    }

    /// Ask for a name until the session starts; `false` at end of input.
    fn start(&mut self, session: &mut GameSession, preset_name: Option<&str>) -> io::Result<bool> {
        let mut pending = preset_name.map(str::to_owned);
        while session.state() == SessionState::Waiting {
            let name = if let Some(name) = pending.take() {
                name
            } else {
                let Some(line) = self.read_line("Your name: ")? else {
                    return Ok(false);
                };
                line
            };
            match session.on_start_requested(&name) {
                Ok(Some(SessionEvent::Started { player, viewport })) => {
                    writeln!(self.output, "Welcome, {player}!")?;
                    if let Some(rect) = viewport {
                        writeln!(
                            self.output,
                            "Play area: lat {:.5} to {:.5}, lon {:.5} to {:.5}",
                            rect.min().y,
                            rect.max().y,
                            rect.min().x,
                            rect.max().x
                        )?;
                    }
                }
                Ok(_) => {}
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(session.state() == SessionState::Playing)
    }

    fn toggle(&mut self, session: &mut GameSession, label: usize) -> io::Result<()> {
        let known = CandidateId::from_label(label)
            .filter(|id| session.round().candidates().get(*id).is_some());
        let Some(id) = known else {
            return writeln!(self.output, "There is no Point {label}.");
        };
        let capacity = session.selection().capacity();
        match session.on_candidate_clicked(id) {
            Some(SessionEvent::SelectionChanged {
                change,
                size,
                ready,
            }) => {
                match change {
                    SelectionChange::Added(picked) => {
                        writeln!(self.output, "Picked {picked} ({size}/{capacity}).")?;
                    }
                    SelectionChange::Removed(dropped) => {
                        writeln!(self.output, "Removed {dropped} ({size}/{capacity}).")?;
                    }
                }
                if ready {
                    writeln!(
                        self.output,
                        "All {capacity} points picked. Type submit to score them."
                    )?;
                }
                Ok(())
            }
            _ => writeln!(
                self.output,
                "You already have {capacity} points. Pick one of them again to remove it."
            ),
        }
    }

    fn list(&mut self, session: &GameSession) -> io::Result<()> {
        for (id, point) in session.round().candidates().iter() {
            let marker = if session.selection().contains(id) {
                "[x]"
            } else {
                "[ ]"
            };
            writeln!(self.output, "{marker} {:<9} {point}", id.to_string())?;
        }
        Ok(())
    }

    fn help(&mut self, session: &GameSession) -> io::Result<()> {
        writeln!(
            self.output,
            "Type a point number to pick or unpick it. Commands: list, submit (once you have {}), help, quit.",
            session.selection().capacity()
        )
    }

    /// Print the score, feedback and the answers revealed after scoring.
    pub(crate) fn show_outcome(&mut self, outcome: &RoundOutcome, round: &Round) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Result: {}", outcome.result)?;
        writeln!(self.output, "{}", outcome.feedback().message())?;

        let picks: Vec<String> = outcome.picks.iter().map(ToString::to_string).collect();
        writeln!(self.output, "Your picks: {}", picks.join(", "))?;

        writeln!(self.output, "Answer points:")?;
        for (index, answer) in outcome.answers.points().iter().enumerate() {
            let status = match &outcome.result {
                MatchResult::Hits { claimed, .. } if claimed.contains(&index) => " found",
                MatchResult::Hits { .. } => " missed",
                MatchResult::Score { .. } => "",
            };
            let label = round
                .candidates()
                .iter()
                .find(|(_, candidate)| candidate == answer)
                .map(|(id, _)| format!(" {id}"))
                .unwrap_or_default();
            writeln!(self.output, "  {answer}{label}{status}")?;
        }
        writeln!(self.output)
    }
}
