//! Solving session state machine
//!
//! A `SolverSession` owns the candidate set and drives the turn-by-turn
//! solving loop: emit a guess, accept feedback, prune, select the next
//! guess. The presentation layer (console or otherwise) only ever calls
//! `start`, `submit_feedback`, and the read-only observers.
//!
//! State graph: `NotStarted -> AwaitingFeedback -> {AwaitingFeedback, Won,
//! Lost, Contradiction}`. The three right-hand states are terminal.

use crate::core::{Code, Color, Feedback};
use crate::solver::filter::{filter_candidates, filter_history};
use crate::solver::strategy::{Strategy, StrategyType};
use crate::universe;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game parameters for one session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub code_length: usize,
    pub max_turns: usize,
    pub alphabet: Vec<Color>,
    /// Fixed opening guess for minimax. `None` derives an A,A,B,B opening
    /// from the first two alphabet colors.
    pub opening: Option<Code>,
}

impl SessionConfig {
    /// Config for a custom game over the full color alphabet
    #[must_use]
    pub fn new(code_length: usize, max_turns: usize) -> Self {
        Self {
            code_length,
            max_turns,
            alphabet: Color::ALL.to_vec(),
            opening: None,
        }
    }

    /// The classic 6-color, length-4, 12-turn game with Knuth's opening
    #[must_use]
    pub fn classic() -> Self {
        Self {
            code_length: 4,
            max_turns: 12,
            alphabet: Color::ALL.to_vec(),
            opening: Some(Code::new(vec![
                Color::Red,
                Color::Red,
                Color::Blue,
                Color::Blue,
            ])),
        }
    }

    /// The canonical opening guess: two colors, each covering half the code
    fn opening_guess(&self) -> Option<Code> {
        if let Some(opening) = &self.opening {
            return Some(opening.clone());
        }

        let first = *self.alphabet.first()?;
        let second = self.alphabet.get(1).copied().unwrap_or(first);
        let half = self.code_length.div_ceil(2);

        let mut colors = vec![first; half];
        colors.resize(self.code_length, second);
        Some(Code::new(colors))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    AwaitingFeedback,
    /// The last feedback was all-exact
    Won,
    /// Turn budget exhausted
    Lost,
    /// The candidate set is empty: the feedback history is inconsistent
    /// with every possible secret
    Contradiction,
}

impl SessionState {
    /// Whether the session has ended
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Contradiction)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::AwaitingFeedback => "awaiting feedback",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Contradiction => "contradiction",
        };
        write!(f, "{name}")
    }
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `start` called on a session that already ran
    AlreadyStarted,
    /// `submit_feedback` called outside `AwaitingFeedback`
    NotAwaitingFeedback(SessionState),
    /// Feedback counts out of range for this code length. Recoverable:
    /// the caller should re-prompt.
    InvalidFeedback {
        exact: u8,
        partial: u8,
        code_length: usize,
    },
    /// A selector was invoked with zero candidates. Internal invariant
    /// violation: contradiction is checked before selection.
    EmptyCandidates,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyStarted => write!(f, "Session was already started"),
            Self::NotAwaitingFeedback(state) => {
                write!(f, "Session is not awaiting feedback (state: {state})")
            }
            Self::InvalidFeedback {
                exact,
                partial,
                code_length,
            } => write!(
                f,
                "Feedback ({exact}, {partial}) is out of range for a code of length {code_length}"
            ),
            Self::EmptyCandidates => write!(f, "No candidates remain to select from"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Serializable session state
///
/// Carries the guess history rather than the candidate set; the two are
/// interchangeable because restoring re-filters the universe against every
/// historical observation and must land on the identical set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub code_length: usize,
    pub max_turns: usize,
    pub alphabet: Vec<Color>,
    pub turn: usize,
    pub history: Vec<(Code, Feedback)>,
    pub current_guess: Option<Code>,
}

/// Stateful machine-guesser session
pub struct SolverSession {
    config: SessionConfig,
    strategy: StrategyType,
    rng: StdRng,
    universe: Vec<Code>,
    candidates: Vec<Code>,
    history: Vec<(Code, Feedback)>,
    current_guess: Option<Code>,
    turn: usize,
    state: SessionState,
}

impl SolverSession {
    /// Create a session; the universe is enumerated once, up front
    #[must_use]
    pub fn new(config: SessionConfig, strategy: StrategyType, seed: u64) -> Self {
        let universe = universe::generate(&config.alphabet, config.code_length);
        Self {
            config,
            strategy,
            rng: StdRng::seed_from_u64(seed),
            universe,
            candidates: Vec::new(),
            history: Vec::new(),
            current_guess: None,
            turn: 0,
            state: SessionState::NotStarted,
        }
    }

    /// Begin the game: full universe as candidates, opening guess chosen
    ///
    /// Minimax uses the fixed canonical opening (the full-universe search
    /// result is invariant across games, so it is never computed); random
    /// picks any code.
    ///
    /// # Errors
    /// `AlreadyStarted` if called twice, `EmptyCandidates` if the universe
    /// is empty.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        if self.universe.is_empty() {
            return Err(SessionError::EmptyCandidates);
        }

        self.candidates = self.universe.clone();
        self.history.clear();
        self.turn = 0;

        let opening = match &self.strategy {
            StrategyType::Minimax(_) => self
                .config
                .opening_guess()
                .ok_or(SessionError::EmptyCandidates)?,
            StrategyType::Random(s) => s
                .select_guess(&self.universe, &self.candidates, &mut self.rng)
                .ok_or(SessionError::EmptyCandidates)?,
        };

        self.current_guess = Some(opening);
        self.state = SessionState::AwaitingFeedback;
        Ok(())
    }

    /// Record the feedback for the current guess and advance the machine
    ///
    /// Returns the state reached. All-exact feedback wins; feedback that
    /// empties the candidate set is a contradiction; exhausting the turn
    /// budget loses; otherwise the next guess is selected and the session
    /// keeps awaiting feedback.
    ///
    /// # Errors
    /// `NotAwaitingFeedback` outside the guessing loop, `InvalidFeedback`
    /// for out-of-range counts (state is untouched; re-prompt and resubmit).
    pub fn submit_feedback(&mut self, exact: u8, partial: u8) -> Result<SessionState, SessionError> {
        if self.state != SessionState::AwaitingFeedback {
            return Err(SessionError::NotAwaitingFeedback(self.state));
        }

        let code_length = self.config.code_length;
        let feedback = Feedback::checked(exact, partial, code_length).map_err(|_| {
            SessionError::InvalidFeedback {
                exact,
                partial,
                code_length,
            }
        })?;

        let Some(guess) = self.current_guess.clone() else {
            return Err(SessionError::EmptyCandidates);
        };

        self.history.push((guess.clone(), feedback));

        if feedback.is_win(code_length) {
            self.state = SessionState::Won;
            return Ok(self.state);
        }

        self.candidates = filter_candidates(&self.candidates, &guess, feedback);
        if self.candidates.is_empty() {
            self.state = SessionState::Contradiction;
            return Ok(self.state);
        }

        self.turn += 1;
        if self.turn >= self.config.max_turns {
            self.state = SessionState::Lost;
            return Ok(self.state);
        }

        let next = self
            .strategy
            .select_guess(&self.universe, &self.candidates, &mut self.rng)
            .ok_or(SessionError::EmptyCandidates)?;
        self.current_guess = Some(next);

        Ok(self.state)
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Completed (non-winning) turns so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// The guess currently awaiting feedback
    #[must_use]
    pub fn current_guess(&self) -> Option<&Code> {
        self.current_guess.as_ref()
    }

    /// Codes still consistent with every observation
    #[must_use]
    pub fn remaining_candidates(&self) -> usize {
        self.candidates.len()
    }

    /// All (guess, feedback) pairs recorded so far, in turn order
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// The candidate codes themselves, for presentation layers that want
    /// to show more than the count
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Size of the full code universe
    #[must_use]
    pub fn universe_size(&self) -> usize {
        self.universe.len()
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Capture the serializable state of this session
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            code_length: self.config.code_length,
            max_turns: self.config.max_turns,
            alphabet: self.config.alphabet.clone(),
            turn: self.turn,
            history: self.history.clone(),
            current_guess: self.current_guess.clone(),
        }
    }

    /// Rebuild a session from a snapshot
    ///
    /// The candidate set is re-derived by filtering the universe against the
    /// full history, which is guaranteed to equal the set the live session
    /// held. The state is re-derived from the history, candidate count, and
    /// turn counter.
    #[must_use]
    pub fn restore(snapshot: SessionSnapshot, strategy: StrategyType, seed: u64) -> Self {
        let config = SessionConfig {
            code_length: snapshot.code_length,
            max_turns: snapshot.max_turns,
            alphabet: snapshot.alphabet,
            opening: None,
        };
        let universe = universe::generate(&config.alphabet, config.code_length);

        let won = snapshot
            .history
            .last()
            .is_some_and(|(_, feedback)| feedback.is_win(config.code_length));

        let started = snapshot.current_guess.is_some() || !snapshot.history.is_empty();
        let candidates = if started {
            filter_history(&universe, &snapshot.history)
        } else {
            Vec::new()
        };

        let state = if !started {
            SessionState::NotStarted
        } else if won {
            SessionState::Won
        } else if candidates.is_empty() {
            SessionState::Contradiction
        } else if snapshot.turn >= config.max_turns {
            SessionState::Lost
        } else {
            SessionState::AwaitingFeedback
        };

        Self {
            config,
            strategy,
            rng: StdRng::seed_from_u64(seed),
            universe,
            candidates,
            history: snapshot.history,
            current_guess: snapshot.current_guess,
            turn: snapshot.turn,
            state,
        }
    }
}
