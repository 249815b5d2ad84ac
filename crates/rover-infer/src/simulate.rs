//! The per-trial state machine.
//!
//! A trial is a strict left fold of one instruction listing over a
//! `(heading, position)` pair. There is no branching and no shared
//! state: every trial starts from a fresh [`SimulationState`].

use rover_core::{Command, Heading, Instruction, Position};

use crate::config::{BackMode, InferConfig, TokenPolicy};

/// Heading and position of the robot at one instant of a trial.
///
/// # Examples
///
/// ```
/// use rover_core::{Command, Heading, Position};
/// use rover_infer::{BackMode, SimulationState};
///
/// let end = [Command::TurnLeft, Command::Forward]
///     .into_iter()
///     .fold(SimulationState::default(), |s, c| s.apply(c, BackMode::Reverse));
/// assert_eq!(end.heading, Heading::North);
/// assert_eq!(end.position, Position::new(0, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SimulationState {
    /// Direction the robot faces.
    pub heading: Heading,
    /// Where the robot stands.
    pub position: Position,
}

impl SimulationState {
    /// A robot at the origin facing `heading`.
    pub fn new(heading: Heading) -> Self {
        Self {
            heading,
            position: Position::ORIGIN,
        }
    }

    /// The state after executing `command`.
    ///
    /// Moves change only the position, turns change only the heading.
    /// `back_mode` decides which of the two `BACK` is.
    pub fn apply(self, command: Command, back_mode: BackMode) -> Self {
        let SimulationState { heading, position } = self;
        match command {
            Command::Forward => Self {
                heading,
                position: heading.advance(position, true),
            },
            Command::Back => match back_mode {
                BackMode::Reverse => Self {
                    heading,
                    position: heading.advance(position, false),
                },
                BackMode::TurnAround => Self {
                    heading: heading.turn_back(),
                    position,
                },
            },
            Command::TurnLeft => Self {
                heading: heading.turn_left(),
                position,
            },
            Command::TurnRight => Self {
                heading: heading.turn_right(),
                position,
            },
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(Heading::East)
    }
}

/// How a single trial ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrialOutcome {
    /// Every instruction executed; this is the terminal state.
    Reached(SimulationState),
    /// The fold hit an instruction it cannot execute and stopped.
    Aborted {
        /// Position of the instruction in the trial listing.
        index: usize,
        /// Its token, verbatim.
        token: String,
    },
}

impl TrialOutcome {
    /// Terminal state, if the trial ran to completion.
    pub fn final_state(&self) -> Option<SimulationState> {
        match self {
            TrialOutcome::Reached(state) => Some(*state),
            TrialOutcome::Aborted { .. } => None,
        }
    }

    /// Terminal position, if the trial ran to completion.
    pub fn position(&self) -> Option<Position> {
        self.final_state().map(|s| s.position)
    }

    /// Whether the trial completed exactly on `target`.
    pub fn reaches(&self, target: Position) -> bool {
        self.position() == Some(target)
    }
}

/// Fold `instructions` from a fresh state at the origin.
///
/// The start heading and the meaning of `BACK` come from `config`.
/// Placeholders and unrecognized tokens abort the fold, unless the token
/// policy is [`TokenPolicy::Ignore`], which skips them. The strict
/// policy is applied by the caller before any trial runs.
pub fn simulate(instructions: &[Instruction], config: &InferConfig) -> TrialOutcome {
    let mut state = SimulationState::new(config.start_heading);
    for (index, instr) in instructions.iter().enumerate() {
        let Some(command) = instr.command() else {
            if config.token_policy == TokenPolicy::Ignore {
                tracing::trace!(index, token = %instr, "skipped unexecutable token");
                continue;
            }
            tracing::trace!(index, token = %instr, "trial aborted on unexecutable token");
            return TrialOutcome::Aborted {
                index,
                token: instr.to_string(),
            };
        };
        state = state.apply(command, config.back_mode);
        tracing::trace!(
            index,
            command = %command,
            heading = %state.heading,
            position = %state.position,
            "step"
        );
    }
    TrialOutcome::Reached(state)
}
