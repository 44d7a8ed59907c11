use serde::{Serialize, Serializer};
use tracing::debug;

/// Message printed once the loop has been left
pub const SKIPPED_MESSAGE: &str = "Skipped part of the loop";

/// Bounds of the counting loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub start: u32,
    /// Last value still counted (inclusive)
    pub limit: u32,
    /// Value that jumps straight out of the loop
    pub skip_at: u32,
}

impl Default for LoopConfig {
    fn default() -> Self {
        LoopConfig {
            start: 1,
            limit: 5,
            skip_at: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running(u32),
    Skipped,
    Done,
}

/// One line of loop output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLine {
    Count(u32),
    Skipped,
}

impl std::fmt::Display for TraceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceLine::Count(n) => write!(f, "{}", n),
            TraceLine::Skipped => f.write_str(SKIPPED_MESSAGE),
        }
    }
}

// Counts serialize as numbers, the closing line as its message
impl Serialize for TraceLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TraceLine::Count(n) => serializer.serialize_u32(*n),
            TraceLine::Skipped => serializer.serialize_str(SKIPPED_MESSAGE),
        }
    }
}

/// Transition function of the loop. Terminal states map to themselves.
pub fn step(state: LoopState, config: &LoopConfig) -> LoopState {
    match state {
        LoopState::Running(i) if i > config.limit => LoopState::Done,
        LoopState::Running(i) if i == config.skip_at => LoopState::Skipped,
        LoopState::Running(i) => i.checked_add(1).map_or(LoopState::Done, LoopState::Running),
        terminal => terminal,
    }
}

/// Run the counting loop and collect what it prints.
///
/// The closing message follows the loop whichever way it ends, since the
/// jump target sits right before it.
pub fn run(config: &LoopConfig) -> Vec<TraceLine> {
    let mut lines = Vec::new();
    let mut i = config.start;

    'count: loop {
        if i > config.limit {
            debug!(i, "loop finished");
            break 'count;
        }
        if i == config.skip_at {
            debug!(i, "jumping out of loop");
            break 'count;
        }
        lines.push(TraceLine::Count(i));
        match i.checked_add(1) {
            Some(next) => i = next,
            None => {
                debug!(i, "counter exhausted");
                break 'count;
            }
        }
    }

    lines.push(TraceLine::Skipped);
    lines
}

/// Final state the loop reaches for `config`
pub fn final_state(config: &LoopConfig) -> LoopState {
    let mut state = LoopState::Running(config.start);
    while let LoopState::Running(_) = state {
        state = step(state, config);
    }
    state
}
