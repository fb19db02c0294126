use serde::{Deserialize, Serialize};

/// One-shot notifications for the audio and presentation layers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    SwapAccepted,
    SwapRejected,
    SwapReverted,
    ScoreAwarded { combo: u32, points: u32 },
    /// The game clock dropped under a quarter of its load.
    Urgency,
    NoMoreMove,
    BoardRegenerated,
    GameOver,
}

/// Message shown across the middle of the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    #[default]
    None,
    Title,
    NoMoreMove,
    GameOver,
    RestartPrompt,
}

impl Banner {
    pub const fn lines(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Title => &["Match3 Puzzle", "", "Click to start"],
            Self::NoMoreMove => &["No more move"],
            Self::GameOver => &["Game Over"],
            Self::RestartPrompt => &["Game Over", "", "Click to restart"],
        }
    }
}

/// What became of a swap attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapOutcome {
    /// Not in the select phase, nothing happened.
    Ignored,
    /// First pick of a two-step selection was recorded.
    Selected,
    Deselected,
    Rejected,
    Accepted,
}

impl SwapOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
