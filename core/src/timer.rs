use core::fmt;

use serde::{Deserialize, Serialize};

/// Countdown gating the current phase, expired at zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTimer {
    remaining: u32,
}

impl PhaseTimer {
    pub fn load(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

/// Session clock. Runs down in the select phase and is topped up by clears.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTimer {
    remaining: u32,
    total_load: u32,
    urgent: bool,
}

impl GameTimer {
    pub const fn new(total_load: u32) -> Self {
        Self {
            remaining: total_load,
            total_load,
            urgent: false,
        }
    }

    pub fn reload(&mut self) {
        self.remaining = self.total_load;
        self.urgent = false;
    }

    /// Counts down one tick. Returns `true` exactly once, on the tick the
    /// clock first drops under a quarter of its load.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if !self.urgent && self.remaining.saturating_mul(4) < self.total_load {
            self.urgent = true;
            return true;
        }
        false
    }

    pub fn extend(&mut self, ticks: u32) {
        self.remaining = self.remaining.saturating_add(ticks);
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn total_load(&self) -> u32 {
        self.total_load
    }

    pub const fn is_urgent(&self) -> bool {
        self.urgent
    }

    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Short-lived `+ N` text shown after an award.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Popup {
    pub points: u32,
    pub remaining: u32,
}

impl Popup {
    pub const fn new(points: u32, duration: u32) -> Self {
        Self {
            points,
            remaining: duration,
        }
    }

    /// Counts down one tick, returns whether the popup is still visible.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining > 0
    }
}

impl fmt::Display for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+ {}", self.points)
    }
}
