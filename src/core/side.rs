//! Physical seat at the board.
//!
//! Search always works from the mover's orientation; `Side` tracks which
//! real player that is so results can be reported from player one's view.

use serde::{Deserialize, Serialize};

/// One of the two players. `First` moves first from the start position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    #[default]
    First = 0,
    Second = 1,
}

impl Side {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// 0 for the first player, 1 for the second.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Side for a raw turn flag. Any non-zero value is the second player.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        if index == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Sign that turns a mover-relative score into a first-player score.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.index() + 1)
    }
}
