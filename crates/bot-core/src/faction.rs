//! Player-relative owner codes.

use std::fmt;

use crate::{BotError, BotResult};

/// Owner code stored in each cell of the player-relative raster.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Faction {
    /// Nothing owned occupies the cell.
    Background = 0,
    Own        = 1,
    Ally       = 2,
    /// Beacons, mineral fields and other unowned resources.
    Neutral    = 3,
    Hostile    = 4,
}

impl Faction {
    pub const ALL: [Faction; 5] = [
        Faction::Background,
        Faction::Own,
        Faction::Ally,
        Faction::Neutral,
        Faction::Hostile,
    ];

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> BotResult<Faction> {
        Faction::ALL
            .into_iter()
            .find(|f| f.code() == code)
            .ok_or(BotError::UnknownFaction(code))
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Faction::Background => "background",
            Faction::Own        => "own",
            Faction::Ally       => "ally",
            Faction::Neutral    => "neutral",
            Faction::Hostile    => "hostile",
        };
        f.write_str(s)
    }
}
