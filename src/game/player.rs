use std::fmt;

/// Opaque identifier for one of the two players in a game.
///
/// The engine only ever compares ids; names and colours live on [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const fn new(number: u8) -> Self {
        PlayerId(number)
    }

    /// Get the raw player number
    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player as seen by the front end: an id plus display attributes that the
/// rules never look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}
