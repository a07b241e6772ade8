use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier shared by the two cards of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub u16);

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two physical cards of a pair this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSide {
    Original,
    Copy,
}

impl CardSide {
    pub const fn other(self) -> CardSide {
        match self {
            CardSide::Original => CardSide::Copy,
            CardSide::Copy => CardSide::Original,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CardSide::Original => "original",
            CardSide::Copy => "copy",
        }
    }
}

impl fmt::Display for CardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique identity of one in-play card, rendered as `"3-original"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub pair: PairId,
    pub side: CardSide,
}

impl CardId {
    pub const fn new(pair: PairId, side: CardSide) -> Self {
        Self { pair, side }
    }

    /// The id of the other card of the same pair.
    pub const fn partner(self) -> CardId {
        CardId::new(self.pair, self.side.other())
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.pair, self.side)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCardIdError;

impl fmt::Display for ParseCardIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected `<pair>-original` or `<pair>-copy`")
    }
}

impl std::error::Error for ParseCardIdError {}

impl FromStr for CardId {
    type Err = ParseCardIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (pair, side) = value.split_once('-').ok_or(ParseCardIdError)?;
        let pair = pair.parse::<u16>().map_err(|_| ParseCardIdError)?;
        let side = match side {
            "original" => CardSide::Original,
            "copy" => CardSide::Copy,
            _ => return Err(ParseCardIdError),
        };
        Ok(CardId::new(PairId(pair), side))
    }
}

/// One entry of the picture catalog; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub pair_id: PairId,
    pub display_name: String,
}

impl CardDefinition {
    pub fn new(pair_id: PairId, display_name: impl Into<String>) -> Self {
        Self {
            pair_id,
            display_name: display_name.into(),
        }
    }
}

/// An in-play card instance. Claimed cards stay in the deck sequence so
/// the board layout never shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    display_name: String,
    is_flipped: bool,
    is_matched: bool,
}

impl Card {
    pub(crate) fn new(id: CardId, display_name: String) -> Self {
        Self {
            id,
            display_name,
            is_flipped: false,
            is_matched: false,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn pair(&self) -> PairId {
        self.id.pair
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    pub(crate) fn set_flipped(&mut self, flipped: bool) {
        self.is_flipped = flipped;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.is_flipped = true;
        self.is_matched = true;
    }
}
