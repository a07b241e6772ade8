use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PlayerSide {
    A = 0,
    B = 1,
}

impl PlayerSide {
    pub const BOTH: [PlayerSide; 2] = [PlayerSide::A, PlayerSide::B];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn other(self) -> PlayerSide {
        match self {
            PlayerSide::A => PlayerSide::B,
            PlayerSide::B => PlayerSide::A,
        }
    }
}

impl fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerSide::A => "Player A",
            PlayerSide::B => "Player B",
        };
        f.write_str(label)
    }
}
