use serde::{Deserialize, Serialize};
use strum_macros;

// Back-side colours a player can be dealt, in hash-index order.
pub const PLAYER_PALETTE: [PlayerColour; 8] = [
    PlayerColour::Red,
    PlayerColour::Blue,
    PlayerColour::Green,
    PlayerColour::Yellow,
    PlayerColour::Purple,
    PlayerColour::Pink,
    PlayerColour::Teal,
    PlayerColour::Orange,
];

#[derive(
    strum_macros::Display,
    strum_macros::EnumIter,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum PlayerColour {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Teal,
    Orange,
    // Neutral back for a card with no owner name.
    Grey,
}

impl PlayerColour {
    pub fn css_class(self) -> &'static str {
        match self {
            PlayerColour::Red => "bg-red-400",
            PlayerColour::Blue => "bg-blue-400",
            PlayerColour::Green => "bg-green-400",
            PlayerColour::Yellow => "bg-yellow-400",
            PlayerColour::Purple => "bg-purple-400",
            PlayerColour::Pink => "bg-pink-400",
            PlayerColour::Teal => "bg-teal-400",
            PlayerColour::Orange => "bg-orange-400",
            PlayerColour::Grey => "bg-gray-400",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            PlayerColour::Red => "#f87171",
            PlayerColour::Blue => "#60a5fa",
            PlayerColour::Green => "#4ade80",
            PlayerColour::Yellow => "#facc15",
            PlayerColour::Purple => "#c084fc",
            PlayerColour::Pink => "#f472b6",
            PlayerColour::Teal => "#2dd4bf",
            PlayerColour::Orange => "#fb923c",
            PlayerColour::Grey => "#9ca3af",
        }
    }
}

// h = unit + (h << 5) - h over the name's UTF-16 code units,
// accumulated in a signed 32-bit register with wraparound.
fn name_hash(name: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash
}

pub fn palette_index(name: &str) -> usize {
    name_hash(name).unsigned_abs() as usize % PLAYER_PALETTE.len()
}

// Absent or empty names fall back to the neutral grey.
pub fn colour_for_player(name: Option<&str>) -> PlayerColour {
    match name {
        Some(name) if !name.is_empty() => PLAYER_PALETTE[palette_index(name)],
        _ => PlayerColour::Grey,
    }
}
