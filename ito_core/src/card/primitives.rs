use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum_macros;

pub type CardNumber = u8;

// Spectator copies of an unrevealed card carry Unknown until the
// session discloses the real number.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardValue {
    Number(CardNumber),
    #[default]
    Unknown,
}

impl CardValue {
    pub fn as_number(self) -> Option<CardNumber> {
        match self {
            CardValue::Number(number) => Some(number),
            CardValue::Unknown => None,
        }
    }

    pub fn is_number(self) -> bool {
        self.as_number().is_some()
    }
}

impl From<CardNumber> for CardValue {
    fn from(number: CardNumber) -> Self {
        CardValue::Number(number)
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CardValue::Number(number) => write!(f, "{number}"),
            CardValue::Unknown => write!(f, "?"),
        }
    }
}

// On the wire a value is either a bare number or the placeholder
// string "?", so the serde impls are written by hand.
impl Serialize for CardValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CardValue::Number(number) => serializer.serialize_u8(*number),
            CardValue::Unknown => serializer.serialize_str("?"),
        }
    }
}

struct CardValueVisitor;

impl<'de> Visitor<'de> for CardValueVisitor {
    type Value = CardValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a card number or \"?\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<CardValue, E> {
        CardNumber::try_from(v)
            .map(CardValue::Number)
            .map_err(|_| E::custom(format!("card number out of range: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<CardValue, E> {
        CardNumber::try_from(v)
            .map(CardValue::Number)
            .map_err(|_| E::custom(format!("card number out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<CardValue, E> {
        if v == "?" {
            Ok(CardValue::Unknown)
        } else {
            Err(E::custom(format!("unrecognized card value: {v:?}")))
        }
    }
}

impl<'de> Deserialize<'de> for CardValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CardValueVisitor)
    }
}

#[derive(
    strum_macros::Display,
    strum_macros::EnumString,
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    #[default]
    Place,
    Reveal,
}

#[derive(
    strum_macros::Display,
    strum_macros::EnumString,
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "lowercase")]
pub enum CardSpot {
    Hand,
    #[default]
    Field,
}
