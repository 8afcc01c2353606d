use crate::card::layout::CardLayout;
use crate::card::primitives::*;
use serde::{Deserialize, Serialize};

// Everything a session tells us about one card. Field names follow
// the session payloads, so partial payloads fill in with the
// documented defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardState {
    pub value: CardValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub revealed: bool,
    pub is_active: bool,
    pub is_mine: bool,
    pub mode: PlayMode,
    pub location: CardSpot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
    #[serde(rename = "color", skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}

impl Default for CardState {
    fn default() -> Self {
        Self {
            value: CardValue::Unknown,
            name: None,
            revealed: true,
            is_active: false,
            is_mine: false,
            mode: PlayMode::Place,
            location: CardSpot::Field,
            hint: None,
            face: None,
            colour: None,
        }
    }
}

impl CardState {
    pub fn new(value: CardValue) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> CardLayout {
        CardLayout::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_documented_defaults() {
        let state = CardState::default();

        assert_eq!(state.value, CardValue::Unknown);
        assert_eq!(state.revealed, true);
        assert_eq!(state.is_active, false);
        assert_eq!(state.is_mine, false);
        assert_eq!(state.mode, PlayMode::Place);
        assert_eq!(state.location, CardSpot::Field);
        assert_eq!(state.name, None);
        assert_eq!(state.hint, None);
        assert_eq!(state.face, None);
        assert_eq!(state.colour, None);
    }

    #[test]
    fn test_new_keeps_defaults_around_the_value() {
        let state = CardState::new(CardValue::Number(31));

        assert_eq!(state.value, CardValue::Number(31));
        assert_eq!(state.revealed, true);
        assert_eq!(state.location, CardSpot::Field);
    }

    #[test]
    fn test_wire_shape_matches_session_payloads() {
        let state = CardState {
            value: CardValue::Number(5),
            name: Some("Aoi".to_string()),
            revealed: false,
            is_mine: true,
            hint: Some("ramen at 2am".to_string()),
            ..CardState::default()
        };

        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({
                "value": 5,
                "name": "Aoi",
                "revealed": false,
                "isActive": false,
                "isMine": true,
                "mode": "place",
                "location": "field",
                "hint": "ramen at 2am",
            })
        );
    }

    #[test]
    fn test_colour_override_rides_the_color_key() {
        let state = CardState {
            colour: Some("#ff9900".to_string()),
            ..CardState::default()
        };

        let wire = serde_json::to_value(&state).unwrap();
        assert_eq!(wire["color"], json!("#ff9900"));
    }

    #[test]
    fn test_partial_payload_fills_in_defaults() {
        let state: CardState = serde_json::from_value(json!({})).unwrap();
        assert_eq!(state, CardState::default());

        let state: CardState = serde_json::from_value(json!({
            "value": 42,
            "location": "hand",
        }))
        .unwrap();
        assert_eq!(state.value, CardValue::Number(42));
        assert_eq!(state.location, CardSpot::Hand);
        assert_eq!(state.revealed, true);
        assert_eq!(state.mode, PlayMode::Place);
    }

    #[test]
    fn test_unknown_value_round_trips() {
        let state: CardState = serde_json::from_value(json!({ "value": "?" })).unwrap();
        assert_eq!(state.value, CardValue::Unknown);

        let wire = serde_json::to_value(&state).unwrap();
        assert_eq!(wire["value"], json!("?"));
    }
}
