use crate::card::colour::*;
use crate::card::primitives::*;
use crate::card::state::CardState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardBack {
    Custom(String),
    Palette(PlayerColour),
}

impl CardBack {
    pub fn css_colour(&self) -> &str {
        match self {
            CardBack::Custom(hex) => hex,
            CardBack::Palette(colour) => colour.hex(),
        }
    }
}

// Everything the view layer needs to draw one card, as a pure
// projection of CardState.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub face_up: bool,
    // Off while cards are still being placed, except the practice 0.
    pub shows_number: bool,
    // Hint strip shown on the front of a hand card.
    pub front_hint: Option<String>,
    pub name: String,
    pub back: CardBack,
    // Owner-only tooltip on the back of a face-down card.
    pub private_value: Option<String>,
    // Covers the back instead of the hint glyph.
    pub face_marker: Option<String>,
    pub back_hint: String,
    pub speech_bubble: Option<String>,
    pub hint_controls: bool,
    pub active: bool,
    pub in_hand: bool,
}

impl CardLayout {
    pub fn of(state: &CardState) -> Self {
        let in_hand = state.location == CardSpot::Hand;

        // Empty strings behave like absent props.
        let hint = state.hint.as_deref().filter(|hint| !hint.is_empty());
        let face = state.face.as_deref().filter(|face| !face.is_empty());

        let back = match &state.colour {
            Some(css) => CardBack::Custom(css.clone()),
            None => CardBack::Palette(colour_for_player(state.name.as_deref())),
        };

        let private_value = match (state.is_mine, state.value) {
            (true, CardValue::Number(number)) => Some(number.to_string()),
            _ => None,
        };

        let bubble_now = (face.is_some() && state.mode == PlayMode::Place)
            || (state.mode == PlayMode::Reveal && state.revealed);
        let speech_bubble = if !in_hand && bubble_now {
            hint.map(str::to_string)
        } else {
            None
        };

        Self {
            face_up: state.revealed,
            shows_number: state.mode == PlayMode::Reveal || state.value == CardValue::Number(0),
            front_hint: if in_hand {
                hint.map(str::to_string)
            } else {
                None
            },
            name: state.name.clone().unwrap_or_default(),
            back,
            private_value,
            face_marker: face.map(str::to_string),
            back_hint: hint.unwrap_or_default().to_string(),
            speech_bubble,
            hint_controls: in_hand,
            active: state.is_active,
            in_hand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn field_card(value: CardValue) -> CardState {
        CardState {
            value,
            name: Some("Aoi".to_string()),
            revealed: false,
            ..CardState::default()
        }
    }

    #[test]
    fn test_hidden_card_never_leaks_its_number() {
        let layout = field_card(CardValue::Number(87)).layout();

        assert_eq!(layout.face_up, false);
        assert_eq!(layout.shows_number, false);
        assert_eq!(layout.private_value, None);
        assert_eq!(layout.speech_bubble, None);
    }

    #[test]
    fn test_my_hidden_card_whispers_its_number() {
        let mut state = field_card(CardValue::Number(87));
        state.is_mine = true;
        assert_eq!(state.layout().private_value, Some("87".to_string()));

        // Spectator copies have no number to whisper.
        state.value = CardValue::Unknown;
        assert_eq!(state.layout().private_value, None);
    }

    #[test]
    fn test_reveal_mode_prints_the_number() {
        let mut state = field_card(CardValue::Number(87));
        state.mode = PlayMode::Reveal;
        state.revealed = true;

        let layout = state.layout();
        assert_eq!(layout.face_up, true);
        assert_eq!(layout.shows_number, true);
    }

    #[test]
    fn test_practice_zero_always_prints() {
        let layout = field_card(CardValue::Number(0)).layout();
        assert_eq!(layout.shows_number, true);

        let layout = field_card(CardValue::Number(1)).layout();
        assert_eq!(layout.shows_number, false);
    }

    #[test]
    fn test_hand_cards_expose_hint_controls() {
        let mut state = field_card(CardValue::Number(5));
        assert_eq!(state.layout().hint_controls, false);

        state.location = CardSpot::Hand;
        let layout = state.layout();
        assert_eq!(layout.hint_controls, true);
        assert_eq!(layout.in_hand, true);
    }

    #[test]
    fn test_hint_strip_is_hand_only() {
        let mut state = field_card(CardValue::Number(5));
        state.hint = Some("a cat's patience".to_string());
        assert_eq!(state.layout().front_hint, None);

        state.location = CardSpot::Hand;
        assert_eq!(
            state.layout().front_hint,
            Some("a cat's patience".to_string())
        );
    }

    #[test]
    fn test_speech_bubble_rules() {
        let hint = || Some("grandma's curry".to_string());

        // Fielded card with a face marker speaks while placing.
        let mut state = field_card(CardValue::Number(5));
        state.hint = hint();
        state.face = Some("camel".to_string());
        assert_eq!(state.layout().speech_bubble, hint());

        // Without the marker it stays quiet until the reveal.
        state.face = None;
        assert_eq!(state.layout().speech_bubble, None);

        state.mode = PlayMode::Reveal;
        assert_eq!(state.layout().speech_bubble, None);

        state.revealed = true;
        assert_eq!(state.layout().speech_bubble, hint());

        // Hand cards never speak.
        state.location = CardSpot::Hand;
        assert_eq!(state.layout().speech_bubble, None);

        // No hint, nothing to say.
        let mut silent = field_card(CardValue::Number(5));
        silent.mode = PlayMode::Reveal;
        silent.revealed = true;
        assert_eq!(silent.layout().speech_bubble, None);

        silent.hint = Some(String::new());
        assert_eq!(silent.layout().speech_bubble, None);
    }

    #[test]
    fn test_back_colour_resolution() {
        // Explicit override wins.
        let mut state = field_card(CardValue::Unknown);
        state.colour = Some("#ff9900".to_string());
        assert_eq!(
            state.layout().back,
            CardBack::Custom("#ff9900".to_string())
        );
        assert_eq!(state.layout().back.css_colour(), "#ff9900");

        // Otherwise the owner's name picks from the palette.
        state.colour = None;
        assert_eq!(
            state.layout().back,
            CardBack::Palette(colour_for_player(Some("Aoi")))
        );

        // No name, neutral back.
        state.name = None;
        assert_eq!(state.layout().back, CardBack::Palette(PlayerColour::Grey));
    }

    #[test]
    fn test_face_marker_replaces_the_hint_glyph() {
        let mut state = field_card(CardValue::Unknown);
        state.hint = Some("natto".to_string());

        let layout = state.layout();
        assert_eq!(layout.face_marker, None);
        assert_eq!(layout.back_hint, "natto".to_string());

        state.face = Some("camel".to_string());
        assert_eq!(state.layout().face_marker, Some("camel".to_string()));

        // Empty face token behaves like no face at all.
        state.face = Some(String::new());
        assert_eq!(state.layout().face_marker, None);
    }

    #[test]
    fn test_same_state_same_layout() {
        let mut state = field_card(CardValue::Number(55));
        state.hint = Some("cold pizza".to_string());
        state.is_active = true;

        assert_eq!(state.layout(), state.layout());
        assert_eq!(state.layout().active, true);
    }
}
