use crate::card::primitives::*;
use std::time::Duration;

// Matched to the flip transition on the web side.
pub const FLIP_DELAY: Duration = Duration::from_millis(500);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlipPhase {
    #[default]
    Hidden,
    Revealing,
    Settled,
}

// What the host scheduler should do with its pending one-shot after
// an observe call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipDirective {
    Keep,
    Cancel,
    Rearm { value: CardNumber },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct FlipInputs {
    revealed: bool,
    value: CardValue,
}

// Decides when the one-shot flip-complete notification is armed,
// rearmed, and cancelled. The host owns the actual clock: it feeds
// observe the governing inputs whenever they may have changed, obeys
// the directive, and calls complete when an armed one-shot elapses.
#[derive(Clone, Debug, Default)]
pub struct FlipSequencer {
    inputs: Option<FlipInputs>,
    phase: FlipPhase,
}

impl FlipSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FlipPhase {
        self.phase
    }

    // A pending one-shot survives re-renders that change nothing it
    // cares about.
    pub fn observe(&mut self, revealed: bool, value: CardValue) -> FlipDirective {
        let inputs = FlipInputs { revealed, value };
        if self.inputs == Some(inputs) {
            return FlipDirective::Keep;
        }
        self.inputs = Some(inputs);

        match (revealed, value) {
            (true, CardValue::Number(value)) => {
                self.phase = FlipPhase::Revealing;
                FlipDirective::Rearm { value }
            }
            _ => {
                self.phase = FlipPhase::Hidden;
                FlipDirective::Cancel
            }
        }
    }

    // Yields the revealed number exactly once per reveal.
    pub fn complete(&mut self) -> Option<CardNumber> {
        if self.phase != FlipPhase::Revealing {
            return None;
        }
        let Some(FlipInputs {
            value: CardValue::Number(value),
            ..
        }) = self.inputs
        else {
            return None;
        };

        self.phase = FlipPhase::Settled;
        Some(value)
    }

    // Teardown. The host still clears its own clock handle.
    pub fn cancel(&mut self) {
        self.inputs = None;
        self.phase = FlipPhase::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hidden_card_arms_nothing() {
        let mut flip = FlipSequencer::new();

        assert_eq!(
            flip.observe(false, CardValue::Number(5)),
            FlipDirective::Cancel
        );
        assert_eq!(flip.phase(), FlipPhase::Hidden);
        assert_eq!(flip.complete(), None);
    }

    #[test]
    fn test_reveal_with_number_arms_once() {
        let mut flip = FlipSequencer::new();
        flip.observe(false, CardValue::Number(5));

        assert_eq!(
            flip.observe(true, CardValue::Number(5)),
            FlipDirective::Rearm { value: 5 }
        );
        assert_eq!(flip.phase(), FlipPhase::Revealing);

        assert_eq!(flip.complete(), Some(5));
        assert_eq!(flip.phase(), FlipPhase::Settled);

        // One-shot: a second elapse reports nothing.
        assert_eq!(flip.complete(), None);
    }

    #[test]
    fn test_rerender_with_same_inputs_keeps_the_timer() {
        let mut flip = FlipSequencer::new();

        assert_eq!(
            flip.observe(true, CardValue::Number(8)),
            FlipDirective::Rearm { value: 8 }
        );
        assert_eq!(flip.observe(true, CardValue::Number(8)), FlipDirective::Keep);
        assert_eq!(flip.observe(true, CardValue::Number(8)), FlipDirective::Keep);
        assert_eq!(flip.phase(), FlipPhase::Revealing);

        assert_eq!(flip.complete(), Some(8));
    }

    #[test]
    fn test_hiding_before_the_delay_cancels() {
        let mut flip = FlipSequencer::new();
        flip.observe(false, CardValue::Number(5));

        flip.observe(true, CardValue::Number(5));
        assert_eq!(
            flip.observe(false, CardValue::Number(5)),
            FlipDirective::Cancel
        );

        assert_eq!(flip.complete(), None);
        assert_eq!(flip.phase(), FlipPhase::Hidden);
    }

    #[test]
    fn test_value_change_rearms_a_fresh_instance() {
        let mut flip = FlipSequencer::new();

        flip.observe(true, CardValue::Number(5));
        assert_eq!(
            flip.observe(true, CardValue::Number(7)),
            FlipDirective::Rearm { value: 7 }
        );

        assert_eq!(flip.complete(), Some(7));
        assert_eq!(flip.complete(), None);
    }

    #[test]
    fn test_unknown_value_never_arms() {
        let mut flip = FlipSequencer::new();

        assert_eq!(flip.observe(true, CardValue::Unknown), FlipDirective::Cancel);
        assert_eq!(flip.phase(), FlipPhase::Hidden);
        assert_eq!(flip.complete(), None);

        // The number arriving while the card is already face up still
        // starts the countdown.
        assert_eq!(
            flip.observe(true, CardValue::Number(9)),
            FlipDirective::Rearm { value: 9 }
        );
    }

    #[test]
    fn test_settled_card_can_reveal_again() {
        let mut flip = FlipSequencer::new();

        flip.observe(true, CardValue::Number(5));
        assert_eq!(flip.complete(), Some(5));

        assert_eq!(
            flip.observe(false, CardValue::Number(5)),
            FlipDirective::Cancel
        );
        assert_eq!(
            flip.observe(true, CardValue::Number(5)),
            FlipDirective::Rearm { value: 5 }
        );
        assert_eq!(flip.complete(), Some(5));
    }

    #[test]
    fn test_cancel_discards_a_pending_reveal() {
        let mut flip = FlipSequencer::new();

        flip.observe(true, CardValue::Number(12));
        assert_eq!(flip.phase(), FlipPhase::Revealing);

        flip.cancel();
        assert_eq!(flip.phase(), FlipPhase::Hidden);
        assert_eq!(flip.complete(), None);
    }
}
