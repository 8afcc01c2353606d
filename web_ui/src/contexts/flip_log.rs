use ito_core::card::*;
use leptos::*;

// One fired flip-complete notification. Records accumulate in the
// order the reveals settled.
#[derive(Clone, Debug, PartialEq)]
pub struct FlipRecord {
    pub name: String,
    pub value: CardNumber,
}

impl FlipRecord {
    pub fn new(name: String, value: CardNumber) -> Self {
        Self { name, value }
    }
}

pub fn provide_flip_log() {
    let log_signal = create_rw_signal(Vec::<FlipRecord>::new());

    provide_context(log_signal);
}

pub fn use_flip_log() -> RwSignal<Vec<FlipRecord>> {
    use_context::<RwSignal<Vec<FlipRecord>>>().unwrap()
}
