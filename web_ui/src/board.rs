use crate::components::*;
use crate::contexts::*;
use crate::types::*;
use ito_core::card::*;
use leptos::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const FIELD_PLAYERS: [&str; 4] = ["Aoi", "Hana", "Kenta", "Mio"];
const MY_NAME: &str = "Riko";

// Seat that played its joker marker this round.
const CAMEL_SEAT: usize = 1;
const CAMEL_BACK_COLOUR: &str = "#ff9900";

const FIELD_HINTS: [&str; 4] = [
    "cold pizza",
    "a camel's patience",
    "grandma's curry",
    "convenience store onigiri",
];
const SAMPLE_HINTS: [&str; 5] = [
    "natto",
    "ramen at 2am",
    "morning trains",
    "a long meeting",
    "karaoke at full volume",
];

const DEAL_SEED: u64 = 101;

const TITLE_FONT_SIZE_PX: WindowUnit = 26.0;
const CAPTION_FONT_SIZE_PX: WindowUnit = 13.0;
const SCREEN_PADDING_PX: WindowUnit = 24.0;
const CARD_GAP_PX: WindowUnit = 18.0;

const MODE_BUTTON_WIDTH_PX: WindowUnit = 170.0;
const MODE_BUTTON_HEIGHT_PX: WindowUnit = 34.0;

const LOG_PANEL_WIDTH_PX: WindowUnit = 260.0;
const LOG_FONT_SIZE_PX: WindowUnit = 13.0;

#[derive(Clone, Copy)]
struct Seat {
    name: &'static str,
    value: CardNumber,
    revealed: RwSignal<bool>,
    hint: RwSignal<Option<String>>,
}

fn deal_values(count: usize) -> Vec<CardNumber> {
    let mut deck: Vec<CardNumber> = (1..=100).collect();
    deck.shuffle(&mut StdRng::seed_from_u64(DEAL_SEED));
    deck.truncate(count);
    deck
}

#[component]
fn FlipLogPanel() -> impl IntoView {
    let placer_getter = use_context::<Memo<BoardPlacer>>().unwrap();
    let flip_log = use_flip_log();

    view! {
        <div
            style:width={move || wrap_px(placer_getter.get().scale(LOG_PANEL_WIDTH_PX))}
            style:padding={move || wrap_px(placer_getter.get().scale(10.0))}
            style:background="rgba(255, 255, 255, 0.92)"
            style:border-radius={move || wrap_px(placer_getter.get().scale(6.0))}
            style:font-size={move || wrap_px(placer_getter.get().scale(LOG_FONT_SIZE_PX))}
        >
            <div style:font-weight="bold">"Settled reveals"</div>
            {move || {
                let log = flip_log.get();
                if log.is_empty() {
                    view! { <div style:font-style="italic">"Nothing revealed yet"</div> }
                        .into_view()
                } else {
                    log.iter()
                        .enumerate()
                        .map(|(i, record)| {
                            view! {
                                <div>
                                    {format!("{}. {} settled on {}", i + 1, record.name, record.value)}
                                </div>
                            }
                        })
                        .collect_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn BoardScreen() -> impl IntoView {
    let placer_getter = use_context::<Memo<BoardPlacer>>().unwrap();
    let flip_log = use_flip_log();

    let mode = create_rw_signal(PlayMode::Place);

    let mut dealt = deal_values(FIELD_PLAYERS.len() + 1);
    let my_value = dealt.pop().unwrap();
    let my_revealed = create_rw_signal(false);
    let my_hint = create_rw_signal(Some(SAMPLE_HINTS[0].to_string()));
    let hint_cursor = store_value(1usize);

    let seats: Vec<Seat> = FIELD_PLAYERS
        .iter()
        .zip(dealt)
        .zip(FIELD_HINTS.iter())
        .map(|((&name, value), &hint)| Seat {
            name,
            value,
            revealed: create_rw_signal(false),
            hint: create_rw_signal(Some(hint.to_string())),
        })
        .collect();

    // During the reveal the lowest unrevealed spot is the one everyone
    // argues about, so it gets the glow.
    let seats_for_active = seats.clone();
    let active_seat = create_memo(move |_| {
        if mode.get() != PlayMode::Reveal {
            return None;
        }
        seats_for_active
            .iter()
            .position(|seat| !seat.revealed.get())
    });

    let on_edit = Callback::new(move |_| {
        let next_hint = hint_cursor.try_update_value(|cursor| {
            let hint = SAMPLE_HINTS[*cursor % SAMPLE_HINTS.len()];
            *cursor += 1;
            hint
        });
        if let Some(hint) = next_hint {
            my_hint.set(Some(hint.to_string()));
        }
    });
    let on_clear_hint = Callback::new(move |_| my_hint.set(None));

    let seats_for_reveal = seats.clone();
    let seats_for_reset = seats.clone();

    view! {
        <div
            style:position="relative"
            style:box-sizing="border-box"
            style:height="100%"
            style:padding={move || wrap_px(placer_getter.get().scale(SCREEN_PADDING_PX))}
            style:display="flex"
            style:flex-direction="column"
            style:justify-content="space-between"
        >
            <div
                style:display="flex"
                style:flex-direction="row"
                style:justify-content="space-between"
                style:align-items="center"
            >
                <div
                    style:color="white"
                    style:font-size={move || wrap_px(placer_getter.get().scale(TITLE_FONT_SIZE_PX))}
                >
                    "ito table"
                </div>
                <div
                    style:display="flex"
                    style:flex-direction="row"
                    style:gap={move || wrap_px(placer_getter.get().scale(8.0))}
                >
                    <Button
                        background=Signal::derive(|| BUTTON_COLOUR.to_string())
                        width=MODE_BUTTON_WIDTH_PX
                        height=MODE_BUTTON_HEIGHT_PX
                        on:click=move |_| {
                            mode.update(|mode| {
                                *mode = match *mode {
                                    PlayMode::Place => PlayMode::Reveal,
                                    PlayMode::Reveal => PlayMode::Place,
                                }
                            });
                        }
                    >
                        {move || match mode.get() {
                            PlayMode::Place => "Start the reveal",
                            PlayMode::Reveal => "Back to placing",
                        }}
                    </Button>
                    <Button
                        background=Signal::derive(|| BUTTON_COLOUR.to_string())
                        width=MODE_BUTTON_WIDTH_PX
                        height=MODE_BUTTON_HEIGHT_PX
                        disabled=Signal::derive(move || mode.get() != PlayMode::Reveal)
                        on:click=move |_| {
                            for seat in &seats_for_reveal {
                                seat.revealed.set(true);
                            }
                        }
                    >
                        "Reveal the rest"
                    </Button>
                    <Button
                        background=Signal::derive(|| BUTTON_COLOUR.to_string())
                        width=MODE_BUTTON_WIDTH_PX
                        height=MODE_BUTTON_HEIGHT_PX
                        on:click=move |_| {
                            mode.set(PlayMode::Place);
                            my_revealed.set(false);
                            for seat in &seats_for_reset {
                                seat.revealed.set(false);
                            }
                            flip_log.update(|log| log.clear());
                        }
                    >
                        "Reset the round"
                    </Button>
                </div>
            </div>
            <div
                style:display="flex"
                style:flex-direction="row"
                style:justify-content="center"
                style:align-items="flex-end"
                style:gap={move || wrap_px(placer_getter.get().scale(CARD_GAP_PX))}
            >
                {seats
                    .iter()
                    .enumerate()
                    .map(|(index, seat)| {
                        let seat = *seat;
                        let face = if index == CAMEL_SEAT {
                            Some("camel".to_string())
                        } else {
                            None
                        };
                        let colour = if index == CAMEL_SEAT {
                            Some(CAMEL_BACK_COLOUR.to_string())
                        } else {
                            None
                        };
                        view! {
                            <Card
                                value=CardValue::Number(seat.value)
                                name=seat.name
                                revealed=seat.revealed.into()
                                mode=mode.into()
                                hint=seat.hint.into()
                                face=face.into()
                                colour=colour.into()
                                is_active=Signal::derive(move || active_seat.get() == Some(index)).into()
                                on_click=Callback::new(move |_| {
                                    if mode.get() == PlayMode::Reveal {
                                        seat.revealed.update(|revealed| *revealed = !*revealed);
                                    }
                                })
                                on_flip_complete=Callback::new(move |settled_value| {
                                    flip_log.update(|log| {
                                        log.push(FlipRecord::new(seat.name.to_string(), settled_value));
                                    });
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div
                style:display="flex"
                style:flex-direction="row"
                style:justify-content="space-between"
                style:align-items="flex-end"
            >
                <div>
                    <div
                        style:color="white"
                        style:font-size={move || wrap_px(placer_getter.get().scale(CAPTION_FONT_SIZE_PX))}
                        style:margin-bottom={move || wrap_px(placer_getter.get().scale(6.0))}
                    >
                        {format!("{MY_NAME}, your card. Click it to peek.")}
                    </div>
                    <Card
                        value=CardValue::Number(my_value)
                        name=MY_NAME
                        location=CardSpot::Hand
                        revealed=my_revealed.into()
                        mode=mode.into()
                        hint=my_hint.into()
                        is_mine=true.into()
                        on_click=Callback::new(move |_| {
                            my_revealed.update(|revealed| *revealed = !*revealed);
                        })
                        on_flip_complete=Callback::new(move |settled_value| {
                            flip_log.update(|log| {
                                log.push(FlipRecord::new(MY_NAME.to_string(), settled_value));
                            });
                        })
                        on_edit=on_edit
                        on_clear_hint=on_clear_hint
                    />
                </div>
                <FlipLogPanel />
            </div>
        </div>
    }
}
