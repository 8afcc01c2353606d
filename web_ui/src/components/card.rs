use crate::class_helpers::*;
use crate::components::*;
use crate::contexts::*;
use crate::types::*;
use ito_core::card::*;
use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::logging::warn;
use leptos::*;

const DOT_DIAMETER_PX: WindowUnit = 7.0;
const DOT_TOP_PX: WindowUnit = 10.0;

const NAME_FONT_SIZE_PX: WindowUnit = 12.0;
const STRIP_FONT_SIZE_PX: WindowUnit = 12.0;

const CONTROL_DIAMETER_PX: WindowUnit = 26.0;
const CONTROL_FONT_SIZE_PX: WindowUnit = 13.0;
const CONTROL_OVERHANG_PX: WindowUnit = 8.0;

const BUBBLE_FONT_SIZE_PX: WindowUnit = 15.0;
const BUBBLE_TAIL_PX: WindowUnit = 7.0;
const ACTIVE_GLOW_RADIUS_PX: WindowUnit = 12.0;

// One playing card. Everything it shows is a projection of the
// props; the only state it owns is the pending flip notification.
#[component]
pub fn Card(
    #[prop(into)] value: MaybeSignal<CardValue>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional)] revealed: Option<MaybeSignal<bool>>,
    #[prop(optional)] is_active: Option<MaybeSignal<bool>>,
    #[prop(optional)] is_mine: Option<MaybeSignal<bool>>,
    #[prop(optional)] mode: Option<MaybeSignal<PlayMode>>,
    #[prop(optional)] location: Option<CardSpot>,
    #[prop(optional)] hint: Option<MaybeSignal<Option<String>>>,
    #[prop(optional)] face: Option<MaybeSignal<Option<String>>>,
    #[prop(optional)] colour: Option<MaybeSignal<Option<String>>>,
    #[prop(optional)] scale: Option<WindowUnit>,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] on_flip_complete: Option<Callback<CardNumber>>,
    #[prop(optional, into)] on_edit: Option<Callback<()>>,
    #[prop(optional, into)] on_clear_hint: Option<Callback<()>>,
) -> impl IntoView {
    let placer_getter = use_context::<Memo<BoardPlacer>>().unwrap();

    let revealed = revealed.unwrap_or(MaybeSignal::Static(true));
    let is_active = is_active.unwrap_or_default();
    let is_mine = is_mine.unwrap_or_default();
    let mode = mode.unwrap_or_default();
    let location = location.unwrap_or_default();
    let hint = hint.unwrap_or_default();
    let face = face.unwrap_or_default();
    let colour = colour.unwrap_or_default();
    let scale = scale.unwrap_or(1.0);

    let state = create_memo(move |_| CardState {
        value: value.get(),
        name: name.clone(),
        revealed: revealed.get(),
        is_active: is_active.get(),
        is_mine: is_mine.get(),
        mode: mode.get(),
        location,
        hint: hint.get(),
        face: face.get(),
        colour: colour.get(),
    });
    let layout = create_memo(move |_| state.get().layout());

    let shows_number = create_memo(move |_| layout.get().shows_number);
    let front_hint = create_memo(move |_| layout.get().front_hint);
    let face_marker = create_memo(move |_| layout.get().face_marker);
    let speech_bubble = create_memo(move |_| layout.get().speech_bubble);

    let front_value = Signal::derive(move || value.get());
    let back_hint = Signal::derive(move || layout.get().back_hint);
    let back_name = Signal::derive(move || layout.get().name);

    // The flip notification is armed and cancelled here; the
    // sequencer decides, the browser clock fires.
    let flip = store_value(FlipSequencer::new());
    let maybe_pending_flip: RwSignal<Option<TimeoutHandle>> = create_rw_signal(None);

    let clear_pending_flip = move || {
        if let Some(flip_handle) = maybe_pending_flip.get_untracked() {
            flip_handle.clear();
            maybe_pending_flip.set(None);
        }
    };

    create_effect(move |_| {
        let revealed_now = revealed.get();
        let value_now = value.get();

        let directive = flip
            .try_update_value(|flip| flip.observe(revealed_now, value_now))
            .unwrap_or(FlipDirective::Keep);

        match directive {
            FlipDirective::Keep => {}
            FlipDirective::Cancel => clear_pending_flip(),
            FlipDirective::Rearm { .. } => {
                clear_pending_flip();
                if let Some(on_flip_complete) = on_flip_complete {
                    let armed = set_timeout_with_handle(
                        move || {
                            maybe_pending_flip.set(None);
                            let settled = flip.try_update_value(|flip| flip.complete()).flatten();
                            if let Some(settled_value) = settled {
                                on_flip_complete.call(settled_value);
                            }
                        },
                        FLIP_DELAY,
                    );
                    match armed {
                        Ok(flip_handle) => maybe_pending_flip.set(Some(flip_handle)),
                        Err(err) => {
                            warn!("Failed to schedule the flip notification: {err:?}");
                            maybe_pending_flip.set(None);
                        }
                    }
                }
            }
        }
    });

    on_cleanup(move || {
        clear_pending_flip();
        flip.update_value(|flip| flip.cancel());
    });

    let on_card_click = move |ev: MouseEvent| {
        if let Some(on_click) = on_click {
            on_click.call(ev);
        }
    };

    let flip_transition = format!("transform {}ms", FLIP_DELAY.as_millis());

    view! {
        <div
            class={move || card_container_class(&layout.get())}
            style:position="relative"
            style:width={move || wrap_px(placer_getter.get().scale(RENDER_CARD_SIZE.0 * scale))}
            style:height={move || wrap_px(placer_getter.get().scale(RENDER_CARD_SIZE.1 * scale))}
            style:cursor={if on_click.is_some() { Some("pointer") } else { None }}
            style:box-shadow={move || {
                if layout.get().active {
                    Some(format!(
                        "0 0 {} {} {}",
                        wrap_px(placer_getter.get().scale(ACTIVE_GLOW_RADIUS_PX * scale)),
                        wrap_px(placer_getter.get().scale(3.0 * scale)),
                        ACTIVE_GLOW_COLOUR,
                    ))
                } else {
                    None
                }
            }}
            on:click=on_card_click
        >
            <div
                style:position="relative"
                style:width="100%"
                style:height="100%"
                style:transform-style="preserve-3d"
                style:transition=flip_transition
                style:transform={move || {
                    if layout.get().face_up {
                        "rotateY(0deg)".to_string()
                    } else {
                        "rotateY(180deg)".to_string()
                    }
                }}
            >
                // Front side.
                <div
                    style:position="absolute"
                    style:width="100%"
                    style:height="100%"
                    style:box-sizing="border-box"
                    style:backface-visibility="hidden"
                    style:background=CARD_FACE_COLOUR
                    style:border="solid"
                    style:border-color=CARD_BORDER_COLOUR
                    style:border-width={move || wrap_px(placer_getter.get().scale(CARD_BORDER_WIDTH_PX * scale))}
                    style:border-radius={move || wrap_px(placer_getter.get().scale(CARD_BORDER_RADIUS_PX * scale))}
                    style:display="flex"
                    style:align-items="center"
                    style:justify-content="center"
                >
                    <div
                        class="card-dot"
                        style:position="absolute"
                        style:top={move || wrap_px(placer_getter.get().scale(DOT_TOP_PX * scale))}
                        style:left="50%"
                        style:transform="translateX(-50%)"
                        style:width={move || wrap_px(placer_getter.get().scale(DOT_DIAMETER_PX * scale))}
                        style:height={move || wrap_px(placer_getter.get().scale(DOT_DIAMETER_PX * scale))}
                        style:border-radius="50%"
                        style:background="rgba(0, 0, 0, 0.15)"
                    />
                    {move || {
                        front_hint.get().map(|strip_hint| {
                            view! {
                                <div
                                    style:position="absolute"
                                    style:top={move || wrap_px(placer_getter.get().scale(DOT_TOP_PX * scale))}
                                    style:left="0"
                                    style:right="0"
                                    style:text-align="center"
                                    style:font-style="italic"
                                    style:font-size={move || wrap_px(placer_getter.get().scale(STRIP_FONT_SIZE_PX * scale))}
                                    style:color=CARD_INK_COLOUR
                                >
                                    {strip_hint}
                                </div>
                            }
                        })
                    }}
                    {move || {
                        if shows_number.get() {
                            Some(view! { <NumberSvg value=front_value scale=scale /> })
                        } else {
                            None
                        }
                    }}
                    <p
                        style:position="absolute"
                        style:bottom={move || wrap_px(placer_getter.get().scale(4.0 * scale))}
                        style:left="0"
                        style:right="0"
                        style:margin="0"
                        style:text-align="center"
                        style:font-size={move || wrap_px(placer_getter.get().scale(NAME_FONT_SIZE_PX * scale))}
                        style:color=CARD_INK_COLOUR
                    >
                        {move || layout.get().name}
                    </p>
                </div>
                // Back side.
                <div
                    class={move || card_back_class(&layout.get())}
                    title={move || layout.get().private_value}
                    style:position="absolute"
                    style:width="100%"
                    style:height="100%"
                    style:box-sizing="border-box"
                    style:backface-visibility="hidden"
                    style:transform="rotateY(180deg)"
                    style:background-color={move || layout.get().back.css_colour().to_string()}
                    style:border-radius={move || wrap_px(placer_getter.get().scale(CARD_BORDER_RADIUS_PX * scale))}
                    style:display="flex"
                    style:align-items="center"
                    style:justify-content="center"
                >
                    <div
                        class="card-dot"
                        style:position="absolute"
                        style:top={move || wrap_px(placer_getter.get().scale(DOT_TOP_PX * scale))}
                        style:left="50%"
                        style:transform="translateX(-50%)"
                        style:width={move || wrap_px(placer_getter.get().scale(DOT_DIAMETER_PX * scale))}
                        style:height={move || wrap_px(placer_getter.get().scale(DOT_DIAMETER_PX * scale))}
                        style:border-radius="50%"
                        style:background="rgba(255, 255, 255, 0.65)"
                    />
                    {move || {
                        match face_marker.get() {
                            Some(marker) => view! {
                                <div
                                    class="card-face"
                                    data-face=marker.clone()
                                    style:font-size={move || wrap_px(placer_getter.get().scale(STRIP_FONT_SIZE_PX * scale))}
                                    style:color="white"
                                    style:text-transform="uppercase"
                                    style:letter-spacing="0.1em"
                                >
                                    {marker}
                                </div>
                            }
                            .into_view(),
                            None => view! { <HintSvg text=back_hint scale=scale /> }.into_view(),
                        }
                    }}
                    <div
                        style:position="absolute"
                        style:bottom={move || wrap_px(placer_getter.get().scale(4.0 * scale))}
                        style:left="50%"
                        style:transform="translateX(-50%)"
                    >
                        <NameSvg text=back_name scale=scale />
                    </div>
                </div>
            </div>
            {move || {
                speech_bubble.get().map(|spoken_hint| {
                    view! {
                        <div
                            class="speech-bubble"
                            style:position="absolute"
                            style:bottom=wrap_pct(100.0)
                            style:left="50%"
                            style:transform="translateX(-50%)"
                            style:margin-bottom={move || wrap_px(placer_getter.get().scale(BUBBLE_TAIL_PX * scale))}
                            style:padding={move || {
                                format!(
                                    "{} {}",
                                    wrap_px(placer_getter.get().scale(4.0 * scale)),
                                    wrap_px(placer_getter.get().scale(9.0 * scale)),
                                )
                            }}
                            style:background="white"
                            style:color=CARD_INK_COLOUR
                            style:border-radius={move || wrap_px(placer_getter.get().scale(8.0 * scale))}
                            style:font-size={move || wrap_px(placer_getter.get().scale(BUBBLE_FONT_SIZE_PX * scale))}
                            style:white-space="nowrap"
                            style:z-index="2"
                        >
                            {spoken_hint}
                            <div
                                style:position="absolute"
                                style:top="100%"
                                style:left="50%"
                                style:transform="translateX(-50%)"
                                style:width="0"
                                style:height="0"
                                style:border-left={move || format!("{} solid transparent", wrap_px(placer_getter.get().scale(BUBBLE_TAIL_PX * scale)))}
                                style:border-right={move || format!("{} solid transparent", wrap_px(placer_getter.get().scale(BUBBLE_TAIL_PX * scale)))}
                                style:border-top={move || format!("{} solid white", wrap_px(placer_getter.get().scale(BUBBLE_TAIL_PX * scale)))}
                            />
                        </div>
                    }
                })
            }}
            <Show when=move || layout.get().hint_controls>
                <button
                    title="Clear hint"
                    style:position="absolute"
                    style:top={move || wrap_px(-placer_getter.get().scale(CONTROL_OVERHANG_PX * scale))}
                    style:left={move || wrap_px(-placer_getter.get().scale(CONTROL_OVERHANG_PX * scale))}
                    style:width={move || wrap_px(placer_getter.get().scale(CONTROL_DIAMETER_PX * scale))}
                    style:height={move || wrap_px(placer_getter.get().scale(CONTROL_DIAMETER_PX * scale))}
                    style:border="none"
                    style:border-radius="50%"
                    style:background=BUTTON_COLOUR
                    style:color=CARD_INK_COLOUR
                    style:font-size={move || wrap_px(placer_getter.get().scale(CONTROL_FONT_SIZE_PX * scale))}
                    style:cursor="pointer"
                    on:click=move |_| {
                        if let Some(on_clear_hint) = on_clear_hint {
                            on_clear_hint.call(());
                        }
                    }
                >
                    "\u{232b}"
                </button>
                <button
                    title="Edit hint"
                    style:position="absolute"
                    style:top={move || wrap_px(-placer_getter.get().scale(CONTROL_OVERHANG_PX * scale))}
                    style:right={move || wrap_px(-placer_getter.get().scale(CONTROL_OVERHANG_PX * scale))}
                    style:width={move || wrap_px(placer_getter.get().scale(CONTROL_DIAMETER_PX * scale))}
                    style:height={move || wrap_px(placer_getter.get().scale(CONTROL_DIAMETER_PX * scale))}
                    style:border="none"
                    style:border-radius="50%"
                    style:background=BUTTON_COLOUR
                    style:color=CARD_INK_COLOUR
                    style:font-size={move || wrap_px(placer_getter.get().scale(CONTROL_FONT_SIZE_PX * scale))}
                    style:cursor="pointer"
                    on:click=move |_| {
                        if let Some(on_edit) = on_edit {
                            on_edit.call(());
                        }
                    }
                >
                    "\u{270e}"
                </button>
            </Show>
        </div>
    }
}
