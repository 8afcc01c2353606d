use crate::components::utils::*;
use crate::contexts::*;
use crate::types::*;
use ito_core::card::*;
use leptos::*;

const NUMBER_BOX_PX: WindowSize = (100.0, 56.0);
const NUMBER_FONT_SIZE_PX: WindowUnit = 44.0;

const NAME_BOX_PX: WindowSize = (110.0, 16.0);
const NAME_FONT_SIZE_PX: WindowUnit = 11.0;

const HINT_BOX_PX: WindowSize = (110.0, 44.0);
const HINT_FONT_SIZE_PX: WindowUnit = 16.0;

// Large number on the front of a card. Unknown values print as "?".
#[component]
pub fn NumberSvg(
    value: Signal<CardValue>,
    #[prop(optional)] scale: Option<WindowUnit>,
) -> impl IntoView {
    let placer_getter = use_context::<Memo<BoardPlacer>>().unwrap();
    let scale = scale.unwrap_or(1.0);

    view! {
        <svg
            style:display="block"
            style:width={move || wrap_px(placer_getter.get().scale(NUMBER_BOX_PX.0 * scale))}
            style:height={move || wrap_px(placer_getter.get().scale(NUMBER_BOX_PX.1 * scale))}
        >
            <text
                x="50%"
                y="50%"
                dominant-baseline="central"
                text-anchor="middle"
                font-size={move || wrap_px(placer_getter.get().scale(NUMBER_FONT_SIZE_PX * scale))}
                fill=CARD_INK_COLOUR
                font-weight="bold"
            >
                {move || value.get().to_string()}
            </text>
        </svg>
    }
}

// Owner name lettered across the bottom of a card back.
#[component]
pub fn NameSvg(
    text: Signal<String>,
    #[prop(optional)] scale: Option<WindowUnit>,
) -> impl IntoView {
    let placer_getter = use_context::<Memo<BoardPlacer>>().unwrap();
    let scale = scale.unwrap_or(1.0);

    view! {
        <svg
            style:display="block"
            style:width={move || wrap_px(placer_getter.get().scale(NAME_BOX_PX.0 * scale))}
            style:height={move || wrap_px(placer_getter.get().scale(NAME_BOX_PX.1 * scale))}
        >
            <text
                x="50%"
                y="50%"
                dominant-baseline="central"
                text-anchor="middle"
                font-size={move || wrap_px(placer_getter.get().scale(NAME_FONT_SIZE_PX * scale))}
                fill="white"
            >
                {move || text.get()}
            </text>
        </svg>
    }
}

// Hint word written on a card back in the owner's hand(writing).
#[component]
pub fn HintSvg(
    text: Signal<String>,
    #[prop(optional)] scale: Option<WindowUnit>,
) -> impl IntoView {
    let placer_getter = use_context::<Memo<BoardPlacer>>().unwrap();
    let scale = scale.unwrap_or(1.0);

    view! {
        <svg
            style:display="block"
            style:width={move || wrap_px(placer_getter.get().scale(HINT_BOX_PX.0 * scale))}
            style:height={move || wrap_px(placer_getter.get().scale(HINT_BOX_PX.1 * scale))}
        >
            <text
                x="50%"
                y="50%"
                dominant-baseline="central"
                text-anchor="middle"
                font-size={move || wrap_px(placer_getter.get().scale(HINT_FONT_SIZE_PX * scale))}
                font-style="italic"
                fill="white"
            >
                {move || text.get()}
            </text>
        </svg>
    }
}
