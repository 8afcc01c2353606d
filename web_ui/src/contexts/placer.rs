use crate::components::*;
use crate::types::*;
use leptos::*;

fn min_f64(a: f64, b: f64) -> f64 {
    if a < b {
        a
    } else {
        b
    }
}

// Scales golden-size coordinates down to whatever window the table
// is actually rendered in.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardPlacer {
    scale: f64,
}

impl BoardPlacer {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn new_from_root_window_size(window_size: WindowSize) -> Self {
        let width_scale = window_size.0 / GOLDEN_WIDTH;
        let height_scale = window_size.1 / GOLDEN_HEIGHT;
        let scale = min_f64(width_scale, height_scale);

        Self::new(scale)
    }

    pub fn scale(&self, size: WindowUnit) -> WindowUnit {
        size * self.scale
    }
}

pub fn get_origin_from_window_size(window_size: WindowSize) -> WindowSize {
    let placer = BoardPlacer::new_from_root_window_size(window_size);

    let projected_size = scalar_mult(GOLDEN_SIZE, placer.scale);
    scalar_mult(point_sub(window_size, projected_size), 0.5)
}

fn get_current_window_size() -> Option<WindowSize> {
    let cur_window = window();
    let Ok(width_js_value) = cur_window.inner_width() else {
        return None;
    };
    let Some(width) = width_js_value.as_f64() else {
        return None;
    };
    let Ok(height_js_value) = cur_window.inner_height() else {
        return None;
    };
    let Some(height) = height_js_value.as_f64() else {
        return None;
    };

    Some((width, height))
}

#[component]
pub fn PlacerContainer(children: Children) -> impl IntoView {
    let (window_size_getter, window_size_setter) =
        create_signal(get_current_window_size().unwrap());

    window_event_listener(ev::resize, move |_ev| {
        if let Some(current_window) = get_current_window_size() {
            window_size_setter.set(current_window);
        }
    });

    let placer_getter = create_memo(move |_| {
        BoardPlacer::new_from_root_window_size(window_size_getter.get())
    });
    provide_context(placer_getter);

    view! {
        <div
            style:background="#cfd8dc"
            style:width="100%"
            style:height="100%"
        >
            <div
                style:position="absolute"
                style:width={move || wrap_px(placer_getter.get().scale(GOLDEN_WIDTH))}
                style:height={move || wrap_px(placer_getter.get().scale(GOLDEN_HEIGHT))}
                style:left={move || format!("{}px", get_origin_from_window_size(window_size_getter.get()).0)}
                style:top={move || format!("{}px", get_origin_from_window_size(window_size_getter.get()).1)}
                style:background="#2e6f5e"
                style:font-size={move || wrap_px(placer_getter.get().scale(DEFAULT_FONT_SIZE))}
            >
                {children()}
            </div>
        </div>
    }
}
