use leptos::*;
use web_ui::board::*;
use web_ui::contexts::*;

#[component]
fn App() -> impl IntoView {
    provide_flip_log();

    view! {
        <PlacerContainer>
            <BoardScreen />
        </PlacerContainer>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App /> })
}
