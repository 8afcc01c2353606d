use ito_core::card::*;

// Container class string for a card, with per-player and state hooks
// external stylesheets can target.
pub fn card_container_class(layout: &CardLayout) -> String {
    let mut class = String::from("ito-card");
    if !layout.name.is_empty() {
        class.push_str(&format!(" player-{}", layout.name));
    }
    if layout.in_hand {
        class.push_str(" hand-card");
    }
    if layout.active {
        class.push_str(" card-active");
    }
    class
}

pub fn card_back_class(layout: &CardLayout) -> String {
    let mut class = String::from("ito-card-back");
    if let CardBack::Palette(colour) = &layout.back {
        class.push_str(&format!(" {}", colour.css_class()));
    }
    class
}
