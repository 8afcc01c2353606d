use crate::types::*;

pub const DEFAULT_FONT_SIZE: WindowUnit = 14.0;

pub const CARD_FACE_COLOUR: &str = "#fdf8ef";
pub const CARD_INK_COLOUR: &str = "#2b2a29";
pub const CARD_BORDER_COLOUR: &str = "#e3dccb";
pub const ACTIVE_GLOW_COLOUR: &str = "#ffd54f";

pub const CARD_BORDER_RADIUS_PX: WindowUnit = 9.0;
pub const CARD_BORDER_WIDTH_PX: WindowUnit = 1.5;

pub const BUTTON_COLOUR: &str = "#c9ced6";
pub const BUTTON_BORDER_COLOUR: &str = "#9aa1ab";
pub const BUTTON_BORDER_RADIUS_PX: WindowUnit = 2.0;
pub const BUTTON_BORDER_WIDTH_PX: WindowUnit = 1.0;

pub fn wrap_px(unit: WindowUnit) -> String {
    format!("{unit}px")
}

pub fn wrap_pct(unit: WindowUnit) -> String {
    format!("{unit}%")
}
