use lazy_static::lazy_static;

pub type WindowUnit = f64;
pub type WindowSize = (WindowUnit, WindowUnit);

pub static GOLDEN_WIDTH: WindowUnit = 1280.0;
pub static GOLDEN_HEIGHT: WindowUnit = 800.0;
pub static GOLDEN_SIZE: WindowSize = (GOLDEN_WIDTH, GOLDEN_HEIGHT);

// Card aspect ratio matches the physical deck.
lazy_static! {
    pub static ref NATIVE_CARD_SIZE: WindowSize = (120.0, 168.0);
    pub static ref RENDER_CARD_SIZE: WindowSize = scalar_mult(*NATIVE_CARD_SIZE, 1.1);
}

pub fn scalar_mult(point: WindowSize, scale: WindowUnit) -> WindowSize {
    (point.0 * scale, point.1 * scale)
}

pub fn point_sub(a: WindowSize, b: WindowSize) -> WindowSize {
    (a.0 - b.0, a.1 - b.1)
}
