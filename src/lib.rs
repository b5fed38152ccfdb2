//! Lotto Drop - an animated lottery number draw
//!
//! Core modules:
//! - `sim`: Deterministic simulation (sampling, ordering, ball animation)
//! - `render`: Double-buffered frame composition
//! - `runner`: Real-time tick driver
//! - `settings`: Display geometry and colors

pub mod render;
pub mod runner;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Contract constants
pub mod consts {
    /// Size of the number domain (values are `1..=DOMAIN_SIZE`)
    pub const DOMAIN_SIZE: u8 = 49;
    /// How many unique numbers one draw produces
    pub const PICK_COUNT: usize = 6;
    /// Width of one disc in pixels; discs sit side by side
    pub const DISC_WIDTH: i32 = 50;
    /// Time between animation ticks in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 10;
    /// Vertical distance a falling disc covers per tick, in pixels
    pub const BALL_SPEED: i32 = 3;
    /// Start delay per pixel of horizontal position, in milliseconds
    pub const STAGGER_FACTOR: u32 = 8;
}

/// Horizontal slot positions centering `PICK_COUNT` discs within `width`
#[inline]
pub fn centered_slots(width: i32) -> [i32; consts::PICK_COUNT] {
    let edge = (width - consts::DISC_WIDTH * consts::PICK_COUNT as i32) / 2;
    std::array::from_fn(|slot| edge + slot as i32 * consts::DISC_WIDTH)
}

/// Vertical resting line for a display of the given height
#[inline]
pub fn floor_line(height: i32) -> i32 {
    height / 2
}
