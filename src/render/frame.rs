//! Frame snapshot types

use glam::IVec2;

use crate::consts::PICK_COUNT;

/// RGBA color, 8 bits per channel
pub type Color = [u8; 4];

/// Colors for scene elements
pub mod colors {
    use super::Color;

    /// Deep blue backdrop the discs fall against
    pub const BACKGROUND: Color = [0, 0, 110, 255];
}

/// One disc placement within a frame. The presenter resolves `value` to
/// its drawable; the core never touches assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscInstance {
    pub value: u8,
    /// Top-left corner in pixels
    pub pos: IVec2,
}

/// One complete composed scene: background fill plus every current disc
#[derive(Debug, Clone)]
pub struct Frame {
    pub background: Color,
    pub discs: Vec<DiscInstance>,
}

impl Frame {
    pub(crate) fn new(background: Color) -> Self {
        Self {
            background,
            discs: Vec::with_capacity(PICK_COUNT),
        }
    }
}
