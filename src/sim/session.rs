//! Draw session orchestration
//!
//! Owns the active balls, the sorted flag and the seeded RNG. Each draw or
//! re-sort replaces the ball set wholesale; replaced balls are dropped, so
//! no animation outlives the set it belongs to.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::draw;
use super::sort;
use super::state::{Ball, DropKind};
use crate::consts::PICK_COUNT;
use crate::{centered_slots, floor_line};

/// The two external trigger commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a fresh set of numbers and drop them from off-screen
    Draw,
    /// Re-drop the current numbers in ascending order
    Sort,
}

/// Fixed screen geometry for one session
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Vertical resting line
    pub floor: i32,
    /// Horizontal position of each slot, left to right
    pub slots: [i32; PICK_COUNT],
}

impl Layout {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            floor: floor_line(height),
            slots: centered_slots(width),
        }
    }
}

/// Orchestrates draws and re-sorts over one fixed layout
pub struct LotterySession {
    layout: Layout,
    rng: Pcg32,
    /// Active balls in slot order; empty until the first draw
    pub(crate) balls: Vec<Ball>,
    /// Set once the current set came from a re-sort
    sorted: bool,
    /// Milliseconds since the current drop started
    pub(crate) clock: u32,
}

impl LotterySession {
    pub fn new(layout: Layout, seed: u64) -> Self {
        Self {
            layout,
            rng: Pcg32::seed_from_u64(seed),
            balls: Vec::with_capacity(PICK_COUNT),
            sorted: false,
            clock: 0,
        }
    }

    /// Dispatch one of the two trigger commands.
    pub fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::Draw => self.new_draw(),
            Command::Sort => self.resort(),
        }
    }

    /// Pick six fresh numbers and start their drop from off-screen.
    pub fn new_draw(&mut self) {
        let values = draw::pick(&mut self.rng);
        log::info!("drew {values:?}");
        self.sorted = false;
        self.replace_balls(&values, DropKind::Initial);
    }

    /// Re-drop the current numbers in ascending order. Defined no-op
    /// before the first draw and when the set is already sorted.
    pub fn resort(&mut self) {
        if self.balls.is_empty() || self.sorted {
            return;
        }

        let mut values = [0u8; PICK_COUNT];
        for (v, ball) in values.iter_mut().zip(&self.balls) {
            *v = ball.value;
        }
        let values = sort::ascending(&values);
        log::info!("re-sorted to {values:?}");
        self.sorted = true;
        self.replace_balls(&values, DropKind::Resort);
    }

    fn replace_balls(&mut self, values: &[u8; PICK_COUNT], kind: DropKind) {
        let start_y = kind.start_y(self.layout.floor);
        self.clock = 0;
        self.balls.clear();
        for (slot, &value) in values.iter().enumerate() {
            let x = self.layout.slots[slot];
            self.balls
                .push(Ball::new(value, x, start_y, self.layout.floor));
        }
    }

    /// Current balls in slot order; empty before the first draw.
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// True once every active ball has reached the floor. Vacuously true
    /// while no draw has happened.
    pub fn settled(&self) -> bool {
        self.balls.iter().all(Ball::resting)
    }
}
