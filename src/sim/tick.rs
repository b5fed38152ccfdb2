//! Cooperative animation tick
//!
//! One global tick advances every active ball instead of one thread per
//! ball. Stagger deadlines still produce the left-to-right cascade, and at
//! most one redraw request leaves each tick, so a frame can never be
//! composed from half-updated positions.

use super::session::LotterySession;
use crate::consts::TICK_INTERVAL_MS;

/// Advance the session by one fixed tick. Returns true when any ball
/// moved and the scene should be recomposed.
pub fn tick(session: &mut LotterySession) -> bool {
    session.clock += TICK_INTERVAL_MS;
    let clock = session.clock;

    let mut moved = false;
    for ball in &mut session.balls {
        // slot order; any interleaving would look the same, since each
        // frame is a complete snapshot
        moved |= ball.step(clock);
    }
    moved
}
