//! Ball entities and their animation state machine

use crate::consts::{BALL_SPEED, STAGGER_FACTOR};

/// Where a ball is in its drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallPhase {
    /// Created, waiting out its stagger delay (milliseconds from drop start)
    Pending { starts_at: u32 },
    /// Moving toward the floor
    Falling,
    /// On the floor; terminal
    Resting,
}

/// Which of the two drop animations a ball performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    /// First reveal: enter from above the visible area
    Initial,
    /// Re-sort: short hop from just above the floor
    Resort,
}

impl DropKind {
    /// Starting height for this drop, given the floor line
    pub fn start_y(&self, floor: i32) -> i32 {
        match self {
            DropKind::Initial => -(BALL_SPEED * 17),
            DropKind::Resort => floor - 5 * BALL_SPEED,
        }
    }
}

/// One falling disc
#[derive(Debug, Clone)]
pub struct Ball {
    /// The number this ball shows (`1..=DOMAIN_SIZE`), fixed at creation
    pub value: u8,
    /// Horizontal position, fixed for the ball's lifetime
    pub x: i32,
    /// Current vertical position
    pub y: i32,
    /// The floor line this ball falls toward
    pub target_y: i32,
    /// Pixels covered per tick
    pub speed: i32,
    pub phase: BallPhase,
}

impl Ball {
    /// Balls further right wait longer before moving, producing the
    /// left-to-right cascade.
    pub fn new(value: u8, x: i32, start_y: i32, target_y: i32) -> Self {
        Self {
            value,
            x,
            y: start_y,
            target_y,
            speed: BALL_SPEED,
            // x can go negative on cramped layouts; such balls just start at once
            phase: BallPhase::Pending {
                starts_at: STAGGER_FACTOR * x.max(0) as u32,
            },
        }
    }

    /// Advance one tick against the session clock. Returns true if the
    /// ball moved, i.e. the scene needs recomposing.
    pub fn step(&mut self, clock: u32) -> bool {
        match self.phase {
            BallPhase::Pending { starts_at } => {
                if clock < starts_at {
                    return false;
                }
                self.phase = BallPhase::Falling;
                self.advance()
            }
            BallPhase::Falling => self.advance(),
            BallPhase::Resting => false,
        }
    }

    fn advance(&mut self) -> bool {
        self.y += self.speed;
        if self.y >= self.target_y {
            // clamp any overshoot before it can be observed
            self.y = self.target_y;
            self.phase = BallPhase::Resting;
        }
        true
    }

    pub fn resting(&self) -> bool {
        self.phase == BallPhase::Resting
    }
}

/// Domain equality: two balls stand for the same number. Position and
/// appearance never participate, so `Ball` has no `PartialEq` impl.
pub fn same_value(a: &Ball, b: &Ball) -> bool {
    a.value == b.value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_until_stagger_deadline() {
        let mut ball = Ball::new(7, 100, -51, 200);
        assert_eq!(ball.phase, BallPhase::Pending { starts_at: 800 });

        assert!(!ball.step(790));
        assert_eq!(ball.y, -51);

        assert!(ball.step(800));
        assert_eq!(ball.phase, BallPhase::Falling);
        assert_eq!(ball.y, -48);
    }

    #[test]
    fn test_y_monotone_and_clamped() {
        let mut ball = Ball::new(7, 0, -51, 200);
        let mut prev_y = ball.y;

        for clock in (10..).step_by(10) {
            ball.step(clock);
            assert!(ball.y >= prev_y);
            assert!(ball.y <= ball.target_y);
            prev_y = ball.y;
            if ball.resting() {
                break;
            }
        }
        assert_eq!(ball.y, ball.target_y);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        // 200 is not a multiple of the per-tick speed from -51, so the
        // last step would overshoot without the clamp
        let mut ball = Ball::new(7, 0, 199, 200);
        assert!(ball.step(10));
        assert_eq!(ball.y, 200);
        assert!(ball.resting());

        // terminal: further ticks change nothing
        assert!(!ball.step(20));
        assert_eq!(ball.y, 200);
    }

    #[test]
    fn test_same_value_ignores_position() {
        let a = Ball::new(13, 50, -51, 200);
        let mut b = Ball::new(13, 250, 120, 200);
        b.phase = BallPhase::Resting;

        assert!(same_value(&a, &b));
        assert!(!same_value(&a, &Ball::new(14, 50, -51, 200)));
    }

    #[test]
    fn test_drop_kind_start_heights() {
        assert_eq!(DropKind::Initial.start_y(200), -51);
        assert_eq!(DropKind::Resort.start_y(200), 185);
    }
}
