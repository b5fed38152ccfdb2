//! Double-buffered scene composition
//!
//! Frames are composed into an off-screen back buffer and flipped whole,
//! so a presenter can never observe a partially drawn scene.

use glam::IVec2;

use super::frame::{Color, DiscInstance, Frame};
use crate::sim::Ball;

/// The opaque present capability supplied by the windowing collaborator.
/// A presenter only ever receives complete frames.
pub trait Presenter {
    fn present(&mut self, frame: &Frame);
}

/// Composes entity snapshots into frames with two reusable buffers
pub struct SceneRenderer {
    back: Frame,
    front: Frame,
}

impl SceneRenderer {
    pub fn new(background: Color) -> Self {
        Self {
            back: Frame::new(background),
            front: Frame::new(background),
        }
    }

    /// Compose the current entities into the back buffer, flip it to the
    /// front and return the finished frame. An empty slice renders the
    /// background only.
    pub fn render_frame(&mut self, balls: &[Ball]) -> &Frame {
        self.back.discs.clear();
        for ball in balls {
            self.back.discs.push(DiscInstance {
                value: ball.value,
                pos: IVec2::new(ball.x, ball.y),
            });
        }

        // the flip: the front buffer swaps out in one move
        std::mem::swap(&mut self.back, &mut self.front);
        &self.front
    }

    /// The most recently flipped frame
    pub fn front(&self) -> &Frame {
        &self.front
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors;
    use crate::sim::{Layout, LotterySession};

    fn renderer() -> SceneRenderer {
        SceneRenderer::new(colors::BACKGROUND)
    }

    #[test]
    fn test_empty_scene_renders_background_only() {
        let mut r = renderer();
        let frame = r.render_frame(&[]);
        assert_eq!(frame.background, colors::BACKGROUND);
        assert!(frame.discs.is_empty());
    }

    #[test]
    fn test_discs_follow_slot_order_and_positions() {
        let mut s = LotterySession::new(Layout::new(400, 400), 3);
        s.new_draw();

        let mut r = renderer();
        let frame = r.render_frame(s.balls());

        assert_eq!(frame.discs.len(), s.balls().len());
        for (disc, ball) in frame.discs.iter().zip(s.balls()) {
            assert_eq!(disc.value, ball.value);
            assert_eq!(disc.pos, IVec2::new(ball.x, ball.y));
        }
    }

    #[test]
    fn test_flip_replaces_the_whole_front_frame() {
        let mut s = LotterySession::new(Layout::new(400, 400), 3);
        s.new_draw();

        let mut r = renderer();
        r.render_frame(s.balls());
        assert_eq!(r.front().discs.len(), 6);

        // an empty recomposition must not leave old discs behind
        r.render_frame(&[]);
        assert!(r.front().discs.is_empty());
    }

    #[test]
    fn test_render_is_a_snapshot() {
        let mut s = LotterySession::new(Layout::new(400, 400), 3);
        s.new_draw();
        let mut r = renderer();
        let before: Vec<i32> = r.render_frame(s.balls()).discs.iter().map(|d| d.pos.y).collect();

        // advancing the sim does not mutate an already-flipped frame
        for _ in 0..100 {
            crate::sim::tick(&mut s);
        }
        let after: Vec<i32> = r.front().discs.iter().map(|d| d.pos.y).collect();
        assert_eq!(before, after);
    }
}
