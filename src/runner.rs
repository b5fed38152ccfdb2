//! Real-time animation driver
//!
//! Bridges the deterministic tick core to wall-clock time: applies trigger
//! commands, advances the session at the fixed tick interval and presents
//! a frame whenever a tick produced motion.

use std::thread;
use std::time::Duration;

use crate::consts::TICK_INTERVAL_MS;
use crate::render::{Presenter, SceneRenderer};
use crate::sim::{self, Command, LotterySession};

pub struct Runner<P> {
    session: LotterySession,
    renderer: SceneRenderer,
    presenter: P,
}

impl<P: Presenter> Runner<P> {
    pub fn new(session: LotterySession, renderer: SceneRenderer, presenter: P) -> Self {
        Self {
            session,
            renderer,
            presenter,
        }
    }

    /// Apply a trigger command, then animate until every ball rests.
    /// A command that changed nothing returns immediately.
    pub fn run(&mut self, cmd: Command) {
        self.session.handle(cmd);
        self.run_until_settled();
    }

    /// Tick the session in real time until it settles, presenting one
    /// frame per tick of motion. The tick that clamps the last ball onto
    /// the floor still reports motion, so the final resting scene is
    /// always presented.
    pub fn run_until_settled(&mut self) {
        while !self.session.settled() {
            if sim::tick(&mut self.session) {
                let frame = self.renderer.render_frame(self.session.balls());
                self.presenter.present(frame);
            }
            thread::sleep(Duration::from_millis(u64::from(TICK_INTERVAL_MS)));
        }
        log::info!("settled: {:?}", self.values());
    }

    /// Values currently on screen, slot order
    pub fn values(&self) -> Vec<u8> {
        self.session.balls().iter().map(|b| b.value).collect()
    }

    pub fn session(&self) -> &LotterySession {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Frame, colors};
    use crate::sim::Layout;

    #[derive(Default)]
    struct RecordingPresenter {
        frames: usize,
        last: Option<Frame>,
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, frame: &Frame) {
            self.frames += 1;
            self.last = Some(frame.clone());
        }
    }

    /// Tiny layout so the test animates in a few hundred milliseconds
    fn tiny_runner() -> Runner<RecordingPresenter> {
        let layout = Layout {
            floor: 9,
            slots: [0, 1, 2, 3, 4, 5],
        };
        Runner::new(
            LotterySession::new(layout, 11),
            SceneRenderer::new(colors::BACKGROUND),
            RecordingPresenter::default(),
        )
    }

    #[test]
    fn test_run_draw_presents_until_settled() {
        let mut r = tiny_runner();
        r.run(Command::Draw);

        assert!(r.session().settled());
        assert!(r.presenter.frames > 1);
        let last = r.presenter.last.as_ref().unwrap();
        assert!(last.discs.iter().all(|d| d.pos.y == 9));
    }

    #[test]
    fn test_noop_command_presents_nothing() {
        let mut r = tiny_runner();
        r.run(Command::Sort);
        assert_eq!(r.presenter.frames, 0);
    }
}
