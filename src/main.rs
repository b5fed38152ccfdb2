//! Lotto Drop entry point
//!
//! Headless demo: one draw, then a re-sort, rendered through a presenter
//! that logs each frame. Window chrome and real drawing belong to an
//! embedding application.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use lotto_drop::Settings;
use lotto_drop::render::{Frame, Presenter, SceneRenderer};
use lotto_drop::runner::Runner;
use lotto_drop::sim::{Command, LotterySession};

/// Stand-in for the windowing collaborator: counts and logs frames.
#[derive(Default)]
struct LogPresenter {
    frames: u64,
}

impl Presenter for LogPresenter {
    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        log::debug!("frame {}: {} discs", self.frames, frame.discs.len());
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load_or_default(Path::new("lotto-drop.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("lotto-drop starting with seed {seed}");

    let session = LotterySession::new(settings.layout(), seed);
    let renderer = SceneRenderer::new(settings.background);
    let mut runner = Runner::new(session, renderer, LogPresenter::default());

    runner.run(Command::Draw);
    println!("drawn:  {:?}", runner.values());

    runner.run(Command::Sort);
    println!("sorted: {:?}", runner.values());
}
