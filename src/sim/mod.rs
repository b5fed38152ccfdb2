//! Deterministic simulation module
//!
//! All draw logic lives here. This module must be pure and deterministic:
//! - Fixed tick interval only
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod draw;
pub mod session;
pub mod sort;
pub mod state;
pub mod tick;

pub use draw::pick;
pub use session::{Command, Layout, LotterySession};
pub use sort::ascending;
pub use state::{Ball, BallPhase, DropKind, same_value};
pub use tick::tick;
