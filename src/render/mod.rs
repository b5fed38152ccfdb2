//! Frame composition module
//!
//! Every render is a full snapshot of current entity state; a dropped
//! frame never leaves stale pixels behind.

pub mod frame;
pub mod scene;

pub use frame::{Color, DiscInstance, Frame, colors};
pub use scene::{Presenter, SceneRenderer};
