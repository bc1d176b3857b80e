//! Application systems
//!
//! The window, GPU renderer, and camera rig are the collaborators the
//! [`motionfield_core::FrameScheduler`] drives each frame.

mod render;
mod view;
mod window;

pub use render::{RenderError, RenderSystem};
pub use view::ViewRig;
pub use window::{WindowError, WindowSystem};
