//! Frame-paced slide animation.
//!
//! The movement engine resolves a turn instantly. Front ends that want to
//! show tiles gliding into place feed the turn's slides to a
//! [`SlideAnimation`] and tick it once per frame. Ticking only moves pixel
//! positions; it never changes the resolved board.

mod slide;

pub use slide::{AnimatedTile, SlideAnimation};
