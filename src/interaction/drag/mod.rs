pub mod drag;

pub use drag::{pick_ball, spring_velocity, ActiveDrag, DragInteractionPlugin};
