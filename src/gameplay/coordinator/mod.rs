pub mod coordinator;

pub use coordinator::{CoordinatorPlugin, FrameReading, Reconciled, TimeBalls};
