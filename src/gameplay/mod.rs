pub mod coordinator;
pub mod spawn;
