pub mod drag;
pub mod session;
