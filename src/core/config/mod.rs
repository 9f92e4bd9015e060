pub mod config;

pub use config::{
    BallClassConfig, BallClassesConfig, BounceConfig, ClockConfig, DragConfig, GravityConfig,
    HandConfig, HandsConfig, InteractionConfig, PhysicsScaleConfig, WallConfig, WindowConfig,
    DEFAULT_CONFIG_LAYERS,
};
