use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default config layers, later files override earlier ones.
pub const DEFAULT_CONFIG_LAYERS: [&str; 2] = [
    "assets/config/clock.ron",
    "assets/config/clock.local.ron",
];

#[derive(Debug, Deserialize, Serialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Width of the hosting container; the canvas is this minus `side_margin`.
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub side_margin: f32,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1780.0,
            height: 900.0,
            title: "Ball Clock".into(),
            side_margin: 500.0,
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -1000.0 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsScaleConfig {
    pub pixels_per_meter: f32,
}
impl Default for PhysicsScaleConfig {
    fn default() -> Self {
        Self {
            pixels_per_meter: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BounceConfig {
    pub restitution: f32,
    pub friction: f32,
    pub linear_damping: f32,
}
impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            restitution: 0.0,
            friction: 0.1,
            linear_damping: 0.6,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BallClassConfig {
    pub radius: f32,
}
impl Default for BallClassConfig {
    fn default() -> Self {
        Self { radius: 8.0 }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallClassesConfig {
    pub second: BallClassConfig,
    pub minute: BallClassConfig,
    pub hour: BallClassConfig,
    /// Max horizontal offset (either side) applied at the drop point. 0.0 drops every ball at the exact same spot.
    pub drop_jitter: f32,
}
impl Default for BallClassesConfig {
    fn default() -> Self {
        Self {
            second: BallClassConfig { radius: 8.0 },
            minute: BallClassConfig { radius: 18.0 },
            hour: BallClassConfig { radius: 38.0 },
            drop_jitter: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct WallConfig {
    pub thickness: f32,
    pub visible: bool,
}
impl Default for WallConfig {
    fn default() -> Self {
        Self {
            thickness: 50.0,
            visible: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct HandConfig {
    /// Hand length as a fraction of canvas width.
    pub length_frac: f32,
    /// Stroke width in logical pixels.
    pub weight: f32,
}
impl Default for HandConfig {
    fn default() -> Self {
        Self {
            length_frac: 0.4,
            weight: 10.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct HandsConfig {
    pub hour: HandConfig,
    pub minute: HandConfig,
    pub second: HandConfig,
}
impl Default for HandsConfig {
    fn default() -> Self {
        Self {
            hour: HandConfig {
                length_frac: 0.3,
                weight: 10.0,
            },
            minute: HandConfig {
                length_frac: 0.4,
                weight: 10.0,
            },
            second: HandConfig {
                length_frac: 0.48,
                weight: 5.0,
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    pub enabled: bool,
    /// Fraction of the pointer offset closed per second-normalized step (mouse constraint stiffness).
    pub stiffness: f32,
    /// Minimum pick radius; a ball's own radius is used when larger.
    pub grab_radius: f32,
    /// 0.0 = uncapped.
    pub max_speed: f32,
}
impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stiffness: 0.2,
            grab_radius: 0.0,
            max_speed: 3000.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    pub drag: DragConfig,
}

#[derive(Debug, Deserialize, Serialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub physics: PhysicsScaleConfig,
    pub bounce: BounceConfig,
    pub balls: BallClassesConfig,
    pub walls: WallConfig,
    pub hands: HandsConfig,
    pub interactions: InteractionConfig,
    pub rapier_debug: bool,
    /// Seconds between ball-count log lines. 0.0 disables.
    pub log_interval: f32,
}
impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            physics: Default::default(),
            bounce: Default::default(),
            balls: Default::default(),
            walls: Default::default(),
            hands: Default::default(),
            interactions: Default::default(),
            rapier_debug: false,
            log_interval: 5.0,
        }
    }
}

impl ClockConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge of RON maps).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (ClockConfig::default(), used, errors);
        };
        match val.into_rust::<ClockConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (ClockConfig::default(), used, errors)
            }
        }
    }

    /// Validate the configuration returning a list of human‑readable warning strings.
    /// These represent suspicious / potentially unintended values but are not hard errors.
    /// Call at startup and log each warning with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.side_margin < 0.0 {
            w.push(format!(
                "window.side_margin {} negative -> canvas wider than container",
                self.window.side_margin
            ));
        }
        if self.window.width - self.window.side_margin <= 0.0 {
            w.push(format!(
                "window.width {} leaves no canvas after side_margin {}",
                self.window.width, self.window.side_margin
            ));
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; balls may float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); balls will fall upward out of the open top",
                self.gravity.y
            ));
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if !(0.0..=1.5).contains(&self.bounce.restitution) {
            w.push(format!(
                "restitution {} outside recommended 0..1.5",
                self.bounce.restitution
            ));
        }
        if self.bounce.friction < 0.0 {
            w.push("bounce.friction negative".into());
        }
        if self.bounce.linear_damping < 0.0 {
            w.push("bounce.linear_damping negative -> balls gain energy".into());
        }
        for (label, class) in [
            ("balls.second", &self.balls.second),
            ("balls.minute", &self.balls.minute),
            ("balls.hour", &self.balls.hour),
        ] {
            if class.radius <= 0.0 {
                w.push(format!("{label}.radius must be > 0"));
            }
        }
        if self.balls.drop_jitter < 0.0 {
            w.push("balls.drop_jitter negative -> treated as 0".into());
        }
        if self.walls.thickness <= 0.0 {
            w.push("walls.thickness must be > 0".into());
        }
        for (label, hand) in [
            ("hands.hour", &self.hands.hour),
            ("hands.minute", &self.hands.minute),
            ("hands.second", &self.hands.second),
        ] {
            if !(0.0..=1.0).contains(&hand.length_frac) {
                w.push(format!(
                    "{label}.length_frac {} outside 0..1",
                    hand.length_frac
                ));
            }
            if hand.weight <= 0.0 {
                w.push(format!("{label}.weight must be > 0"));
            }
        }
        if self.interactions.drag.enabled {
            let dr = &self.interactions.drag;
            if !(0.0..=1.0).contains(&dr.stiffness) || dr.stiffness == 0.0 {
                w.push(format!("drag.stiffness {} outside (0, 1]", dr.stiffness));
            }
            if dr.grab_radius < 0.0 {
                w.push("drag.grab_radius negative".into());
            }
            if dr.max_speed < 0.0 {
                w.push("drag.max_speed negative -> treated as uncapped".into());
            }
        }
        if self.log_interval < 0.0 {
            w.push("log_interval negative -> treated as disabled".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 1300.0, height: 700.0, title: "Test", side_margin: 500.0),
            gravity: (y: -800.0),
            physics: (pixels_per_meter: 40.0),
            bounce: (restitution: 0.2, friction: 0.3, linear_damping: 0.5),
            balls: (
                second: (radius: 6.0),
                minute: (radius: 15.0),
                hour: (radius: 30.0),
                drop_jitter: 1.0,
            ),
            walls: (thickness: 40.0, visible: false),
            hands: (
                hour: (length_frac: 0.25, weight: 12.0),
                minute: (length_frac: 0.35, weight: 8.0),
                second: (length_frac: 0.45, weight: 3.0),
            ),
            interactions: (
                drag: (enabled: true, stiffness: 0.3, grab_radius: 10.0, max_speed: 2000.0),
            ),
            rapier_debug: false,
            log_interval: 2.0,
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = ClockConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 1300.0);
        assert_eq!(cfg.balls.hour.radius, 30.0);
        assert!(!cfg.walls.visible);
        assert!((cfg.hands.second.length_frac - 0.45).abs() < 1e-6);
        assert!((cfg.interactions.drag.stiffness - 0.3).abs() < 1e-6);
        assert!(
            cfg.validate().is_empty(),
            "expected no validation warnings for sample config: {:?}",
            cfg.validate()
        );
    }

    #[test]
    fn defaults_match_clock_sketch() {
        let cfg = ClockConfig::default();
        assert_eq!(cfg.balls.second.radius, 8.0);
        assert_eq!(cfg.balls.minute.radius, 18.0);
        assert_eq!(cfg.balls.hour.radius, 38.0);
        assert_eq!(cfg.window.side_margin, 500.0);
        assert_eq!(cfg.walls.thickness, 50.0);
        assert_eq!(cfg.hands.second.weight, 5.0);
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn validate_detects_warnings() {
        let mut bad = ClockConfig::default();
        bad.window.width = 400.0;
        bad.window.height = 0.0;
        bad.gravity.y = 0.0;
        bad.bounce.restitution = -0.2;
        bad.balls.minute.radius = 0.0;
        bad.walls.thickness = -1.0;
        bad.hands.hour.length_frac = 1.5;
        bad.hands.second.weight = 0.0;
        bad.interactions.drag.stiffness = 0.0;
        bad.interactions.drag.max_speed = -5.0;
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("leaves no canvas"));
        assert!(joined.contains("gravity.y magnitude near zero"));
        assert!(joined.contains("restitution -0.2"));
        assert!(joined.contains("balls.minute.radius must be > 0"));
        assert!(joined.contains("walls.thickness"));
        assert!(joined.contains("hands.hour.length_frac"));
        assert!(joined.contains("hands.second.weight"));
        assert!(joined.contains("drag.stiffness"));
        assert!(joined.contains("drag.max_speed negative"));
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = ClockConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg.window.width, WindowConfig::default().width);
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r"(
            window: (width: 900.0),
            gravity: (y: -700.0),
            balls: (hour: (radius: 30.0)),
        )";
        let override_one = r#"(
            window: (title: "Custom Title"),
            balls: (second: (radius: 5.0)),
        )"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(override_one.as_bytes()).unwrap();
        let (cfg, used, errors) = ClockConfig::load_layered([f1.path(), f2.path()]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 900.0);
        assert_eq!(cfg.window.title, "Custom Title");
        // nested maps merge instead of replacing the whole `balls` section
        assert_eq!(cfg.balls.hour.radius, 30.0);
        assert_eq!(cfg.balls.second.radius, 5.0);
        assert_eq!(cfg.balls.minute.radius, 18.0);
        assert_eq!(cfg.window.height, WindowConfig::default().height);
    }

    #[test]
    fn layered_skips_missing_layer_and_reports_bad_one() {
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(b"(gravity: (y: -300.0))").unwrap();
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"(gravity: (y: ").unwrap();
        let (cfg, used, errors) = ClockConfig::load_layered([
            f1.path(),
            Path::new("no/such/layer.ron"),
            broken.path(),
        ]);
        assert_eq!(used.len(), 1);
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("parse error"));
        assert_eq!(cfg.gravity.y, -300.0);
    }

    #[test]
    fn parse_autoclose_and_validate() {
        let sample = r"(window: (autoClose: 3.25))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = ClockConfig::load_from_file(file.path()).expect("parse config");
        assert!((cfg.window.auto_close - 3.25).abs() < 1e-6);
        let neg_sample = r"(window: (autoClose: -5.0))";
        let mut file2 = tempfile::NamedTempFile::new().unwrap();
        file2.write_all(neg_sample.as_bytes()).unwrap();
        let cfg2 = ClockConfig::load_from_file(file2.path()).expect("parse config");
        assert!(
            cfg2.validate().iter().any(|w| w.contains("window.autoClose")),
            "expected warning for negative autoClose"
        );
    }
}
