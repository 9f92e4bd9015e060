use bevy::prelude::*;
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crate::core::config::{ClockConfig, DEFAULT_CONFIG_LAYERS};

/// Layer files to watch; `main` replaces this with the layers it actually loaded.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).collect(),
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}

impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

/// Polls config layer mtimes and swaps in the reloaded `ClockConfig`.
/// Gravity and hand widths follow through change detection; the canvas and
/// walls keep their startup geometry.
pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Startup, record_initial_mtimes)
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

/// Returns true when any watched file is newer than its recorded mtime.
fn refresh_mtimes(state: &mut ConfigReloadState, settings: &ConfigReloadSettings) -> bool {
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(mod_time) = fs::metadata(path).and_then(|meta| meta.modified()) else {
            continue;
        };
        let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    dirty
}

fn record_initial_mtimes(settings: Res<ConfigReloadSettings>, mut state: ResMut<ConfigReloadState>) {
    refresh_mtimes(&mut state, &settings);
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<ClockConfig>,
    mut windows: Query<&mut Window>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state.timer.set_duration(Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).just_finished() {
        return;
    }
    if !refresh_mtimes(&mut state, &settings) {
        return;
    }

    let (new_cfg, _used, errors) = ClockConfig::load_layered(settings.paths.iter());
    for e in errors {
        warn!("CONFIG HOT-RELOAD issue: {e}");
    }
    if *cfg_res == new_cfg {
        return;
    }
    for w in new_cfg.validate() {
        warn!("CONFIG HOT-RELOAD validation: {w}");
    }
    if new_cfg.window.width != cfg_res.window.width
        || new_cfg.window.height != cfg_res.window.height
        || new_cfg.walls.thickness != cfg_res.walls.thickness
    {
        info!("Config hot-reload: canvas and wall geometry apply on next start");
    }
    if let Ok(mut window) = windows.single_mut() {
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    info!("Config hot-reload applied");
    *cfg_res = new_cfg;
}
