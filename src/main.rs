use std::path::PathBuf;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;

use ball_clock::core::canvas::Canvas;
use ball_clock::core::clock::{parse_hms, ManualClock, WallClock};
use ball_clock::core::config::{ClockConfig, DEFAULT_CONFIG_LAYERS};
use ball_clock::interaction::session::config_hot_reload::ConfigReloadSettings;
use ball_clock::ClockPlugin;

#[derive(Parser, Debug)]
#[command(about = "Analog clock with falling physics balls for seconds, minutes and hours", version)]
struct Args {
    /// Config layer (RON); repeat to stack layers. Defaults to assets/config/clock.ron + clock.local.ron.
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Freeze the clock at HH:MM:SS (24h) instead of local time.
    #[arg(long)]
    time: Option<String>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
    /// Print the effective config as RON and exit.
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let layers: Vec<PathBuf> = if args.config.is_empty() {
        DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).collect()
    } else {
        args.config.clone()
    };
    let (mut cfg, used, errors) = ClockConfig::load_layered(&layers);
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }

    if args.print_config {
        let text = ron::ser::to_string_pretty(&cfg, ron::ser::PrettyConfig::default())
            .context("serialize config")?;
        println!("{text}");
        return Ok(());
    }

    let wall_clock = match args.time.as_deref() {
        Some(text) => {
            let (h, m, s) = parse_hms(text)
                .with_context(|| format!("--time {text:?}: expected HH:MM:SS"))?;
            WallClock::new(ManualClock::new(h, m, s))
        }
        None => WallClock::default(),
    };

    let canvas = Canvas::from_window(&cfg.window);
    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .insert_resource(wall_clock)
        .insert_resource(ConfigReloadSettings {
            paths: layers,
            ..Default::default()
        })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (canvas.width, canvas.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(ClockPlugin);

    // Logging is only live once DefaultPlugins is in.
    info!(layers = ?used, "config loaded");
    for e in errors {
        warn!("config layer issue: {e}");
    }
    for w in cfg.validate() {
        warn!("config validation: {w}");
    }

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("app exited with code {code}"),
    }
}
