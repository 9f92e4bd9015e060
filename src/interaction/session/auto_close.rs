// Automatically exits the app after a configured number of seconds (if > 0)
// Reads `ClockConfig.window.autoClose` (RON key) / `WindowConfig::auto_close`.
// 0.0 (default) => disabled.

use bevy::prelude::*;

use crate::core::config::ClockConfig;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<ClockConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(t) = timer.as_mut() {
        t.tick(time.delta());
        if t.just_finished() {
            info!("AutoClose: timer finished, requesting app exit");
            ev_exit.write(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(ClockConfig::default())
            .add_plugins(AutoClosePlugin);
        app.update();
        assert!(!app.world().contains_resource::<AutoCloseTimer>());
    }

    #[test]
    fn timer_installed_when_configured() {
        let mut cfg = ClockConfig::default();
        cfg.window.auto_close = 2.5;
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(cfg)
            .add_plugins(AutoClosePlugin);
        app.update();
        let timer = app.world().resource::<AutoCloseTimer>();
        assert!((timer.duration().as_secs_f32() - 2.5).abs() < 1e-6);
    }
}
