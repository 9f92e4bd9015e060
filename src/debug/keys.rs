use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

/// `R` flips the Rapier collider wireframe (present only when `rapier_debug` installed the renderer).
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    let Some(mut ctx) = ctx else {
        info!("Rapier debug render not installed; set rapier_debug: true in config");
        return;
    };
    ctx.enabled = !ctx.enabled;
    info!(enabled = ctx.enabled, "Rapier wireframe toggled");
}
