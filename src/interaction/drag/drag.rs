use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Ball, BallRadius};
use crate::core::config::{ClockConfig, DragConfig};
use crate::core::system::system_order::ClockSet;

/// Mouse / first-touch drag of a single ball, pulled toward the pointer like a soft spring.
pub struct DragInteractionPlugin;

impl Plugin for DragInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveDrag>().add_systems(
            Update,
            (begin_or_end_drag, apply_drag_velocity)
                .chain()
                .in_set(ClockSet::Interaction),
        );
    }
}

#[derive(Resource, Default, Debug)]
pub struct ActiveDrag {
    pub entity: Option<Entity>,
}

/// Nearest candidate whose pick radius (its own radius or `grab_radius`, whichever is larger) contains `pointer`.
pub fn pick_ball(
    pointer: Vec2,
    candidates: impl IntoIterator<Item = (Entity, Vec2, f32)>,
    grab_radius: f32,
) -> Option<Entity> {
    let mut nearest: Option<(Entity, f32)> = None;
    for (e, pos, radius) in candidates {
        let d2 = pos.distance_squared(pointer);
        let grab_r = grab_radius.max(radius);
        if d2 > grab_r * grab_r {
            continue;
        }
        match nearest {
            Some((_, best)) if best <= d2 => {}
            _ => nearest = Some((e, d2)),
        }
    }
    nearest.map(|(e, _)| e)
}

/// Velocity that closes `stiffness` of the gap to the pointer over `dt`, capped at `max_speed` (0 = uncapped).
pub fn spring_velocity(pos: Vec2, pointer: Vec2, stiffness: f32, dt: f32, max_speed: f32) -> Vec2 {
    let dt = dt.max(1e-3);
    let v = (pointer - pos) * stiffness.clamp(0.0, 1.0) / dt;
    if max_speed > 0.0 {
        v.clamp_length_max(max_speed)
    } else {
        v
    }
}

/// Unified pointer (mouse or first touch) world position.
fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    let screen_pos = match touches.iter().next() {
        Some(touch) => touch.position(),
        None => window.cursor_position()?,
    };
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

fn begin_or_end_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut active: ResMut<ActiveDrag>,
    q: Query<(Entity, &Transform, &BallRadius), With<Ball>>,
    cfg: Res<ClockConfig>,
) {
    let drag_cfg: &DragConfig = &cfg.interactions.drag;
    if !drag_cfg.enabled {
        active.entity = None;
        return;
    }

    let released =
        buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some();
    if released {
        if let Some(e) = active.entity.take() {
            debug!(?e, "drag end");
        }
    }

    let pressed =
        buttons.just_pressed(MouseButton::Left) || touches.iter_just_pressed().next().is_some();
    if active.entity.is_some() || !pressed {
        return;
    }
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else {
        return;
    };
    let candidates = q
        .iter()
        .map(|(e, tf, r)| (e, tf.translation.truncate(), r.0));
    if let Some(e) = pick_ball(world_pos, candidates, drag_cfg.grab_radius) {
        debug!(?e, "drag begin");
        active.entity = Some(e);
    }
}

fn apply_drag_velocity(
    time: Res<Time>,
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut active: ResMut<ActiveDrag>,
    mut q: Query<(&Transform, &mut Velocity), With<Ball>>,
    cfg: Res<ClockConfig>,
) {
    let Some(active_entity) = active.entity else {
        return;
    };
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else {
        return;
    };
    let drag_cfg = &cfg.interactions.drag;

    // Ball may have been despawned by reconciliation while held.
    let Ok((tf, mut vel)) = q.get_mut(active_entity) else {
        active.entity = None;
        return;
    };
    vel.linvel = spring_velocity(
        tf.translation.truncate(),
        world_pos,
        drag_cfg.stiffness,
        time.delta_secs(),
        drag_cfg.max_speed,
    );
}
