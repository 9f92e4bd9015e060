//! Time-driven ball coordinator.
//!
//! Owns the three FIFO ball collections and moves each one a single step toward
//! its clock value per frame. Rapier steps the bodies independently; this module
//! only spawns and despawns them.

use std::cmp::Ordering;
use std::collections::VecDeque;

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::canvas::Canvas;
use crate::core::clock::{ClockReading, TimeUnit, WallClock};
use crate::core::config::ClockConfig;
use crate::core::system::system_order::ClockSet;
use crate::gameplay::spawn::spawn::drop_ball;
use crate::physics::walls::walls::spawn_walls;

/// Clock value sampled once per frame; every system in the frame sees the same reading.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct FrameReading(pub ClockReading);

/// Outcome of one reconciliation step on a single collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    Spawned(Entity),
    Removed(Entity),
    Unchanged,
}

/// Ball handles per time unit, oldest first.
#[derive(Resource, Debug, Default)]
pub struct TimeBalls {
    seconds: VecDeque<Entity>,
    minutes: VecDeque<Entity>,
    hours: VecDeque<Entity>,
}

impl TimeBalls {
    fn queue(&self, unit: TimeUnit) -> &VecDeque<Entity> {
        match unit {
            TimeUnit::Second => &self.seconds,
            TimeUnit::Minute => &self.minutes,
            TimeUnit::Hour => &self.hours,
        }
    }

    fn queue_mut(&mut self, unit: TimeUnit) -> &mut VecDeque<Entity> {
        match unit {
            TimeUnit::Second => &mut self.seconds,
            TimeUnit::Minute => &mut self.minutes,
            TimeUnit::Hour => &mut self.hours,
        }
    }

    pub fn len(&self, unit: TimeUnit) -> usize {
        self.queue(unit).len()
    }

    pub fn is_empty(&self) -> bool {
        TimeUnit::ALL.iter().all(|u| self.queue(*u).is_empty())
    }

    /// (seconds, minutes, hours)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.seconds.len(), self.minutes.len(), self.hours.len())
    }

    pub fn iter(&self, unit: TimeUnit) -> impl Iterator<Item = Entity> + '_ {
        self.queue(unit).iter().copied()
    }

    pub fn oldest(&self, unit: TimeUnit) -> Option<Entity> {
        self.queue(unit).front().copied()
    }

    pub fn push(&mut self, unit: TimeUnit, entity: Entity) {
        self.queue_mut(unit).push_back(entity);
    }

    /// Moves the `unit` collection one step toward `target`: spawns one ball
    /// (via `spawn`) when short, pops the oldest when over.
    pub fn reconcile(
        &mut self,
        unit: TimeUnit,
        target: u32,
        spawn: impl FnOnce() -> Entity,
    ) -> Reconciled {
        let queue = self.queue_mut(unit);
        match queue.len().cmp(&(target as usize)) {
            Ordering::Less => {
                let e = spawn();
                queue.push_back(e);
                Reconciled::Spawned(e)
            }
            Ordering::Greater => queue
                .pop_front()
                .map_or(Reconciled::Unchanged, Reconciled::Removed),
            Ordering::Equal => Reconciled::Unchanged,
        }
    }
}

pub struct CoordinatorPlugin;

impl Plugin for CoordinatorPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<WallClock>()
            .configure_sets(
                Update,
                (ClockSet::Interaction, ClockSet::Reconcile, ClockSet::Draw)
                    .chain()
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(Startup, initialize_clock)
            .add_systems(
                Update,
                (sample_clock, reconcile_balls)
                    .chain()
                    .in_set(ClockSet::Reconcile),
            );
    }
}

/// One-time setup: canvas, walls, and as many balls per unit as the clock currently reads.
pub fn initialize_clock(
    mut commands: Commands,
    cfg: Res<ClockConfig>,
    clock: Res<WallClock>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let canvas = Canvas::from_window(&cfg.window);
    let walls = spawn_walls(&mut commands, &canvas, cfg.walls.thickness);
    let reading = clock.read();

    let mut balls = TimeBalls::default();
    let mut rng = rand::thread_rng();
    for unit in TimeUnit::ALL {
        for _ in 0..reading.value(unit) {
            let e = drop_ball(&mut commands, unit, &cfg, &canvas, &mut rng);
            balls.push(unit, e);
        }
    }

    info!(
        canvas_w = canvas.width,
        canvas_h = canvas.height,
        clock = clock.source_name(),
        "Clock initialized: seeded seconds={} minutes={} hours={}",
        reading.second,
        reading.minute,
        reading.hour12
    );

    commands.insert_resource(canvas);
    commands.insert_resource(walls);
    commands.insert_resource(balls);
    commands.insert_resource(FrameReading(reading));
    next_state.set(AppState::Running);
}

pub fn sample_clock(clock: Res<WallClock>, mut frame: ResMut<FrameReading>) {
    let reading = clock.read();
    if frame.0 != reading {
        frame.0 = reading;
    }
}

pub fn reconcile_balls(
    mut commands: Commands,
    cfg: Res<ClockConfig>,
    canvas: Res<Canvas>,
    frame: Res<FrameReading>,
    mut balls: ResMut<TimeBalls>,
    mut last: Local<Option<ClockReading>>,
) {
    let reading = frame.0;
    let mut rng = rand::thread_rng();
    for unit in TimeUnit::ALL {
        let target = reading.value(unit);
        if let Some(prev) = *last {
            if target < prev.value(unit) {
                debug!(
                    unit = unit.label(),
                    "rollover {} -> {}; draining one ball per frame",
                    prev.value(unit),
                    target
                );
            }
        }
        let step = balls.reconcile(unit, target, || {
            drop_ball(&mut commands, unit, &cfg, &canvas, &mut rng)
        });
        if let Reconciled::Removed(e) = step {
            commands.entity(e).despawn();
        }
    }
    *last = Some(reading);
}
