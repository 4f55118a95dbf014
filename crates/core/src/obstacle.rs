//! Obstacles and the time-driven spawner that creates them.

use crate::rng::GameRng;
use crate::types::{
    ObstacleKind, Rect, FLYING_LIFT_MAX, FLYING_LIFT_MIN, GROUND_Y, PLAYER_HEIGHT, SCREEN_WIDTH,
};

/// A scrolling obstacle. Its speed is fixed at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    pub speed: i32,
}

impl Obstacle {
    /// Create an obstacle of `kind` at the right screen edge with top edge `y`
    pub fn new(kind: ObstacleKind, y: i32, speed: i32) -> Self {
        let (w, h) = kind.size();
        Self {
            kind,
            rect: Rect::new(SCREEN_WIDTH, y, w, h),
            speed,
        }
    }

    /// Spawn geometry for `kind`; flying obstacles get a random lift.
    pub fn spawn(kind: ObstacleKind, speed: i32, rng: &mut GameRng) -> Self {
        let (_, h) = kind.size();
        let y = match kind {
            ObstacleKind::Ground => GROUND_Y - h,
            ObstacleKind::Flying => {
                GROUND_Y - PLAYER_HEIGHT - h - rng.range_i32(FLYING_LIFT_MIN, FLYING_LIFT_MAX)
            }
        };
        Self::new(kind, y, speed)
    }

    /// Move left by this obstacle's speed.
    pub fn advance(&mut self) {
        self.rect.x -= self.speed;
    }

    /// True once the right edge has passed the left screen boundary.
    pub fn is_offscreen(&self) -> bool {
        self.rect.right() < 0
    }
}

/// Interval-driven obstacle factory.
///
/// Holds the timestamp of the last spawn; a new obstacle is due once strictly
/// more than `interval_ms` has elapsed since then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleSpawner {
    last_spawn_ms: u64,
    interval_ms: u64,
}

impl ObstacleSpawner {
    pub fn new(now_ms: u64, interval_ms: u64) -> Self {
        Self {
            last_spawn_ms: now_ms,
            interval_ms,
        }
    }

    /// Restart the interval from `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.last_spawn_ms = now_ms;
    }

    pub fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_spawn_ms) > self.interval_ms
    }

    /// Spawn an obstacle moving at `speed` if the interval elapsed.
    pub fn maybe_spawn(&mut self, now_ms: u64, speed: i32, rng: &mut GameRng) -> Option<Obstacle> {
        if !self.is_due(now_ms) {
            return None;
        }
        self.last_spawn_ms = now_ms;

        let kind = rng.archetype();
        let obstacle = Obstacle::spawn(kind, speed, rng);
        log::trace!(
            "spawned {} obstacle at y={} speed={}",
            kind.as_str(),
            obstacle.rect.y,
            speed
        );
        Some(obstacle)
    }
}
