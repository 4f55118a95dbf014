//! Player physics: discrete per-tick gravity and a single jump impulse.

use crate::types::{
    CharacterId, Rect, GRAVITY, JUMP_VELOCITY, PLAYER_GROUND_LIMIT, PLAYER_HEIGHT, PLAYER_WIDTH,
    PLAYER_X,
};

/// The running character.
///
/// Invariant: `rect.y <= PLAYER_GROUND_LIMIT`; landing zeroes the velocity and
/// clears the airborne flag in the same step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    rect: Rect,
    velocity: f32,
    airborne: bool,
    character: CharacterId,
}

impl Player {
    /// Create a player standing on the ground
    pub fn new(character: CharacterId) -> Self {
        Self {
            rect: Rect::new(PLAYER_X, PLAYER_GROUND_LIMIT, PLAYER_WIDTH, PLAYER_HEIGHT),
            velocity: 0.0,
            airborne: false,
            character,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn character(&self) -> CharacterId {
        self.character
    }

    /// Apply the jump impulse if standing; no double jumps and nothing is queued.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.velocity = JUMP_VELOCITY;
        self.airborne = true;
        true
    }

    /// Advance one tick of gravity.
    pub fn tick(&mut self) {
        self.velocity += GRAVITY;
        // Truncates toward zero.
        self.rect.y += self.velocity as i32;
        if self.rect.y >= PLAYER_GROUND_LIMIT {
            self.rect.y = PLAYER_GROUND_LIMIT;
            self.velocity = 0.0;
            self.airborne = false;
        }
    }

    /// Move the player onto the ground line.
    ///
    /// Velocity and the airborne flag are kept: a player rescued mid-jump
    /// finishes the arc from ground level.
    pub fn reposition_to_ground(&mut self) {
        self.rect.y = PLAYER_GROUND_LIMIT;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(CharacterId::default())
    }
}
