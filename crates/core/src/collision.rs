//! Bounding-box collision between the player and obstacles.

use crate::obstacle::Obstacle;
use crate::player::Player;

/// True iff any obstacle overlaps the player's bounding box.
pub fn any_collision(player: &Player, obstacles: &[Obstacle]) -> bool {
    let rect = player.rect();
    obstacles.iter().any(|o| rect.intersects(&o.rect))
}
