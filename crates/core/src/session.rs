//! Game session module - one run from start to final score
//!
//! This module ties together the player, obstacle spawner, collision check,
//! rescue challenge and scoring. A session is a per-tick state machine:
//!
//! - **Running**: the world moves (unless paused)
//! - **Rescue**: a collision froze the world and a [`RescueChallenge`] is active
//! - **DeathCue**: the challenge failed; the final score is fixed and the
//!   terminal cue plays for [`DEATH_CUE_TICKS`] ticks
//! - **Over**: the caller should leave the session and show the score

use crate::collision::any_collision;
use crate::obstacle::{Obstacle, ObstacleSpawner};
use crate::player::Player;
use crate::rescue::{RescueChallenge, RescueOutcome};
use crate::rng::GameRng;
use crate::snapshot::{ObstacleSnapshot, RescueSnapshot, SessionSnapshot};
use crate::types::{CharacterId, DifficultyProfile, InputEvent, DEATH_CUE_TICKS, POINTS_PER_LEVEL};

/// Everything chosen in the menus that shapes a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionConfig {
    pub difficulty: DifficultyProfile,
    pub character: CharacterId,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: DifficultyProfile::default(),
            character: CharacterId::default(),
            seed: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Running,
    Rescue(RescueChallenge),
    DeathCue { frame: u32 },
    Over,
}

/// What a tick left the session in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Running,
    Rescue,
    DeathCue,
    Over { score: u32 },
}

/// Level for a given score: `score / 10 + 1`
pub fn level_for_score(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    player: Player,
    obstacles: Vec<Obstacle>,
    spawner: ObstacleSpawner,
    rng: GameRng,
    score: u32,
    level: u32,
    current_speed: i32,
    paused: bool,
    phase: Phase,
    /// Timestamp of the most recent tick, for countdown display.
    now_ms: u64,
}

impl GameSession {
    /// Start a run at `now_ms`
    pub fn new(config: SessionConfig, now_ms: u64) -> Self {
        log::info!(
            "session start: difficulty={} character={} seed={}",
            config.difficulty.name,
            config.character.name(),
            config.seed
        );
        Self {
            config,
            player: Player::new(config.character),
            obstacles: Vec::new(),
            spawner: ObstacleSpawner::new(now_ms, config.difficulty.spawn_interval_ms),
            rng: GameRng::new(config.seed),
            score: 0,
            level: 1,
            current_speed: config.difficulty.base_speed,
            paused: false,
            phase: Phase::Running,
            now_ms,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Speed given to newly spawned obstacles
    pub fn current_speed(&self) -> i32 {
        self.current_speed
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn rescue(&self) -> Option<&RescueChallenge> {
        match &self.phase {
            Phase::Rescue(challenge) => Some(challenge),
            _ => None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self.phase {
            Phase::Running => SessionStatus::Running,
            Phase::Rescue(_) => SessionStatus::Rescue,
            Phase::DeathCue { .. } => SessionStatus::DeathCue,
            Phase::Over => SessionStatus::Over { score: self.score },
        }
    }

    /// Final score once the run has ended.
    pub fn final_score(&self) -> Option<u32> {
        match self.phase {
            Phase::DeathCue { .. } | Phase::Over => Some(self.score),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }

    /// Fix the operands of the active challenge, for tests and replays that
    /// need a known question. Deadline and typed input are kept.
    ///
    /// Returns false when no challenge is active.
    pub fn pin_rescue_operands(&mut self, operand_a: u32, operand_b: u32) -> bool {
        match &mut self.phase {
            Phase::Rescue(challenge) => {
                challenge.replace_operands(operand_a, operand_b);
                true
            }
            _ => false,
        }
    }

    /// Main session tick with this frame's input.
    pub fn tick(&mut self, now_ms: u64, events: &[InputEvent]) -> SessionStatus {
        self.now_ms = now_ms;

        match self.phase {
            Phase::Running => self.tick_running(now_ms, events),
            Phase::Rescue(_) => self.tick_rescue(now_ms, events),
            Phase::DeathCue { frame } => {
                let frame = frame + 1;
                self.phase = if frame >= DEATH_CUE_TICKS {
                    Phase::Over
                } else {
                    Phase::DeathCue { frame }
                };
            }
            Phase::Over => {}
        }
        self.status()
    }

    fn tick_running(&mut self, now_ms: u64, events: &[InputEvent]) {
        for &event in events {
            match event {
                InputEvent::Jump | InputEvent::MoveUp if !self.paused => {
                    self.player.jump();
                }
                InputEvent::TogglePause => {
                    self.paused = !self.paused;
                    log::debug!("paused={}", self.paused);
                }
                _ => {}
            }
        }

        if self.paused {
            return;
        }

        if let Some(obstacle) = self.spawner.maybe_spawn(now_ms, self.current_speed, &mut self.rng) {
            self.obstacles.push(obstacle);
        }

        self.player.tick();

        let mut cleared = 0u32;
        self.obstacles.retain_mut(|o| {
            o.advance();
            if o.is_offscreen() {
                cleared += 1;
                false
            } else {
                true
            }
        });
        for _ in 0..cleared {
            self.credit_cleared_obstacle();
        }

        if any_collision(&self.player, &self.obstacles) {
            let challenge = RescueChallenge::new(self.level, now_ms, &mut self.rng);
            log::info!(
                "collision at score={} level={}: rescue {}",
                self.score,
                self.level,
                challenge.prompt()
            );
            self.phase = Phase::Rescue(challenge);
        }
    }

    fn tick_rescue(&mut self, now_ms: u64, events: &[InputEvent]) {
        let Phase::Rescue(challenge) = &mut self.phase else {
            return;
        };

        match challenge.tick(now_ms, events) {
            RescueOutcome::Active => {}
            RescueOutcome::Succeeded => {
                log::info!("rescue succeeded, clearing {} obstacles", self.obstacles.len());
                self.obstacles.clear();
                self.player.reposition_to_ground();
                self.spawner.reset(now_ms);
                self.phase = Phase::Running;
            }
            RescueOutcome::Failed(reason) => {
                log::info!("rescue failed ({:?}); final score {}", reason, self.score);
                self.phase = Phase::DeathCue { frame: 0 };
            }
        }
    }

    /// One obstacle left the screen: score it and level up if due.
    fn credit_cleared_obstacle(&mut self) {
        self.score += 1;
        let level = level_for_score(self.score);
        if level > self.level {
            self.level = level;
            self.current_speed = self.config.difficulty.base_speed + (level as i32 - 1);
            log::info!("level up: level={} speed={}", self.level, self.current_speed);
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.player = self.player.rect();
        out.character = self.player.character();
        out.obstacles.clear();
        out.obstacles.extend(self.obstacles.iter().map(|o| ObstacleSnapshot {
            kind: o.kind,
            rect: o.rect,
        }));
        out.score = self.score;
        out.level = self.level;
        out.difficulty = self.config.difficulty.name;
        out.paused = self.paused;
        out.rescue = self.rescue().map(|c| RescueSnapshot {
            prompt: c.prompt(),
            input: c.input().to_string(),
            seconds_left: c.seconds_left(self.now_ms),
        });
        out.death_cue_frame = match self.phase {
            Phase::DeathCue { frame } => Some(frame),
            _ => None,
        };
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ObstacleKind, Rect, DIFFICULTIES, PLAYER_GROUND_LIMIT, TICK_MS};

    const T: u64 = TICK_MS as u64;

    fn session() -> GameSession {
        GameSession::new(SessionConfig::default(), 0)
    }

    fn offscreen_soon(x: i32) -> Obstacle {
        Obstacle {
            kind: ObstacleKind::Ground,
            rect: Rect::new(x, 490, 30, 60),
            speed: 6,
        }
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.score(), 0);
        assert_eq!(s.level(), 1);
        assert_eq!(s.current_speed(), 6);
        assert!(!s.paused());
        assert!(s.obstacles().is_empty());
        assert_eq!(s.status(), SessionStatus::Running);
        assert_eq!(s.final_score(), None);
    }

    #[test]
    fn test_level_for_score() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(9), 1);
        assert_eq!(level_for_score(10), 2);
        assert_eq!(level_for_score(25), 3);
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut s = session();
        s.tick(1500, &[]);
        assert!(s.obstacles().is_empty());
        s.tick(1501, &[]);
        assert_eq!(s.obstacles().len(), 1);
        assert_eq!(s.obstacles()[0].speed, 6);
    }

    #[test]
    fn test_jump_ignored_while_paused() {
        let mut s = session();
        s.tick(T, &[InputEvent::TogglePause, InputEvent::Jump]);
        assert!(s.paused());
        assert!(!s.player().is_airborne());
    }

    #[test]
    fn test_jump_before_pause_in_same_frame_applies() {
        let mut s = session();
        s.tick(T, &[InputEvent::Jump, InputEvent::TogglePause]);
        assert!(s.paused());
        assert!(s.player().is_airborne());
        // Paused: gravity was not applied.
        assert_eq!(s.player().velocity(), -20.0);
    }

    #[test]
    fn test_move_up_also_jumps() {
        let mut s = session();
        s.tick(T, &[InputEvent::MoveUp]);
        assert!(s.player().is_airborne());
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut s = session();
        s.obstacles_mut().push(offscreen_soon(600));
        s.tick(T, &[InputEvent::TogglePause]);
        let frozen = s.obstacles()[0];
        for i in 2..50 {
            s.tick(i * T, &[]);
        }
        assert_eq!(s.obstacles()[0], frozen);
        assert!(s.snapshot().paused);

        s.tick(50 * T, &[InputEvent::TogglePause]);
        assert!(!s.paused());
        assert_eq!(s.obstacles()[0].rect.x, frozen.rect.x - 6);
    }

    #[test]
    fn test_offscreen_removal_scores_once() {
        let mut s = session();
        s.obstacles_mut().push(offscreen_soon(-30));
        s.tick(T, &[]);
        assert!(s.obstacles().is_empty());
        assert_eq!(s.score(), 1);
        s.tick(2 * T, &[]);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn test_level_up_raises_speed_of_new_spawns() {
        let mut s = session();
        s.score = 9;
        s.obstacles_mut().push(offscreen_soon(-30));
        s.tick(T, &[]);
        assert_eq!(s.score(), 10);
        assert_eq!(s.level(), 2);
        assert_eq!(s.current_speed(), 7);

        s.tick(1600, &[]);
        assert_eq!(s.obstacles().last().unwrap().speed, 7);
    }

    #[test]
    fn test_multiple_removals_in_one_tick() {
        let mut s = session();
        s.score = 8;
        for _ in 0..3 {
            s.obstacles_mut().push(offscreen_soon(-30));
        }
        s.tick(T, &[]);
        assert_eq!(s.score(), 11);
        assert_eq!(s.level(), 2);
        assert_eq!(s.current_speed(), 7);
    }

    #[test]
    fn test_collision_starts_rescue() {
        let mut s = session();
        s.obstacles_mut().push(offscreen_soon(130));
        assert_eq!(s.tick(T, &[]), SessionStatus::Rescue);

        let (a, b) = s.rescue().unwrap().operands();
        assert!((1..=4).contains(&a) && (1..=4).contains(&b));

        // World is frozen during the challenge.
        let x = s.obstacles()[0].rect.x;
        s.tick(2 * T, &[InputEvent::Jump]);
        assert_eq!(s.obstacles()[0].rect.x, x);
        assert!(!s.player().is_airborne());
    }

    #[test]
    fn test_rescue_success_clears_and_resumes() {
        let mut s = session();
        s.obstacles_mut().push(offscreen_soon(130));
        s.obstacles_mut().push(offscreen_soon(900));
        s.tick(T, &[]);
        assert!(s.pin_rescue_operands(2, 3));

        let status = s.tick(2 * T, &[InputEvent::Digit(6), InputEvent::Confirm]);
        assert_eq!(status, SessionStatus::Running);
        assert!(s.obstacles().is_empty());
        assert_eq!(s.player().rect().y, PLAYER_GROUND_LIMIT);
        assert_eq!(s.score(), 0);

        // Spawn timer restarted at the resolution time.
        s.tick(2 * T + 1500, &[]);
        assert!(s.obstacles().is_empty());
        s.tick(2 * T + 1501, &[]);
        assert_eq!(s.obstacles().len(), 1);
    }

    #[test]
    fn test_rescue_mid_jump_keeps_arc() {
        let mut s = session();
        s.tick(T, &[InputEvent::Jump]);
        assert_eq!(s.player().rect().y, PLAYER_GROUND_LIMIT - 19);

        // A flyer lands on the player's path one tick into the ascent.
        s.obstacles_mut().push(Obstacle {
            kind: ObstacleKind::Flying,
            rect: Rect::new(106, 400, 70, 60),
            speed: 6,
        });
        assert_eq!(s.tick(2 * T, &[]), SessionStatus::Rescue);
        let velocity = s.player().velocity();
        assert_eq!(velocity, -18.0);

        s.pin_rescue_operands(2, 3);
        assert_eq!(
            s.tick(3 * T, &[InputEvent::Digit(6), InputEvent::Confirm]),
            SessionStatus::Running
        );
        assert_eq!(s.player().rect().y, PLAYER_GROUND_LIMIT);
        assert_eq!(s.player().velocity(), velocity);
        assert!(s.player().is_airborne());

        // The arc continues upward from the ground line.
        s.tick(4 * T, &[]);
        assert_eq!(s.player().rect().y, PLAYER_GROUND_LIMIT - 17);
    }

    #[test]
    fn test_rescue_failure_plays_death_cue_then_ends() {
        let mut s = session();
        s.score = 4;
        s.obstacles_mut().push(offscreen_soon(130));
        s.tick(T, &[]);
        s.pin_rescue_operands(2, 3);

        assert_eq!(
            s.tick(2 * T, &[InputEvent::Digit(5), InputEvent::Confirm]),
            SessionStatus::DeathCue
        );
        assert_eq!(s.final_score(), Some(4));
        assert_eq!(s.snapshot().death_cue_frame, Some(0));

        for i in 1..DEATH_CUE_TICKS {
            assert_eq!(s.tick((2 + i as u64) * T, &[]), SessionStatus::DeathCue);
            assert_eq!(s.snapshot().death_cue_frame, Some(i));
        }
        assert_eq!(s.tick(1_000_000, &[]), SessionStatus::Over { score: 4 });
        assert_eq!(s.tick(1_000_016, &[]), SessionStatus::Over { score: 4 });
    }

    #[test]
    fn test_rescue_timeout() {
        let mut s = session();
        s.obstacles_mut().push(offscreen_soon(130));
        s.tick(1000, &[]);
        assert_eq!(s.tick(6000, &[]), SessionStatus::Rescue);
        assert_eq!(s.tick(6001, &[]), SessionStatus::DeathCue);
    }

    #[test]
    fn test_pause_ignored_during_rescue() {
        let mut s = session();
        s.obstacles_mut().push(offscreen_soon(130));
        s.tick(T, &[]);
        s.tick(2 * T, &[InputEvent::TogglePause]);
        assert!(!s.paused());
        assert_eq!(s.status(), SessionStatus::Rescue);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut s = GameSession::new(
            SessionConfig {
                difficulty: DIFFICULTIES[2],
                character: CharacterId(3),
                seed: 9,
            },
            0,
        );
        s.obstacles_mut().push(offscreen_soon(800));
        s.tick(T, &[]);

        let snap = s.snapshot();
        assert_eq!(snap.difficulty, "Hard");
        assert_eq!(snap.character, CharacterId(3));
        assert_eq!(snap.player, s.player().rect());
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].rect.x, 794);
        assert_eq!(snap.level, 1);
        assert!(snap.rescue.is_none());
        assert!(!snap.paused);
        assert_eq!(snap.death_cue_frame, None);
    }

    #[test]
    fn test_snapshot_shows_rescue_prompt() {
        let mut s = session();
        s.obstacles_mut().push(offscreen_soon(130));
        s.tick(1000, &[]);
        s.pin_rescue_operands(3, 4);
        s.tick(1016, &[InputEvent::Digit(1)]);

        let rescue = s.snapshot().rescue.unwrap();
        assert_eq!(rescue.prompt, "3 x 4 = ?");
        assert_eq!(rescue.input, "1");
        assert_eq!(rescue.seconds_left, 5);
    }

    #[test]
    fn test_hard_profile_values() {
        let s = GameSession::new(
            SessionConfig {
                difficulty: DifficultyProfile::from_name("Hard").unwrap(),
                ..SessionConfig::default()
            },
            0,
        );
        assert_eq!(s.current_speed(), 8);
        assert_eq!(s.config().difficulty.spawn_interval_ms, 1200);
        assert_eq!(s.level(), 1);
    }
}
