use crate::types::{CharacterId, ObstacleKind, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObstacleSnapshot {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RescueSnapshot {
    pub prompt: String,
    pub input: String,
    pub seconds_left: u64,
}

/// Everything the renderer needs to draw one frame of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub player: Rect,
    pub character: CharacterId,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: u32,
    pub level: u32,
    pub difficulty: &'static str,
    pub paused: bool,
    pub rescue: Option<RescueSnapshot>,
    /// Frame index of the terminal death cue, counting from 0
    pub death_cue_frame: Option<u32>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            player: Rect::default(),
            character: CharacterId::default(),
            obstacles: Vec::new(),
            score: 0,
            level: 1,
            difficulty: "",
            paused: false,
            rescue: None,
            death_cue_frame: None,
        }
    }
}
