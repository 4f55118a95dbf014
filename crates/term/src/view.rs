//! SceneView: maps menu and session snapshots into a terminal framebuffer.
//!
//! Pure (no I/O). The world is projected from its 1200x600 coordinate space onto
//! whatever viewport the terminal offers; row 0 is reserved for the HUD.

use std::f32::consts::PI;

use crate::core::{MenuSnapshot, Screen, SessionSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    CharacterId, MainMenuOption, ObstacleKind, Rect, CHARACTERS, CHARACTER_GRID_COLUMNS,
    DIFFICULTIES, DIFFICULTY_BACK_LABEL, GROUND_Y, INSTRUCTIONS, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// How a character is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub glyph: char,
    pub color: Rgb,
}

/// Visual for a character id. Ids outside the catalog wrap around.
pub fn character_sprite(id: CharacterId) -> Sprite {
    match id.index() % CHARACTERS.len() {
        0 => Sprite {
            glyph: '@',
            color: Rgb::new(90, 200, 90),
        },
        1 => Sprite {
            glyph: '&',
            color: Rgb::new(80, 150, 240),
        },
        2 => Sprite {
            glyph: '%',
            color: Rgb::new(240, 150, 60),
        },
        _ => Sprite {
            glyph: '$',
            color: Rgb::new(190, 110, 230),
        },
    }
}

fn obstacle_sprite(kind: ObstacleKind) -> Sprite {
    match kind {
        ObstacleKind::Ground => Sprite {
            glyph: '#',
            color: Rgb::new(60, 170, 60),
        },
        ObstacleKind::Flying => Sprite {
            glyph: 'v',
            color: Rgb::new(170, 170, 180),
        },
    }
}

/// Border brightness of the death cue at `frame`, in `0..=200`.
pub fn death_cue_intensity(frame: u32) -> u8 {
    ((frame as f32 / 10.0 * PI).sin().abs() * 200.0) as u8
}

const BLACK: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BLACK);
const TITLE: CellStyle = CellStyle::new(Rgb::new(255, 220, 80), BLACK).bold();
const HIGHLIGHT: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold();
const HINT: CellStyle = CellStyle::new(Rgb::new(130, 130, 140), BLACK);
const GROUND: CellStyle = CellStyle::new(Rgb::new(150, 120, 80), BLACK);

/// Character-cell width of one entry in the character grid.
const GRID_CELL_W: u16 = 12;
const GRID_CELL_H: u16 = 4;

#[derive(Debug, Default, Clone, Copy)]
pub struct SceneView;

impl SceneView {
    pub fn new() -> Self {
        Self
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// `session` is only consulted on the in-session screen.
    pub fn render_into(
        &self,
        menu: &MenuSnapshot,
        session: Option<&SessionSnapshot>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        match menu.screen {
            Screen::MainMenu => self.draw_main_menu(menu, fb),
            Screen::Instructions => self.draw_instructions(fb),
            Screen::DifficultySelect => self.draw_difficulty(menu, fb),
            Screen::CharacterSelect => self.draw_characters(menu, fb),
            Screen::GameOver => self.draw_game_over(menu, fb),
            Screen::InSession => {
                if let Some(snap) = session {
                    self.draw_session(snap, fb);
                }
            }
        }
    }

    pub fn render(
        &self,
        menu: &MenuSnapshot,
        session: Option<&SessionSnapshot>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, session, viewport, &mut fb);
        fb
    }

    fn draw_main_menu(&self, menu: &MenuSnapshot, fb: &mut FrameBuffer) {
        let labels = MainMenuOption::ALL.map(|o| o.label());
        let top = fb.height().saturating_sub(labels.len() as u16 + 6) / 2;
        fb.put_str_centered(top, "TUI RUNNER", TITLE);
        draw_list(fb, top + 2, &labels, menu.selected);

        let footer = format!(
            "Difficulty: {}   Character: {}",
            menu.difficulty.name,
            menu.character.name()
        );
        fb.put_str_centered(top + labels.len() as u16 + 3, &footer, HINT);
    }

    fn draw_instructions(&self, fb: &mut FrameBuffer) {
        let top = fb.height().saturating_sub(INSTRUCTIONS.len() as u16 + 2) / 2;
        fb.put_str_centered(top, "Instructions", TITLE);
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            fb.put_str_centered(top + 2 + i as u16, line, TEXT);
        }
    }

    fn draw_difficulty(&self, menu: &MenuSnapshot, fb: &mut FrameBuffer) {
        let mut labels = [""; DIFFICULTIES.len() + 1];
        for (slot, profile) in labels.iter_mut().zip(DIFFICULTIES.iter()) {
            *slot = profile.name;
        }
        labels[DIFFICULTIES.len()] = DIFFICULTY_BACK_LABEL;

        let top = fb.height().saturating_sub(labels.len() as u16 + 4) / 2;
        fb.put_str_centered(top, "Choose Difficulty", TITLE);
        draw_list(fb, top + 2, &labels, menu.selected);

        let current = format!("Current: {}", menu.difficulty.name);
        fb.put_str_centered(top + labels.len() as u16 + 3, &current, HINT);
    }

    fn draw_characters(&self, menu: &MenuSnapshot, fb: &mut FrameBuffer) {
        let cols = CHARACTER_GRID_COLUMNS as u16;
        let rows = CHARACTERS.len().div_ceil(CHARACTER_GRID_COLUMNS) as u16;
        let grid_w = cols * GRID_CELL_W;
        let grid_h = rows * GRID_CELL_H;

        let top = fb.height().saturating_sub(grid_h + 4) / 2;
        let left = fb.width().saturating_sub(grid_w) / 2;
        fb.put_str_centered(top, "Choose Character", TITLE);

        for (i, name) in CHARACTERS.iter().enumerate() {
            let col = (i % CHARACTER_GRID_COLUMNS) as u16;
            let row = (i / CHARACTER_GRID_COLUMNS) as u16;
            let x = left + col * GRID_CELL_W;
            let y = top + 2 + row * GRID_CELL_H;

            let sprite = character_sprite(CharacterId(i));
            let frame = if i == menu.selected {
                CellStyle::new(Rgb::new(255, 220, 80), BLACK).bold()
            } else {
                HINT
            };
            fb.stroke_rect(x, y, GRID_CELL_W - 1, GRID_CELL_H, frame);
            fb.put_char(
                x + (GRID_CELL_W - 1) / 2,
                y + 1,
                sprite.glyph,
                CellStyle::new(sprite.color, BLACK).bold(),
            );
            fb.put_str(x + 2, y + 2, name, TEXT);
        }

        let current = format!("Current: {}", menu.character.name());
        fb.put_str_centered(top + 3 + grid_h, &current, HINT);
    }

    fn draw_game_over(&self, menu: &MenuSnapshot, fb: &mut FrameBuffer) {
        let mid = fb.height() / 2;
        fb.put_str_centered(mid.saturating_sub(2), "Game Over!", TITLE);

        let score = format!("Score: {}", menu.last_score);
        fb.put_str_centered(mid, &score, HIGHLIGHT);
        fb.put_str_centered(
            mid + 2,
            "Enter: play again   Esc: menu   Q: quit",
            HINT,
        );
    }

    fn draw_session(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        let area = WorldArea::from_fb(fb);

        // Ground line.
        let ground_row = area.row(GROUND_Y);
        for x in 0..fb.width() {
            fb.put_char(x, ground_row, '=', GROUND);
        }

        for obstacle in &snap.obstacles {
            let sprite = obstacle_sprite(obstacle.kind);
            area.fill(fb, obstacle.rect, sprite);
        }
        area.fill(fb, snap.player, character_sprite(snap.character));

        self.draw_hud(snap, fb);

        if snap.paused {
            fb.put_str_centered(fb.height() / 2, "Paused - Press P", HIGHLIGHT);
        }

        if let Some(rescue) = &snap.rescue {
            fb.restyle(|mut s| {
                s.dim = true;
                s
            });

            let w = 30.min(fb.width());
            let h = 7.min(fb.height());
            let x = fb.width().saturating_sub(w) / 2;
            let y = fb.height().saturating_sub(h) / 2;
            fb.fill_rect(x, y, w, h, ' ', TEXT);
            fb.stroke_rect(x, y, w, h, TITLE);

            fb.put_str_centered(y + 1, "Rescue!", TITLE);
            fb.put_str_centered(y + 2, &rescue.prompt, HIGHLIGHT);
            let input = format!("> {}_", rescue.input);
            fb.put_str_centered(y + 3, &input, TEXT);
            let time = format!("Time: {}", rescue.seconds_left);
            fb.put_str_centered(y + 5, &time, HINT);
        }

        if let Some(frame) = snap.death_cue_frame {
            let pulse = Rgb::new(death_cue_intensity(frame), 0, 0);
            let style = CellStyle::new(pulse, BLACK).bold();
            fb.stroke_rect(0, 0, fb.width(), fb.height(), style);
        }
    }

    fn draw_hud(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        fb.put_str(1, 0, "Score: ", TEXT);
        fb.put_u32(8, 0, snap.score, HIGHLIGHT);

        let level = format!("Level: {}", snap.level);
        fb.put_str_centered(0, &level, TEXT);

        let difficulty = format!("Difficulty: {}", snap.difficulty);
        let x = fb
            .width()
            .saturating_sub(difficulty.chars().count() as u16 + 1);
        fb.put_str(x, 0, &difficulty, TEXT);
    }
}

/// Vertical list with a `> ` marker on the selected entry.
fn draw_list(fb: &mut FrameBuffer, top: u16, labels: &[&str], selected: usize) {
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 2;
    let x = fb.width().saturating_sub(width) / 2;
    for (i, label) in labels.iter().enumerate() {
        let y = top + i as u16;
        if i == selected {
            fb.put_str(x, y, "> ", HIGHLIGHT);
            fb.put_str(x + 2, y, label, HIGHLIGHT);
        } else {
            fb.put_str(x + 2, y, label, TEXT);
        }
    }
}

/// Projection of world coordinates onto the rows below the HUD.
#[derive(Debug, Clone, Copy)]
struct WorldArea {
    width: i64,
    height: i64,
    top: i64,
}

impl WorldArea {
    fn from_fb(fb: &FrameBuffer) -> Self {
        Self {
            width: fb.width() as i64,
            height: fb.height().saturating_sub(1) as i64,
            top: 1,
        }
    }

    fn col(&self, x: i32) -> i64 {
        (x as i64 * self.width).div_euclid(SCREEN_WIDTH as i64)
    }

    fn row(&self, y: i32) -> u16 {
        let r = self.top + (y as i64 * self.height).div_euclid(SCREEN_HEIGHT as i64);
        r.clamp(0, (self.top + self.height - 1).max(0)) as u16
    }

    /// Fill the cells covered by `rect`, at least one cell in each direction.
    fn fill(&self, fb: &mut FrameBuffer, rect: Rect, sprite: Sprite) {
        let sw = SCREEN_WIDTH as i64;
        let sh = SCREEN_HEIGHT as i64;

        let x0 = self.col(rect.x);
        let x1 = (rect.right() as i64 * self.width + sw - 1).div_euclid(sw).max(x0 + 1);
        let y0 = self.top + (rect.y as i64 * self.height).div_euclid(sh);
        let y1 = (self.top + (rect.bottom() as i64 * self.height + sh - 1).div_euclid(sh))
            .max(y0 + 1);

        let x0 = x0.max(0);
        let x1 = x1.min(self.width);
        let y0 = y0.max(self.top);
        let y1 = y1.min(self.top + self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let style = CellStyle::new(sprite.color, BLACK).bold();
        fb.fill_rect(
            x0 as u16,
            y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
            sprite.glyph,
            style,
        );
    }
}
