//! GameView: maps game snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Photos are drawn as colored art: every photo has a base color and a
//! glyph, and each tile of a cut-up photo is a shade of that color so the
//! finished grid reads as one gradient.

use crate::core::{
    format_clock, MemorySnapshot, PhotoCatalog, PhotoId, RevealSnapshot, RoundStatus, TileSnapshot,
};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GameKind, Rating};

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

/// What to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene<'a> {
    Home {
        cursor: usize,
    },
    PhotoPicker {
        game: GameKind,
        cursor: usize,
    },
    Memory {
        snap: &'a MemorySnapshot,
        cursor: usize,
    },
    Tiles {
        snap: &'a TileSnapshot,
        cursor: usize,
        hint: bool,
    },
    Reveal {
        snap: &'a RevealSnapshot,
        cursor: usize,
    },
}

/// Placement of a grid of equal cells on screen.
///
/// The renderer draws from it and the app hit-tests mouse clicks against it,
/// so both always agree on where slot `n` is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub x: u16,
    pub y: u16,
    pub columns: u16,
    pub len: usize,
    pub cell_w: u16,
    pub cell_h: u16,
    pub gap: u16,
}

impl GridLayout {
    pub fn rows(&self) -> u16 {
        (self.len as u16).div_ceil(self.columns.max(1))
    }

    pub fn width(&self) -> u16 {
        self.columns * self.cell_w + self.columns.saturating_sub(1) * self.gap
    }

    pub fn height(&self) -> u16 {
        let rows = self.rows();
        rows * self.cell_h + rows.saturating_sub(1) * self.gap
    }

    /// Top-left corner of `slot`.
    pub fn cell_origin(&self, slot: usize) -> (u16, u16) {
        let columns = self.columns.max(1) as usize;
        let col = (slot % columns) as u16;
        let row = (slot / columns) as u16;
        (
            self.x + col * (self.cell_w + self.gap),
            self.y + row * (self.cell_h + self.gap),
        )
    }

    /// Slot under screen position `(px, py)`; gaps hit nothing.
    pub fn slot_at(&self, px: u16, py: u16) -> Option<usize> {
        if px < self.x || py < self.y || self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        let (dx, dy) = (px - self.x, py - self.y);
        let (pitch_w, pitch_h) = (self.cell_w + self.gap, self.cell_h + self.gap);
        if dx % pitch_w >= self.cell_w || dy % pitch_h >= self.cell_h {
            return None;
        }
        let (col, row) = (dx / pitch_w, dy / pitch_h);
        if col >= self.columns {
            return None;
        }
        let slot = row as usize * self.columns as usize + col as usize;
        (slot < self.len).then_some(slot)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the photo games.
pub struct GameView {
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

/// Photo chips per row on the picker screen.
pub const PICKER_COLUMNS: usize = 4;

const HEADER_ROWS: u16 = 4;

const BG: Rgb = Rgb::new(24, 24, 32);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(140, 140, 150);
const CORAL: Rgb = Rgb::new(255, 111, 97);
const TEAL: Rgb = Rgb::new(64, 196, 180);
const GOLD: Rgb = Rgb::new(250, 204, 21);
const CARD_BACK: Rgb = Rgb::new(52, 64, 120);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

const PHOTO_COLORS: [Rgb; 12] = [
    Rgb::new(66, 165, 245),
    Rgb::new(236, 64, 122),
    Rgb::new(161, 136, 127),
    Rgb::new(102, 187, 106),
    Rgb::new(171, 71, 188),
    Rgb::new(144, 202, 249),
    Rgb::new(255, 167, 38),
    Rgb::new(239, 83, 80),
    Rgb::new(255, 112, 67),
    Rgb::new(255, 202, 40),
    Rgb::new(141, 110, 99),
    Rgb::new(38, 166, 154),
];

const PHOTO_GLYPHS: [char; 12] = [
    '☀', '♥', '♣', '✿', '☺', '❄', '♠', '◎', '☾', '★', '♦', '▲',
];

/// Base color of a photo.
pub fn photo_color(photo: PhotoId) -> Rgb {
    PHOTO_COLORS[photo % PHOTO_COLORS.len()]
}

/// Glyph drawn on a photo's tiles and cards.
pub fn photo_glyph(photo: PhotoId) -> char {
    PHOTO_GLYPHS[photo % PHOTO_GLYPHS.len()]
}

/// Shade of `photo` for the piece whose home slot is `home` on a grid
/// `columns` wide: lighter toward the top, darker toward the right.
pub fn piece_color(photo: PhotoId, home: usize, columns: usize) -> Rgb {
    let columns = columns.max(1);
    let row = (home / columns).min(5) as u8;
    let col = (home % columns).min(5) as u8;
    photo_color(photo)
        .mix(WHITE, 90u8.saturating_sub(row * 45))
        .mix(BLACK, col * 30)
}

/// Color of a reveal cover block.
pub fn cover_color(palette_index: u8) -> Rgb {
    Rgb::new(70, 80, 140).mix(Rgb::new(150, 90, 160), palette_index.saturating_mul(10))
}

/// "★★☆" for a rating out of three.
pub fn stars_text(rating: Rating) -> String {
    let stars = rating.stars() as usize;
    format!("{}{}", "★".repeat(stars), "☆".repeat(3 - stars))
}

/// Win headline for each game.
pub fn win_headline(game: GameKind) -> &'static str {
    match game {
        GameKind::Memory => "You Won!",
        GameKind::Puzzle => "Solved!",
        GameKind::Swap => "Perfect!",
        GameKind::Reveal => "Correct!",
    }
}

fn text() -> CellStyle {
    CellStyle::new(TEXT, BG)
}

fn muted() -> CellStyle {
    CellStyle::new(MUTED, BG)
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the main grid of `scene` sits: menu entries, photo chips,
    /// cards, tiles or reveal blocks.
    pub fn layout(&self, scene: &Scene, photos: &PhotoCatalog, viewport: Viewport) -> GridLayout {
        let (columns, len, cell_w, cell_h, gap, below) = match *scene {
            Scene::Home { .. } => (1, GameKind::ALL.len(), 44, 2, 1, 2),
            Scene::PhotoPicker { .. } => (PICKER_COLUMNS, photos.len(), 16, 3, 1, 2),
            Scene::Memory { snap, .. } => (snap.columns, snap.cards.len(), 10, 4, 1, 3),
            Scene::Tiles { snap, .. } => (snap.columns, snap.tiles.len(), 10, 5, 1, 3),
            Scene::Reveal { snap, .. } => (snap.columns, snap.removed.len(), 6, 3, 0, 7),
        };
        let mut grid = GridLayout {
            x: 0,
            y: 0,
            columns: columns as u16,
            len,
            cell_w,
            cell_h,
            gap,
        };
        grid.x = viewport.width.saturating_sub(grid.width()) / 2;
        grid.y = match self.anchor_y {
            AnchorY::Top => HEADER_ROWS,
            AnchorY::Center => {
                let free = viewport
                    .height
                    .saturating_sub(HEADER_ROWS + grid.height() + below + 1);
                HEADER_ROWS + free / 2
            }
        };
        grid
    }

    /// Where the reveal guess choices sit, below the blocks.
    pub fn choices_layout(
        &self,
        scene: &Scene,
        photos: &PhotoCatalog,
        viewport: Viewport,
    ) -> Option<GridLayout> {
        let Scene::Reveal { snap, .. } = *scene else {
            return None;
        };
        let board = self.layout(scene, photos, viewport);
        let columns: u16 = if viewport.width >= 76 { 4 } else { 2 };
        let mut grid = GridLayout {
            x: 0,
            y: board.y + board.height() + 1,
            columns,
            len: snap.choices.len(),
            cell_w: 18,
            cell_h: 1,
            gap: 1,
        };
        grid.x = viewport.width.saturating_sub(grid.width()) / 2;
        Some(grid)
    }

    /// Render `scene` into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(
        &self,
        scene: &Scene,
        photos: &PhotoCatalog,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(text().cell(' '));

        let grid = self.layout(scene, photos, viewport);
        match *scene {
            Scene::Home { cursor } => {
                self.draw_title(fb, viewport, "Photo Games", "Pick a game to play");
                self.draw_home(fb, grid, cursor);
                self.draw_footer(fb, viewport, "↑↓ choose  Enter play  q quit");
            }
            Scene::PhotoPicker { game, cursor } => {
                self.draw_title(fb, viewport, game.title(), "Pick a photo");
                self.draw_picker(fb, grid, photos, cursor);
                self.draw_footer(fb, viewport, "arrows choose  Enter play  b back  q quit");
            }
            Scene::Memory { snap, cursor } => {
                self.draw_title(fb, viewport, GameKind::Memory.title(), "");
                self.draw_memory(fb, viewport, grid, snap, photos, cursor);
                self.draw_footer(
                    fb,
                    viewport,
                    "arrows move  Enter flip  n new game  b back  q quit",
                );
            }
            Scene::Tiles { snap, cursor, hint } => {
                let subtitle = photo_label(photos, snap.photo);
                self.draw_title(fb, viewport, snap.status.game.title(), subtitle);
                self.draw_tiles(fb, viewport, grid, snap, cursor, hint);
                let help = match snap.status.game {
                    GameKind::Puzzle => {
                        "arrows move  Enter slide  n shuffle  t hint  b back  q quit"
                    }
                    _ => "arrows move  Enter select  n shuffle  t hint  b back  q quit",
                };
                self.draw_footer(fb, viewport, help);
            }
            Scene::Reveal { snap, cursor } => {
                self.draw_title(fb, viewport, GameKind::Reveal.title(), "");
                self.draw_reveal(fb, viewport, grid, snap, photos, cursor);
                if let Some(choices) = self.choices_layout(scene, photos, viewport) {
                    self.draw_choices(fb, choices, snap, photos);
                    self.draw_reveal_result(fb, viewport, choices, snap);
                }
                self.draw_footer(
                    fb,
                    viewport,
                    "arrows move  Enter remove  1-4 guess  n next  b back",
                );
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene, photos: &PhotoCatalog, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, photos, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, viewport: Viewport, title: &str, subtitle: &str) {
        fb.put_str_centered(0, 0, viewport.width, title, CellStyle::new(CORAL, BG).bold());
        if !subtitle.is_empty() {
            fb.put_str_centered(0, 1, viewport.width, subtitle, muted());
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, viewport: Viewport, help: &str) {
        let y = viewport.height.saturating_sub(1);
        fb.put_str_centered(0, y, viewport.width, help, muted().dim());
    }

    fn draw_home(&self, fb: &mut FrameBuffer, grid: GridLayout, cursor: usize) {
        for (i, game) in GameKind::ALL.iter().enumerate() {
            let (x, y) = grid.cell_origin(i);
            let active = i == cursor;
            let title = if active {
                CellStyle::new(GOLD, BG).bold()
            } else {
                text().bold()
            };
            fb.put_str(x, y, if active { "▶ " } else { "  " }, title);
            fb.put_str(x + 2, y, game.title(), title);
            fb.put_str(x + 2, y + 1, game.description(), muted());
        }
    }

    fn draw_picker(
        &self,
        fb: &mut FrameBuffer,
        grid: GridLayout,
        photos: &PhotoCatalog,
        cursor: usize,
    ) {
        for photo in photos.iter() {
            let (x, y) = grid.cell_origin(photo.id);
            let bg = photo_color(photo.id);
            let style = CellStyle::new(BLACK, bg);
            fb.fill_rect(x, y, grid.cell_w, grid.cell_h, ' ', style);
            fb.put_char(x + grid.cell_w / 2, y, photo_glyph(photo.id), style.bold());
            let label: String = photo.label.chars().take(grid.cell_w as usize - 2).collect();
            fb.put_str_centered(x, y + 1, grid.cell_w, &label, style);
            if photo.id == cursor {
                self.draw_cursor_box(fb, x, y, grid.cell_w, grid.cell_h, bg);
            }
        }
    }

    fn draw_memory(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        grid: GridLayout,
        snap: &MemorySnapshot,
        photos: &PhotoCatalog,
        cursor: usize,
    ) {
        let mut x = self.draw_common_stats(fb, viewport, &snap.status);
        x = put_stat_label(fb, x, "Pairs ");
        x = fb.put_u32(x, 2, snap.matched_pairs as u32, text().bold());
        x = fb.put_str(x, 2, "/", text());
        fb.put_u32(x, 2, snap.total_pairs as u32, text().bold());

        for (slot, card) in snap.cards.iter().enumerate() {
            let (cx, cy) = grid.cell_origin(slot);
            let (w, h) = (grid.cell_w, grid.cell_h);
            if card.face_up || card.matched {
                let bg = photo_color(card.photo);
                let style = if card.matched {
                    CellStyle::new(BLACK, bg.mix(BG, 110))
                } else {
                    CellStyle::new(BLACK, bg)
                };
                fb.fill_rect(cx, cy, w, h, ' ', style);
                fb.put_char(cx + w / 2, cy + 1, photo_glyph(card.photo), style.bold());
                let label: String = photo_label(photos, card.photo)
                    .chars()
                    .take(w as usize - 2)
                    .collect();
                fb.put_str_centered(cx, cy + 2, w, &label, style);
                if card.matched {
                    fb.put_char(cx + w - 1, cy, '✓', CellStyle::new(WHITE, style.bg).bold());
                }
            } else {
                let style = CellStyle::new(CARD_BACK.mix(WHITE, 60), CARD_BACK);
                fb.fill_rect(cx, cy, w, h, '░', style);
                fb.put_char(cx + w / 2, cy + h / 2, '?', style.bold());
            }
            if slot == cursor {
                self.draw_cursor_box(fb, cx, cy, w, h, CARD_BACK);
            }
        }

        // One dot per pair, filled as pairs are matched.
        let dots_y = grid.y + grid.height() + 1;
        let dots_w = (snap.total_pairs as u16) * 2;
        let mut dx = viewport.width.saturating_sub(dots_w) / 2;
        for i in 0..snap.total_pairs {
            let (ch, fg) = if i < snap.matched_pairs {
                ('●', TEAL)
            } else {
                ('○', MUTED)
            };
            fb.put_char(dx, dots_y, ch, CellStyle::new(fg, BG));
            dx += 2;
        }

        if snap.status.won {
            let lines = [
                format!("Completed in {} moves", snap.status.moves),
                format!("Time: {}", format_clock(snap.status.elapsed_secs)),
            ];
            self.draw_win_overlay(fb, grid, &snap.status, &lines, "n play again   b home");
        }
    }

    fn draw_tiles(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        grid: GridLayout,
        snap: &TileSnapshot,
        cursor: usize,
        hint: bool,
    ) {
        let mut x = self.draw_common_stats(fb, viewport, &snap.status);
        x = put_stat_label(fb, x, "Correct ");
        x = fb.put_u32(x, 2, snap.correct as u32, text().bold());
        x = fb.put_str(x, 2, "/", text());
        fb.put_u32(x, 2, snap.total as u32, text().bold());

        for (slot, &home) in snap.tiles.iter().enumerate() {
            let (cx, cy) = grid.cell_origin(slot);
            let (w, h) = (grid.cell_w, grid.cell_h);
            if snap.blank == Some(home) {
                fb.fill_rect(cx, cy, w, h, ' ', CellStyle::new(MUTED, BG.mix(BLACK, 120)));
            } else {
                let bg = piece_color(snap.photo, home as usize, snap.columns);
                let style = CellStyle::new(BLACK, bg);
                fb.fill_rect(cx, cy, w, h, ' ', style);
                fb.put_char(cx + w / 2, cy + h / 2, photo_glyph(snap.photo), style.bold());
                fb.put_u32(cx + 1, cy, u32::from(home) + 1, style.dim());
                // Only Swap marks pieces already home.
                if snap.blank.is_none() && home as usize == slot {
                    fb.put_char(cx + w - 2, cy, '✓', CellStyle::new(WHITE, bg).bold());
                }
            }
            if snap.selected == Some(slot) {
                let style = CellStyle::new(CORAL, fb_bg(fb, cx + 1, cy + 1)).bold();
                fb.draw_box(cx, cy, w, h, style);
            }
            if slot == cursor {
                self.draw_cursor_box(fb, cx, cy, w, h, BG);
            }
        }

        // Progress toward the finished photo.
        let bar_y = grid.y + grid.height() + 1;
        let filled = if snap.total == 0 {
            0
        } else {
            (grid.width() as usize * snap.correct / snap.total) as u16
        };
        fb.fill_rect(grid.x, bar_y, filled, 1, '█', CellStyle::new(TEAL, BG));
        fb.fill_rect(grid.x + filled, bar_y, grid.width() - filled, 1, '░', muted());

        if hint {
            self.draw_reference(fb, viewport, grid, snap);
        }

        if snap.status.won {
            let unit = if snap.status.game == GameKind::Puzzle { "moves" } else { "swaps" };
            let lines = [
                format!("Completed in {} {}", snap.status.moves, unit),
                format!("Time: {}", format_clock(snap.status.elapsed_secs)),
            ];
            self.draw_win_overlay(fb, grid, &snap.status, &lines, "n play again   b new photo");
        }
    }

    /// Small picture of the finished grid beside the board.
    fn draw_reference(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        grid: GridLayout,
        snap: &TileSnapshot,
    ) {
        let columns = snap.columns.max(1) as u16;
        let x = grid.x + grid.width() + 3;
        if x + columns * 4 > viewport.width {
            return;
        }
        fb.put_str(x, grid.y, "Goal", text().bold());
        for home in 0..snap.total {
            let col = home as u16 % columns;
            let row = home as u16 / columns;
            let (px, py) = (x + col * 4, grid.y + 1 + row * 2);
            let style = CellStyle::new(BLACK, piece_color(snap.photo, home, snap.columns));
            if snap.blank.map(usize::from) == Some(home) {
                fb.fill_rect(px, py, 4, 2, ' ', CellStyle::new(MUTED, BG.mix(BLACK, 120)));
            } else {
                fb.fill_rect(px, py, 4, 2, ' ', style);
                fb.put_u32(px + 1, py, home as u32 + 1, style);
            }
        }
    }

    fn draw_reveal(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        grid: GridLayout,
        snap: &RevealSnapshot,
        photos: &PhotoCatalog,
        cursor: usize,
    ) {
        let label = CellStyle::new(MUTED, BG);
        let value = text().bold();
        let stats = [
            ("Round ", snap.status.round),
            ("Revealed ", snap.revealed_percent),
            ("Blocks ", snap.remaining_blocks as u32),
            ("Total ", snap.total_score),
        ];
        let width: u16 = stats
            .iter()
            .map(|(l, v)| l.len() as u16 + digits(*v) + 3)
            .sum();
        let mut x = viewport.width.saturating_sub(width) / 2;
        for (l, v) in stats {
            x = fb.put_str(x, 2, l, label);
            x = fb.put_u32(x, 2, v, value);
            if l == "Revealed " {
                x = fb.put_str(x, 2, "%", value);
            }
            x += 3;
        }

        // Once guessed, the whole photo is shown.
        let revealed = snap.guess.is_some();
        for (block, &removed) in snap.removed.iter().enumerate() {
            let (cx, cy) = grid.cell_origin(block);
            let (w, h) = (grid.cell_w, grid.cell_h);
            if removed || revealed {
                let bg = piece_color(snap.target, block, snap.columns);
                let style = CellStyle::new(BLACK, bg);
                fb.fill_rect(cx, cy, w, h, ' ', style);
                fb.put_char(cx + w / 2, cy + h / 2, photo_glyph(snap.target), style.bold());
            } else {
                let index = snap.palette.get(block).copied().unwrap_or_default();
                let bg = cover_color(index);
                fb.fill_rect(cx, cy, w, h, '▒', CellStyle::new(bg.mix(WHITE, 40), bg));
            }
            if block == cursor && !snap.status.over {
                let style = CellStyle::new(GOLD, fb_bg(fb, cx, cy + h / 2)).bold();
                fb.put_char(cx, cy + h / 2, '▶', style);
                fb.put_char(cx + w - 1, cy + h / 2, '◀', style);
            }
        }

        if revealed {
            let name = photo_label(photos, snap.target);
            let y = grid.y.saturating_sub(1);
            fb.put_str_centered(grid.x, y, grid.width(), name, text().bold());
        }
    }

    fn draw_choices(
        &self,
        fb: &mut FrameBuffer,
        grid: GridLayout,
        snap: &RevealSnapshot,
        photos: &PhotoCatalog,
    ) {
        for (i, &photo) in snap.choices.iter().enumerate() {
            let (x, y) = grid.cell_origin(i);
            let mut style = CellStyle::new(TEXT, BG.mix(WHITE, 20));
            if let Some(guess) = snap.guess {
                if photo == snap.target {
                    style = CellStyle::new(BLACK, TEAL);
                } else if photo == guess.photo {
                    style = CellStyle::new(BLACK, CORAL);
                } else {
                    style = style.dim();
                }
            }
            fb.fill_rect(x, y, grid.cell_w, 1, ' ', style);
            let mut cx = fb.put_u32(x + 1, y, i as u32 + 1, style.bold());
            cx = fb.put_str(cx, y, " ", style);
            fb.put_char(cx, y, photo_glyph(photo), CellStyle::new(photo_color(photo), style.bg));
            let label: String = photo_label(photos, photo)
                .chars()
                .take(grid.cell_w as usize - 6)
                .collect();
            fb.put_str(cx + 2, y, &label, style);
        }
    }

    fn draw_reveal_result(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        choices: GridLayout,
        snap: &RevealSnapshot,
    ) {
        let y = choices.y + choices.height() + 1;
        let Some(guess) = snap.guess else {
            fb.put_str_centered(
                0,
                y,
                viewport.width,
                "Remove more blocks for a better look, or guess now for more points!",
                muted(),
            );
            return;
        };
        if guess.correct {
            fb.put_str_centered(0, y, viewport.width, "Correct!", CellStyle::new(TEAL, BG).bold());
            let detail = format!(
                "+{} points ({} blocks remaining)",
                guess.score, guess.remaining_blocks
            );
            fb.put_str_centered(0, y + 1, viewport.width, &detail, text());
        } else {
            let style = CellStyle::new(CORAL, BG).bold();
            fb.put_str_centered(0, y, viewport.width, "Not quite!", style);
            fb.put_str_centered(0, y + 1, viewport.width, "The photo was revealed above", text());
        }
        fb.put_str_centered(0, y + 2, viewport.width, "n next round", muted());
    }

    /// "Moves N   Time m:ss   " centered on the stats row. Returns the
    /// column where game-specific stats continue.
    fn draw_common_stats(
        &self,
        fb: &mut FrameBuffer,
        viewport: Viewport,
        status: &RoundStatus,
    ) -> u16 {
        let clock = format_clock(status.elapsed_secs);
        let width = 6 + digits(status.moves) + 3 + 5 + clock.len() as u16 + 3 + 14;
        let mut x = viewport.width.saturating_sub(width) / 2;
        x = put_stat_label(fb, x, "Moves ");
        x = fb.put_u32(x, 2, status.moves, text().bold());
        x = put_stat_label(fb, x + 3, "Time ");
        let clock_style = if status.clock_running {
            text().bold()
        } else {
            text()
        };
        x = fb.put_str(x, 2, &clock, clock_style);
        x + 3
    }

    fn draw_win_overlay(
        &self,
        fb: &mut FrameBuffer,
        grid: GridLayout,
        status: &RoundStatus,
        lines: &[String],
        help: &str,
    ) {
        let w: u16 = 30;
        let h = 5 + lines.len() as u16 + 1;
        let x = grid.x + grid.width().saturating_sub(w) / 2;
        let y = grid.y + grid.height().saturating_sub(h) / 2;
        let panel = CellStyle::new(TEXT, Rgb::new(250, 248, 240).mix(BG, 200));
        fb.fill_rect(x, y, w, h, ' ', panel);
        fb.draw_box(x, y, w, h, CellStyle::new(GOLD, panel.bg));

        let mut row = y + 1;
        if let Some(rating) = status.rating {
            let style = CellStyle::new(GOLD, panel.bg).bold();
            fb.put_str_centered(x, row, w, &stars_text(rating), style);
        }
        row += 1;
        let style = CellStyle::new(CORAL, panel.bg).bold();
        fb.put_str_centered(x, row, w, win_headline(status.game), style);
        row += 2;
        for line in lines {
            fb.put_str_centered(x, row, w, line, panel);
            row += 1;
        }
        fb.put_str_centered(x, row, w, help, CellStyle::new(MUTED, panel.bg));
    }

    fn draw_cursor_box(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, bg: Rgb) {
        fb.draw_box(x, y, w, h, CellStyle::new(GOLD, bg).bold());
    }
}

fn put_stat_label(fb: &mut FrameBuffer, x: u16, label: &str) -> u16 {
    fb.put_str(x, 2, label, muted())
}

fn photo_label(photos: &PhotoCatalog, photo: PhotoId) -> &str {
    photos.get(photo).map(|p| p.label.as_str()).unwrap_or("?")
}

fn fb_bg(fb: &FrameBuffer, x: u16, y: u16) -> Rgb {
    fb.get(x, y).map(|c| c.style.bg).unwrap_or(BG)
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
