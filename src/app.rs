//! Screen flow for the terminal frontend.
//!
//! Home menu -> (photo picker for Puzzle and Swap) -> game screen. The app
//! owns the grid cursor and turns [`InputAction`]s into engine clicks; the
//! engines never see keys.

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::core::{PhotoCatalog, PhotoId, SimpleRng};
use crate::game::{ActiveGame, GameSnapshot};
use crate::input::GridCursor;
use crate::term::{GameView, Scene, Viewport, PICKER_COLUMNS};
use crate::types::{GameKind, InputAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    PhotoPicker(GameKind),
    Playing(GameKind),
}

/// Everything one frame needs, detached from the app.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    pub cursor: usize,
    pub hint: bool,
    pub screen_game: Option<GameKind>,
    pub snapshot: Option<GameSnapshot>,
}

impl Frame {
    pub fn scene(&self) -> Scene<'_> {
        let cursor = self.cursor;
        match (&self.snapshot, self.screen_game) {
            (Some(GameSnapshot::Memory(snap)), _) => Scene::Memory { snap, cursor },
            (Some(GameSnapshot::Tiles(snap)), _) => Scene::Tiles {
                snap,
                cursor,
                hint: self.hint,
            },
            (Some(GameSnapshot::Reveal(snap)), _) => Scene::Reveal { snap, cursor },
            (None, Some(game)) => Scene::PhotoPicker { game, cursor },
            (None, None) => Scene::Home { cursor },
        }
    }
}

pub struct App {
    photos: PhotoCatalog,
    pairs: usize,
    /// Hands out a fresh seed for every game started.
    seeds: SimpleRng,
    screen: Screen,
    game: Option<ActiveGame>,
    cursor: GridCursor,
    hint: bool,
}

impl App {
    pub fn new(config: &AppConfig, photos: PhotoCatalog) -> Self {
        Self {
            photos,
            pairs: config.pairs,
            seeds: SimpleRng::new(config.seed),
            screen: Screen::Home,
            game: None,
            cursor: GridCursor::list(GameKind::ALL.len()),
            hint: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> Option<&ActiveGame> {
        self.game.as_ref()
    }

    pub fn cursor(&self) -> &GridCursor {
        &self.cursor
    }

    pub fn hint(&self) -> bool {
        self.hint
    }

    pub fn photos(&self) -> &PhotoCatalog {
        &self.photos
    }

    pub fn frame(&self) -> Frame {
        let (screen_game, snapshot) = match self.screen {
            Screen::Home => (None, None),
            Screen::PhotoPicker(game) => (Some(game), None),
            Screen::Playing(game) => (Some(game), self.game.as_ref().map(ActiveGame::snapshot)),
        };
        Frame {
            cursor: self.cursor.index(),
            hint: self.hint,
            screen_game,
            snapshot,
        }
    }

    pub fn handle(&mut self, action: InputAction) -> Result<()> {
        match (self.screen, action) {
            (_, InputAction::Move(direction)) => {
                self.cursor.step(direction);
            }

            (Screen::Home, InputAction::Activate) => {
                if let Some(&kind) = GameKind::ALL.get(self.cursor.index()) {
                    self.open(kind);
                }
            }

            (Screen::PhotoPicker(kind), InputAction::Activate) => {
                self.start(kind, self.cursor.index());
            }
            (Screen::PhotoPicker(_), InputAction::Back) => self.go_home(),

            (Screen::Playing(_), InputAction::Activate) => {
                let slot = self.cursor.index();
                if let Some(game) = self.game.as_mut() {
                    game.click(slot);
                }
            }
            (Screen::Playing(_), InputAction::Choose(index)) => {
                if let Some(game) = self.game.as_mut() {
                    game.choose(usize::from(index));
                }
            }
            (Screen::Playing(kind), InputAction::NewRound) => {
                if let Some(game) = self.game.as_mut() {
                    game.new_round()
                        .with_context(|| format!("new round of {}", kind.as_str()))?;
                }
            }
            (Screen::Playing(kind), InputAction::ToggleHint) if kind.needs_photo() => {
                self.hint = !self.hint;
            }
            (Screen::Playing(kind), InputAction::Back) => {
                if kind.needs_photo() {
                    let photo = self.game.as_ref().and_then(ActiveGame::photo).unwrap_or(0);
                    self.open_picker(kind, photo);
                } else {
                    self.go_home();
                }
            }

            _ => {}
        }
        Ok(())
    }

    /// Mouse click at screen position `(x, y)`.
    pub fn click_at(&mut self, view: &GameView, viewport: Viewport, x: u16, y: u16) -> Result<()> {
        let (choice, slot) = {
            let frame = self.frame();
            let scene = frame.scene();
            let choice = view
                .choices_layout(&scene, &self.photos, viewport)
                .and_then(|grid| grid.slot_at(x, y));
            let slot = view.layout(&scene, &self.photos, viewport).slot_at(x, y);
            (choice, slot)
        };

        if let Some(index) = choice {
            return self.handle(InputAction::Choose(index as u8));
        }
        if let Some(slot) = slot {
            self.cursor.set(slot);
            return self.handle(InputAction::Activate);
        }
        Ok(())
    }

    /// Advance the running game. Returns true if a pending resolution landed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match (self.screen, self.game.as_mut()) {
            (Screen::Playing(_), Some(game)) => game.tick(elapsed_ms),
            _ => false,
        }
    }

    fn open(&mut self, kind: GameKind) {
        if kind.needs_photo() {
            self.open_picker(kind, 0);
        } else {
            self.start(kind, 0);
        }
    }

    fn open_picker(&mut self, kind: GameKind, photo: PhotoId) {
        self.game = None;
        self.hint = false;
        self.screen = Screen::PhotoPicker(kind);
        self.cursor = GridCursor::new(PICKER_COLUMNS, self.photos.len());
        self.cursor.set(photo);
        tracing::debug!(game = kind.as_str(), "photo picker");
    }

    fn go_home(&mut self) {
        let index = match self.screen {
            Screen::PhotoPicker(kind) | Screen::Playing(kind) => {
                GameKind::ALL.iter().position(|&k| k == kind).unwrap_or(0)
            }
            Screen::Home => 0,
        };
        self.game = None;
        self.hint = false;
        self.screen = Screen::Home;
        self.cursor = GridCursor::list(GameKind::ALL.len());
        self.cursor.set(index);
    }

    /// Deal `kind` and switch to its screen. A game the album is too small
    /// for is refused and the current screen stays.
    fn start(&mut self, kind: GameKind, photo: PhotoId) -> bool {
        let seed = self.seeds.next_u32();
        // Small albums get fewer memory pairs.
        let pairs = self.pairs.min(self.photos.len());
        let game = match ActiveGame::start(kind, seed, pairs, photo, &self.photos) {
            Ok(game) => game,
            Err(err) => {
                tracing::warn!(
                    game = kind.as_str(),
                    photos = self.photos.len(),
                    error = %err,
                    "game refused"
                );
                return false;
            }
        };
        let (columns, len) = game.grid();

        tracing::info!(game = kind.as_str(), seed, photo, "game started");
        self.game = Some(game);
        self.hint = false;
        self.screen = Screen::Playing(kind);
        self.cursor = GridCursor::new(columns, len);
        true
    }
}
