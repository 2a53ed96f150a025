//! Headless scripted play: `photo-games play <game> [options]`.
//!
//! Plays a fixed click sequence against one game and returns its final
//! snapshot, so a deal and its outcome can be reproduced from the command
//! line and diffed as JSON.

use anyhow::{anyhow, Context, Result};

use crate::core::{Arrangement, Identity, MemoryGame, PhotoCatalog, PhotoId, PuzzleGame, SwapGame};
use crate::game::{ActiveGame, GameSnapshot};
use crate::types::{GameKind, DEFAULT_PAIRS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayArgs {
    pub game: GameKind,
    pub seed: u32,
    pub pairs: usize,
    pub photo: PhotoId,
    /// Hand-built starting arrangement instead of a shuffled deal.
    pub cells: Option<Vec<Identity>>,
    pub clicks: Vec<usize>,
    /// Reveal guess, by photo id.
    pub guess: Option<PhotoId>,
    /// Land each memory comparison before the next click.
    pub settle: bool,
}

impl PlayArgs {
    pub fn new(game: GameKind) -> Self {
        Self {
            game,
            seed: 1,
            pairs: DEFAULT_PAIRS,
            photo: 0,
            cells: None,
            clicks: Vec::new(),
            guess: None,
            settle: false,
        }
    }
}

/// Parse `play <game> ...`. Returns `Ok(None)` for any other subcommand.
pub fn parse_play_args(args: &[String]) -> Result<Option<PlayArgs>> {
    if args.is_empty() || args[0] != "play" {
        return Ok(None);
    }

    let name = args
        .get(1)
        .ok_or_else(|| anyhow!("play: missing game (memory, puzzle, swap, reveal)"))?;
    let game = GameKind::from_str(name).ok_or_else(|| anyhow!("play: unknown game: {}", name))?;
    let mut play = PlayArgs::new(game);

    let mut i = 2usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--seed" => play.seed = parse_number(flag, flag_value(args, &mut i, flag)?)?,
            "--pairs" => play.pairs = parse_number(flag, flag_value(args, &mut i, flag)?)?,
            "--photo" => play.photo = parse_number(flag, flag_value(args, &mut i, flag)?)?,
            "--cells" => play.cells = Some(parse_list(flag, flag_value(args, &mut i, flag)?)?),
            "--clicks" => play.clicks = parse_list(flag, flag_value(args, &mut i, flag)?)?,
            "--guess" => play.guess = Some(parse_number(flag, flag_value(args, &mut i, flag)?)?),
            "--settle" => play.settle = true,
            other => return Err(anyhow!("play: unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(Some(play))
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("play: missing value for {}", flag))
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| anyhow!("play: invalid {} value: {}", flag, value))
}

fn parse_list<T: std::str::FromStr>(flag: &str, value: &str) -> Result<Vec<T>> {
    value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| parse_number(flag, part))
        .collect()
}

/// Play the script and return the final snapshot.
pub fn run(play: &PlayArgs, photos: &PhotoCatalog) -> Result<GameSnapshot> {
    let mut game = match &play.cells {
        Some(cells) => from_cells(play, cells, photos)?,
        None => ActiveGame::start(play.game, play.seed, play.pairs, play.photo, photos)
            .with_context(|| format!("play: deal {}", play.game.as_str()))?,
    };

    for &slot in &play.clicks {
        let step = game.click(slot);
        tracing::debug!(slot, ?step, "scripted click");
        if play.settle {
            game.settle_now();
        }
    }

    if let Some(photo) = play.guess {
        if game.guess(photo).is_none() {
            return Err(anyhow!("play: guess {} was not accepted", photo));
        }
    }

    Ok(game.snapshot())
}

fn from_cells(play: &PlayArgs, cells: &[Identity], photos: &PhotoCatalog) -> Result<ActiveGame> {
    let context = || format!("play: starting arrangement for {}", play.game.as_str());
    let game = match play.game {
        GameKind::Memory => {
            let deck = Arrangement::from_deck(cells.to_vec()).with_context(context)?;
            let pairs = deck.len() / 2;
            photos.require(pairs).with_context(context)?;
            let game = MemoryGame::with_deck(deck, (0..pairs).collect()).with_context(context)?;
            ActiveGame::Memory(game)
        }
        GameKind::Puzzle => {
            photos.check(play.photo)?;
            let grid = Arrangement::from_vec(cells.to_vec()).with_context(context)?;
            let game = PuzzleGame::with_arrangement(grid, play.photo).with_context(context)?;
            ActiveGame::Puzzle(game)
        }
        GameKind::Swap => {
            photos.check(play.photo)?;
            let grid = Arrangement::from_vec(cells.to_vec()).with_context(context)?;
            ActiveGame::Swap(SwapGame::with_arrangement(grid, play.photo).with_context(context)?)
        }
        GameKind::Reveal => return Err(anyhow!("play: reveal does not take --cells")),
    };
    Ok(game)
}
