//! Integration tests for the four game engines, through the facade crate.

use photo_games::core::{
    Arrangement, MemoryGame, PuzzleGame, RevealGame, SimpleRng, Step, SwapGame,
};
use photo_games::types::{
    Rating, BLANK_TILE, GRID_TILES, MATCH_SETTLE_MS, MISMATCH_SETTLE_MS, REVEAL_BLOCKS,
};

fn grid(cells: &[u8]) -> Arrangement {
    Arrangement::from_vec(cells.to_vec()).unwrap()
}

#[test]
fn test_swap_one_move_from_solved() {
    let mut game = SwapGame::with_arrangement(grid(&[1, 0, 2, 3, 4, 5, 6, 7, 8]), 0).unwrap();
    assert!(!game.engine().clock().has_started());

    assert_eq!(game.click(0), Step::Selected);
    assert_eq!(game.snapshot().selected, Some(0));
    assert_eq!(game.click(1), Step::Committed);

    let snap = game.snapshot();
    assert!(snap.status.won);
    assert_eq!(snap.status.moves, 1);
    assert_eq!(snap.status.rating, Some(Rating::Three));
    assert_eq!(snap.correct, GRID_TILES);
    assert!(!snap.status.clock_running);

    // Clicks after the win do nothing.
    assert_eq!(game.click(2), Step::Ignored);
    assert_eq!(game.engine().moves(), 1);
}

#[test]
fn test_swap_same_tile_twice_deselects() {
    let mut game = SwapGame::with_arrangement(grid(&[1, 0, 2, 3, 4, 5, 6, 7, 8]), 0).unwrap();
    game.click(4);
    game.click(4);
    let snap = game.snapshot();
    assert_eq!(snap.selected, None);
    assert_eq!(snap.status.moves, 0);
}

#[test]
fn test_slide_adjacent_tile_into_gap_wins() {
    let mut game = PuzzleGame::with_arrangement(grid(&[0, 1, 2, 3, 4, 5, 6, 8, 7]), 0).unwrap();
    assert_eq!(game.snapshot().blank_slot, Some(7));

    // Not beside the gap.
    assert_eq!(game.click(0), Step::Ignored);
    assert_eq!(game.engine().moves(), 0);
    assert!(!game.engine().clock().has_started());

    assert_eq!(game.click(8), Step::Committed);
    let snap = game.snapshot();
    assert!(snap.status.won);
    assert_eq!(snap.status.moves, 1);
    assert_eq!(snap.blank_slot, Some(8));
    assert_eq!(snap.blank, Some(BLANK_TILE));
}

#[test]
fn test_slide_clicking_the_gap_is_ignored() {
    let mut game = PuzzleGame::with_arrangement(grid(&[0, 1, 2, 3, 4, 5, 6, 8, 7]), 0).unwrap();
    assert_eq!(game.click(7), Step::Ignored);
    assert_eq!(game.engine().moves(), 0);
}

#[test]
fn test_slide_deal_is_solvable_and_unsolved() {
    for seed in 1..50 {
        let game = PuzzleGame::new(seed, 0).unwrap();
        let cells = game.engine().cells();
        assert!(!cells.is_solved(), "seed {seed} dealt a solved grid");
        assert!(cells.has_even_parity(BLANK_TILE), "seed {seed} dealt an unsolvable grid");
    }
}

#[test]
fn test_shuffled_never_returns_identity() {
    let mut rng = SimpleRng::new(7);
    for _ in 0..200 {
        assert!(!Arrangement::shuffled(GRID_TILES, &mut rng).unwrap().is_solved());
    }
}

#[test]
fn test_swap_deal_is_reproducible() {
    let a = SwapGame::new(42, 3).unwrap();
    let b = SwapGame::new(42, 3).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_memory_match_stays_face_up() {
    let deck = Arrangement::from_deck(vec![0, 1, 0, 1]).unwrap();
    let mut game = MemoryGame::with_deck(deck, vec![5, 9]).unwrap();

    assert_eq!(game.click(0), Step::Selected);
    assert_eq!(game.click(2), Step::Deferred(MATCH_SETTLE_MS));
    assert!(game.engine().locked());
    // Locked while the pair settles.
    assert_eq!(game.click(1), Step::Ignored);

    assert!(game.tick(MATCH_SETTLE_MS));
    let snap = game.snapshot();
    assert_eq!(snap.matched_pairs, 1);
    assert!(snap.cards[0].matched && snap.cards[2].matched);
    assert_eq!(snap.cards[0].photo, 5);
    assert_eq!(snap.status.moves, 1);
}

#[test]
fn test_memory_mismatch_flips_back_after_delay() {
    let deck = Arrangement::from_deck(vec![0, 1, 0, 1]).unwrap();
    let mut game = MemoryGame::with_deck(deck, vec![0, 1]).unwrap();

    game.click(0);
    assert_eq!(game.click(1), Step::Deferred(MISMATCH_SETTLE_MS));
    assert!(!game.tick(MISMATCH_SETTLE_MS - 1));
    assert!(game.snapshot().cards[1].face_up);

    assert!(game.tick(1));
    let snap = game.snapshot();
    assert!(!snap.cards[0].face_up);
    assert!(!snap.cards[1].face_up);
    assert_eq!(snap.matched_pairs, 0);
    assert!(snap.status.playable());
}

#[test]
fn test_memory_full_game_rating() {
    let deck = Arrangement::from_deck(vec![0, 1, 0, 1]).unwrap();
    let mut game = MemoryGame::with_deck(deck, vec![0, 1]).unwrap();

    for (a, b) in [(0, 2), (1, 3)] {
        game.click(a);
        game.click(b);
        game.tick(MATCH_SETTLE_MS);
    }

    let snap = game.snapshot();
    assert!(snap.status.won);
    assert_eq!(snap.status.moves, 2);
    assert_eq!(snap.status.rating, Some(Rating::Three));
}

#[test]
fn test_memory_new_game_cancels_pending_comparison() {
    let mut game = MemoryGame::new(3, 4, 12).unwrap();
    let deck = game.engine().cells().as_slice().to_vec();
    let second = (1..deck.len()).find(|&i| deck[i] != deck[0]).unwrap();

    game.click(0);
    game.click(second);
    let token = game.pending_token().unwrap();

    game.new_game().unwrap();
    assert!(!game.resolve(token));
    assert!(!game.engine().locked());
    assert_eq!(game.engine().moves(), 0);
}

#[test]
fn test_reveal_scoring() {
    // Guess before removing anything.
    let mut game = RevealGame::with_target(2, &[0, 1, 2, 3], 12).unwrap();
    let outcome = game.guess(2).unwrap();
    assert!(outcome.correct);
    assert_eq!(outcome.score, 250);

    // One block left.
    let mut game = RevealGame::with_target(2, &[0, 1, 2, 3], 12).unwrap();
    for block in 0..24 {
        assert_eq!(game.remove_block(block), Step::Committed);
    }
    assert_eq!(game.guess_choice(2).unwrap().score, 10);
    assert_eq!(game.total_score(), 10);

    // Wrong guess.
    let mut game = RevealGame::with_target(2, &[0, 1, 2, 3], 12).unwrap();
    let outcome = game.guess(1).unwrap();
    assert!(!outcome.correct);
    assert_eq!(outcome.score, 0);
}

#[test]
fn test_reveal_one_guess_per_round() {
    let mut game = RevealGame::new(11, 12).unwrap();
    let target = game.target();
    assert!(game.choices().contains(&target));

    let first = game.guess(target).unwrap();
    assert!(game.guess(target).is_none());
    assert_eq!(game.remove_block(0), Step::Ignored);
    assert_eq!(game.total_score(), first.score);

    game.next_round().unwrap();
    assert_ne!(game.target(), target);
    assert_eq!(game.round(), 2);
    assert_eq!(game.removed_count(), 0);
    assert!(game.last_guess().is_none());
    assert_eq!(game.total_score(), first.score);
}

#[test]
fn test_reveal_guess_outside_choices_is_rejected() {
    let mut game = RevealGame::with_target(2, &[0, 1, 2, 3], 12).unwrap();
    assert!(game.guess(7).is_none());
    assert!(game.guess_choice(4).is_none());
    assert!(!game.engine().is_over());
}

/// Moves grow by one for each accepted move and stay put otherwise.
fn assert_move_delta(step: Step, before: u32, after: u32) {
    let expected = u32::from(matches!(step, Step::Committed | Step::Deferred(_)));
    assert_eq!(after - before, expected, "step {step:?}");
}

#[test]
fn test_random_swap_clicks_count_moves() {
    for seed in 1..20 {
        let mut game = SwapGame::new(seed, 0).unwrap();
        let mut rng = SimpleRng::new(seed * 31);
        for _ in 0..300 {
            // Includes slots past the grid.
            let slot = rng.next_index(GRID_TILES + 3);
            let before = game.engine().moves();
            let step = game.click(slot);
            assert_move_delta(step, before, game.engine().moves());
            if game.engine().won() {
                game.shuffle().unwrap();
            }
        }
    }
}

#[test]
fn test_random_slide_clicks_count_moves() {
    for seed in 1..20 {
        let mut game = PuzzleGame::new(seed, 0).unwrap();
        let mut rng = SimpleRng::new(seed * 17);
        for _ in 0..300 {
            let slot = rng.next_index(GRID_TILES + 3);
            let before = game.engine().moves();
            let step = game.click(slot);
            assert_move_delta(step, before, game.engine().moves());
            assert!(game.engine().cells().has_even_parity(BLANK_TILE));
        }
    }
}

#[test]
fn test_random_memory_clicks_count_moves() {
    for seed in 1..20 {
        let mut game = MemoryGame::new(seed, 4, 12).unwrap();
        let mut rng = SimpleRng::new(seed * 7);
        for _ in 0..300 {
            // Sometimes click while a pair is still settling.
            if rng.next_range(3) == 0 {
                game.tick(rng.next_range(MISMATCH_SETTLE_MS + 1));
            }
            let locked = game.engine().locked();
            let slot = rng.next_index(8 + 2);
            let before = game.engine().moves();
            let step = game.click(slot);
            if locked {
                assert_eq!(step, Step::Ignored);
            }
            assert_move_delta(step, before, game.engine().moves());
            if game.engine().won() {
                game.new_game().unwrap();
            }
        }
    }
}

#[test]
fn test_random_reveal_clicks_count_moves() {
    for seed in 1..20 {
        let mut game = RevealGame::new(seed, 12).unwrap();
        let mut rng = SimpleRng::new(seed * 13);
        for _ in 0..300 {
            if rng.next_range(20) == 0 {
                game.guess_choice(rng.next_index(5));
            }
            let block = rng.next_index(REVEAL_BLOCKS + 3);
            let before = game.engine().moves();
            let step = game.remove_block(block);
            assert_move_delta(step, before, game.engine().moves());
            assert_eq!(game.removed_count() as u32, game.engine().moves());
            if game.engine().is_over() && rng.next_range(2) == 0 {
                game.next_round().unwrap();
            }
        }
    }
}

#[test]
fn test_win_check_is_idempotent_for_random_swaps() {
    let mut rng = SimpleRng::new(99);
    for _ in 0..50 {
        let a = rng.next_index(GRID_TILES);
        let b = (a + 1 + rng.next_index(GRID_TILES - 1)) % GRID_TILES;
        let mut cells = Arrangement::solved(GRID_TILES);
        cells.swap(a, b);
        let mut game = SwapGame::with_arrangement(cells, 0).unwrap();

        game.click(a);
        game.tick(rng.next_range(5000));
        game.click(b);
        assert!(game.engine().won());

        let won = game.snapshot();
        for _ in 0..10 {
            assert!(game.engine_mut().check_win());
            game.click(rng.next_index(GRID_TILES));
            game.tick(rng.next_range(5000));
        }
        assert_eq!(game.snapshot(), won);
    }
}

#[test]
fn test_win_check_is_idempotent_for_memory() {
    for seed in 1..20 {
        let mut game = MemoryGame::new(seed, 3, 12).unwrap();
        let cells = game.engine().cells().as_slice().to_vec();
        for pair in 0..3u8 {
            let mut slots = (0..cells.len()).filter(|&i| cells[i] == pair);
            let (first, second) = (slots.next().unwrap(), slots.next().unwrap());
            game.click(first);
            game.click(second);
            game.tick(MATCH_SETTLE_MS);
        }
        assert!(game.engine().won());

        let won = game.snapshot();
        for slot in 0..cells.len() {
            assert!(game.engine_mut().check_win());
            game.click(slot);
            game.tick(1000);
        }
        assert_eq!(game.snapshot(), won);
        assert_eq!(won.status.rating, Some(Rating::Three));
    }
}
