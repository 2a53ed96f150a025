//! Scripted `play` runs and their JSON output.

use photo_games::core::PhotoCatalog;
use photo_games::game::GameSnapshot;
use photo_games::script::{parse_play_args, run};

fn play(line: &str) -> GameSnapshot {
    let args: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let play = parse_play_args(&args).unwrap().unwrap();
    run(&play, &PhotoCatalog::builtin()).unwrap()
}

#[test]
fn script_swap_win_serializes_flat() {
    let snap = play("play swap --cells 1,0,2,3,4,5,6,7,8 --clicks 0,1");
    let json: serde_json::Value = serde_json::to_value(&snap).unwrap();

    assert_eq!(json["game"], "swap");
    assert_eq!(json["won"], true);
    assert_eq!(json["moves"], 1);
    assert_eq!(json["rating"], "Three");
    assert_eq!(json["tiles"], serde_json::json!([0, 1, 2, 3, 4, 5, 6, 7, 8]));
}

#[test]
fn script_slide_ignores_far_tiles() {
    let snap = play("play puzzle --cells 0,1,2,3,4,5,6,8,7 --clicks 0,8");
    let GameSnapshot::Tiles(snap) = snap else {
        panic!("expected tile snapshot");
    };
    assert!(snap.status.won);
    assert_eq!(snap.status.moves, 1);
}

#[test]
fn script_seeded_deal_is_reproducible() {
    let a = serde_json::to_string(&play("play memory --seed 21 --pairs 3")).unwrap();
    let b = serde_json::to_string(&play("play memory --seed 21 --pairs 3")).unwrap();
    assert_eq!(a, b);

    let GameSnapshot::Memory(snap) = play("play memory --seed 21 --pairs 3") else {
        panic!("expected memory snapshot");
    };
    assert_eq!(snap.cards.len(), 6);
    assert_eq!(snap.total_pairs, 3);
}

#[test]
fn script_reveal_guess_scores() {
    let GameSnapshot::Reveal(first) = play("play reveal --seed 5") else {
        panic!("expected reveal snapshot");
    };
    let line = format!("play reveal --seed 5 --clicks 0,1,2 --guess {}", first.target);
    let GameSnapshot::Reveal(snap) = play(&line) else {
        panic!("expected reveal snapshot");
    };
    let guess = snap.guess.unwrap();
    assert!(guess.correct);
    assert_eq!(guess.remaining_blocks, 22);
    assert_eq!(guess.score, 220);
    assert_eq!(snap.total_score, 220);
}

#[test]
fn script_rejects_bad_arrangements() {
    let args: Vec<String> = "play puzzle --cells 1,0,2,3,4,5,6,7,8"
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let play = parse_play_args(&args).unwrap().unwrap();
    // Odd parity: not solvable by sliding.
    assert!(run(&play, &PhotoCatalog::builtin()).is_err());
}
