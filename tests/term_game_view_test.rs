use photo_games::core::{Arrangement, PhotoCatalog, RevealGame, SwapGame};
use photo_games::term::{GameView, Scene, Viewport};

#[test]
fn term_view_home_lists_games_and_help() {
    let photos = PhotoCatalog::builtin();
    let fb = GameView::default().render(&Scene::Home { cursor: 0 }, &photos, Viewport::new(80, 24));

    assert!(fb.contains_text("Photo Games"));
    assert!(fb.contains_text("Memory Match"));
    assert!(fb.contains_text("Photo Reveal"));
    assert!(fb.contains_text("q quit"));
}

#[test]
fn term_view_swap_stats_and_win_overlay() {
    let photos = PhotoCatalog::builtin();
    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let cells = Arrangement::from_vec(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let mut game = SwapGame::with_arrangement(cells, 2).unwrap();

    let snap = game.snapshot();
    let fb = view.render(&Scene::Tiles { snap: &snap, cursor: 0, hint: false }, &photos, vp);
    assert!(fb.contains_text("Correct 7/9"));
    assert!(!fb.contains_text("Perfect!"));

    game.click(0);
    game.click(1);
    let snap = game.snapshot();
    let fb = view.render(&Scene::Tiles { snap: &snap, cursor: 1, hint: false }, &photos, vp);
    assert!(fb.contains_text("Perfect!"));
    assert!(fb.contains_text("Completed in 1"));
}

#[test]
fn term_view_reveal_result_after_guess() {
    let photos = PhotoCatalog::builtin();
    let view = GameView::default();
    let vp = Viewport::new(90, 40);
    let mut game = RevealGame::with_target(2, &[0, 1, 2, 3], photos.len()).unwrap();

    let snap = game.snapshot();
    let fb = view.render(&Scene::Reveal { snap: &snap, cursor: 0 }, &photos, vp);
    assert!(fb.contains_text("Puppy"));
    assert!(!fb.contains_text("Correct!"));

    game.guess(2);
    let snap = game.snapshot();
    let fb = view.render(&Scene::Reveal { snap: &snap, cursor: 0 }, &photos, vp);
    assert!(fb.contains_text("Correct!"));
    assert!(fb.contains_text("+250 points"));
}

#[test]
fn term_view_tiny_viewport_does_not_panic() {
    let photos = PhotoCatalog::builtin();
    let view = GameView::default();
    let game = SwapGame::new(1, 0).unwrap();
    let snap = game.snapshot();
    for (w, h) in [(0, 0), (1, 1), (10, 5), (30, 12)] {
        let scene = Scene::Tiles {
            snap: &snap,
            cursor: 8,
            hint: true,
        };
        let fb = view.render(&scene, &photos, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
