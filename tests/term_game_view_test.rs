use tui_memory::core::RoundConfig;
use tui_memory::engine::{NullAudio, Screen, Session, SessionSnapshot};
use tui_memory::term::{FrameBuffer, GameView, Viewport};
use tui_memory::types::{Position, Visibility};

fn snapshot(seed: u64) -> SessionSnapshot {
    Session::new(RoundConfig::default(), seed).unwrap().snapshot()
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_string(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_draws_hud_with_loss_threshold() {
    let mut snap = snapshot(1);
    snap.round.attempts = 4;
    snap.round.wrong_attempts = 2;
    snap.round.matched_pairs = 2;

    let fb = GameView::default().render(&snap, None, Viewport::new(80, 24));
    let text = screen_text(&fb);

    assert!(text.contains("ATTEMPTS 4   ERRORS 2/6   MATCHES 2"), "{}", text);
}

#[test]
fn term_view_hidden_cards_show_backs_only() {
    let snap = snapshot(1);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, None, vp);

    let layout = view.layout(3, 4, vp);
    let (x, y) = layout.card_origin(Position::new(0, 0));
    assert_eq!(fb.get(x, y).unwrap().ch, '░');

    let text = screen_text(&fb);
    for card in &snap.round.cards {
        assert!(!text.contains(card.symbol.label()));
    }
}

#[test]
fn term_view_face_up_cards_show_labels() {
    let mut snap = snapshot(2);
    snap.round.cards[0].visibility = Visibility::Revealed;
    snap.round.cards[11].visibility = Visibility::Matched;

    let fb = GameView::default().render(&snap, None, Viewport::new(80, 24));
    let text = screen_text(&fb);

    assert!(text.contains(snap.round.cards[0].symbol.label()));
    assert!(text.contains(snap.round.cards[11].symbol.label()));
    assert!(text.contains('✓'));
}

#[test]
fn term_view_draws_cursor_markers() {
    let snap = snapshot(1);
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, Some(Position::new(1, 1)), vp);

    let layout = view.layout(3, 4, vp);
    let (x, y) = layout.card_origin(Position::new(1, 1));
    let mid = y + layout.card_h / 2;
    assert_eq!(fb.get(x - 1, mid).unwrap().ch, '▶');
    assert_eq!(fb.get(x + layout.card_w, mid).unwrap().ch, '◀');
}

#[test]
fn term_view_click_hits_rendered_card() {
    let snap = snapshot(1);
    let view = GameView::default();
    let vp = Viewport::new(100, 30);

    let layout = view.layout(3, 4, vp);
    let (x, y) = layout.card_origin(Position::new(2, 3));
    assert_eq!(view.hit_test(&snap, vp, x + 3, y + 2), Some(Position::new(2, 3)));
    assert_eq!(view.hit_test(&snap, vp, 0, 0), None);
}

#[test]
fn term_view_ignores_clicks_off_the_playing_screen() {
    let mut snap = snapshot(1);
    snap.screen = Screen::Victory;
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(3, 4, vp);
    let (x, y) = layout.card_origin(Position::new(0, 0));
    assert_eq!(view.hit_test(&snap, vp, x, y), None);
}

#[test]
fn term_view_game_over_banner() {
    let mut snap = snapshot(1);
    snap.screen = Screen::GameOver { remaining_ms: 1500 };

    let fb = GameView::default().render(&snap, None, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("ATTEMPTS"));
}

#[test]
fn term_view_victory_title_blinks() {
    let mut session = Session::new(RoundConfig::default(), 1).unwrap();
    session.tick(16, &mut NullAudio);
    let mut snap = session.snapshot();
    snap.screen = Screen::Victory;

    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    snap.frame = 0;
    let a = view.render(&snap, None, vp);
    snap.frame = 20;
    let b = view.render(&snap, None, vp);

    let title_y = 24 / 6;
    let title_x = (80 - "YOU WIN!".len() as u16) / 2;
    let ca = a.get(title_x, title_y).unwrap();
    let cb = b.get(title_x, title_y).unwrap();
    assert_eq!(ca.ch, 'Y');
    assert_eq!(cb.ch, 'Y');
    assert_ne!(ca.style.fg, cb.style.fg);
}

#[test]
fn term_view_victory_chest_pulses() {
    let mut snap = snapshot(1);
    snap.screen = Screen::Victory;
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let width_of_top_edge = |fb: &FrameBuffer| {
        (0..fb.height())
            .map(|y| fb.row_string(y))
            .find(|row| row.contains('╔'))
            .map(|row| row.chars().filter(|&c| c == '═').count())
            .unwrap()
    };

    snap.frame = 0;
    let wide = width_of_top_edge(&view.render(&snap, None, vp));
    snap.frame = 20;
    let narrow = width_of_top_edge(&view.render(&snap, None, vp));
    assert!(wide > narrow);
}
