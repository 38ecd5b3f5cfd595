//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardSnapshot, RoundSnapshot};
use crate::engine::{Screen, SessionSnapshot};
use crate::fb::{digits, CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, Symbol, Visibility, VICTORY_BLINK_FRAMES, VICTORY_PULSE_FRAMES};

const BG: Rgb = Rgb::new(25, 28, 35);
const CARD_BACK: Rgb = Rgb::new(50, 60, 80);
const HUD_FG: Rgb = Rgb::new(90, 140, 255);
const GAME_OVER_FG: Rgb = Rgb::new(60, 90, 255);
const VICTORY_BG: Rgb = Rgb::new(0, 0, 30);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);

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

/// Screen placement of the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub card_w: u16,
    pub card_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
    pub rows: u8,
    pub cols: u8,
}

impl GridLayout {
    pub fn width(&self) -> u16 {
        let cols = self.cols as u16;
        cols * self.card_w + cols.saturating_sub(1) * self.gap_x
    }

    pub fn height(&self) -> u16 {
        let rows = self.rows as u16;
        rows * self.card_h + rows.saturating_sub(1) * self.gap_y
    }

    /// Top-left screen cell of the card at `pos`.
    pub fn card_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.origin_x + (pos.col as u16) * (self.card_w + self.gap_x),
            self.origin_y + (pos.row as u16) * (self.card_h + self.gap_y),
        )
    }

    /// Grid position under screen cell `(x, y)`, if it lands on a card.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Position> {
        let dx = x.checked_sub(self.origin_x)?;
        let dy = y.checked_sub(self.origin_y)?;

        let pitch_x = self.card_w + self.gap_x;
        let pitch_y = self.card_h + self.gap_y;
        if dx % pitch_x >= self.card_w || dy % pitch_y >= self.card_h {
            return None;
        }

        let col = dx / pitch_x;
        let row = dy / pitch_y;
        if col >= self.cols as u16 || row >= self.rows as u16 {
            return None;
        }
        Some(Position::new(row as u8, col as u8))
    }
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    card_w: u16,
    card_h: u16,
    gap_x: u16,
    gap_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 10x5 keeps cards roughly square with typical terminal glyph aspect ratio.
        // A 2-column gap leaves room for the cursor brackets between cards.
        Self {
            card_w: 10,
            card_h: 5,
            gap_x: 2,
            gap_y: 1,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(1),
            card_h: card_h.max(1),
            ..Self::default()
        }
    }

    /// Grid placement for a `rows x cols` board in `viewport`.
    ///
    /// The grid is centered, with two rows reserved above it for the HUD.
    pub fn layout(&self, rows: u8, cols: u8, viewport: Viewport) -> GridLayout {
        let mut layout = GridLayout {
            origin_x: 0,
            origin_y: 0,
            card_w: self.card_w,
            card_h: self.card_h,
            gap_x: self.gap_x,
            gap_y: self.gap_y,
            rows,
            cols,
        };
        let block_h = layout.height() + 2;
        layout.origin_x = viewport.width.saturating_sub(layout.width()) / 2;
        layout.origin_y = viewport.height.saturating_sub(block_h) / 2 + 2;
        layout
    }

    /// Map a screen click to a card position for the given snapshot.
    pub fn hit_test(&self, snap: &SessionSnapshot, viewport: Viewport, x: u16, y: u16) -> Option<Position> {
        if snap.screen != Screen::Playing {
            return None;
        }
        self.layout(snap.round.rows, snap.round.cols, viewport)
            .hit_test(x, y)
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<Position>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        match snap.screen {
            Screen::Playing => self.draw_board(fb, &snap.round, cursor, viewport),
            Screen::GameOver { .. } => self.draw_game_over(fb, viewport),
            Screen::Victory => self.draw_victory(fb, snap, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<Position>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        round: &RoundSnapshot,
        cursor: Option<Position>,
        viewport: Viewport,
    ) {
        fb.clear(CellStyle::new(BG, BG).into_cell(' '));

        let layout = self.layout(round.rows, round.cols, viewport);
        self.draw_hud(fb, round, &layout, viewport);

        for card in &round.cards {
            self.draw_card(fb, &layout, card);
        }

        if let Some(pos) = cursor {
            if pos.row < round.rows && pos.col < round.cols {
                self.draw_cursor(fb, &layout, pos);
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, round: &RoundSnapshot, layout: &GridLayout, viewport: Viewport) {
        let label = CellStyle::new(HUD_FG, BG).bold();
        let value = CellStyle::new(WHITE, BG);

        // "ATTEMPTS n   ERRORS w/t   MATCHES m"
        let width = 9
            + digits(round.attempts)
            + 3
            + 7
            + digits(round.wrong_attempts)
            + 1
            + digits(round.loss_threshold)
            + 3
            + 8
            + digits(round.matched_pairs);

        let y = layout.origin_y.saturating_sub(2);
        let mut x = viewport.width.saturating_sub(width) / 2;
        x += fb.put_str(x, y, "ATTEMPTS ", label);
        x += fb.put_u32(x, y, round.attempts, value);
        x += fb.put_str(x, y, "   ERRORS ", label);
        x += fb.put_u32(x, y, round.wrong_attempts, value);
        x += fb.put_str(x, y, "/", value);
        x += fb.put_u32(x, y, round.loss_threshold, value);
        x += fb.put_str(x, y, "   MATCHES ", label);
        fb.put_u32(x, y, round.matched_pairs, value);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, layout: &GridLayout, card: &CardSnapshot) {
        let (x, y) = layout.card_origin(card.position);

        if !card.visibility.is_face_up() {
            let back = CellStyle::new(Rgb::new(90, 100, 130), CARD_BACK);
            fb.fill_rect(x, y, self.card_w, self.card_h, '░', back);
            return;
        }

        let (bg, fg) = symbol_colors(card.symbol);
        let face = CellStyle::new(fg, bg);
        fb.fill_rect(x, y, self.card_w, self.card_h, ' ', face);

        let label = card.symbol.label();
        let label_w = label.chars().count() as u16;
        let lx = x + self.card_w.saturating_sub(label_w) / 2;
        let ly = y + self.card_h / 2;
        fb.put_str(lx, ly, label, face.bold());

        if card.visibility == Visibility::Matched {
            fb.put_char(x + self.card_w - 1, y, '✓', face.bold());
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: &GridLayout, pos: Position) {
        let (x, y) = layout.card_origin(pos);
        let style = CellStyle::new(GOLD, BG).bold();
        let mid = y + self.card_h / 2;
        if x > 0 {
            fb.put_char(x - 1, mid, '▶', style);
        }
        fb.put_char(x + self.card_w, mid, '◀', style);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        fb.clear(CellStyle::new(BG, BG).into_cell(' '));
        let y = viewport.height / 2;
        put_centered(fb, viewport, y, "GAME OVER", CellStyle::new(GAME_OVER_FG, BG).bold());
        put_centered(
            fb,
            viewport,
            y.saturating_add(2),
            "dealing a new round...",
            CellStyle::new(Rgb::new(150, 150, 160), BG).dim(),
        );
    }

    fn draw_victory(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport) {
        fb.clear(CellStyle::new(VICTORY_BG, VICTORY_BG).into_cell(' '));

        let title_fg = if (snap.frame / VICTORY_BLINK_FRAMES) % 2 == 0 {
            GOLD
        } else {
            WHITE
        };
        let title_y = (viewport.height / 6).max(1);
        put_centered(fb, viewport, title_y, "YOU WIN!", CellStyle::new(title_fg, VICTORY_BG).bold());

        // Chest grows and shrinks with the pulse.
        let pulse = pulse(snap.frame);
        let chest_w = 14 + (pulse / 5) as u16 * 2;
        let chest_h = 5 + (pulse / 10) as u16;
        let cx = viewport.width.saturating_sub(chest_w) / 2;
        let cy = viewport.height.saturating_sub(chest_h) / 2;
        draw_chest(fb, cx, cy, chest_w, chest_h);

        let stats_y = cy.saturating_add(chest_h).saturating_add(2);
        let label = CellStyle::new(GOLD, VICTORY_BG);
        let value = CellStyle::new(WHITE, VICTORY_BG);
        let round = &snap.round;
        let width = 9
            + digits(round.attempts)
            + 3
            + 7
            + digits(round.wrong_attempts)
            + 3
            + 8
            + digits(round.matched_pairs);
        let mut x = viewport.width.saturating_sub(width) / 2;
        x += fb.put_str(x, stats_y, "ATTEMPTS ", label);
        x += fb.put_u32(x, stats_y, round.attempts, value);
        x += fb.put_str(x, stats_y, "   ERRORS ", label);
        x += fb.put_u32(x, stats_y, round.wrong_attempts, value);
        x += fb.put_str(x, stats_y, "   MATCHES ", label);
        fb.put_u32(x, stats_y, round.matched_pairs, value);

        put_centered(
            fb,
            viewport,
            viewport.height.saturating_sub(1),
            "press q to quit",
            CellStyle::new(Rgb::new(120, 120, 150), VICTORY_BG).dim(),
        );
    }
}

/// Triangle wave in `0..=VICTORY_PULSE_FRAMES / 2` over the pulse period.
pub fn pulse(frame: u32) -> u32 {
    let half = VICTORY_PULSE_FRAMES / 2;
    half.abs_diff(frame % VICTORY_PULSE_FRAMES)
}

fn draw_chest(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 3 || h < 3 {
        return;
    }
    let frame = CellStyle::new(GOLD, Rgb::new(110, 70, 30)).bold();
    let wood = CellStyle::new(Rgb::new(160, 110, 50), Rgb::new(110, 70, 30));

    fb.fill_rect(x + 1, y + 1, w - 2, h - 2, '▒', wood);

    fb.put_char(x, y, '╔', frame);
    fb.put_char(x + w - 1, y, '╗', frame);
    fb.put_char(x, y + h - 1, '╚', frame);
    fb.put_char(x + w - 1, y + h - 1, '╝', frame);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '═', frame);
        fb.put_char(x + dx, y + h - 1, '═', frame);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '║', frame);
        fb.put_char(x + w - 1, y + dy, '║', frame);
    }

    // Lid seam and lock.
    let seam_y = y + h / 3;
    for dx in 1..w - 1 {
        fb.put_char(x + dx, seam_y, '─', frame);
    }
    fb.put_char(x + w / 2, seam_y, '◘', frame);
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, style);
}

/// Card face background and label colours.
fn symbol_colors(symbol: Symbol) -> (Rgb, Rgb) {
    let dark = Rgb::new(15, 15, 20);
    match symbol {
        Symbol::Dragon => (Rgb::new(200, 60, 60), dark),
        Symbol::TreasureIsland => (Rgb::new(90, 180, 90), dark),
        Symbol::Ship => (Rgb::new(160, 120, 80), dark),
        Symbol::Pirate => (Rgb::new(50, 50, 55), WHITE),
        Symbol::Treasure => (Rgb::new(240, 200, 60), dark),
        Symbol::Shark => (Rgb::new(80, 140, 220), dark),
    }
}
