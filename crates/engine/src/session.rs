//! Session module - one player, many rounds.
//!
//! Screen flow:
//!
//! ```text
//! Playing --(last pair matched)--> Victory (terminal)
//! Playing --(loss threshold)--> GameOver --(pause elapsed)--> Playing (new deal)
//! ```

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::audio::AudioSink;
use crate::core::{GameRound, RoundConfig, RoundError, RoundEvent, RoundSnapshot};
use crate::types::{InputEvent, SoundEffect, GAME_OVER_PAUSE_MS};

/// Which screen the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Playing,
    /// Lost round on display; a new deal follows when `remaining_ms` runs out.
    GameOver { remaining_ms: u32 },
    Victory,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub round: RoundSnapshot,
    pub screen: Screen,
    /// Ticks since the session was created (drives animations).
    pub frame: u32,
    /// Rounds dealt so far, including the current one.
    pub round_number: u32,
}

pub struct Session {
    config: RoundConfig,
    rng: SmallRng,
    round: GameRound,
    screen: Screen,
    frame: u32,
    round_number: u32,
    game_over_pause_ms: u32,
    /// Set when a re-deal failed; the session stays on the game-over screen.
    redeal_error: Option<RoundError>,
}

impl Session {
    /// Create a session and deal its first round.
    pub fn new(config: RoundConfig, seed: u64) -> Result<Self, RoundError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let round = GameRound::new_round(&config, &mut rng)?;
        log::info!("session started (seed {})", seed);
        Ok(Self {
            config,
            rng,
            round,
            screen: Screen::Playing,
            frame: 0,
            round_number: 1,
            game_over_pause_ms: GAME_OVER_PAUSE_MS,
            redeal_error: None,
        })
    }

    pub fn with_game_over_pause_ms(mut self, pause_ms: u32) -> Self {
        self.game_over_pause_ms = pause_ms;
        self
    }

    pub fn round(&self) -> &GameRound {
        &self.round
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Why the last re-deal failed, if it did. No further deal is attempted.
    pub fn redeal_error(&self) -> Option<&RoundError> {
        self.redeal_error.as_ref()
    }

    /// Begin play: starts the ambient loop.
    pub fn start(&mut self, audio: &mut dyn AudioSink) {
        audio.play(SoundEffect::AmbientLoopStart);
    }

    /// End play: stops the ambient loop unless a round end already did.
    pub fn stop(&mut self, audio: &mut dyn AudioSink) {
        if self.screen == Screen::Playing {
            audio.play(SoundEffect::AmbientLoopStop);
        }
    }

    /// Process one input event.
    ///
    /// Input is ignored outside the playing screen.
    pub fn handle(&mut self, event: InputEvent, audio: &mut dyn AudioSink) {
        if self.screen != Screen::Playing {
            return;
        }

        match event {
            InputEvent::Select(position) => {
                let events = self.round.select(position);
                for event in events {
                    self.on_round_event(event, audio);
                }
            }
            InputEvent::FlipBackElapsed => {
                if self.round.flip_back_deadline().is_some() {
                    self.round.on_flip_back_timeout();
                }
            }
        }
    }

    /// Advance timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32, audio: &mut dyn AudioSink) {
        self.frame = self.frame.wrapping_add(1);

        match self.screen {
            Screen::Playing => {
                self.round.tick(elapsed_ms);
            }
            Screen::GameOver { .. } if self.redeal_error.is_some() => {}
            Screen::GameOver { remaining_ms } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    self.redeal(audio);
                } else {
                    self.screen = Screen::GameOver { remaining_ms };
                }
            }
            Screen::Victory => {}
        }
    }

    fn on_round_event(&mut self, event: RoundEvent, audio: &mut dyn AudioSink) {
        match event {
            RoundEvent::Matched(_) => audio.play(SoundEffect::Match),
            RoundEvent::Won => {
                audio.play(SoundEffect::AmbientLoopStop);
                audio.play(SoundEffect::Victory);
                self.screen = Screen::Victory;
            }
            RoundEvent::Lost => {
                audio.play(SoundEffect::AmbientLoopStop);
                audio.play(SoundEffect::GameOver);
                self.screen = Screen::GameOver {
                    remaining_ms: self.game_over_pause_ms,
                };
            }
            RoundEvent::Revealed(_) | RoundEvent::Mismatched | RoundEvent::FlippedBack => {}
        }
    }

    fn redeal(&mut self, audio: &mut dyn AudioSink) {
        // The configuration was validated when the session was created.
        match GameRound::new_round(&self.config, &mut self.rng) {
            Ok(round) => {
                self.round = round;
                self.round_number += 1;
                self.screen = Screen::Playing;
                log::info!("round {} dealt", self.round_number);
                audio.play(SoundEffect::AmbientLoopStart);
            }
            Err(e) => {
                log::error!("failed to deal a new round: {}", e);
                self.screen = Screen::GameOver { remaining_ms: 0 };
                self.redeal_error = Some(e);
            }
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            round: self.round.snapshot(),
            screen: self.screen,
            frame: self.frame,
            round_number: self.round_number,
        }
    }
}
