//! Terminal bell audio sink.
//!
//! A terminal has no mixer, so one-shot effects ring the bell (BEL) and the
//! ambient loop is only tracked as state.

use std::io::{self, Write};

use crate::engine::AudioSink;
use crate::types::SoundEffect;

pub struct TerminalBell<W: Write = io::Stdout> {
    out: W,
    ambient: bool,
}

impl TerminalBell<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalBell<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            ambient: false,
        }
    }

    /// Whether the ambient loop is currently "playing".
    pub fn ambient_playing(&self) -> bool {
        self.ambient
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sound: {}", effect.as_str());
        if effect.is_one_shot() {
            if let Err(e) = self.ring() {
                log::warn!("bell failed: {}", e);
            }
        } else {
            self.ambient = effect == SoundEffect::AmbientLoopStart;
        }
    }
}
