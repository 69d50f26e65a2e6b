use std::io::Write;

use log::{debug, warn};

use crate::game::GameEvent;

/// Fire-and-forget sound cues the game can request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cue {
    Eat,
    GameOver,
    Soundtrack,
}

impl From<GameEvent> for Cue {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Eaten => Self::Eat,
            GameEvent::GameOver(_) => Self::GameOver,
        }
    }
}

/// Output for game sound cues.
pub trait AudioSink {
    /// Starts `cue` without waiting for it to finish.
    fn play(&mut self, cue: Cue);

    /// Returns true while `cue` is still audible.
    fn is_playing(&self, cue: Cue) -> bool;
}

/// Plays the cues for one tick's events, then restarts the soundtrack if it
/// has run out.
pub fn dispatch<S: AudioSink + ?Sized>(sink: &mut S, events: &[GameEvent]) {
    for event in events {
        sink.play(Cue::from(*event));
    }

    if !sink.is_playing(Cue::Soundtrack) {
        sink.play(Cue::Soundtrack);
    }
}

/// Terminal rendition of the game audio.
///
/// Eat and game-over cues ring the terminal bell when enabled. The terminal
/// has no way to play music, so the soundtrack is treated as looping forever
/// once started.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
    soundtrack_started: bool,
}

impl<W: Write> TerminalBell<W> {
    #[must_use]
    pub fn new(out: W, enabled: bool) -> Self {
        Self {
            out,
            enabled,
            soundtrack_started: false,
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self) {
        if !self.enabled {
            return;
        }

        if let Err(error) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            warn!("failed to ring terminal bell: {error}");
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) {
        debug!("audio cue {cue:?}");

        match cue {
            Cue::Eat | Cue::GameOver => self.ring(),
            Cue::Soundtrack => self.soundtrack_started = true,
        }
    }

    fn is_playing(&self, cue: Cue) -> bool {
        cue == Cue::Soundtrack && self.soundtrack_started
    }
}
