//! Sound hooks for game events
//!
//! Playback is fire-and-forget: sinks never return errors, and a broken or
//! absent sound device must not disturb the tick loop.

use std::io::Write;

/// Discrete events worth a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Food,
    GameOver,
}

/// Something that can play a sound for an event
pub trait AudioSink {
    fn play(&mut self, event: AudioEvent);
}

/// Rings the terminal bell; write failures are swallowed
pub struct TerminalBell;

impl AudioSink for TerminalBell {
    fn play(&mut self, event: AudioEvent) {
        let mut stdout = std::io::stdout();
        let pattern: &[u8] = match event {
            AudioEvent::Food => b"\x07",
            AudioEvent::GameOver => b"\x07\x07",
        };
        let _ = stdout.write_all(pattern);
        let _ = stdout.flush();
    }
}

/// Discards every event
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _event: AudioEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records events instead of playing them
    struct Recording(Vec<AudioEvent>);

    impl AudioSink for Recording {
        fn play(&mut self, event: AudioEvent) {
            self.0.push(event);
        }
    }

    #[test]
    fn test_sink_receives_events() {
        let mut sink = Recording(Vec::new());
        sink.play(AudioEvent::Food);
        sink.play(AudioEvent::GameOver);
        assert_eq!(sink.0, vec![AudioEvent::Food, AudioEvent::GameOver]);
    }

    #[test]
    fn test_muted_accepts_events() {
        let mut sink = Muted;
        sink.play(AudioEvent::Food);
        sink.play(AudioEvent::GameOver);
    }
}
