//! Audio collaborator.
//!
//! The simulation only emits `AudioEvent`s; playing them is up to the host.
//! With no sink attached the events are dropped.

use log::debug;

use singularity_core::events::AudioEvent;

pub trait AudioSink {
    fn play(&mut self, event: &AudioEvent);
}

/// Writes each sound request to the log instead of a speaker.
#[derive(Debug, Default)]
pub struct LogAudioSink {
    pub played: u64,
}

impl AudioSink for LogAudioSink {
    fn play(&mut self, event: &AudioEvent) {
        self.played += 1;
        debug!("audio: {event:?}");
    }
}

/// Hand a frame's events to the sink, if there is one.
pub fn dispatch<S: AudioSink + ?Sized>(sink: Option<&mut S>, events: &[AudioEvent]) {
    let Some(sink) = sink else {
        return;
    };
    for event in events {
        sink.play(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<AudioEvent>);

    impl AudioSink for Recorder {
        fn play(&mut self, event: &AudioEvent) {
            self.0.push(event.clone());
        }
    }

    #[test]
    fn test_dispatch_plays_in_order() {
        let events = vec![
            AudioEvent::Gunshot { volume: 0.3 },
            AudioEvent::Reload { volume: 0.2 },
        ];
        let mut recorder = Recorder::default();
        dispatch(Some(&mut recorder), &events);
        assert_eq!(recorder.0, events);
    }

    #[test]
    fn test_dispatch_without_sink_is_silent() {
        dispatch::<LogAudioSink>(None, &[AudioEvent::PlayerHit { volume: 0.25 }]);
    }

    #[test]
    fn test_log_sink_counts() {
        let mut sink = LogAudioSink::default();
        dispatch(Some(&mut sink), &[AudioEvent::Gunshot { volume: 0.3 }]);
        assert_eq!(sink.played, 1);
    }
}
