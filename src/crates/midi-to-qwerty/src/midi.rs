use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEventKind};
use qwerty_core::{tempo_to_bpm, DEFAULT_TEMPO};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};

/// A sounding note-on, positioned in ticks from the start of its track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    pub pitch: u8,
    pub onset_ticks: u64,
    pub track: usize,
}

/// Everything the converter needs from a parsed MIDI file
#[derive(Debug, Clone)]
pub struct MidiData {
    /// Microseconds per beat
    pub tempo: u32,
    pub bpm: f64,
    pub ticks_per_beat: f64,
    /// Note-ons of all tracks, track by track in file order
    pub events: Vec<NoteEvent>,
}

impl MidiData {
    pub fn parse(smf: &Smf) -> Result<Self> {
        let tempo = extract_tempo(smf);
        if tempo == 0 {
            return Err(ConvertError::InvalidTiming(
                "tempo is zero microseconds per beat".to_string(),
            ));
        }
        let ticks_per_beat = ticks_per_beat(smf.header.timing, tempo)?;

        Ok(MidiData {
            tempo,
            bpm: tempo_to_bpm(tempo),
            ticks_per_beat,
            events: collect_note_events(smf),
        })
    }

    /// Onset of `event` in seconds at the file's tempo
    pub fn seconds(&self, event: &NoteEvent) -> f64 {
        tick_to_second(event.onset_ticks, self.ticks_per_beat, self.tempo)
    }
}

/// First tempo event in file order, or 120 BPM when there is none
pub fn extract_tempo(smf: &Smf) -> u32 {
    for track in &smf.tracks {
        for event in track {
            if let TrackEventKind::Meta(MetaMessage::Tempo(tempo)) = event.kind {
                return tempo.as_int();
            }
        }
    }
    log::debug!("No tempo event found, using {} us/beat", DEFAULT_TEMPO);
    DEFAULT_TEMPO
}

fn ticks_per_beat(timing: Timing, tempo: u32) -> Result<f64> {
    match timing {
        Timing::Metrical(tpb) => {
            let tpb = tpb.as_int();
            if tpb == 0 {
                return Err(ConvertError::InvalidTiming(
                    "ticks per beat is zero".to_string(),
                ));
            }
            Ok(tpb as f64)
        }
        Timing::Timecode(fps, subframe) => {
            // Timecode ticks are fixed fractions of a second; express them
            // per beat at the resolved tempo.
            let ticks_per_second = fps.as_f32() as f64 * subframe as f64;
            if ticks_per_second <= 0.0 {
                return Err(ConvertError::InvalidTiming(
                    "timecode has zero ticks per frame".to_string(),
                ));
            }
            log::warn!(
                "File uses SMPTE timecode ({} fps, {} ticks/frame), timing is approximate",
                fps.as_f32(),
                subframe
            );
            Ok(ticks_per_second * tempo as f64 / 1_000_000.0)
        }
    }
}

/// Collect sounding note-ons from every track.
///
/// Each track counts ticks from zero on its own.
pub fn collect_note_events(smf: &Smf) -> Vec<NoteEvent> {
    let mut events = Vec::new();

    for (track_idx, track) in smf.tracks.iter().enumerate() {
        let mut abs_ticks: u64 = 0;

        for event in track {
            abs_ticks += event.delta.as_int() as u64;

            if let TrackEventKind::Midi {
                message: MidiMessage::NoteOn { key, vel },
                ..
            } = event.kind
            {
                // Velocity 0 is a note-off
                if vel.as_int() > 0 {
                    events.push(NoteEvent {
                        pitch: key.as_int(),
                        onset_ticks: abs_ticks,
                        track: track_idx,
                    });
                }
            }
        }
    }

    events
}

/// `ticks * (tempo / 1e6) / ticks_per_beat`, evaluated left to right.
///
/// The order matters: it decides which side of the chord window a gap of
/// exactly 50 ms lands on.
pub fn tick_to_second(ticks: u64, ticks_per_beat: f64, tempo: u32) -> f64 {
    ticks as f64 * (tempo as f64 / 1_000_000.0) / ticks_per_beat
}

/// First `.mid`/`.midi` file in `dir` by file name, if any
pub fn find_midi_file(dir: &Path) -> std::io::Result<Option<PathBuf>> {
    let mut found = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("mid") | Some("midi")
        ) {
            found.push(path);
        }
    }

    // read_dir order is platform dependent
    found.sort();
    Ok(found.into_iter().next())
}
