use midly::Smf;
use qwerty_core::{note_to_char, ChordGrouper, ConversionResult, TimedNote, DEFAULT_CHORD_WINDOW};
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::midi::MidiData;

/// Tunables for a conversion run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    /// Max gap in seconds between consecutive notes of one chord
    pub chord_window: f64,
}

impl ConvertOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.chord_window.is_finite() || self.chord_window < 0.0 {
            return Err(ConvertError::InvalidOptions(format!(
                "chord window must be a non-negative number of seconds, got {}",
                self.chord_window
            )));
        }
        Ok(())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            chord_window: DEFAULT_CHORD_WINDOW,
        }
    }
}

/// MIDI file to key text pipeline
pub struct Converter {
    grouper: ChordGrouper,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            grouper: ChordGrouper::new(options.chord_window),
        })
    }

    pub fn convert_file(&self, path: &Path) -> Result<ConversionResult> {
        let data = std::fs::read(path).map_err(|source| ConvertError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.convert_bytes(&data)
    }

    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<ConversionResult> {
        let smf = Smf::parse(bytes)?;
        self.convert_smf(&smf)
    }

    pub fn convert_smf(&self, smf: &Smf) -> Result<ConversionResult> {
        let midi_data = MidiData::parse(smf)?;
        let notes = timed_notes(&midi_data);
        let units = self.grouper.group(&notes);
        let result = ConversionResult::from_units(midi_data.bpm, &units);

        log::info!(
            "Converted {} of {} notes into {} keys/chords at {:.2} BPM",
            result.note_count,
            midi_data.events.len(),
            result.unit_count,
            result.bpm
        );

        Ok(result)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            grouper: ChordGrouper::default(),
        }
    }
}

/// Map note events onto keys, drop unplayable ones and sort by onset.
///
/// The sort is stable, so notes starting together keep track order.
pub fn timed_notes(midi_data: &MidiData) -> Vec<TimedNote> {
    let mut notes: Vec<TimedNote> = midi_data
        .events
        .iter()
        .filter_map(|event| match note_to_char(event.pitch) {
            Some(key) => Some(TimedNote::new(midi_data.seconds(event), key)),
            None => {
                log::debug!(
                    "Dropping note {} at tick {} of track {}: outside keyboard range",
                    event.pitch,
                    event.onset_ticks,
                    event.track
                );
                None
            }
        })
        .collect();

    notes.sort_by(|a, b| a.onset_seconds.total_cmp(&b.onset_seconds));
    notes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.chord_window, 0.05);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_invalid_window() {
        for window in [-0.01, f64::NAN, f64::INFINITY] {
            let options = ConvertOptions {
                chord_window: window,
            };
            assert!(matches!(
                Converter::new(options),
                Err(ConvertError::InvalidOptions(_))
            ));
        }
    }

    #[test]
    fn test_zero_window_is_allowed() {
        let options = ConvertOptions { chord_window: 0.0 };
        assert!(Converter::new(options).is_ok());
    }
}
