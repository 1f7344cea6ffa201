use serde::{Deserialize, Serialize};

use crate::chord::{encode, ChordUnit};

/// Microseconds per beat assumed when a file declares no tempo (120 BPM)
pub const DEFAULT_TEMPO: u32 = 500_000;

/// Convert a tempo in microseconds per beat to beats per minute
pub fn tempo_to_bpm(tempo: u32) -> f64 {
    60_000_000.0 / tempo as f64
}

/// Outcome of converting one MIDI file to key text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Informational only, note timing does not depend on it
    pub bpm: f64,
    pub text: String,
    /// Notes that made it into `text`
    pub note_count: usize,
    /// Single keys plus chords in `text`
    pub unit_count: usize,
}

impl ConversionResult {
    pub fn from_units(bpm: f64, units: &[ChordUnit]) -> Self {
        Self {
            bpm,
            text: encode(units),
            note_count: units.iter().map(ChordUnit::len).sum(),
            unit_count: units.len(),
        }
    }

    /// Display line for the tempo, e.g. `BPM: 120.00`
    pub fn bpm_label(&self) -> String {
        format!("BPM: {:.2}", self.bpm)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{ChordGrouper, TimedNote};

    #[test]
    fn test_tempo_to_bpm() {
        assert_eq!(tempo_to_bpm(DEFAULT_TEMPO), 120.0);
        assert_eq!(tempo_to_bpm(600_000), 100.0);
    }

    #[test]
    fn test_from_units() {
        let notes = [
            TimedNote::new(0.0, '1'),
            TimedNote::new(0.01, '2'),
            TimedNote::new(1.0, 'q'),
        ];
        let units = ChordGrouper::default().group(&notes);
        let result = ConversionResult::from_units(120.0, &units);
        assert_eq!(result.text, "[12]q");
        assert_eq!(result.note_count, 3);
        assert_eq!(result.unit_count, 2);
        assert_eq!(result.bpm_label(), "BPM: 120.00");
    }

    #[test]
    fn test_json_output() {
        let result = ConversionResult::from_units(100.0, &[]);
        let json = result.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["bpm"], 100.0);
        assert_eq!(parsed["text"], "");
        assert_eq!(parsed["note_count"], 0);
    }
}
