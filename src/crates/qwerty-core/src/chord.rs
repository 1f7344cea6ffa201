use serde::Serialize;
use std::fmt;

/// Default grouping window in seconds (50 ms)
pub const DEFAULT_CHORD_WINDOW: f64 = 0.05;

/// A key press at an absolute time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedNote {
    pub onset_seconds: f64,
    pub key: char,
}

impl TimedNote {
    pub fn new(onset_seconds: f64, key: char) -> Self {
        Self { onset_seconds, key }
    }
}

/// One output unit: a single key or a chord of keys pressed together.
///
/// Keys keep the order they were added in. Units are only built by
/// [`ChordGrouper::group`], which never yields an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordUnit {
    keys: Vec<char>,
}

impl ChordUnit {
    pub fn keys(&self) -> &[char] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; a unit holds at least one key
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_chord(&self) -> bool {
        self.keys.len() > 1
    }

    /// Render as key text: `a` for a single key, `[abc]` for a chord
    pub fn to_keys(&self) -> String {
        let mut out = String::with_capacity(self.keys.len() + 2);
        if self.is_chord() {
            out.push('[');
            out.extend(&self.keys);
            out.push(']');
        } else {
            out.extend(&self.keys);
        }
        out
    }
}

impl fmt::Display for ChordUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_keys())
    }
}

/// Groups time-sorted notes into chord units.
///
/// A note joins the current unit when it starts within `window` seconds of
/// the previous note, so a run of closely spaced notes becomes one chord no
/// matter how long the run lasts overall.
#[derive(Debug, Clone, Copy)]
pub struct ChordGrouper {
    window: f64,
}

impl ChordGrouper {
    pub fn new(window: f64) -> Self {
        Self { window }
    }

    pub fn window(&self) -> f64 {
        self.window
    }

    /// `notes` must already be sorted by onset time.
    pub fn group(&self, notes: &[TimedNote]) -> Vec<ChordUnit> {
        let mut units = Vec::new();
        let mut current: Vec<char> = Vec::new();
        let mut last_time = 0.0;

        for note in notes {
            // Measured from the previous note, not from the chord's first one
            if !current.is_empty() && note.onset_seconds - last_time > self.window {
                units.push(ChordUnit {
                    keys: std::mem::take(&mut current),
                });
            }
            current.push(note.key);
            last_time = note.onset_seconds;
        }

        if !current.is_empty() {
            units.push(ChordUnit { keys: current });
        }
        units
    }
}

impl Default for ChordGrouper {
    fn default() -> Self {
        Self::new(DEFAULT_CHORD_WINDOW)
    }
}

/// Concatenate units into the final key text, no separators
pub fn encode(units: &[ChordUnit]) -> String {
    units.iter().map(ChordUnit::to_keys).collect()
}
