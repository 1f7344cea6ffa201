//! Core types for turning notes into QWERTY key text
//!
//! This crate knows nothing about MIDI files. It maps note numbers onto a
//! fixed keyboard layout, groups time-sorted key presses into chords and
//! renders them as text that games accepting raw keystrokes can play.
//!
//! # Examples
//!
//! ```
//! use qwerty_core::{note_to_char, ChordGrouper, TimedNote, encode};
//!
//! let notes = vec![
//!     TimedNote::new(0.0, note_to_char(36).unwrap()),
//!     TimedNote::new(0.005, note_to_char(38).unwrap()),
//! ];
//! let units = ChordGrouper::default().group(&notes);
//! assert_eq!(encode(&units), "[12]");
//! ```
//!
//! # Main Components
//!
//! - **layout**: note number <-> key character tables
//! - **chord**: chain-based chord grouping and key text encoding
//! - **result**: the conversion result handed to front ends

pub mod chord;
pub mod layout;
pub mod result;

pub use chord::{encode, ChordGrouper, ChordUnit, TimedNote, DEFAULT_CHORD_WINDOW};
pub use layout::{char_to_note, note_to_char, playable_range, BLACK_KEYS, WHITE_KEYS};
pub use result::{tempo_to_bpm, ConversionResult, DEFAULT_TEMPO};
