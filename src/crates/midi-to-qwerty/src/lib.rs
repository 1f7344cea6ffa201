//! MIDI to QWERTY converter library
//!
//! This library converts MIDI files into key text for games and apps that
//! take raw keystrokes as musical input.

pub mod convert;
pub mod error;
pub mod midi;
pub mod output;


// Re-export main types for convenience
pub use convert::{ConvertOptions, Converter};
pub use error::ConvertError;
pub use midi::{MidiData, NoteEvent};
pub use output::OutputFormatter;
pub use qwerty_core::ConversionResult;
