use std::ops::RangeInclusive;

/// White-key characters, 5 octaves + 1 note (C2..=C7)
pub const WHITE_KEYS: &[u8; 36] = b"1234567890qwertyuiopasdfghjklzxcvbnm";

/// Black-key characters, 5 octaves + 1 note (C#2..=C#7)
pub const BLACK_KEYS: &[u8; 26] = b"!@$%^*&(QWETYIOPSDGHJLZCVB";

/// Pitch classes of the white keys: C D E F G A B
pub const WHITE_PITCH_CLASSES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Pitch classes of the black keys: C# D# F# G# A#
pub const BLACK_PITCH_CLASSES: [u8; 5] = [1, 3, 6, 8, 10];

/// MIDI note that maps to octave 0 of the layout (C2)
pub const BASE_NOTE: u8 = 36;

/// Map a MIDI note number to its key character.
///
/// Returns `None` for notes the keyboard cannot represent.
pub fn note_to_char(note: u8) -> Option<char> {
    let octave = (note as i32 - BASE_NOTE as i32).div_euclid(12);
    let pitch_class = note % 12;

    if let Some(pos) = WHITE_PITCH_CLASSES.iter().position(|&pc| pc == pitch_class) {
        lookup(WHITE_KEYS, pos as i32 + octave * 7)
    } else if let Some(pos) = BLACK_PITCH_CLASSES.iter().position(|&pc| pc == pitch_class) {
        lookup(BLACK_KEYS, pos as i32 + octave * 5)
    } else {
        None
    }
}

fn lookup(keys: &[u8], idx: i32) -> Option<char> {
    usize::try_from(idx)
        .ok()
        .and_then(|idx| keys.get(idx))
        .map(|&b| b as char)
}

/// Inverse of [`note_to_char`]: the MIDI note a key character plays
pub fn char_to_note(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    let byte = ch as u8;

    if let Some(idx) = WHITE_KEYS.iter().position(|&b| b == byte) {
        let octave = (idx / 7) as u8;
        return Some(BASE_NOTE + octave * 12 + WHITE_PITCH_CLASSES[idx % 7]);
    }
    if let Some(idx) = BLACK_KEYS.iter().position(|&b| b == byte) {
        let octave = (idx / 5) as u8;
        return Some(BASE_NOTE + octave * 12 + BLACK_PITCH_CLASSES[idx % 5]);
    }
    None
}

/// The span of MIDI notes the layout can play (C2..=C#7)
pub fn playable_range() -> RangeInclusive<u8> {
    // Both alphabets end one note into the sixth octave: C7 (white) then C#7 (black).
    BASE_NOTE..=BASE_NOTE + 5 * 12 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_notes() {
        assert_eq!(note_to_char(36), Some('1')); // C2
        assert_eq!(note_to_char(38), Some('2')); // D2
        assert_eq!(note_to_char(37), Some('!')); // C#2
        assert_eq!(note_to_char(48), Some('8')); // C3
        assert_eq!(note_to_char(60), Some('t')); // C4
        assert_eq!(note_to_char(96), Some('m')); // C7
        assert_eq!(note_to_char(97), Some('B')); // C#7
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(note_to_char(0), None);
        assert_eq!(note_to_char(35), None);
        assert_eq!(note_to_char(34), None);
        assert_eq!(note_to_char(98), None);
        assert_eq!(note_to_char(127), None);
    }

    #[test]
    fn test_playable_notes_are_contiguous() {
        let playable: Vec<u8> = (0..=127u8).filter(|&n| note_to_char(n).is_some()).collect();
        assert_eq!(playable.len(), WHITE_KEYS.len() + BLACK_KEYS.len());
        assert_eq!(playable.len(), 62);
        assert_eq!(playable, playable_range().collect::<Vec<_>>());
    }

    #[test]
    fn test_every_key_is_used_once() {
        let mut chars: Vec<char> = playable_range().filter_map(note_to_char).collect();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), 62);
    }

    #[test]
    fn test_char_to_note() {
        assert_eq!(char_to_note('1'), Some(36));
        assert_eq!(char_to_note('!'), Some(37));
        assert_eq!(char_to_note('m'), Some(96));
        assert_eq!(char_to_note('B'), Some(97));
        assert_eq!(char_to_note('['), None);
        assert_eq!(char_to_note('é'), None);
    }

    proptest! {
        #[test]
        fn prop_note_to_char_is_total(note in 0u8..=127) {
            let first = note_to_char(note);
            prop_assert_eq!(first, note_to_char(note));
            prop_assert_eq!(first.is_some(), playable_range().contains(&note));
        }

        #[test]
        fn prop_char_round_trips(note in 36u8..=97) {
            let ch = note_to_char(note).unwrap();
            prop_assert_eq!(char_to_note(ch), Some(note));
        }
    }
}
