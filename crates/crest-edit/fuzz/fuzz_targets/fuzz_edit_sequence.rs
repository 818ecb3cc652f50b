//! Fuzz target for edit sequences.
//!
//! Derives a random sequence of edit operations (including deliberately
//! invalid ranges) from the fuzz input, applies it, then checks the editor's
//! structural invariants and walks the history back to the initial state.

#![no_main]

use crest_buffer::SampleBuffer;
use crest_edit::{FadeCurve, WaveEditor};
use libfuzzer_sys::fuzz_target;

/// Map a byte pair to a time in roughly [-0.25, 1.75] seconds, so ranges fall
/// both inside and outside a ~1 second buffer.
fn time(hi: u8, lo: u8) -> f64 {
    (u16::from_le_bytes([lo, hi]) as f64 / u16::MAX as f64) * 2.0 - 0.25
}

fuzz_target!(|data: &[u8]| {
    // Need a few bytes of parameters plus at least one op triple.
    if data.len() < 8 {
        return;
    }

    let num_channels = (data[0] % 4 + 1) as usize;
    let len = 256 + (data[1] as usize) * 16;
    let max_depth = (data[2] % 8 + 1) as usize;

    let channels: Vec<Vec<f32>> = (0..num_channels)
        .map(|c| {
            (0..len)
                .map(|i| ((i + c * 31) % 97) as f32 / 97.0 - 0.5)
                .collect()
        })
        .collect();
    let buffer = SampleBuffer::from_channels(channels, 1000).expect("generated channels are valid");
    let initial = buffer.clone();
    let mut editor = WaveEditor::with_max_depth(buffer, max_depth);

    let mut clip: Option<SampleBuffer> = None;
    let mut evicted = false;

    for chunk in data[4..].chunks_exact(3) {
        let a = time(chunk[1], chunk[2]);
        let b = time(chunk[2], chunk[1]);
        let undo_full = editor.undo_depth() == editor.max_depth();

        // `applied` is true iff the op pushed an undo snapshot.
        let applied = match chunk[0] % 12 {
            0 => editor.delete(a, b),
            1 => match editor.cut(a, b) {
                Some(segment) => {
                    clip = Some(segment);
                    true
                }
                None => false,
            },
            2 => {
                let _ = editor.copy(a, b);
                false
            }
            3 => match &clip {
                Some(c) => editor.paste(a, c),
                None => false,
            },
            4 => editor.trim(a, b),
            5 => editor.silence(a, b),
            6 => editor.reverse(a, b),
            7 => editor.fade_in(a, b.abs(), FadeCurve::Linear),
            8 => editor.fade_out(a, b.abs(), FadeCurve::Sigmoid),
            9 => {
                editor.gain(a * 6.0);
                true
            }
            10 => editor.normalize(-1.0) != 0.0,
            _ => {
                let _ = editor.undo() || editor.redo();
                false
            }
        };
        if applied && undo_full {
            evicted = true;
        }

        // Structural invariants hold after every step.
        let current = editor.buffer();
        for c in 0..current.num_channels() {
            assert_eq!(current.channel(c).len(), current.len());
        }
        assert!(editor.undo_depth() <= editor.max_depth());
        assert_eq!(current.sample_rate(), 1000);
        assert_eq!(current.num_channels(), num_channels);
    }

    // If the bottom of the undo stack was never evicted, the oldest snapshot
    // is still the initial state and undoing everything must restore it.
    if !evicted {
        while editor.undo() {}
        assert_eq!(editor.buffer(), &initial);
    }
});
