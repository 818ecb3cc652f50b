//! Example: a complete edit session over a generated test tone.
//!
//! Builds a stereo sine buffer, runs a typical sequence of edits, shows the
//! undo/redo stacks in action, and prints the journal JSON at the end.
//!
//! Run with: `cargo run --example edit_session`

use crest_buffer::SampleBuffer;
use crest_edit::{FadeCurve, WaveEditor};

fn main() -> crest_edit::Result<()> {
    // "Decode" two seconds of stereo tone at 44.1 kHz.
    let sample_rate = 44_100;
    let tone = |freq: f32| -> Vec<f32> {
        (0..sample_rate * 2)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin() * 0.4)
            .collect()
    };
    let decoded = SampleBuffer::from_channels(vec![tone(440.0), tone(330.0)], sample_rate as u32)?;

    let mut editor = WaveEditor::new(decoded);
    println!(
        "loaded: {:.2}s, {} channels at {} Hz, peak {:.3}, rms {:.3}",
        editor.duration(),
        editor.num_channels(),
        editor.sample_rate(),
        editor.peak(),
        editor.rms()
    );

    // Rearrange: move the first half second to the end.
    let clip = editor.cut(0.0, 0.5).expect("range is valid");
    editor.paste(editor.duration(), &clip);
    println!("after cut+paste: {:.2}s", editor.duration());

    // Clean up the edit point and shape the ends.
    editor.silence(1.45, 1.55);
    editor.fade_in(0.0, 0.25, FadeCurve::Exponential);
    editor.fade_out(1.75, 0.25, FadeCurve::Sigmoid);

    // Level to -1 dBFS.
    let gain = editor.normalize(-1.0);
    println!(
        "normalized with gain {gain:.4}: peak {:.4} at {:.3}s",
        editor.peak(),
        editor.peak_time()
    );

    // Change of heart: walk back the normalize, then reapply it.
    editor.undo();
    println!("undone: peak back to {:.4}", editor.peak());
    editor.redo();
    println!(
        "redone: peak {:.4} ({} undoable edits)",
        editor.peak(),
        editor.undo_depth()
    );

    // Hand a frozen copy to the (imaginary) player.
    let for_playback = editor.to_buffer();
    println!("exported {} samples for playback", for_playback.len());

    println!("\nsession journal:\n{}", editor.journal().to_json()?);
    Ok(())
}
