use std::f32::consts::TAU;

pub const SAMPLE_RATE: u32 = 44_100;

/// One note of a tune: frequency in Hz (0 for a rest) and length in seconds.
#[derive(Clone, Copy, Debug)]
pub struct Note {
    pub freq: f32,
    pub seconds: f32,
}

const fn note(freq: f32, seconds: f32) -> Note {
    Note { freq, seconds }
}

const START_TUNE: [Note; 4] = [
    note(523.25, 0.09),
    note(659.25, 0.09),
    note(783.99, 0.09),
    note(1046.5, 0.18),
];

const EAT_TUNE: [Note; 2] = [note(880.0, 0.06), note(1318.5, 0.09)];

const GAME_OVER_TUNE: [Note; 4] = [
    note(392.0, 0.18),
    note(349.23, 0.18),
    note(311.13, 0.18),
    note(261.63, 0.4),
];

const BACKGROUND_TUNE: [Note; 16] = [
    note(261.63, 0.25),
    note(329.63, 0.25),
    note(392.0, 0.25),
    note(329.63, 0.25),
    note(349.23, 0.25),
    note(440.0, 0.25),
    note(392.0, 0.5),
    note(0.0, 0.25),
    note(392.0, 0.25),
    note(349.23, 0.25),
    note(329.63, 0.25),
    note(293.66, 0.25),
    note(329.63, 0.25),
    note(261.63, 0.25),
    note(261.63, 0.5),
    note(0.0, 0.25),
];

pub fn start_samples() -> Vec<f32> {
    render_tune(&START_TUNE, 0.7)
}

pub fn eat_samples() -> Vec<f32> {
    render_tune(&EAT_TUNE, 0.8)
}

pub fn game_over_samples() -> Vec<f32> {
    render_tune(&GAME_OVER_TUNE, 0.6)
}

/// One pass of the background loop; the backend repeats it.
#[cfg_attr(not(feature = "audio"), allow(dead_code))]
pub fn background_samples() -> Vec<f32> {
    render_tune(&BACKGROUND_TUNE, 0.4)
}

/// Renders notes back to back as soft sine tones with a short attack and decay.
pub fn render_tune(notes: &[Note], gain: f32) -> Vec<f32> {
    let mut samples = Vec::new();
    for n in notes {
        let count = (n.seconds * SAMPLE_RATE as f32) as usize;
        let fade = (count / 10).max(1);
        for i in 0..count {
            if n.freq <= 0.0 {
                samples.push(0.0);
                continue;
            }
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = if i < fade {
                i as f32 / fade as f32
            } else if i + fade > count {
                (count - i) as f32 / fade as f32
            } else {
                1.0
            };
            samples.push((TAU * n.freq * t).sin() * envelope * gain * 0.3);
        }
    }
    samples
}
