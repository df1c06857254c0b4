use crate::log;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Start,
    Eat,
    GameOver,
}

/// Fire-and-forget audio notifications. Implementations must not block and
/// must swallow their own failures.
pub trait SoundPlayer: Send + Sync {
    fn play(&self, cue: SoundCue);
}

pub struct SilentSoundPlayer;

impl SoundPlayer for SilentSoundPlayer {
    fn play(&self, cue: SoundCue) {
        log!("Sound cue {:?} (audio disabled)", cue);
    }
}
