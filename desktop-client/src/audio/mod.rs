mod backend;
mod synth;

use common::session::{SoundCue, SoundPlayer};
use common::{log, log_warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;

use crate::config::AudioConfig;
use backend::{open_default_backend, AudioBackend};

#[derive(Clone, Copy, Debug, PartialEq)]
enum AudioRequest {
    Unlock,
    Cue(SoundCue),
    SetEffectsMuted(bool),
    SetBackgroundMuted(bool),
}

type BackendOpener = Box<dyn FnMut() -> Result<Box<dyn AudioBackend>, String> + Send>;

/// Owns the output device. Runs on its own thread so cues never block the game.
struct AudioWorker {
    open_backend: BackendOpener,
    backend: Option<Box<dyn AudioBackend>>,
    unlocked: bool,
    effects_muted: bool,
    background_muted: bool,
    effects_volume: f32,
    background_volume: f32,
    /// A round is running, so the background loop should be audible.
    background_wanted: bool,
}

impl AudioWorker {
    fn new(config: &AudioConfig, open_backend: BackendOpener) -> Self {
        Self {
            open_backend,
            backend: None,
            unlocked: false,
            effects_muted: config.effects_muted,
            background_muted: config.background_muted,
            effects_volume: config.effects_volume,
            background_volume: config.background_volume,
            background_wanted: false,
        }
    }

    fn run(mut self, requests: mpsc::Receiver<AudioRequest>) {
        while let Ok(request) = requests.recv() {
            self.handle(request);
        }
        log!("Audio thread stopped");
    }

    fn handle(&mut self, request: AudioRequest) {
        match request {
            AudioRequest::Unlock => {
                if !self.unlocked {
                    self.unlocked = true;
                    self.ensure_backend();
                }
            }
            AudioRequest::Cue(cue) => self.play_cue(cue),
            AudioRequest::SetEffectsMuted(muted) => self.effects_muted = muted,
            AudioRequest::SetBackgroundMuted(muted) => {
                self.background_muted = muted;
                self.apply_background();
            }
        }
    }

    /// Opens the device on demand; a failed attempt is retried on the next cue.
    fn ensure_backend(&mut self) -> bool {
        if self.backend.is_some() {
            return true;
        }
        match (self.open_backend)() {
            Ok(backend) => {
                log!("Audio output ready");
                self.backend = Some(backend);
                true
            }
            Err(e) => {
                log_warn!("Audio unavailable: {}", e);
                false
            }
        }
    }

    fn play_cue(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::Start => self.background_wanted = true,
            SoundCue::GameOver => self.background_wanted = false,
            SoundCue::Eat => {}
        }

        if !self.unlocked || !self.ensure_backend() {
            return;
        }

        if !self.effects_muted {
            let samples = match cue {
                SoundCue::Start => synth::start_samples(),
                SoundCue::Eat => synth::eat_samples(),
                SoundCue::GameOver => synth::game_over_samples(),
            };
            let volume = self.effects_volume;
            if let Some(backend) = self.backend.as_mut()
                && let Err(e) = backend.play_effect(samples, volume)
            {
                log_warn!("Failed to play {:?}: {}", cue, e);
            }
        }

        self.apply_background();
    }

    fn apply_background(&mut self) {
        let playing = self.background_wanted && !self.background_muted;
        let volume = self.background_volume;
        if let Some(backend) = self.backend.as_mut()
            && let Err(e) = backend.set_background(playing, volume)
        {
            log_warn!("Failed to update background music: {}", e);
        }
    }
}

/// Fire-and-forget front end of the audio thread.
pub struct AudioManager {
    requests: mpsc::Sender<AudioRequest>,
    effects_muted: AtomicBool,
    background_muted: AtomicBool,
}

impl AudioManager {
    pub fn new(config: &AudioConfig) -> Self {
        Self::with_backend(config, Box::new(open_default_backend))
    }

    fn with_backend(config: &AudioConfig, open_backend: BackendOpener) -> Self {
        let (tx, rx) = mpsc::channel();
        // The backend holds the output stream, which must stay on the audio thread.
        let worker_config = config.clone();
        if let Err(e) = thread::Builder::new()
            .name("audio".to_string())
            .spawn(move || AudioWorker::new(&worker_config, open_backend).run(rx))
        {
            log_warn!("Failed to start audio thread: {}", e);
        }

        Self {
            requests: tx,
            effects_muted: AtomicBool::new(config.effects_muted),
            background_muted: AtomicBool::new(config.background_muted),
        }
    }

    /// Called on the first user interaction.
    pub fn unlock(&self) {
        self.send(AudioRequest::Unlock);
    }

    pub fn effects_muted(&self) -> bool {
        self.effects_muted.load(Ordering::Relaxed)
    }

    pub fn background_muted(&self) -> bool {
        self.background_muted.load(Ordering::Relaxed)
    }

    pub fn toggle_effects_muted(&self) -> bool {
        let muted = !self.effects_muted.fetch_xor(true, Ordering::Relaxed);
        self.send(AudioRequest::SetEffectsMuted(muted));
        muted
    }

    pub fn toggle_background_muted(&self) -> bool {
        let muted = !self.background_muted.fetch_xor(true, Ordering::Relaxed);
        self.send(AudioRequest::SetBackgroundMuted(muted));
        muted
    }

    fn send(&self, request: AudioRequest) {
        // The thread only goes away if it failed to spawn; sound is optional.
        let _ = self.requests.send(request);
    }
}

impl SoundPlayer for AudioManager {
    fn play(&self, cue: SoundCue) {
        self.send(AudioRequest::Cue(cue));
    }
}
