/// Where synthesized samples end up. Lives on the audio thread only.
pub trait AudioBackend {
    fn play_effect(&mut self, samples: Vec<f32>, volume: f32) -> Result<(), String>;

    fn set_background(&mut self, playing: bool, volume: f32) -> Result<(), String>;
}

#[cfg(feature = "audio")]
pub fn open_default_backend() -> Result<Box<dyn AudioBackend>, String> {
    Ok(Box::new(rodio_backend::RodioBackend::open()?))
}

#[cfg(not(feature = "audio"))]
pub fn open_default_backend() -> Result<Box<dyn AudioBackend>, String> {
    Ok(Box::new(LoggingBackend))
}

/// Stand-in when the binary is built without sound support.
#[cfg(not(feature = "audio"))]
struct LoggingBackend;

#[cfg(not(feature = "audio"))]
impl AudioBackend for LoggingBackend {
    fn play_effect(&mut self, samples: Vec<f32>, _volume: f32) -> Result<(), String> {
        common::log!("Audio disabled, skipping effect of {} samples", samples.len());
        Ok(())
    }

    fn set_background(&mut self, playing: bool, _volume: f32) -> Result<(), String> {
        common::log!("Audio disabled, background music {}", if playing { "on" } else { "off" });
        Ok(())
    }
}

#[cfg(feature = "audio")]
mod rodio_backend {
    use rodio::buffer::SamplesBuffer;
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

    use super::super::synth::{background_samples, SAMPLE_RATE};
    use super::AudioBackend;

    pub struct RodioBackend {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        background: Option<Sink>,
    }

    impl RodioBackend {
        pub fn open() -> Result<Self, String> {
            let (stream, handle) =
                OutputStream::try_default().map_err(|e| format!("No audio output device: {}", e))?;
            Ok(Self {
                _stream: stream,
                handle,
                background: None,
            })
        }
    }

    impl AudioBackend for RodioBackend {
        fn play_effect(&mut self, samples: Vec<f32>, volume: f32) -> Result<(), String> {
            let sink = Sink::try_new(&self.handle).map_err(|e| format!("Failed to create sink: {}", e))?;
            sink.set_volume(volume);
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
            Ok(())
        }

        fn set_background(&mut self, playing: bool, volume: f32) -> Result<(), String> {
            if !playing {
                if let Some(sink) = &self.background {
                    sink.pause();
                }
                return Ok(());
            }

            if self.background.is_none() {
                let sink = Sink::try_new(&self.handle).map_err(|e| format!("Failed to create sink: {}", e))?;
                sink.append(SamplesBuffer::new(1, SAMPLE_RATE, background_samples()).repeat_infinite());
                self.background = Some(sink);
            }
            if let Some(sink) = &self.background {
                sink.set_volume(volume);
                sink.play();
            }
            Ok(())
        }
    }
}
