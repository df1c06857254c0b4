mod broadcaster;
mod commands;
mod snake_session;
mod sound;
mod tick_timer;

pub use broadcaster::{GameBroadcaster, GameEvent};
pub use commands::GameCommand;
pub use snake_session::{SessionReport, SnakeSession};
pub use sound::{SilentSoundPlayer, SoundCue, SoundPlayer};
pub use tick_timer::TickTimer;
