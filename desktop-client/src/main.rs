mod app;
mod audio;
mod broadcaster;
mod colors;
mod config;
mod effects;
mod food_sprites;
mod game_view;
mod input;
mod state;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::InputSurface;
use common::session::{GameCommand, SnakeSession, SoundPlayer};
use common::{log, log_error, logger};
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use app::KidsSnakeApp;
use audio::AudioManager;
use broadcaster::LocalBroadcaster;
use game_view::BoardView;
use state::SharedState;

#[derive(Parser)]
#[command(name = "kids_snake")]
struct Args {
    /// Config file (defaults to kids_snake_config.yaml next to the executable)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the touch tick speed and show on-screen arrows
    #[arg(long)]
    touch: bool,

    /// Start with sound effects and music muted
    #[arg(long)]
    mute: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let mut config = config::get_config_manager(&config_path).get_config()?;
    log!("Loaded config from {}", config_path.display());

    if args.touch {
        config.input.touch_surface = true;
    }
    if args.mute {
        config.audio.effects_muted = true;
        config.audio.background_muted = true;
    }

    let surface = if config.input.touch_surface {
        InputSurface::Touch
    } else {
        InputSurface::Desktop
    };

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let shared_state = SharedState::new(config.game.grid(), command_tx);
    let audio = Arc::new(AudioManager::new(&config.audio));

    let settings = config.game.clone();
    let broadcaster = LocalBroadcaster::new(shared_state.clone());
    let sound: Arc<dyn SoundPlayer> = audio.clone();
    let session_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log_error!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(async {
            let session = SnakeSession::new(&settings, surface, SessionRng::from_random(), broadcaster, sound);
            session.run(command_rx).await;
        });
    });

    let board = BoardView::new(config.game.cell_size, config.game.canvas_size);
    let side = config.game.canvas_size as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 80.0, side + if config.input.touch_surface { 330.0 } else { 170.0 }])
            .with_title("Kids Snake"),
        ..Default::default()
    };

    let app_state = shared_state.clone();
    let swipe_threshold = config.input.swipe_threshold;
    let touch_controls = config.input.touch_surface;
    eframe::run_native(
        "Kids Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(KidsSnakeApp::new(
                app_state,
                audio,
                board,
                swipe_threshold,
                touch_controls,
            )))
        }),
    )?;

    shared_state.send(GameCommand::Shutdown);
    if session_thread.join().is_err() {
        log_error!("Game session thread panicked");
    }

    Ok(())
}
