mod command;
mod config;
mod session;

use clap::Parser;
use snake_engine::{GameController, Mode, SessionRng, log, logger};

use config::{DEFAULT_CONFIG_FILE, get_config_manager};

#[derive(Parser)]
#[command(name = "snake_runner", about = "Headless driver for the snake grid engine")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for the game's random source, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Start in wraparound mode regardless of the config file
    #[arg(long)]
    wraparound: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every food spawn
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config = get_config_manager(&args.config).get_config()?;

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {}x{} game with seed {}",
        config.game.rows,
        config.game.cols,
        rng.seed()
    );

    let mut engine = config.game.create_engine(rng);
    if args.wraparound {
        engine.set_mode(Mode::Wraparound);
    }

    let mut controller = GameController::new(engine);
    controller.set_step_speed(config.step_speed);

    session::run_session(controller, config.show_grid).await?;

    log!("Runner shut down");
    Ok(())
}
