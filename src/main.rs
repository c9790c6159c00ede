use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use classic_connect_four::ai::HeuristicAgent;
use classic_connect_four::config::{AppConfig, ColourChoice, LogTarget, LoggingConfig};
use classic_connect_four::game::{Mode, Session};
use classic_connect_four::highscores::HighscoreStore;
use classic_connect_four::ui::App;

#[derive(Clone, Copy, ValueEnum)]
enum ColourArg {
    Red,
    Yellow,
    Random,
}

impl From<ColourArg> for ColourChoice {
    fn from(arg: ColourArg) -> Self {
        match arg {
            ColourArg::Red => ColourChoice::Red,
            ColourArg::Yellow => ColourChoice::Yellow,
            ColourArg::Random => ColourChoice::Random,
        }
    }
}

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "classic-connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Highscore file (must end in .txt)
    #[arg(short = 'f', long = "file")]
    highscores: Option<PathBuf>,

    /// Player name recorded on the highscore board
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Number of rows (6-100)
    #[arg(short = 'l', long = "lines")]
    rows: Option<usize>,

    /// Number of columns (7-100)
    #[arg(short = 'c', long)]
    columns: Option<usize>,

    /// Colour of the human player
    #[arg(short = 'p', long, value_enum)]
    colour: Option<ColourArg>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Start with breakfast tokens
    #[arg(long)]
    breakfast: bool,

    /// Seed the computer opponent for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let loaded = AppConfig::load_if_present(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();

    // Apply CLI overrides
    if let Some(path) = cli.highscores {
        config.highscores.path = Some(path);
    }
    if let Some(name) = cli.name {
        config.player.name = Some(name);
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(colour) = cli.colour {
        config.player.colour = colour.into();
    }
    if cli.breakfast {
        config.display.breakfast = true;
    }
    if cli.seed.is_some() {
        config.ai.seed = cli.seed;
    }
    config.validate().context("invalid configuration")?;

    let highscore_path = config.highscore_path()?.to_path_buf();

    init_logging(&config.logging)?;
    if !config_found {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    info!(
        rows = config.board.rows,
        columns = config.board.columns,
        highscores = %highscore_path.display(),
        "starting"
    );

    let board = config.board.build()?;
    let agent = HeuristicAgent::new(config.ai.seed);
    let mut session = Session::new(
        board,
        Box::new(agent),
        config.player.colour.to_player(),
        config.ai.seed,
    );
    if let Some(name) = &config.player.name {
        session.set_player_name(name)?;
    }
    session.attach_highscores(HighscoreStore::open(highscore_path));
    if config.display.breakfast {
        session.set_mode(Mode::Breakfast);
    }

    run(App::new(session)).context("terminal UI failed")
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .with_context(|| format!("invalid logging.filter '{}'", logging.filter))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match logging.target() {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        LogTarget::Discard => builder.with_writer(io::sink).init(),
    }
    Ok(())
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
