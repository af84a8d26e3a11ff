//! Scoreboard CLI: one command per invocation against a JSON state file.
//!
//! Every successful command prints a JSON report on stdout; failures print an
//! error report on stderr and exit non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use scoreboard::domain::session::CardGame;
use scoreboard::domain::state::PlayerId;
use scoreboard::telemetry;
use scoreboard::{
    AppError, CommandReport, GameMode, JsonFileStore, LogFormat, ScoreboardService, StoreConfig,
};
use tracing::error;

#[derive(Parser)]
#[command(name = "scoreboard")]
#[command(about = "Scorekeeping for Boerenbridge and Schoppenvrouwen")]
struct Args {
    /// State file (overrides SCOREBOARD_STATE_PATH)
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    /// Log output format (overrides SCOREBOARD_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Generic,
    Boerenbridge,
    Schoppenvrouwen,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Generic => GameMode::Generic,
            ModeArg::Boerenbridge => GameMode::BoerenBridge,
            ModeArg::Schoppenvrouwen => GameMode::Schoppenvrouwen,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameArg {
    Boerenbridge,
    Schoppenvrouwen,
}

impl From<GameArg> for CardGame {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::Boerenbridge => CardGame::BoerenBridge,
            GameArg::Schoppenvrouwen => CardGame::Schoppenvrouwen,
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Select the game mode
    Mode { mode: ModeArg },
    /// Start a new card game (overwrites the current one)
    Start {
        game: GameArg,
        /// Player ids in seating order
        #[arg(long, num_args = 1.., value_delimiter = ',', required = true)]
        players: Vec<PlayerId>,
        /// Seat of the first dealer
        #[arg(long, default_value = "0")]
        dealer: usize,
    },
    /// Record a Boerenbridge bid in the current round
    Bid {
        player: PlayerId,
        bid: u8,
        /// Accept the value the last bidder is normally not allowed
        #[arg(long)]
        force: bool,
    },
    /// Record tricks taken in the current round
    Tricks { player: PlayerId, tricks: u8 },
    /// Record a Schoppenvrouwen delta, or generic-mode points
    Score {
        player: PlayerId,
        #[arg(allow_hyphen_values = true)]
        score: i64,
        /// Round number (1-based). Schoppenvrouwen defaults to the current
        /// round; generic mode to the player's next unscored round
        #[arg(long)]
        round: Option<usize>,
    },
    /// Rotate the dealer and open the next round
    Advance,
    /// Correct a bid in a past round
    EditBid {
        /// Round number (1-based)
        round: usize,
        player: PlayerId,
        bid: u8,
    },
    /// Correct tricks in a past round
    EditTricks {
        /// Round number (1-based)
        round: usize,
        player: PlayerId,
        tricks: u8,
    },
    /// Correct a Schoppenvrouwen delta in a past round
    EditScore {
        /// Round number (1-based)
        round: usize,
        player: PlayerId,
        #[arg(allow_hyphen_values = true)]
        score: i64,
    },
    /// Move the deal to another seat
    Dealer { seat: usize },
    /// Replace the seating order
    Order {
        #[arg(num_args = 1.., value_delimiter = ',', required = true)]
        players: Vec<PlayerId>,
    },
    /// Manage the player roster
    Player {
        #[command(subcommand)]
        action: PlayerCmd,
    },
    /// Print the current standings
    Status,
    /// Clear the game and the mode
    Reset,
}

#[derive(Subcommand)]
enum PlayerCmd {
    /// Add or rename a player (an empty name removes them)
    Name { id: PlayerId, name: String },
    /// Set or clear the gender tag used by commentary
    Gender { id: PlayerId, gender: Option<String> },
    /// Remove a player from the roster
    Remove { id: PlayerId },
}

/// 1-based round from the command line to a 0-based index.
fn round_index(round: usize) -> Result<usize, AppError> {
    round.checked_sub(1).ok_or_else(|| {
        AppError::invalid(
            scoreboard::errors::ErrorCode::RoundOutOfRange,
            "Round numbers start at 1",
        )
    })
}

fn run(args: Args) -> Result<CommandReport, AppError> {
    let config = match args.state {
        Some(path) => StoreConfig::new(path),
        None => StoreConfig::from_env()?,
    };
    let service = ScoreboardService::new(JsonFileStore::new(config.state_path));

    match args.command {
        Cmd::Mode { mode } => service.select_mode(mode.into()),
        Cmd::Start {
            game,
            players,
            dealer,
        } => service.start(game.into(), players, dealer),
        Cmd::Bid { player, bid, force } => service.bid(player, bid, force),
        Cmd::Tricks { player, tricks } => service.tricks(player, tricks),
        Cmd::Score {
            player,
            score,
            round,
        } => {
            let round = round.map(round_index).transpose()?;
            service.score(player, score, round)
        }
        Cmd::Advance => service.advance(),
        Cmd::EditBid { round, player, bid } => service.edit_bid(round_index(round)?, player, bid),
        Cmd::EditTricks {
            round,
            player,
            tricks,
        } => service.edit_tricks(round_index(round)?, player, tricks),
        Cmd::EditScore {
            round,
            player,
            score,
        } => service.score(player, score, Some(round_index(round)?)),
        Cmd::Dealer { seat } => service.set_dealer(seat),
        Cmd::Order { players } => service.set_order(players),
        Cmd::Player { action } => match action {
            PlayerCmd::Name { id, name } => service.set_player_name(id, &name),
            PlayerCmd::Gender { id, gender } => service.set_player_gender(id, gender),
            PlayerCmd::Remove { id } => service.remove_player(id),
        },
        Cmd::Status => service.status(),
        Cmd::Reset => service.reset(),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let format = match args.log_format {
        Some(arg) => Ok(arg.into()),
        None => LogFormat::from_env(),
    };
    let format = match format {
        Ok(format) => format,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    telemetry::init_tracing(format);

    match run(args).and_then(|report| report.to_json()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = %err.code(), detail = err.detail(), "command failed");
            match serde_json::to_string(&err.report()) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{err}"),
            }
            ExitCode::FAILURE
        }
    }
}
