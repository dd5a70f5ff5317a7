//! Console Gomoku
//!
//! Plays one match between any two of: a human at the terminal, the
//! alpha-beta engine, and the greedy one-ply player.

use std::error::Error;
use std::io;
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::info;

use gomoku::config::{MatchConfig, PlayerConfig, PlayerKind, DEFAULT_DEPTH};
use gomoku::game::play_match;
use gomoku::menu::select_match;
use gomoku::{Player, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

fn main() -> Result<(), Box<dyn Error>> {
    let matches = cli().get_matches();
    setup_logging(&matches)?;

    let mut config = MatchConfig {
        board_size: matches
            .get_one::<u64>("size")
            .map_or(DEFAULT_BOARD_SIZE, |&size| size as usize),
        seed: matches.get_one::<u64>("seed").copied(),
        time_limit: matches
            .get_one::<u64>("timeLimit")
            .map(|&ms| Duration::from_millis(ms)),
        order_moves: matches.get_flag("orderMoves"),
        ..MatchConfig::default()
    };

    let white = player_from_args(&matches, "white", "whiteDepth")?;
    let black = player_from_args(&matches, "black", "blackDepth")?;
    if white.is_none() && black.is_none() {
        config = select_match(&mut io::stdin(), &mut io::stdout(), config)?;
    } else {
        config.white = white.unwrap_or(config.white);
        config.black = black.unwrap_or(config.black);
    }
    config.validate()?;

    info!(
        "Starting {}x{} match: {} (White) vs {} (Black)",
        config.board_size, config.board_size, config.white, config.black
    );

    let mut board = config.new_board()?;
    let mut white = config.build_controller(Player::White)?;
    let mut black = config.build_controller(Player::Black)?;

    play_match(&mut board, white.as_mut(), black.as_mut(), &mut io::stdout())?;
    Ok(())
}

fn cli() -> Command {
    let player_arg = |id: &'static str, help: &'static str| {
        Arg::new(id)
            .long(id)
            .value_name("PLAYER")
            .help(help)
            .num_args(1)
            .value_parser(["human", "search", "greedy"])
    };
    let depth_arg = |id: &'static str, long: &'static str, help: &'static str| {
        Arg::new(id)
            .long(long)
            .value_name("PLIES")
            .help(help)
            .num_args(1)
            .value_parser(value_parser!(u8).range(1..))
    };

    Command::new("gomoku")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Gomoku on the console, with an alpha-beta opponent")
        .arg(player_arg("white", "Who plays White (moves first)"))
        .arg(player_arg("black", "Who plays Black"))
        .arg(depth_arg("whiteDepth", "white-depth", "Search depth of a White search player"))
        .arg(depth_arg("blackDepth", "black-depth", "Search depth of a Black search player"))
        .arg(
            Arg::new("size")
                .short('s')
                .long("size")
                .help("Board size")
                .num_args(1)
                .default_value("15")
                .value_parser(value_parser!(u64).range(1..=MAX_BOARD_SIZE as u64)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed the tie-break of the automated players")
                .num_args(1)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("timeLimit")
                .long("time-limit")
                .value_name("MS")
                .help("Stop searching new root moves after this many milliseconds")
                .num_args(1)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("orderMoves")
                .long("order-moves")
                .help("Search the most promising moves first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("logfile")
                .short('l')
                .long("logfile")
                .value_name("gomoku.log")
                .help("Name of debug logfile")
                .num_args(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more to stderr (repeat for debug output)")
                .action(ArgAction::Count),
        )
}

fn player_from_args(
    matches: &ArgMatches,
    kind_id: &str,
    depth_id: &str,
) -> Result<Option<PlayerConfig>, Box<dyn Error>> {
    let Some(kind) = matches.get_one::<String>(kind_id) else {
        return Ok(None);
    };
    let depth = matches.get_one::<u8>(depth_id).copied().unwrap_or(DEFAULT_DEPTH);
    Ok(Some(PlayerConfig {
        kind: kind.parse::<PlayerKind>()?,
        depth,
    }))
}

fn setup_logging(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let stderr_level = match matches.get_count("verbose") {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    if let Some(log_file) = matches.get_one::<String>("logfile") {
        log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(log::LevelFilter::Debug)
                    .chain(fern::log_file(log_file)?),
            )
            .chain(fern::Dispatch::new().level(stderr_level).chain(io::stderr()))
            .apply()?;
    } else {
        log_dispatcher.level(stderr_level).chain(io::stderr()).apply()?;
    }
    Ok(())
}
