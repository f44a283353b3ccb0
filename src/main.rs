//! Command-line front-end for the FEN codec and Chess960 generator.
//!
//! Run with:
//! `cargo run -- parse "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"`
//! `cargo run -- chess960 --count 5 --seed 1234 --verbose`

use rand::{rngs::StdRng, SeedableRng};

use plum_fen::config::{usage, CliConfig, Command};
use plum_fen::game_state::board::Board;
use plum_fen::utils::chess960::generate_chess960_fen_with_rng;
use plum_fen::utils::fen_generator::generate_fen;
use plum_fen::utils::fen_parser::parse_fen;
use plum_fen::utils::render_game_state::render_position;

fn main() -> Result<(), String> {
    let config = CliConfig::from_env()?;

    match &config.command {
        Command::Help => println!("{}", usage()),
        Command::Parse(fen) => run_parse(fen, config.verbose)?,
        Command::RoundTrip(fen) => run_round_trip(fen, config.verbose)?,
        Command::Chess960 => run_chess960(&config)?,
    }

    Ok(())
}

fn run_parse(fen: &str, verbose: bool) -> Result<(), String> {
    let position = parse_fen(fen).map_err(|e| e.to_string())?;
    if verbose {
        println!("info string parse pieces {}", position.piece_count());
    }

    println!("{}", render_position(&position));
    println!("white_to_move: {}", position.white_to_move);
    println!(
        "castling: K={} Q={} k={} q={}",
        position.white_castle_kingside,
        position.white_castle_queenside,
        position.black_castle_kingside,
        position.black_castle_queenside
    );
    println!("ep_file: {}", position.ep_file);
    println!("halfmove_clock: {}", position.ply_count);
    Ok(())
}

fn run_round_trip(fen: &str, verbose: bool) -> Result<(), String> {
    for line in round_trip_lines(fen, verbose)? {
        println!("{line}");
    }
    Ok(())
}

fn round_trip_lines(fen: &str, verbose: bool) -> Result<Vec<String>, String> {
    let position = parse_fen(fen).map_err(|e| e.to_string())?;
    let encoded = generate_fen(&Board::from_loaded_position(&position));
    let input = fen.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut lines = Vec::new();
    if verbose {
        lines.push(format!("info string roundtrip input {input}"));
    }
    lines.push(encoded.clone());

    if verbose && encoded != input {
        lines.push("info string roundtrip differs from input".to_owned());
    }
    Ok(lines)
}

fn run_chess960(config: &CliConfig) -> Result<(), String> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if config.verbose {
        match config.seed {
            Some(seed) => println!("info string chess960 seed {seed} count {}", config.count),
            None => println!("info string chess960 seed os count {}", config.count),
        }
    }

    for _ in 0..config.count {
        let fen = generate_chess960_fen_with_rng(&mut rng).map_err(|e| e.to_string())?;
        println!("{fen}");
    }
    Ok(())
}
