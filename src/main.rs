//! Command line front end: deal or read a hand, then play it by hand or
//! let the solver play it.

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use flexi_logger::Logger;
use log::{info, warn};

use linear_domino::core::{GameConfig, GameRng, GameState, Mode, TileSequence, DEFAULT_HAND_SIZE};
use linear_domino::games::linear::{deal_hand, LinearDomino};
use linear_domino::input::{InputError, TokenReader};
use linear_domino::render::{progress_line, render_move, render_moves, render_table};
use linear_domino::rules::RulesEngine;
use linear_domino::solver::{Progress, Solver};

const PROGRESS_WIDTH: usize = 50;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ModeCli {
    /// Enter moves one at a time
    Interactive,
    /// Let the solver play the whole hand
    Ai,
}

impl From<ModeCli> for Mode {
    fn from(cli: ModeCli) -> Self {
        match cli {
            ModeCli::Interactive => Mode::Interactive,
            ModeCli::Ai => Mode::Ai,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "domino", about = "Linear domino with special tiles")]
struct Cli {
    /// Play mode
    #[arg(short, long, value_enum, default_value = "ai")]
    mode: ModeCli,

    /// Read the hand from stdin (a count, then `left right` pairs) instead of dealing one
    #[arg(short, long, default_value_t = false)]
    tiles: bool,

    /// Number of tiles to deal
    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Dealer seed, drawn at random when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Do not draw the solver progress bar
    #[arg(long, default_value_t = false)]
    no_progress: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_mode(self.mode.into())
            .with_hand_size(self.hand_size)
            .with_progress(!self.no_progress);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

/// Progress bar redrawn in place on stderr.
struct TerminalProgress;

impl Progress for TerminalProgress {
    fn on_branch(&mut self, index: usize, total: usize) {
        eprint!("\r{}", progress_line(index, total, PROGRESS_WIDTH));
    }

    fn on_finish(&mut self) {
        eprintln!("\r{}", progress_line(1, 1, PROGRESS_WIDTH));
    }
}

fn play_interactive<R: BufRead>(
    rules: &LinearDomino,
    hand: TileSequence,
    reader: &mut TokenReader<R>,
) -> linear_domino::Result<()> {
    let mut state = GameState::new(hand);
    let mut stdout = io::stdout();

    while !rules.is_over(&state) {
        println!("{}", render_table(&state.field, &state.hand));
        print!("\nPlayer move: ");
        stdout.flush()?;

        let (end, tile) = match reader.read_move() {
            Ok(Some(mv)) => mv,
            Ok(None) => {
                warn!("input ended with moves still available");
                break;
            }
            Err(InputError::Io(err)) => return Err(err.into()),
            Err(err) => {
                warn!("{}", err);
                continue;
            }
        };

        if !rules.play(&mut state, end, tile) {
            let legal = rules.legal_moves(&state.field, &state.hand);
            warn!("move {} {} not applied, {} legal moves available", end, tile, legal.len());
            if let Some(hint) = legal.first() {
                println!("Try: {}", render_move(hint));
            }
        }
    }

    println!("{}", render_table(&state.field, &state.hand));
    println!("Points: {}", rules.score(&state.field));
    Ok(())
}

fn play_ai(rules: LinearDomino, hand: &TileSequence, show_progress: bool) {
    let mut solver = Solver::new(rules);
    if show_progress {
        solver = solver.with_progress(TerminalProgress);
    }

    let solution = solver.solve_hand(hand);

    println!("{}", render_table(&solution.field, &solution.hand));
    println!("Moves: {}", render_moves(&solution.moves));
    println!("\nPoints: {}", solution.score);
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)?
        .format(flexi_logger::colored_default_format)
        .start()?;

    let config = cli.config();
    config.validate()?;

    let mut reader = TokenReader::new(io::stdin().lock());

    let hand = if cli.tiles {
        reader.read_hand()?
    } else {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!("dealing {} tiles with seed {}", config.hand_size, rng.seed());
        deal_hand(&mut rng, config.hand_size)
    };

    let rules = LinearDomino::new();

    match config.mode {
        Mode::Interactive => play_interactive(&rules, hand, &mut reader)?,
        Mode::Ai => play_ai(rules, &hand, config.show_progress),
    }

    Ok(())
}
