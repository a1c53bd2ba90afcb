use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use minichess::board::{Position, Side};
use minichess::io::{load_board, load_scoring};
use minichess::protocol::Engine;
use minichess::render::{render, Glyphs};
use minichess::search::scoring::Scoring;
use minichess::search::{SearchParams, Searcher};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick a move for a 5x5 minichess position", long_about = None)]
struct Args {
    /// JSON board file ({"a0": ["Rook", "White"], ...}); start position if omitted
    #[arg(long)]
    board: Option<PathBuf>,

    /// Side to move: 'white' or 'black'
    #[arg(long, default_value = "white")]
    side: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Built-in scoring profile: 'classic' or 'heavy-king'
    #[arg(long, default_value = "classic")]
    profile: String,

    /// JSON scoring profile (overrides --profile)
    #[arg(long)]
    scoring: Option<PathBuf>,

    /// Disable alpha-beta cutoffs (plain minimax)
    #[arg(long)]
    no_prune: bool,

    /// Print the search result as JSON
    #[arg(long)]
    json: bool,

    /// Render the board with ASCII letters instead of chess glyphs
    #[arg(long)]
    ascii: bool,

    /// Run the line protocol on stdin/stdout instead of a single search
    #[arg(long)]
    protocol: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let side: Side = args.side.parse().map_err(anyhow::Error::msg)?;
    let scoring = match args.scoring {
        Some(ref path) => load_scoring(path).with_context(|| format!("loading scoring profile {}", path.display()))?,
        None => match Scoring::named(&args.profile) {
            Some(s) => s,
            None => bail!("unknown scoring profile `{}`", args.profile),
        },
    };
    let params = SearchParams { depth: args.depth, use_pruning: !args.no_prune, scoring };

    if args.protocol {
        info!("starting protocol loop depth={}", params.depth);
        Engine::new(params).run_loop()?;
        return Ok(());
    }

    let position = match args.board {
        Some(ref path) => load_board(path).with_context(|| format!("loading board {}", path.display()))?,
        None => Position::startpos(),
    };

    if !args.json {
        let glyphs = if args.ascii { Glyphs::Ascii } else { Glyphs::Unicode };
        println!("{}", render(&position, glyphs));
        println!("{} to move, depth {}", side, params.depth);
    }

    let start = Instant::now();
    let mut searcher = Searcher::new(params);
    let result = searcher.search(&position, side)?;
    let elapsed = start.elapsed();
    info!("searched {} nodes in {:.3}s", result.nodes, elapsed.as_secs_f64());

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        match result.bestmove {
            Some(mv) => println!("bestmove {} score {} nodes {}", mv, result.score, result.nodes),
            None => println!("bestmove none score {}", result.score),
        }
    }
    Ok(())
}
