use minichess::board::{Position, Side};
use minichess::io::load_board;
use minichess::perft::{divide, perft};
use minichess::search::BoardState;
use std::path::PathBuf;
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Count generated-move tree nodes for a minichess position")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// JSON board file; start position if omitted
    #[arg(long)]
    board: Option<PathBuf>,
    /// Side to move
    #[arg(long, default_value = "white")]
    side: String,
    /// Print per-move node counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();
    let side: Side = args.side.parse().map_err(anyhow::Error::msg)?;
    let position = match args.board {
        Some(ref p) => load_board(p)?,
        None => Position::startpos(),
    };
    let state = BoardState::new(position, side);

    let t0 = Instant::now();
    if args.divide {
        for (mv, n) in divide(&state, args.depth)? { println!("{mv}: {n}"); }
    }
    let nodes = perft(&state, args.depth)?;
    let dt = t0.elapsed().as_secs_f64();
    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
