use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use minichess::search::scoring::Scoring;
use minichess::selfplay::{generate_games_with, summarize, write_games, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "minichess-selfplay", about = "Play engine games from the start position and write JSONL records")]
struct Args {
    #[arg(long, default_value_t = 20)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 3)]
    depth: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Black answers with uniformly random moves
    #[arg(long, default_value_t = false)]
    random_black: bool,
    /// Random moves for both sides during the first N plies
    #[arg(long, default_value_t = 2)]
    random_opening_plies: usize,
    #[arg(long, default_value = "classic")]
    profile: String,
    /// Worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let scoring = Scoring::named(&a.profile).ok_or_else(|| anyhow::anyhow!("unknown scoring profile `{}`", a.profile))?;
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        depth: a.depth,
        seed: a.seed,
        random_black: a.random_black,
        random_opening_plies: a.random_opening_plies,
        scoring,
    };

    let pb = ProgressBar::new(params.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {elapsed_precise}")?);
    let run = || generate_games_with(&params, |_| pb.inc(1));
    let games = if a.threads > 0 {
        rayon::ThreadPoolBuilder::new().num_threads(a.threads).build()?.install(run)?
    } else {
        run()?
    };
    pb.finish();

    write_games(&games, &a.out)?;
    let s = summarize(&games);
    info!("wrote {} games to {}", games.len(), a.out.display());
    println!("white={} black={} draw={} -> {}", s.white_wins, s.black_wins, s.draws, a.out.display());
    Ok(())
}
