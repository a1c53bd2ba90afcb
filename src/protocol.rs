use std::io::{self, BufRead, Write};

use log::warn;

use crate::board::{Position, Side};
use crate::io::parse_board;
use crate::render::{render, Glyphs};
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::state::BoardState;

/// Line-oriented engine loop over stdin/stdout.
///
/// Commands: `newgame`, `position startpos [moves ...]`, `position board <json>`,
/// `side white|black`, `go [depth N]`, `display`, `quit`.
pub struct Engine {
    pos: Position,
    side: Side,
    clock: u32,
    params: SearchParams,
}

impl Engine {
    pub fn new(params: SearchParams) -> Self {
        Self { pos: Position::startpos(), side: Side::White, clock: 0, params }
    }

    pub fn position(&self) -> &Position { &self.pos }

    pub fn side_to_move(&self) -> Side { self.side }

    fn cmd_newgame(&mut self) {
        self.pos = Position::startpos();
        self.side = Side::White;
        self.clock = 0;
    }

    fn cmd_position(&mut self, args: &str) -> Result<(), String> {
        let args = args.trim();
        if let Some(json) = args.strip_prefix("board") {
            self.pos = parse_board(json).map_err(|e| e.to_string())?;
            self.side = Side::White;
            self.clock = 0;
            return Ok(());
        }
        let mut tokens = args.split_whitespace();
        match tokens.next() {
            Some("startpos") => {
                let start = Position::startpos();
                let moves: Vec<&str> = match tokens.next() {
                    Some("moves") => tokens.collect(),
                    Some(other) => return Err(format!("unexpected token `{other}`")),
                    None => Vec::new(),
                };
                let (pos, side, clock) = start.play_moves(&moves, Side::White).map_err(|e| e.to_string())?;
                self.pos = pos;
                self.side = side;
                self.clock = clock;
                Ok(())
            }
            _ => Err(format!("unknown position form `{args}`")),
        }
    }

    fn cmd_go(&mut self, args: &str) -> Result<String, String> {
        let mut params = self.params;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            match tok {
                "depth" => {
                    let raw = tokens.next().unwrap_or("");
                    params.depth = raw.parse().map_err(|_| format!("invalid depth `{raw}`"))?;
                }
                other => return Err(format!("unexpected token `{other}`")),
            }
        }
        let state = BoardState::with_scoring(self.pos.clone(), self.side, params.scoring);
        let mut searcher = Searcher::new(params);
        let res = searcher.search_state(&state, self.clock).map_err(|e| e.to_string())?;
        Ok(match res.bestmove {
            Some(best) => format!("bestmove {} score {} nodes {}", best, res.score, res.nodes),
            None => format!("bestmove none score {}", res.score),
        })
    }

    /// Handles one command line. Returns the reply (possibly empty) or `None` on `quit`.
    pub fn handle(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let reply = match cmd {
            "" => String::new(),
            "quit" => return None,
            "newgame" => { self.cmd_newgame(); String::new() }
            "position" => match self.cmd_position(rest) {
                Ok(()) => String::new(),
                Err(e) => { warn!("rejected position: {e}"); format!("error {e}") }
            },
            "side" => match rest.trim().parse::<Side>() {
                Ok(s) => { self.side = s; String::new() }
                Err(e) => format!("error {e}"),
            },
            "go" => match self.cmd_go(rest) {
                Ok(reply) => reply,
                Err(e) => { warn!("rejected go: {e}"); format!("error {e}") }
            },
            "display" | "d" => render(&self.pos, Glyphs::Unicode),
            other => { warn!("unknown command `{other}`"); format!("error unknown command `{other}`") }
        };
        Some(reply)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            let line = line?;
            match self.handle(&line) {
                None => break,
                Some(reply) if reply.is_empty() => {}
                Some(reply) => { writeln!(stdout, "{}", reply.trim_end())?; stdout.flush()?; }
            }
        }
        Ok(())
    }
}
