//! Interactive marble solitaire runner (default binary).
//!
//! Plain line-oriented stdin/stdout loop over the core model; no raw
//! terminal mode. Commands:
//!
//! - `move FR FC TR TC` — jump the marble at (FR,FC) to (TR,TC)
//! - `board` — reprint the board
//! - `quit` — exit

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};

use marble_solitaire::core::Game;
use marble_solitaire::types::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunConfig {
    arm_thickness: i32,
    empty: Option<(i32, i32)>,
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig {
        arm_thickness: 3,
        empty: None,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--arm" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --arm"))?;
                config.arm_thickness = v
                    .parse::<i32>()
                    .map_err(|_| anyhow!("invalid --arm value: {}", v))?;
            }
            "--empty" => {
                let row = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow!("missing row for --empty"))?;
                let col = args
                    .get(i + 2)
                    .ok_or_else(|| anyhow!("missing col for --empty"))?;
                let row = row
                    .parse::<i32>()
                    .map_err(|_| anyhow!("invalid --empty row: {}", row))?;
                let col = col
                    .parse::<i32>()
                    .map_err(|_| anyhow!("invalid --empty col: {}", col))?;
                config.empty = Some((row, col));
                i += 2;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn build_game(config: RunConfig) -> Result<Game> {
    let game = match config.empty {
        Some((row, col)) => Game::new(config.arm_thickness, row, col)?,
        None => Game::with_arm_thickness(config.arm_thickness)?,
    };
    Ok(game)
}

fn print_state(game: &Game) {
    println!("{}", game.render());
    println!("Score: {}", game.score());
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    let mut game = build_game(config)?;

    print_state(&game);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["quit"] | ["q"] => return Ok(()),
            ["board"] => print_state(&game),
            ["move", fr, fc, tr, tc] => {
                let coords: Result<Vec<i32>> = [fr, fc, tr, tc]
                    .iter()
                    .map(|s| s.parse::<i32>().map_err(|_| anyhow!("invalid coordinate: {}", s)))
                    .collect();
                match coords {
                    Ok(c) => {
                        let mv = Move::new(c[0], c[1], c[2], c[3]);
                        match game.apply_move(mv) {
                            Ok(()) => {
                                print_state(&game);
                                if game.is_game_over() {
                                    println!("Game over! Final score: {}", game.score());
                                    return Ok(());
                                }
                            }
                            Err(err) => eprintln!("{}", err),
                        }
                    }
                    Err(err) => eprintln!("{}", err),
                }
            }
            _ => eprintln!("commands: move FR FC TR TC | board | quit"),
        }
    }
}
