use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};

use tictactoe_vm::config::Config;
use tictactoe_vm::game::{winning_spaces, Mark, SpaceCoordinates};
use tictactoe_vm::logging::init_tracing;
use tictactoe_vm::strategy::StrategyKind;
use tictactoe_vm::ui::tictactoe::{GameResult, TicTacToeState, Turn};
use tictactoe_vm::view_model::{
    event_channel, tic_tac_toe_view_model, ViewModelInputs, ViewModelOptions,
};

/// Play tic-tac-toe against a computer opponent from the terminal.
///
/// Reads one command per line from stdin: `ROW COL` to claim a space,
/// `reset` to start over, `quit` to exit.
#[derive(Debug, Parser)]
#[command(name = "tictactoe-vm", version)]
struct Cli {
    /// Config file (default: ~/.config/tictactoe-vm/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override how long the computer thinks, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Override the computer's move selection
    #[arg(long, value_enum)]
    strategy: Option<StrategyKind>,

    /// Print every state as one JSON object per line
    #[arg(long)]
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(SpaceCoordinates),
    Reset,
    Quit,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing("warn");

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(delay_ms) = cli.delay_ms {
        config.game.opponent_think_delay_ms = delay_ms;
    }
    if let Some(strategy) = cli.strategy {
        config.game.strategy = strategy;
    }

    let (clicks, user_space_clicks) = event_channel();
    let (resets, user_reset_clicks) = event_channel();
    let mut states = tic_tac_toe_view_model(
        ViewModelInputs {
            user_space_clicks,
            user_reset_clicks,
            strategy: config.game.strategy.build(),
        },
        ViewModelOptions::from(&config.game),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            state = states.next() => match state {
                Some(state) => render(&state, cli.json)?,
                None => break,
            },
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(Command::Move(space))) => {
                        let _ = clicks.send(space);
                    }
                    Ok(Some(Command::Reset)) => {
                        let _ = resets.send(());
                    }
                    Ok(Some(Command::Quit)) => break,
                    Ok(None) => {}
                    Err(err) => eprintln!("Error: {:#}", err),
                }
            },
            _ = &mut shutdown => break,
        }
    }

    Ok(())
}

fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => return Ok(None),
        "reset" | "r" => return Ok(Some(Command::Reset)),
        "quit" | "q" | "exit" => return Ok(Some(Command::Quit)),
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let [row, column] = parts.as_slice() else {
        bail!("expected `ROW COL`, `reset` or `quit`, got '{}'", line);
    };
    let row: u8 = row.parse().with_context(|| format!("invalid row '{}'", row))?;
    let column: u8 = column
        .parse()
        .with_context(|| format!("invalid column '{}'", column))?;
    Ok(Some(Command::Move(SpaceCoordinates::new(row, column)?)))
}

fn render(state: &TicTacToeState, json: bool) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer(&mut stdout, state)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", state.board)?;
        writeln!(stdout, "{}", state.turn)?;
        let winner = match state.turn {
            Turn::GameOver(GameResult::Win) => Some(Mark::Player),
            Turn::GameOver(GameResult::Loss) => Some(Mark::Opponent),
            _ => None,
        };
        if let Some(mark) = winner {
            let line: Vec<String> = winning_spaces(&state.board, mark)
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(stdout, "winning line: {}", line.join(" "))?;
        }
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
