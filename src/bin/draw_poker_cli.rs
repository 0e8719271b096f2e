// src/bin/draw_poker_cli.rs

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use draw_poker::api::{outcome_message, render_hand, GameReport};
use draw_poker::domain::Card;
use draw_poker::engine::{DrawDecider, DrawGame, EngineError, GameConfig, RandomSource};
use draw_poker::infra::{DeterministicRng, SystemRng};

/// Пятикарточный дро: игрок против компьютера, один обмен.
#[derive(Debug, Parser)]
#[command(name = "draw_poker_cli", version)]
struct Args {
    /// Seed для воспроизводимой тасовки.
    #[arg(long)]
    seed: Option<u64>,

    /// Сколько карт сдавать каждому (минимум 5).
    #[arg(long, default_value_t = 5)]
    hand_size: usize,

    /// Напечатать итог партии в JSON после обычного вывода.
    #[arg(long)]
    json: bool,
}

/// Спрашивает игрока в консоли, пока не получит ровно `y` или `n`.
/// Закрытый или сломанный stdin прерывает обмен ошибкой.
struct ConsoleDecider;

impl DrawDecider for ConsoleDecider {
    fn should_replace(&mut self, card: Card) -> Result<bool, EngineError> {
        let stdin = io::stdin();
        loop {
            print!("Replace {card}? [y / n] ");
            io::stdout()
                .flush()
                .map_err(|e| EngineError::Input(e.to_string()))?;

            let mut line = String::new();
            let read = stdin
                .read_line(&mut line)
                .map_err(|e| EngineError::Input(e.to_string()))?;
            if read == 0 {
                return Err(EngineError::Input("stdin закрыт".to_string()));
            }

            match line.trim_end_matches(&['\r', '\n'][..]) {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => continue,
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = GameConfig {
        hand_size: args.hand_size,
        seed: args.seed,
    };

    let result = match config.seed {
        Some(seed) => play(&config, &mut DeterministicRng::from_seed(seed)),
        None => play(&config, &mut SystemRng),
    };

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            log::error!("партия прервана: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("не удалось сериализовать итог партии: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

/// Одна партия: раздача, обмен, вскрытие.
fn play<R: RandomSource>(config: &GameConfig, rng: &mut R) -> Result<GameReport, EngineError> {
    let mut game = DrawGame::new(config, rng)?;

    print!("{}", render_hand(game.user.as_slice(), "User hand: "));

    game.draw_phase(&mut ConsoleDecider)?;

    print!("{}", render_hand(game.computer.as_slice(), "\nComputer hand: "));
    print!("{}", render_hand(game.user.as_slice(), "User hand: "));

    let report = GameReport::from_game(&game);
    println!("{}", outcome_message(report.outcome));

    Ok(report)
}
