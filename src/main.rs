use anyhow::Result;
use indicatif::ProgressBar;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_engine::{search::DEFAULT_DEPTH, Game, GameState, SearchConfig};

mod display;
use display::draw;

/// Asks a y/n question until a recognisable answer is given
fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

/// Asks for the machine's search depth, an empty answer keeps the default
fn ask_depth(stdin: &Stdin) -> Result<usize> {
    loop {
        let mut buffer = String::new();
        print!("Machine search depth (default {}): ", DEFAULT_DEPTH);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;

        let answer = buffer.trim();
        if answer.is_empty() {
            return Ok(DEFAULT_DEPTH);
        }
        match answer.parse::<usize>() {
            Ok(depth) => return Ok(depth),
            Err(_) => println!("Invalid number: {}", answer),
        }
    }
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut machine_turn = ask_yes_no(&stdin, "Should the machine move first?")?;
    let depth = ask_depth(&stdin)?;
    let verbose = ask_yes_no(&stdin, "Show search details?")?;

    let config = SearchConfig::default()
        .with_depth(depth)
        .with_parallel(true)
        .with_verbose(verbose);
    let mut game = Game::new(config);

    // game loop
    loop {
        draw(game.board())?;

        match game.state() {
            GameState::Playing => {
                if machine_turn {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("Machine is thinking...");
                    spinner.enable_steady_tick(100);
                    let start_count = game.searcher().node_count;
                    let column = game.play_machine()?;
                    spinner.finish_and_clear();

                    match (column, game.last_search()) {
                        (Some(column), Some(result)) => println!(
                            "Machine plays column {} (value {}, {} positions searched)",
                            column + 1,
                            result.value,
                            game.searcher().node_count - start_count
                        ),
                        _ => {
                            println!("Machine cannot make a move");
                            break;
                        }
                    }
                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    let column = match input_str.trim().parse::<usize>() {
                        Ok(column) if column >= 1 => column - 1,
                        _ => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                    };
                    if let Err(err) = game.play_player(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
                machine_turn = !machine_turn;
            }

            // end states
            GameState::PlayerWin => {
                println!("You win!");
                break;
            }
            GameState::MachineWin => {
                println!("The machine wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    println!("Moves played: {}", game.moves());
    Ok(())
}
