//! Interactive terminal blackjack table.

mod human;
mod render;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{DealerStrategy, FileStore, RoundError, StatsStore, Table, TableOptions};
use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};

#[derive(Parser)]
#[command(name = "bjtable")]
#[command(about = "Multiplayer blackjack at the terminal")]
struct Args {
    /// Player name; repeat for each player (prompted for when omitted)
    #[arg(short, long = "player")]
    players: Vec<String>,

    /// Dealer strategy: 1/standard, 2/aggressive or 3/cautious
    #[arg(short, long)]
    strategy: Option<String>,

    /// Statistics file
    #[arg(long, default_value = FileStore::DEFAULT_PATH)]
    stats: PathBuf,

    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", format!("error: {err}").red());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn core::error::Error>> {
    render::banner();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let strategy = match args.strategy {
        Some(choice) => DealerStrategy::from_choice(&choice),
        None => prompt_strategy()?,
    };
    println!("{}", format!("The dealer plays {strategy}").yellow());

    let mut table = Table::new(TableOptions::default().with_strategy(strategy), seed);

    let names = if args.players.is_empty() {
        prompt_players(table.options().max_players)?
    } else {
        args.players
    };
    for name in &names {
        if let Err(err) = table.join(name) {
            println!("{}", format!("Cannot seat {name}: {err}").red());
        }
    }
    if table.player_count() == 0 {
        return Err("nobody is seated at the table".into());
    }

    let mut store = FileStore::new(args.stats);
    match store.load() {
        Ok(ledger) => {
            table.restore_statistics(&ledger);
        }
        Err(err) => println!("{}", format!("Could not load statistics: {err}").red()),
    }

    let mut human = human::Human;
    let mut view = render::TableView;

    loop {
        match table.play_round(&mut human, &mut view) {
            Ok(_) => {}
            Err(RoundError::Abandoned(_)) => {
                println!("{}", "No input, ending the session.".red());
                break;
            }
            Err(err) => println!("{}", format!("Round abandoned: {err}").red()),
        }

        render::statistics(&table);

        if !play_again() {
            break;
        }
    }

    store.save(&table.ledger())?;
    println!("Statistics saved to {}", store.path().display());
    println!("Thanks for playing!");

    Ok(())
}

/// Asks whether to keep playing. A prompt that cannot be answered counts as
/// no, so the session still ends with its statistics saved.
fn play_again() -> bool {
    Confirm::new()
        .with_prompt("Play again?")
        .default(true)
        .interact()
        .unwrap_or_else(|err| {
            log::warn!("play again prompt failed: {err}");
            false
        })
}

fn prompt_strategy() -> Result<DealerStrategy, dialoguer::Error> {
    let items = [
        "Standard (stops at 17+)",
        "Aggressive (stops at 18+)",
        "Cautious (stops at 16+)",
    ];
    let index = Select::new()
        .with_prompt("Select dealer strategy")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(DealerStrategy::from_choice(&(index + 1).to_string()))
}

fn prompt_players(max_players: u8) -> Result<Vec<String>, dialoguer::Error> {
    let count: u8 = Input::new()
        .with_prompt(format!("How many players? (1-{max_players})"))
        .validate_with(|n: &u8| -> Result<(), String> {
            if (1..=max_players).contains(n) {
                Ok(())
            } else {
                Err(format!("Enter a number from 1 to {max_players}"))
            }
        })
        .interact_text()?;

    let mut names = Vec::with_capacity(usize::from(count));
    for i in 1..=count {
        let name: String = Input::new()
            .with_prompt(format!("Name for player {i}"))
            .default(format!("Player {i}"))
            .interact_text()?;
        names.push(name);
    }

    Ok(names)
}
