use bjtable::{
    Card, DealerOutcome, HandOutcome, RoundResult, Suit, Table, TableEvent, TableObserver,
};
use colored::{ColoredString, Colorize};

const BANNER: &str = r"
    .------..------..------..------..------.
    |B.--. ||L.--. ||A.--. ||C.--. ||K.--. |
    | :(): || :/\: || (\/) || :/\: || :/\: |
    | ()() || (__) || :\/: || :\/: || :\/: |
    | '--'B|| '--'L|| '--'A|| '--'C|| '--'K|
    `------'`------'`------'`------'`------'
";

type Art = [String; 5];

pub fn banner() {
    println!("{}", BANNER.bold());
}

fn card_art(card: &Card) -> Art {
    let rank = card.rank.symbol();
    let suit = card.suit.symbol();
    [
        "+-----+".to_string(),
        format!("|{rank:<2}   |"),
        format!("|  {suit}  |"),
        format!("|   {rank:>2}|"),
        "+-----+".to_string(),
    ]
}

fn hidden_art() -> Art {
    [
        "+-----+".to_string(),
        "|#####|".to_string(),
        "|#####|".to_string(),
        "|#####|".to_string(),
        "+-----+".to_string(),
    ]
}

fn paint(text: &str, suit: Option<Suit>) -> ColoredString {
    match suit {
        Some(Suit::Hearts | Suit::Diamonds) => text.red(),
        Some(Suit::Clubs | Suit::Spades) => text.normal(),
        None => text.blue(),
    }
}

fn print_cards(cards: &[(Art, Option<Suit>)]) {
    for line in 0..5 {
        let row = cards
            .iter()
            .map(|(art, suit)| paint(&art[line], *suit).to_string())
            .collect::<Vec<_>>()
            .join("  ");
        println!("    {row}");
    }
}

fn print_hand(cards: &[Card]) {
    let arts = cards
        .iter()
        .map(|card| (card_art(card), Some(card.suit)))
        .collect::<Vec<_>>();
    print_cards(&arts);
}

/// Prints the dealer and every seat. `active` marks the seat to act.
pub fn print_table(table: &Table, active: Option<usize>) {
    println!();
    println!("{}", "    ============================".bold());
    println!("{}", "    |      BLACKJACK TABLE     |".bold());
    println!("{}", "    ============================".bold());

    let dealer = table.dealer();
    println!("\n    {}", "DEALER'S HAND".magenta());
    if dealer.is_hole_revealed() {
        print_hand(dealer.hand().cards());
    } else {
        let mut arts = Vec::new();
        if let Some(card) = dealer.up_card() {
            arts.push((card_art(card), Some(card.suit)));
        }
        for _ in 1..dealer.hand().len() {
            arts.push((hidden_art(), None));
        }
        print_cards(&arts);
    }
    println!("    Score: {}", dealer.visible_value().to_string().cyan());
    println!("    ----------------------------");

    for (seat, participant) in table.seats().iter().enumerate() {
        let marker = if active == Some(seat) { "> " } else { "  " };
        let title = format!("{}'S HAND", participant.name().to_uppercase());
        println!("\n  {marker}{}", title.green());
        print_hand(participant.hand().cards());
        println!("    Score: {}", participant.score().to_string().cyan());
    }
    println!("{}", "    ============================".bold());
}

fn outcome_line(result: &RoundResult) {
    for seat in &result.seats {
        let line = match seat.outcome {
            HandOutcome::Lose if seat.player_value > 21 => {
                format!("{} busted! Dealer wins.", seat.name).red()
            }
            HandOutcome::Win if result.dealer_bust => {
                format!("Dealer busted! {} wins!", seat.name).green()
            }
            HandOutcome::Win => format!(
                "{} wins! {} vs {}",
                seat.name, seat.player_value, seat.dealer_value
            )
            .green(),
            HandOutcome::Lose => format!(
                "Dealer wins! {} vs {}",
                seat.dealer_value, seat.player_value
            )
            .red(),
            HandOutcome::Push => format!(
                "Push! {} and dealer tie with {}",
                seat.name, seat.player_value
            )
            .yellow(),
        };
        println!("\n{}", format!("=== RESULT for {} ===", seat.name).bold());
        println!("{line}");
    }
}

/// Prints lifetime statistics for every seated player.
pub fn statistics(table: &Table) {
    println!("\n{}", "--- CURRENT STATISTICS ---".bold());
    for player in table.players() {
        let stats = player.statistics();
        println!("\n--- Statistics {} ---", player.name());
        println!("Games played: {}", stats.games_played);
        println!("Wins: {}", stats.games_won);
        println!("Losses: {}", stats.games_lost);
        println!("Pushes: {}", stats.games_pushed);
        println!("Win Rate: {:.1}%", stats.win_rate());
        println!("Max Score: {}", stats.max_score);
    }
}

/// Prints the table as the round unfolds.
#[derive(Debug, Default)]
pub struct TableView;

impl TableObserver for TableView {
    fn notify(&mut self, table: &Table, event: &TableEvent<'_>) {
        let name = |seat: usize| table.seat(seat).map_or("?", |p| p.name()).to_string();

        match event {
            TableEvent::Dealt => {
                println!("\n{}", "--- NEW ROUND ---".bold());
                print_table(table, table.current_seat());
            }
            TableEvent::Hit { seat, card } => println!("{} draws {card}", name(*seat)),
            TableEvent::Stood { seat } => println!("{} stands", name(*seat)),
            TableEvent::DoubledDown { seat, card } => {
                println!("{} doubles down and draws {card}", name(*seat));
            }
            TableEvent::Split { seat, .. } => {
                println!("{}", format!("{} split hand!", name(*seat)).magenta());
            }
            TableEvent::Busted { seat } => {
                println!("{}", format!("{} has bust!", name(*seat)).red());
            }
            TableEvent::HoleRevealed => {
                println!("\n{}", "--- Dealer's Move ---".bold());
                print_table(table, None);
            }
            TableEvent::DealerDrew { card } => {
                println!("The dealer takes {card}");
                print_hand(table.dealer().hand().cards());
                println!("    Score: {}", table.dealer().value().to_string().cyan());
            }
            TableEvent::DealerFinished(DealerOutcome::Stood(value)) => {
                println!("{}", format!("Dealer stands at {value}.").green());
            }
            TableEvent::DealerFinished(DealerOutcome::Busted(value)) => {
                println!("{}", format!("Dealer is busted with {value}!").red());
            }
            TableEvent::Resolved(result) => outcome_line(result),
        }
    }
}
