use bjtable::{Action, ActionSource, Choice, LegalActions, Participant, Table};
use dialoguer::Select;

use crate::render;

/// Asks the person at the keyboard for each decision. Gives up when the
/// prompt cannot be shown or answered.
#[derive(Debug, Default)]
pub struct Human;

impl ActionSource for Human {
    fn choose(&mut self, table: &Table, seat: usize, legal: &LegalActions) -> Option<Choice> {
        render::print_table(table, Some(seat));

        let name = table.seat(seat).map_or("?", Participant::name);
        let labels = legal.iter().map(Action::label).collect::<Vec<_>>();

        match Select::new()
            .with_prompt(format!("{name}, your move"))
            .items(&labels)
            .default(0)
            .interact()
        {
            Ok(index) => legal.pick_nth(index),
            Err(err) => {
                log::warn!("action prompt failed: {err}");
                None
            }
        }
    }
}
