use std::path::Path;

use arcana_core::{Arcana, Card, Orientation};
use comfy_table::{ContentArrangement, Table};

pub fn run(quotes: Option<&Path>) -> Result<(), String> {
    let selector = super::load_selector(quotes)?;
    let store = selector.store();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Card", "Arcana", "Upright", "Reversed"]);

    for card in Card::all() {
        let arcana = match card.arcana {
            Arcana::Major => "Major".to_string(),
            Arcana::Minor { suit, .. } => format!("Minor ({suit})"),
        };
        let upright = store.pool_size(card.key, Orientation::Upright);
        let reversed = store.pool_size(card.key, Orientation::Reversed);
        let count = |n: usize| if n == 0 { "—".to_string() } else { n.to_string() };

        table.add_row(vec![
            card.key.to_string(),
            card.name.clone(),
            arcana,
            count(upright),
            count(reversed),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} cards with quotes, {} quotes in total",
        store.len(),
        store.total_quotes()
    );

    Ok(())
}
