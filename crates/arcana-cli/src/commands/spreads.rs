use arcana_core::all_spreads;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn list() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Cards", "Description"]);

    for layout in all_spreads() {
        table.add_row(vec![
            layout.id.to_string(),
            layout.name.to_string(),
            layout.len().to_string(),
            layout.description.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

pub fn show(id: &str) -> Result<(), String> {
    let layout = arcana_core::spread(id).map_err(|e| e.to_string())?;

    println!("  {} {}", layout.name.bold(), format!("({})", layout.id).dimmed());
    println!("  {}", layout.description);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Position", "Meaning", "x", "y"]);

    for (i, pos) in layout.positions.iter().enumerate() {
        let label = if pos.rotated {
            format!("{} (crossing)", pos.label)
        } else {
            pos.label.to_string()
        };
        table.add_row(vec![
            (i + 1).to_string(),
            label,
            pos.meaning.to_string(),
            pos.x.to_string(),
            pos.y.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
