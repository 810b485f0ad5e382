use std::path::Path;

use arcana_content::{ContentFacade, ContentItem, ContentKind};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(
    library: &str,
    category: Option<&str>,
    id: Option<&str>,
    content_dir: Option<&Path>,
) -> Result<(), String> {
    let kind = library
        .parse::<ContentKind>()
        .map_err(|e| e.to_string())?;
    let facade = match content_dir {
        Some(dir) => ContentFacade::from_dir(dir),
        None => ContentFacade::bundled(),
    }
    .map_err(|e| e.to_string())?;
    facade.library(kind).map_err(|e| e.to_string())?;

    if let Some(id) = id {
        let item = facade
            .get_by_id(kind, id)
            .ok_or_else(|| format!("no item '{id}' in {kind}"))?;
        print_item(item)?;
        return Ok(());
    }

    let items: Vec<&ContentItem> = match category {
        Some(category) => facade.get_by_category(kind, category),
        None => facade.get_all(kind).iter().collect(),
    };

    if items.is_empty() {
        println!("  No items found.");
        let categories = facade.categories(kind);
        if !categories.is_empty() {
            println!("  Categories: {}", categories.join(", "));
        }
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Category"]);
    for item in &items {
        table.add_row(vec![item.id.as_str(), item.title.as_str(), item.category.as_str()]);
    }

    println!("{table}");
    println!();
    println!("  {} item(s) in {kind}", items.len());
    Ok(())
}

fn print_item(item: &ContentItem) -> Result<(), String> {
    println!("  {} {}", item.title.bold(), format!("[{}]", item.id).dimmed());
    if !item.category.is_empty() {
        println!("  Category: {}", item.category);
    }
    if let Some(card) = item.card.and_then(arcana_core::Card::from_key) {
        println!("  Card: {}", card.name);
    }
    if !item.description.is_empty() {
        println!();
        println!("  {}", item.description);
    }
    if !item.extra.is_empty() {
        println!();
        let extra = serde_json::to_string_pretty(&item.extra).map_err(|e| e.to_string())?;
        for line in extra.lines() {
            println!("  {line}");
        }
    }
    Ok(())
}
