use arcana_content::PersonalityType;
use colored::Colorize;

pub fn run(code: &str) -> Result<(), String> {
    let kind = code
        .parse::<PersonalityType>()
        .map_err(|e| e.to_string())?;
    let profile = kind.profile();

    println!("  {} {}", profile.code.bold(), profile.nickname);
    println!("  Temperament: {}", kind.temperament());
    println!();
    println!("  {}", profile.summary);
    println!();

    println!("  {}", "Strengths".green().bold());
    for s in profile.strengths {
        println!("    + {s}");
    }
    println!("  {}", "Growth edges".yellow().bold());
    for g in profile.growth_edges {
        println!("    - {g}");
    }

    if let Some(card) = kind.affinity_card() {
        println!();
        println!("  Card: {} {}", card.name.cyan(), format!("(#{})", card.key).dimmed());
    }

    Ok(())
}
