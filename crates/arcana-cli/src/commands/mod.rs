pub mod cards;
pub mod content;
pub mod draw;
pub mod mbti;
pub mod quote;
pub mod spreads;

use std::path::Path;

use arcana_quotes::{QuoteConfig, QuoteSelector, QuoteStore};
use tracing::info;

/// Build a selector over a quote file, or the bundled quotes.
fn load_selector(quotes: Option<&Path>) -> Result<QuoteSelector, String> {
    let config = QuoteConfig::default();
    let store = match quotes {
        Some(path) => {
            info!(path = %path.display(), "loading quote data");
            QuoteStore::from_path(path, &config)
        }
        None => QuoteStore::bundled(&config),
    }
    .map_err(|e| e.to_string())?;
    Ok(QuoteSelector::with_config(store, &config))
}

/// Use the given seed, or draw a fresh one.
fn resolve_seed(seed: Option<f64>) -> f64 {
    seed.unwrap_or_else(rand::random::<f64>)
}
