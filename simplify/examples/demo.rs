//! Demo of the simplification pipeline.
//!
//! Usage: cargo run -p plainword-simplify --example demo -- [config.toml] [text]

use std::sync::Arc;

use plainword_lexicon::seed::fallback_snapshot;
use plainword_simplify::{JsonFileStore, Simplifier, SimplifierConfig, SimplifyResponse};

const SAMPLE: &str = "지난 달 17일 대구 북구 노곡동에서 침수사고가 발생했다. \
    이 사고의 조사단장은 \"과거 노곡동 침수사고 이후 배수시스템이 보강됐음에도 불구하고 \
    이번 사고가 재발된 원인은 관리체계 및 소통부족 문제에 있다\"고 진단했다.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logs
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimplifierConfig::load(&path).await?,
        None => SimplifierConfig::default(),
    };
    let text = args.next().unwrap_or_else(|| SAMPLE.to_string());

    // Seed the lexicon file on first run
    let store = if config.data_path.exists() {
        JsonFileStore::open(&config.data_path).await?
    } else {
        println!("Seeding lexicon at {}", config.data_path.display());
        JsonFileStore::seed(&config.data_path, &fallback_snapshot()).await?
    };

    let simplifier = Simplifier::new(config, Arc::new(store))?;
    println!("Data set: {:?}\n", simplifier.setup_mode()?);

    let (chains, _) = simplifier.chains()?;
    println!("Chains:");
    for chain in chains.chains() {
        let members: Vec<_> = chain
            .members
            .iter()
            .map(|m| format!("{}({})", m.label, m.difficulty))
            .collect();
        println!("   {} -> {}", chain.key, members.join(", "));
    }
    println!();

    for level in 1..=simplifier.config().max_difficulty {
        let response = SimplifyResponse::from(simplifier.simplify(&text, level));
        println!("Level {level}:");
        println!("{}\n", serde_json::to_string_pretty(&response.to_json())?);
    }

    Ok(())
}
