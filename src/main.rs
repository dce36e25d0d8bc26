use std::env;
use std::sync::Arc;

use log::info;
use tokio::io::AsyncReadExt;

use recipe_steps::{RawRecipe, StepParser, StepsError};

#[tokio::main]
async fn main() -> Result<(), StepsError> {
    env_logger::init();

    // Read the record from the path given, or from stdin
    let json = match env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(&path).await?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };

    let raw = RawRecipe::from_json(&json)?;
    let parser = Arc::new(StepParser::load()?);
    let recipe = parser.parse_concurrent(raw).await?;
    info!("Parsed {} steps from '{}'", recipe.steps.len(), recipe.title);

    println!("{}", recipe.to_json_pretty()?);
    Ok(())
}
