use std::env;

use grocery_match::providers::FallbackProvider;
use grocery_match::{plan_cart, AppConfig, RankingMode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the dish name (and optional ranking mode) from command-line arguments
    let args: Vec<String> = env::args().collect();
    let dish = args
        .get(1)
        .ok_or("Please provide a dish name as an argument")?;
    let ranking = match args.get(2) {
        Some(mode) => mode.parse::<RankingMode>()?,
        None => RankingMode::Price,
    };

    let config = AppConfig::load()?;
    let provider = FallbackProvider::new(&config)?;

    let plan = plan_cart(&config, &provider, dish, ranking).await?;

    println!("{}", plan.title);
    for item in &plan.items {
        match &item.product {
            Some(product) => println!(
                "  {} {}{} -> [{}] {} ({}원)\n      {}",
                item.ingredient.name,
                item.ingredient.amount,
                item.ingredient.unit,
                product.platform,
                product.name,
                product.price,
                product.url
            ),
            None => println!(
                "  {} {}{} -> 적합한 상품을 찾지 못했습니다",
                item.ingredient.name, item.ingredient.amount, item.ingredient.unit
            ),
        }
    }

    Ok(())
}
