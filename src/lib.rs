pub mod agent;
pub mod cli;
pub mod errors;
pub mod llm;
pub mod models;
pub mod tools;
pub mod weather;

use agent::WeatherAgent;
use cli::Args;
use llm::chat::OpenAIChatClient;
use log::info;
use std::error::Error;
use std::sync::Arc;
use weather::WeatherClient;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Chat Model: {}", args.chat_model);
    info!("Chat Base URL: {}", args.chat_base_url.as_deref().unwrap_or("provider default"));
    info!("Weather Base URL: {}", args.weather_base_url.as_deref().unwrap_or("provider default"));
    info!("-------------------------");

    let chat_client = Arc::new(
        OpenAIChatClient::new(
            args.openai_api_key.clone(),
            Some(args.chat_model.clone()),
            args.chat_base_url.clone()
        )?
    );
    let weather_client = Arc::new(
        WeatherClient::new(args.amap_api_key.clone(), args.weather_base_url.clone())
    );

    let agent = WeatherAgent::new(chat_client, weather_client);
    match agent.run_conversation().await? {
        Some(response) => println!("{}", serde_json::to_string_pretty(&response)?),
        None => info!("Model answered without tool calls; no final response to print"),
    }

    Ok(())
}
