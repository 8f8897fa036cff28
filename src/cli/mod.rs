use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// API key for the chat-completion provider
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    /// API key for the AMap weather web service
    #[arg(long, env = "AMAP_API_KEY", hide_env_values = true)]
    pub amap_api_key: String,

    /// Model name for chat completion
    #[arg(long, env = "CHAT_MODEL", default_value = "gpt-3.5-turbo-1106")]
    pub chat_model: String,

    /// Base URL for the chat-completion API (e.g., https://api.openai.com/v1)
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,

    /// Base URL for the weather provider endpoint
    #[arg(long, env = "WEATHER_BASE_URL")]
    pub weather_base_url: Option<String>,
}
