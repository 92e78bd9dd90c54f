use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:3000"),
        ebay_base_url: get_env_or_default("EBAY_BASE_URL", "https://www.ebay.com/sch/i.html"),
        http_timeout_secs: get_env_or_default("HTTP_TIMEOUT_SECS", "15")
            .parse()
            .unwrap_or(15),
    }
});

pub struct Config {
    pub bind_addr: String,
    pub ebay_base_url: String,
    pub http_timeout_secs: u64,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
