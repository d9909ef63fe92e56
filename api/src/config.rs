use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL URL. Without it products are kept in process memory.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    /// Create missing tables on startup
    pub auto_migrate: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            auto_migrate: env::var("AUTO_MIGRATE")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
