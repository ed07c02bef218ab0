use std::env;
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub mongodb_uri: String,
    pub database_name: String,
    pub api_prefix: String,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            database_name: "employee_db".to_string(),
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    /// Environment (and `.env`) over the built-in local defaults.
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            mongodb_uri: env::var("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database_name: env::var("MONGODB_DB").unwrap_or(defaults.database_name),
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
        }
    }
}
