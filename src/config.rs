use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Path of the persisted JSON document, or ":memory:" for a non-persistent store.
    pub store_path: String,
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            store_path: env::var("STORE_PATH").unwrap_or_else(|_| "./data/baumate-db.json".to_string()),
            latency_min_ms: env::var("LATENCY_MIN_MS")
                .unwrap_or_else(|_| "250".to_string())
                .parse()
                .expect("LATENCY_MIN_MS must be a number"),
            latency_max_ms: env::var("LATENCY_MAX_MS")
                .unwrap_or_else(|_| "400".to_string())
                .parse()
                .expect("LATENCY_MAX_MS must be a number"),
        }
    }
}
