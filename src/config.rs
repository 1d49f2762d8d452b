use std::{env, fmt::Display, net::SocketAddr, str::FromStr};

use leptos::get_configuration;
use leptos::logging::{log, warn};

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DB: &str = "wanderlust.db";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub public_dir: String,
}

impl Config {
    /// `site-addr` comes from the leptos metadata in Cargo.toml when present;
    /// `WANDERLUST_ADDR` overrides it.
    pub async fn load() -> Self {
        let site_addr = match get_configuration(Some("Cargo.toml")).await {
            Ok(conf) => conf.leptos_options.site_addr.to_string(),
            Err(e) => {
                warn!("[CONFIG] Leptos configuration unavailable ({e}), using default address");
                DEFAULT_ADDR.to_string()
            }
        };

        Self {
            addr: try_load("WANDERLUST_ADDR", &site_addr),
            db_path: try_load("WANDERLUST_DB", DEFAULT_DB),
            public_dir: try_load("WANDERLUST_PUBLIC", DEFAULT_PUBLIC_DIR),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        log!("[CONFIG] {key} not set, using default: {default}");
        default.to_string()
    });

    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("[CONFIG] Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
                .parse()
                .unwrap_or_else(|_| panic!("default for {key} must parse"))
        }
    }
}
