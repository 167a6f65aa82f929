pub mod api;
pub mod config;
pub mod db;

pub use db::Db;

use config::Config;

pub struct AppState {
    pub config: Config,
    pub db: Db,
}

impl AppState {
    pub fn new(config: Config, db: Db) -> Self {
        Self { config, db }
    }
}
