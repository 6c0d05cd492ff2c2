use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::Config;
use crate::realtime::RealtimeHub;

pub type DbPool = Pool<SqliteConnectionManager>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Config,
    pub hub: RealtimeHub,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        let hub = RealtimeHub::new(config.realtime.channel_capacity);
        Self { db, config, hub }
    }
}
