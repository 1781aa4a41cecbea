use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use ember_shared::clients::rabbitmq::RabbitMQClient;

use crate::config::AppConfig;

pub mod config;
pub mod discovery;
pub mod events;
pub mod models;
pub mod routes;
pub mod schema;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
    pub rabbitmq: RabbitMQClient,
}
