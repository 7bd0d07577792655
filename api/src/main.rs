use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use cms_api::app::create_app;
use cms_api::routes::customers::AppState;
use cms_core::services::CustomerService;
use cms_infra::database::{
    DatabasePool, MySqlAddressRepository, MySqlCustomerRepository, MySqlOtpRepository,
};
use cms_shared::config::{DatabaseConfig, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Customer Management API Server");

    let database_config = DatabaseConfig::from_env();
    let server_config = ServerConfig::from_env();

    let pool = DatabasePool::new(database_config).await?;
    pool.health_check().await?;
    info!("Database reachable, pool: {}", pool.statistics());

    let customers = Arc::new(MySqlCustomerRepository::new(pool.pool().clone()));
    let addresses = Arc::new(MySqlAddressRepository::new(pool.pool().clone()));
    let otps = Arc::new(MySqlOtpRepository::new(pool.pool().clone()));

    let customer_service = Arc::new(CustomerService::new(customers, addresses, otps));
    let app_state = web::Data::new(AppState { customer_service });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if server_config.workers > 0 {
        server = server.workers(server_config.workers);
    }

    server.bind(&bind_address)?.run().await?;

    Ok(())
}
