pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;
pub mod schema;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::{CompanyService, InvoiceService};
use infrastructure::{DieselCompanyRepository, DieselInvoiceRepository};
use openapi::ApiDoc;

pub use config::Config;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type MigrationError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), MigrationError> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    for version in applied {
        log::info!("Applied migration {}", version);
    }
    Ok(())
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let companies = web::Data::new(CompanyService::new(Arc::new(
        DieselCompanyRepository::new(pool.clone()),
    )));
    let invoices = web::Data::new(InvoiceService::new(Arc::new(
        DieselInvoiceRepository::new(pool),
    )));

    Ok(HttpServer::new(move || {
        let companies = companies.clone();
        let invoices = invoices.clone();
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| handlers::configure(cfg, companies, invoices))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::to(handlers::not_found))
    })
    .bind((host.to_string(), port))?
    .run())
}
