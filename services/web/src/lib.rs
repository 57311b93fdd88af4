mod cli;
mod infra;
mod routes;
mod server;

use licencia_facil::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
