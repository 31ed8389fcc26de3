// Biblioteca raíz del crate `paesdash`.
// Reexporta los módulos del pipeline (base -> filtro -> agregación ->
// parámetros de gráfico) y el servidor HTTP que los expone.
pub mod agregacion;
pub mod analitica;
pub mod api_json;
pub mod excel;
pub mod geodatos;
pub mod graficos;
pub mod models;
pub mod narrativa;
pub mod server;
pub mod server_handlers;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
