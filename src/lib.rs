// Biblioteca raíz del crate `minorpick`.
// Normaliza la encuesta del estudiante, calcula el puntaje de cada minor y
// expone el top 5 por HTTP.
pub mod models;
pub mod survey;
pub mod algorithm;
pub mod config;
pub mod error;
mod server_handlers;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
