pub mod db;
pub mod insertions;
pub mod queries;

pub use db::init_db;
pub use insertions::{log_consulta, save_report};
pub use queries::{carreras_mas_consultadas, conteo_consultas, filtros_mas_usados, graficos_mas_consultados};
