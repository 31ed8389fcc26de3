//! Módulo `excel`: lectura de la base homologada de postulantes.
//!
//! Submódulos:
//! - `io`: helpers de lectura/parseo de workbooks
//! - `base`: lector de la base homologada (.xlsx)
//! - `csv`: lector de la base filtrada (.csv)
//! - `cache`: memoización por (ruta, mtime) con invalidación explícita

mod io;

mod base;

mod csv;

pub mod cache;

pub use self::base::leer_base_postulantes;
pub use self::csv::leer_base_csv;

use std::path::PathBuf;

/// Ruta por defecto de la base homologada (relativa al repo).
pub const BASE_DEFAULT: &str = "bbdd/base_total_homologada.xlsx";

/// Resuelve la ruta de la base de postulantes.
/// Orden: variable de entorno `PAES_BASE_PATH` (con soporte `.env`), luego
/// candidatos relativos al directorio de trabajo.
pub fn resolver_base_path() -> PathBuf {
    let _ = dotenv::dotenv();

    if let Ok(p) = std::env::var("PAES_BASE_PATH") {
        let path = PathBuf::from(p);
        if path.exists() {
            return path;
        }
        eprintln!("PAES_BASE_PATH apunta a un archivo inexistente: {:?}", path);
    }

    let candidatos = [
        PathBuf::from(BASE_DEFAULT),
        PathBuf::from("bbdd/base_total_filtrada.csv"),
        PathBuf::from("base_total_homologada.xlsx"),
    ];
    for candidato in candidatos {
        if candidato.exists() {
            return candidato;
        }
    }

    PathBuf::from(BASE_DEFAULT)
}
