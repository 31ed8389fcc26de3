use rusqlite::Connection;
use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

// carga .env si existe
fn load_dotenv() {
    let _ = dotenv::dotenv();
}

/// Ruta del archivo SQLite de analítica de uso. Honra `PAES_ANALITICA_DB_PATH`.
pub fn analitica_db_path() -> PathBuf {
    load_dotenv();
    match env::var("PAES_ANALITICA_DB_PATH") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from("analitica/analitica.db"),
    }
}

/// Inicializa la base de analítica (directorio + archivo + tablas).
pub fn init_db() -> Result<(), Box<dyn Error>> {
    let db_path = analitica_db_path();
    if let Some(dir) = db_path.parent() {
        fs::create_dir_all(dir)?;
    }

    let conn = Connection::open(&db_path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS consultas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ts TEXT NOT NULL,
            grafico TEXT NOT NULL,
            filtros_json TEXT,
            duration_ms INTEGER
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS reportes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ts TEXT NOT NULL,
            tipo TEXT NOT NULL,
            params_json TEXT,
            resultado_json TEXT
        )",
        [],
    )?;
    Ok(())
}
