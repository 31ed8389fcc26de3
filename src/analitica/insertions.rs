use crate::analitica::db::analitica_db_path;
use chrono::Utc;
use rusqlite::{Connection, params};
use std::error::Error;

/// Registra una consulta de gráfico en la base de analítica. Abre una
/// conexión de corta vida e inserta una fila; los fallos se ignoran en los
/// handlers (el registro nunca puede botar un request).
pub fn log_consulta(grafico: &str, filtros_json: &str, duration_ms: i64) -> Result<(), Box<dyn Error>> {
    let conn = Connection::open(analitica_db_path())?;
    let ts = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO consultas (ts, grafico, filtros_json, duration_ms) VALUES (?1, ?2, ?3, ?4)",
        params![ts, grafico, filtros_json, duration_ms],
    )?;
    Ok(())
}

/// Guarda el resultado de un reporte bajo la tabla `reportes`.
pub fn save_report(tipo: &str, params_json: &str, resultado_json: &str) -> Result<(), Box<dyn Error>> {
    let conn = Connection::open(analitica_db_path())?;
    let ts = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO reportes (ts, tipo, params_json, resultado_json) VALUES (?1, ?2, ?3, ?4)",
        params![ts, tipo, params_json, resultado_json],
    )?;
    Ok(())
}
