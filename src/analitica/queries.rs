use crate::analitica::db::analitica_db_path;
use rusqlite::Connection;
use std::collections::HashMap;
use std::error::Error;

/// Gráficos más consultados, descendente por cantidad de requests.
pub fn graficos_mas_consultados(limit: Option<usize>) -> Result<serde_json::Value, Box<dyn Error>> {
    let conn = Connection::open(analitica_db_path())?;
    let mut stmt = conn.prepare("SELECT grafico FROM consultas")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for r in rows.flatten() {
        *counts.entry(r).or_default() += 1;
    }

    let mut v: Vec<(String, usize)> = counts.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let lim = limit.unwrap_or(20);
    let arr: Vec<serde_json::Value> = v
        .into_iter()
        .take(lim)
        .map(|(g, c)| serde_json::json!({"grafico": g, "count": c}))
        .collect();
    let result = serde_json::Value::Array(arr);

    let params = serde_json::json!({"limit": limit});
    let _ = crate::analitica::save_report("graficos_mas_consultados", &params.to_string(), &result.to_string());
    Ok(result)
}

/// Campos de filtro efectivamente usados en los requests registrados:
/// cuenta en cuántas consultas vino cada campo con un valor no vacío.
pub fn filtros_mas_usados() -> Result<serde_json::Value, Box<dyn Error>> {
    let conn = Connection::open(analitica_db_path())?;
    let mut stmt = conn.prepare("SELECT filtros_json FROM consultas WHERE filtros_json IS NOT NULL")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let campos = ["carreras", "region", "carreras_distribucion", "ingreso", "carrera"];
    let mut counts: HashMap<String, usize> = HashMap::new();
    for r in rows.flatten() {
        let v: serde_json::Value = match serde_json::from_str(&r) {
            Ok(v) => v,
            Err(_) => continue,
        };
        for campo in campos {
            let usado = match v.get(campo) {
                Some(serde_json::Value::Array(a)) => !a.is_empty(),
                Some(serde_json::Value::Null) | None => false,
                Some(_) => true,
            };
            if usado {
                *counts.entry(campo.to_string()).or_default() += 1;
            }
        }
    }

    let mut v: Vec<(String, usize)> = counts.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let arr: Vec<serde_json::Value> = v
        .into_iter()
        .map(|(f, c)| serde_json::json!({"filtro": f, "count": c}))
        .collect();
    let result = serde_json::Value::Array(arr);

    let _ = crate::analitica::save_report("filtros_mas_usados", "{}", &result.to_string());
    Ok(result)
}

/// Carreras más pedidas en los filtros registrados (valores dentro de
/// `carreras` y `carrera`).
pub fn carreras_mas_consultadas(limit: Option<usize>) -> Result<serde_json::Value, Box<dyn Error>> {
    let conn = Connection::open(analitica_db_path())?;
    let mut stmt = conn.prepare("SELECT filtros_json FROM consultas WHERE filtros_json IS NOT NULL")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for r in rows.flatten() {
        let v: serde_json::Value = match serde_json::from_str(&r) {
            Ok(v) => v,
            Err(_) => continue,
        };
        if let Some(arr) = v.get("carreras").and_then(|x| x.as_array()) {
            for c in arr {
                if let Some(s) = c.as_str() {
                    *counts.entry(s.to_string()).or_default() += 1;
                }
            }
        }
        if let Some(s) = v.get("carrera").and_then(|x| x.as_str()) {
            *counts.entry(s.to_string()).or_default() += 1;
        }
    }

    let mut v: Vec<(String, usize)> = counts.into_iter().collect();
    v.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let lim = limit.unwrap_or(20);
    let arr: Vec<serde_json::Value> = v
        .into_iter()
        .take(lim)
        .map(|(c, n)| serde_json::json!({"carrera": c, "count": n}))
        .collect();
    let result = serde_json::Value::Array(arr);

    let params = serde_json::json!({"limit": limit});
    let _ = crate::analitica::save_report("carreras_mas_consultadas", &params.to_string(), &result.to_string());
    Ok(result)
}

/// Total de consultas registradas y cantidad de gráficos distintos.
pub fn conteo_consultas() -> Result<serde_json::Value, Box<dyn Error>> {
    let conn = Connection::open(analitica_db_path())?;
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM consultas", [], |row| row.get(0))?;
    let distintos: i64 =
        conn.query_row("SELECT COUNT(DISTINCT grafico) FROM consultas", [], |row| row.get(0))?;

    let result = serde_json::json!({"consultas": total, "graficos_distintos": distintos});
    let _ = crate::analitica::save_report("conteo_consultas", "{}", &result.to_string());
    Ok(result)
}
