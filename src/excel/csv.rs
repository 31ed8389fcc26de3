use crate::excel::base::{fila_a_postulante, mapear_encabezados};
use crate::models::Postulante;
use std::error::Error;
use std::path::Path;

/// Lee la base filtrada en formato CSV (la variante que trae
/// `PTJE_PONDERADO_PACE` y `CARRERA_LIMPIA`). Comparte el mapeo de columnas
/// y la coerción de tipos con el lector de Excel.
pub fn leer_base_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Postulante>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path.as_ref())?;

    let encabezados: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let idx = mapear_encabezados(&encabezados)?;

    let mut postulantes = Vec::new();
    for registro in reader.records() {
        let registro = registro?;
        let fila: Vec<String> = registro.iter().map(|c| c.trim().to_string()).collect();
        if fila.iter().all(|c| c.is_empty()) {
            continue;
        }
        if let Some(p) = fila_a_postulante(&fila, &idx) {
            postulantes.push(p);
        }
    }

    eprintln!("Base CSV cargada: {} postulantes", postulantes.len());
    Ok(postulantes)
}
