use crate::excel::io::{leer_hoja, leer_hojas_via_zip, normalize_header};
use crate::models::{ANIO_SENTINELA, ANIOS_ADMISION, Postulante, Sexo};
use std::error::Error;
use std::path::Path;

/// Índices de columna de la base homologada, resueltos una sola vez contra la
/// fila de encabezados. Si falta una columna requerida la carga falla de
/// inmediato en vez de propagar nulos silenciosos.
pub struct IndicesBase {
    anio: usize,
    codigo_region: Option<usize>,
    carrera: usize,
    sexo: usize,
    ptje_ponderado: Option<usize>,
    /// Ponderado PACE, presente sólo en la base filtrada; se usa como
    /// respaldo cuando el ponderado regular viene vacío.
    ptje_pace: Option<usize>,
    grupo_dependencia: Option<usize>,
    ingreso: Option<usize>,
    colegio: Option<usize>,
}

/// Resuelve los índices de columna a partir de los encabezados normalizados.
/// `CARRERA_LIMPIA` (base filtrada) tiene prioridad sobre `CARRERA`.
pub fn mapear_encabezados(encabezados: &[String]) -> Result<IndicesBase, Box<dyn Error>> {
    let buscar = |nombre: &str| -> Option<usize> {
        encabezados
            .iter()
            .position(|h| normalize_header(h) == nombre)
    };

    let anio = buscar("anio").ok_or("columna requerida 'ANIO' no encontrada en la base")?;
    let carrera = buscar("carrera_limpia")
        .or_else(|| buscar("carrera"))
        .ok_or("columna requerida 'CARRERA' no encontrada en la base")?;
    let sexo = buscar("sexo").ok_or("columna requerida 'SEXO' no encontrada en la base")?;

    Ok(IndicesBase {
        anio,
        codigo_region: buscar("codigo_region"),
        carrera,
        sexo,
        ptje_ponderado: buscar("ptje_ponderado"),
        ptje_pace: buscar("ptje_ponderado_pace"),
        grupo_dependencia: buscar("grupo_dependencia_est"),
        ingreso: buscar("ingreso"),
        colegio: buscar("nombre_colegio_egreso"),
    })
}

fn celda<'a>(fila: &'a [String], idx: Option<usize>) -> &'a str {
    idx.and_then(|i| fila.get(i)).map(|s| s.trim()).unwrap_or("")
}

/// Coerción de año: lo que no parsea queda en el año sentinela y cae fuera
/// del dominio 2023-2025.
fn parse_anio(s: &str) -> i32 {
    s.trim()
        .parse::<f64>()
        .map(|f| f as i32)
        .unwrap_or(ANIO_SENTINELA)
}

fn parse_region(s: &str) -> Option<u32> {
    let v = s.trim().parse::<f64>().ok()?;
    if v >= 1.0 { Some(v as u32) } else { None }
}

fn parse_puntaje(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// Convierte una fila cruda en `Postulante`. Devuelve `None` para filas cuyo
/// año queda fuera del dominio de admisión (incluido el sentinela).
pub fn fila_a_postulante(fila: &[String], idx: &IndicesBase) -> Option<Postulante> {
    let anio = parse_anio(celda(fila, Some(idx.anio)));
    if !ANIOS_ADMISION.contains(&anio) {
        return None;
    }

    let ptje = parse_puntaje(celda(fila, idx.ptje_ponderado))
        .or_else(|| parse_puntaje(celda(fila, idx.ptje_pace)));

    let colegio_raw = celda(fila, idx.colegio);
    let colegio = if colegio_raw.is_empty() {
        None
    } else {
        Some(colegio_raw.to_string())
    };

    Some(Postulante {
        anio,
        codigo_region: parse_region(celda(fila, idx.codigo_region)),
        carrera: celda(fila, Some(idx.carrera)).to_string(),
        sexo: Sexo::parse(celda(fila, Some(idx.sexo))),
        ptje_ponderado: ptje,
        grupo_dependencia: celda(fila, idx.grupo_dependencia).to_string(),
        ingreso: celda(fila, idx.ingreso).to_string(),
        colegio,
    })
}

fn filas_a_postulantes(filas: &[Vec<String>]) -> Result<Vec<Postulante>, Box<dyn Error>> {
    let encabezados = match filas.first() {
        Some(h) => h,
        None => return Err("la base no contiene filas".into()),
    };
    let idx = mapear_encabezados(encabezados)?;

    let mut postulantes = Vec::new();
    for fila in filas.iter().skip(1) {
        if fila.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        if let Some(p) = fila_a_postulante(fila, &idx) {
            postulantes.push(p);
        }
    }
    Ok(postulantes)
}

/// Lee la base homologada de postulantes desde un workbook Excel.
/// Intenta primero con calamine; si no devuelve filas, reintenta con el
/// fallback vía zip.
pub fn leer_base_postulantes<P: AsRef<Path>>(path: P) -> Result<Vec<Postulante>, Box<dyn Error>> {
    let mut filas = leer_hoja(path.as_ref(), "")?;
    if filas.is_empty() {
        eprintln!(
            "DEBUG: calamine no devolvió filas, intentando leer vía zip para {:?}",
            path.as_ref()
        );
        filas = leer_hojas_via_zip(path.as_ref())?;
    }
    let postulantes = filas_a_postulantes(&filas)?;
    eprintln!(
        "Base cargada: {} postulantes ({} filas leídas)",
        postulantes.len(),
        filas.len().saturating_sub(1)
    );
    Ok(postulantes)
}
