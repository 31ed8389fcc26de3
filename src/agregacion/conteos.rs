//! Conteos, proporciones y rankings top-N sobre la base filtrada.

use crate::agregacion::ANIO_RECIENTE;
use crate::models::{Postulante, Sexo};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConteoRegion {
    /// Código de región con cero a la izquierda ("08").
    pub region: String,
    pub n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProporcionSexo {
    pub anio: i32,
    pub carrera: String,
    pub sexo: Sexo,
    pub n: usize,
    pub total: usize,
    /// n / total dentro de (año, carrera); suma 1.0 por grupo.
    pub proporcion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConteoDependencia {
    pub anio: i32,
    pub grupo: String,
    pub n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConteoIngreso {
    pub ingreso: String,
    pub n: usize,
}

/// Fila genérica de ranking: una etiqueta y su conteo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConteoEtiqueta {
    pub etiqueta: String,
    pub n: usize,
}

/// Ranking descendente por conteo con empates resueltos por orden de
/// aparición (sort estable sobre el índice de primera vista), truncado a `n`.
fn ranking_estable<I>(items: I, n: usize) -> Vec<ConteoEtiqueta>
where
    I: IntoIterator<Item = String>,
{
    let mut conteos: HashMap<String, (usize, usize)> = HashMap::new();
    for (idx, item) in items.into_iter().enumerate() {
        let e = conteos.entry(item).or_insert((0, idx));
        e.0 += 1;
    }

    let mut filas: Vec<(String, usize, usize)> = conteos
        .into_iter()
        .map(|(etiqueta, (cuenta, primera))| (etiqueta, cuenta, primera))
        .collect();
    filas.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    filas
        .into_iter()
        .take(n)
        .map(|(etiqueta, cuenta, _)| ConteoEtiqueta { etiqueta, n: cuenta })
        .collect()
}

/// Estudiantes por región del año reciente. Filas sin código de región
/// parseable quedan fuera de esta agregación (y sólo de ésta).
pub fn conteo_por_region(base: &[Postulante]) -> Vec<ConteoRegion> {
    let mut conteos: HashMap<String, usize> = HashMap::new();
    for p in base.iter() {
        if p.anio != ANIO_RECIENTE {
            continue;
        }
        if let Some(region) = p.region_zfill() {
            *conteos.entry(region).or_default() += 1;
        }
    }

    let mut filas: Vec<ConteoRegion> = conteos
        .into_iter()
        .map(|(region, n)| ConteoRegion { region, n })
        .collect();
    filas.sort_by(|a, b| a.region.cmp(&b.region));
    filas
}

/// Proporción de postulantes por sexo dentro de cada (año, carrera).
/// Invariante: las proporciones de un grupo suman 1.0.
pub fn proporcion_sexo_por_anio_carrera(
    base: &[Postulante],
    carreras: &[String],
) -> Vec<ProporcionSexo> {
    let mut conteos: HashMap<(i32, String, Sexo), usize> = HashMap::new();
    let mut totales: HashMap<(i32, String), usize> = HashMap::new();
    for p in base.iter() {
        if !carreras.contains(&p.carrera) {
            continue;
        }
        let sexo = match p.sexo {
            Some(s) => s,
            None => continue,
        };
        *conteos.entry((p.anio, p.carrera.clone(), sexo)).or_default() += 1;
        *totales.entry((p.anio, p.carrera.clone())).or_default() += 1;
    }

    let mut filas: Vec<ProporcionSexo> = conteos
        .into_iter()
        .map(|((anio, carrera, sexo), n)| {
            let total = totales[&(anio, carrera.clone())];
            ProporcionSexo {
                anio,
                carrera,
                sexo,
                n,
                total,
                proporcion: n as f64 / total as f64,
            }
        })
        .collect();
    filas.sort_by(|a, b| (&a.carrera, a.anio, a.sexo).cmp(&(&b.carrera, b.anio, b.sexo)));
    filas
}

/// Matrícula por (año, grupo de dependencia). El sentinela "SIN INFORMACIÓN"
/// sí participa en esta vista.
pub fn conteo_dependencia_por_anio(base: &[Postulante]) -> Vec<ConteoDependencia> {
    let mut conteos: HashMap<(i32, String), usize> = HashMap::new();
    for p in base.iter() {
        if p.grupo_dependencia.is_empty() {
            continue;
        }
        *conteos.entry((p.anio, p.grupo_dependencia.clone())).or_default() += 1;
    }

    let mut filas: Vec<ConteoDependencia> = conteos
        .into_iter()
        .map(|((anio, grupo), n)| ConteoDependencia { anio, grupo, n })
        .collect();
    filas.sort_by(|a, b| (&a.grupo, a.anio).cmp(&(&b.grupo, b.anio)));
    filas
}

/// Estudiantes del año reciente por tipo de ingreso, descendente por conteo.
pub fn conteo_ingreso(base: &[Postulante]) -> Vec<ConteoIngreso> {
    let etiquetas = base
        .iter()
        .filter(|p| p.anio == ANIO_RECIENTE && !p.ingreso.is_empty())
        .map(|p| p.ingreso.clone());
    ranking_estable(etiquetas, usize::MAX)
        .into_iter()
        .map(|c| ConteoIngreso { ingreso: c.etiqueta, n: c.n })
        .collect()
}

/// Conteo por carrera entre los postulantes del año reciente con el tipo de
/// ingreso seleccionado, en orden alfabético de carrera (el orden con que el
/// diagrama de flujo asigna índices de nodo).
pub fn flujo_ingreso_carrera(base: &[Postulante], ingreso: &str) -> Vec<ConteoEtiqueta> {
    let mut conteos: HashMap<String, usize> = HashMap::new();
    for p in base.iter() {
        if p.anio != ANIO_RECIENTE || p.ingreso != ingreso || p.carrera.is_empty() {
            continue;
        }
        *conteos.entry(p.carrera.clone()).or_default() += 1;
    }

    let mut filas: Vec<ConteoEtiqueta> = conteos
        .into_iter()
        .map(|(etiqueta, n)| ConteoEtiqueta { etiqueta, n })
        .collect();
    filas.sort_by(|a, b| a.etiqueta.cmp(&b.etiqueta));
    filas
}

/// Top-30 colegios de egreso dentro de la región seleccionada. Filas sin
/// nombre de colegio quedan fuera del ranking.
pub fn top_colegios_por_region(base: &[Postulante], region: u32) -> Vec<ConteoEtiqueta> {
    let etiquetas = base
        .iter()
        .filter(|p| p.codigo_region == Some(region))
        .filter_map(|p| p.colegio.clone());
    ranking_estable(etiquetas, 30)
}

/// Top-10 carreras dentro de la región seleccionada.
pub fn top_carreras_por_region(base: &[Postulante], region: u32) -> Vec<ConteoEtiqueta> {
    let etiquetas = base
        .iter()
        .filter(|p| p.codigo_region == Some(region) && !p.carrera.is_empty())
        .map(|p| p.carrera.clone());
    ranking_estable(etiquetas, 10)
}

/// Frecuencia de palabras de los nombres de colegio de la región, el insumo
/// del renderer externo de nube de palabras.
pub fn frecuencia_palabras_colegios(base: &[Postulante], region: u32) -> Vec<ConteoEtiqueta> {
    let palabras = base
        .iter()
        .filter(|p| p.codigo_region == Some(region))
        .filter_map(|p| p.colegio.as_deref())
        .flat_map(|nombre| nombre.split_whitespace())
        .map(|w| w.to_string());
    ranking_estable(palabras, usize::MAX)
}
