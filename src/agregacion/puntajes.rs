//! Agregaciones de puntaje ponderado: promedios por tupla de claves y
//! muestras crudas para cajas, violines e histogramas. Los puntajes nulos se
//! ignoran en los promedios y se excluyen de las muestras.

use crate::agregacion::ANIO_RECIENTE;
use crate::models::{Postulante, SIN_INFORMACION, Sexo};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromedioAnioCarrera {
    pub anio: i32,
    pub carrera: String,
    pub promedio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromedioAnioSexo {
    pub anio: i32,
    pub sexo: Sexo,
    pub promedio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromedioAnio {
    pub anio: i32,
    pub promedio: f64,
}

/// Muestra cruda de puntajes para un par (carrera, grupo). El grupo es la
/// etiqueta de la segunda dimensión: sexo o grupo de dependencia.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrupoPuntajes {
    pub carrera: String,
    pub grupo: String,
    pub puntajes: Vec<f64>,
}

fn promedio(suma: f64, n: usize) -> f64 {
    suma / n as f64
}

/// Promedio de puntaje por (año, carrera) para las carreras seleccionadas.
/// Grupos sin ningún puntaje conocido no generan fila.
pub fn promedio_puntaje_por_anio_carrera(
    base: &[Postulante],
    carreras: &[String],
) -> Vec<PromedioAnioCarrera> {
    let mut grupos: HashMap<(i32, &str), (f64, usize)> = HashMap::new();
    for p in base.iter() {
        if !carreras.contains(&p.carrera) {
            continue;
        }
        if let Some(ptje) = p.ptje_ponderado {
            let e = grupos.entry((p.anio, p.carrera.as_str())).or_insert((0.0, 0));
            e.0 += ptje;
            e.1 += 1;
        }
    }

    let mut filas: Vec<PromedioAnioCarrera> = grupos
        .into_iter()
        .map(|((anio, carrera), (suma, n))| PromedioAnioCarrera {
            anio,
            carrera: carrera.to_string(),
            promedio: promedio(suma, n),
        })
        .collect();
    filas.sort_by(|a, b| (a.anio, &a.carrera).cmp(&(b.anio, &b.carrera)));
    filas
}

/// Promedio de puntaje por (año, sexo) sobre la base completa.
pub fn promedio_puntaje_por_anio_sexo(base: &[Postulante]) -> Vec<PromedioAnioSexo> {
    let mut grupos: HashMap<(i32, Sexo), (f64, usize)> = HashMap::new();
    for p in base.iter() {
        let sexo = match p.sexo {
            Some(s) => s,
            None => continue,
        };
        if let Some(ptje) = p.ptje_ponderado {
            let e = grupos.entry((p.anio, sexo)).or_insert((0.0, 0));
            e.0 += ptje;
            e.1 += 1;
        }
    }

    let mut filas: Vec<PromedioAnioSexo> = grupos
        .into_iter()
        .map(|((anio, sexo), (suma, n))| PromedioAnioSexo {
            anio,
            sexo,
            promedio: promedio(suma, n),
        })
        .collect();
    // Años ascendentes, MASCULINO antes que FEMENINO dentro de cada año.
    filas.sort_by(|a, b| (a.anio, a.sexo).cmp(&(b.anio, b.sexo)));
    filas
}

/// Promedio de puntaje por año para una sola carrera (la vista de
/// trayectoria del storytelling).
pub fn trayectoria_puntaje_carrera(base: &[Postulante], carrera: &str) -> Vec<PromedioAnio> {
    let mut grupos: HashMap<i32, (f64, usize)> = HashMap::new();
    for p in base.iter() {
        if p.carrera != carrera {
            continue;
        }
        if let Some(ptje) = p.ptje_ponderado {
            let e = grupos.entry(p.anio).or_insert((0.0, 0));
            e.0 += ptje;
            e.1 += 1;
        }
    }

    let mut filas: Vec<PromedioAnio> = grupos
        .into_iter()
        .map(|(anio, (suma, n))| PromedioAnio { anio, promedio: promedio(suma, n) })
        .collect();
    filas.sort_by_key(|f| f.anio);
    filas
}

/// Muestras de puntaje por (carrera, sexo) para el boxplot, carreras
/// restringidas a la selección; filas sin puntaje o sin sexo quedan fuera.
pub fn puntajes_por_carrera_sexo(base: &[Postulante], carreras: &[String]) -> Vec<GrupoPuntajes> {
    let mut grupos: HashMap<(String, Sexo), Vec<f64>> = HashMap::new();
    for p in base.iter() {
        if !carreras.contains(&p.carrera) {
            continue;
        }
        let (sexo, ptje) = match (p.sexo, p.ptje_ponderado) {
            (Some(s), Some(v)) => (s, v),
            _ => continue,
        };
        grupos.entry((p.carrera.clone(), sexo)).or_default().push(ptje);
    }

    let mut filas: Vec<(String, Sexo, Vec<f64>)> = grupos
        .into_iter()
        .map(|((carrera, sexo), puntajes)| (carrera, sexo, puntajes))
        .collect();
    filas.sort_by(|a, b| (&a.0, a.1).cmp(&(&b.0, b.1)));
    filas
        .into_iter()
        .map(|(carrera, sexo, puntajes)| GrupoPuntajes {
            carrera,
            grupo: sexo.etiqueta().to_string(),
            puntajes,
        })
        .collect()
}

/// Muestras de puntaje por (carrera, grupo de dependencia) del año reciente,
/// para la vista de distribución (violín). El sentinela "SIN INFORMACIÓN" se
/// excluye aquí, y sólo aquí entre las vistas de dependencia.
pub fn puntajes_por_carrera_dependencia(
    base: &[Postulante],
    carreras_distribucion: &[String],
) -> Vec<GrupoPuntajes> {
    let mut grupos: HashMap<(String, String), Vec<f64>> = HashMap::new();
    for p in base.iter() {
        if p.anio != ANIO_RECIENTE {
            continue;
        }
        if !carreras_distribucion.contains(&p.carrera) {
            continue;
        }
        if p.grupo_dependencia.is_empty() || p.grupo_dependencia == SIN_INFORMACION {
            continue;
        }
        if let Some(ptje) = p.ptje_ponderado {
            grupos
                .entry((p.carrera.clone(), p.grupo_dependencia.clone()))
                .or_default()
                .push(ptje);
        }
    }

    let mut filas: Vec<GrupoPuntajes> = grupos
        .into_iter()
        .map(|((carrera, grupo), puntajes)| GrupoPuntajes { carrera, grupo, puntajes })
        .collect();
    filas.sort_by(|a, b| (&a.carrera, &a.grupo).cmp(&(&b.carrera, &b.grupo)));
    filas
}

/// Muestras crudas de puntaje para una carrera (histograma / caja del
/// storytelling), en orden de aparición.
pub fn puntajes_carrera(base: &[Postulante], carrera: &str) -> Vec<f64> {
    base.iter()
        .filter(|p| p.carrera == carrera)
        .filter_map(|p| p.ptje_ponderado)
        .collect()
}
