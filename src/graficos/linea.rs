//! Gráficos de línea: tendencia de puntaje por carrera, matrícula por
//! dependencia, trayectoria de una carrera y proporción por sexo (facetada).

use crate::agregacion::{ConteoDependencia, PromedioAnio, PromedioAnioCarrera, ProporcionSexo};
use crate::graficos::{Eje, Grafico, color_sexo};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SerieLinea {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Faceta a la que pertenece la serie (columna por carrera); `None` en
    /// figuras sin facetas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faceta: Option<String>,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraLinea {
    pub titulo: String,
    pub marcadores: bool,
    pub eje_x: Eje,
    pub eje_y: Eje,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columnas_facetas: Option<u32>,
    pub series: Vec<SerieLinea>,
}

/// Tendencia del puntaje promedio por carrera, una serie por carrera.
pub fn figura_puntaje_carrera(filas: &[PromedioAnioCarrera]) -> Grafico<FiguraLinea> {
    if filas.is_empty() {
        return Grafico::sin_datos("No hay puntajes para las carreras seleccionadas.");
    }

    let mut series: Vec<SerieLinea> = Vec::new();
    for fila in filas.iter() {
        match series.iter_mut().find(|s| s.nombre == fila.carrera) {
            Some(serie) => {
                serie.x.push(fila.anio);
                serie.y.push(fila.promedio);
            }
            None => series.push(SerieLinea {
                nombre: fila.carrera.clone(),
                color: None,
                faceta: None,
                x: vec![fila.anio],
                y: vec![fila.promedio],
            }),
        }
    }

    Grafico::Figura(FiguraLinea {
        titulo: "Tendencia Puntaje Promedio por Carrera".to_string(),
        marcadores: true,
        eje_x: Eje::anios(),
        eje_y: Eje::puntaje("Puntaje Promedio"),
        columnas_facetas: None,
        series,
    })
}

/// Evolución de la matrícula por grupo de dependencia, una serie por grupo.
pub fn figura_dependencia(filas: &[ConteoDependencia]) -> Grafico<FiguraLinea> {
    if filas.is_empty() {
        return Grafico::sin_datos("No hay datos de dependencia para graficar.");
    }

    let mut series: Vec<SerieLinea> = Vec::new();
    for fila in filas.iter() {
        match series.iter_mut().find(|s| s.nombre == fila.grupo) {
            Some(serie) => {
                serie.x.push(fila.anio);
                serie.y.push(fila.n as f64);
            }
            None => series.push(SerieLinea {
                nombre: fila.grupo.clone(),
                color: None,
                faceta: None,
                x: vec![fila.anio],
                y: vec![fila.n as f64],
            }),
        }
    }

    Grafico::Figura(FiguraLinea {
        titulo: "Evolución de la matrícula por dependencia del establecimiento".to_string(),
        marcadores: true,
        eje_x: Eje::anios(),
        eje_y: Eje::libre("Cantidad de Estudiantes"),
        columnas_facetas: None,
        series,
    })
}

/// Trayectoria del puntaje promedio de una carrera.
pub fn figura_trayectoria(carrera: &str, filas: &[PromedioAnio]) -> Grafico<FiguraLinea> {
    if filas.is_empty() {
        return Grafico::sin_datos(format!("No hay puntajes registrados para {}.", carrera));
    }

    let serie = SerieLinea {
        nombre: carrera.to_string(),
        color: None,
        faceta: None,
        x: filas.iter().map(|f| f.anio).collect(),
        y: filas.iter().map(|f| f.promedio).collect(),
    };

    Grafico::Figura(FiguraLinea {
        titulo: format!("Trayectoria de puntajes ponderados para {}", carrera),
        marcadores: true,
        eje_x: Eje::anios(),
        eje_y: Eje::puntaje("Promedio Puntaje Ponderado"),
        columnas_facetas: None,
        series: vec![serie],
    })
}

/// Proporción de postulantes por sexo y año, facetada por carrera en dos
/// columnas, eje y en formato porcentual.
pub fn figura_proporcion_sexo(filas: &[ProporcionSexo]) -> Grafico<FiguraLinea> {
    if filas.is_empty() {
        return Grafico::sin_datos("No hay postulantes para las carreras seleccionadas.");
    }

    let mut series: Vec<SerieLinea> = Vec::new();
    for fila in filas.iter() {
        let etiqueta = fila.sexo.etiqueta();
        let existente = series
            .iter_mut()
            .find(|s| s.nombre == etiqueta && s.faceta.as_deref() == Some(fila.carrera.as_str()));
        match existente {
            Some(serie) => {
                serie.x.push(fila.anio);
                serie.y.push(fila.proporcion);
            }
            None => series.push(SerieLinea {
                nombre: etiqueta.to_string(),
                color: Some(color_sexo(fila.sexo).to_string()),
                faceta: Some(fila.carrera.clone()),
                x: vec![fila.anio],
                y: vec![fila.proporcion],
            }),
        }
    }

    let mut eje_y = Eje::libre("Proporción");
    eje_y.formato = Some(".0%".to_string());

    Grafico::Figura(FiguraLinea {
        titulo: "Proporción de Postulantes por Sexo".to_string(),
        marcadores: true,
        eje_x: Eje::anios(),
        eje_y,
        columnas_facetas: Some(2),
        series,
    })
}
