//! Barras agrupadas (puntaje por sexo) y barras horizontales de ranking
//! (colegios y carreras por región).

use crate::agregacion::{ConteoEtiqueta, PromedioAnioSexo};
use crate::graficos::{Eje, Grafico, color_sexo};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SerieBarras {
    pub nombre: String,
    pub color: String,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraBarras {
    pub titulo: String,
    /// Modo de agrupación de barras ("group").
    pub modo: String,
    /// Formato del texto sobre cada barra.
    pub texto_auto: String,
    pub eje_x: Eje,
    pub eje_y: Eje,
    pub series: Vec<SerieBarras>,
}

/// Promedio de puntaje ponderado por sexo y año, barras agrupadas con el
/// mapa de color fijo por sexo.
pub fn figura_puntaje_sexo(filas: &[PromedioAnioSexo]) -> Grafico<FiguraBarras> {
    if filas.is_empty() {
        return Grafico::sin_datos("No hay puntajes por sexo para graficar.");
    }

    let mut series: Vec<SerieBarras> = Vec::new();
    for fila in filas.iter() {
        let etiqueta = fila.sexo.etiqueta();
        match series.iter_mut().find(|s| s.nombre == etiqueta) {
            Some(serie) => {
                serie.x.push(fila.anio);
                serie.y.push(fila.promedio);
            }
            None => series.push(SerieBarras {
                nombre: etiqueta.to_string(),
                color: color_sexo(fila.sexo).to_string(),
                x: vec![fila.anio],
                y: vec![fila.promedio],
            }),
        }
    }

    Grafico::Figura(FiguraBarras {
        titulo: "Promedio Puntaje Ponderado PAES por Sexo".to_string(),
        modo: "group".to_string(),
        texto_auto: ".1f".to_string(),
        eje_x: Eje::anios(),
        eje_y: Eje::puntaje("Puntaje Promedio"),
        series,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraBarrasH {
    pub titulo: String,
    pub orientacion: String,
    /// Orden de categorías del eje de etiquetas ("total ascending").
    pub orden_categorias: String,
    pub titulo_valores: String,
    pub titulo_etiquetas: String,
    pub etiquetas: Vec<String>,
    pub valores: Vec<usize>,
}

fn barras_ranking(
    titulo: String,
    titulo_valores: &str,
    titulo_etiquetas: &str,
    filas: &[ConteoEtiqueta],
    mensaje_vacio: &str,
) -> Grafico<FiguraBarrasH> {
    if filas.is_empty() {
        return Grafico::sin_datos(mensaje_vacio);
    }
    Grafico::Figura(FiguraBarrasH {
        titulo,
        orientacion: "h".to_string(),
        orden_categorias: "total ascending".to_string(),
        titulo_valores: titulo_valores.to_string(),
        titulo_etiquetas: titulo_etiquetas.to_string(),
        etiquetas: filas.iter().map(|f| f.etiqueta.clone()).collect(),
        valores: filas.iter().map(|f| f.n).collect(),
    })
}

/// Colegios con más estudiantes en la región seleccionada.
pub fn figura_top_colegios(region: u32, filas: &[ConteoEtiqueta]) -> Grafico<FiguraBarrasH> {
    barras_ranking(
        format!("Colegios con más estudiantes (Región {})", region),
        "Cantidad de Estudiantes",
        "Nombre del Colegio",
        filas,
        "No hay colegios registrados en esta región.",
    )
}

/// Carreras con más estudiantes en la región seleccionada.
pub fn figura_top_carreras(region: u32, filas: &[ConteoEtiqueta]) -> Grafico<FiguraBarrasH> {
    barras_ranking(
        format!("Carreras con más estudiantes (Región {})", region),
        "Cantidad de Estudiantes",
        "Carrera",
        filas,
        "No hay carreras registradas en esta región.",
    )
}
