//! Violines horizontales del puntaje por grupo de dependencia, facetados por
//! carrera, para el año de admisión más reciente.

use crate::agregacion::GrupoPuntajes;
use crate::graficos::{Eje, Grafico};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize)]
pub struct ViolinGrupo {
    pub carrera: String,
    pub dependencia: String,
    pub puntajes: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraViolin {
    pub titulo: String,
    pub orientacion: String,
    /// Mostrar la caja interna dentro de cada violín.
    pub caja: bool,
    pub puntos: String,
    /// Una fila de facetas por carrera, en este orden.
    pub facetas_fila: Vec<String>,
    /// Alto sugerido, proporcional a la cantidad de carreras facetadas.
    pub alto: u32,
    pub eje_x: Eje,
    pub grupos: Vec<ViolinGrupo>,
}

/// Distribución del puntaje ponderado por carrera y dependencia.
pub fn figura_violin_dependencia(grupos: &[GrupoPuntajes]) -> Grafico<FiguraViolin> {
    if grupos.is_empty() {
        return Grafico::sin_datos(
            "No hay puntajes con información de dependencia para las carreras seleccionadas.",
        );
    }

    let carreras: Vec<String> = grupos
        .iter()
        .map(|g| g.carrera.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let violines = grupos
        .iter()
        .map(|g| ViolinGrupo {
            carrera: g.carrera.clone(),
            dependencia: g.grupo.clone(),
            puntajes: g.puntajes.clone(),
        })
        .collect();

    Grafico::Figura(FiguraViolin {
        titulo: "Distribución del Puntaje Ponderado por Carrera y Dependencia (2025)".to_string(),
        orientacion: "h".to_string(),
        caja: true,
        puntos: "all".to_string(),
        alto: 400 + 200 * carreras.len() as u32,
        facetas_fila: carreras,
        eje_x: Eje::puntaje("Puntaje Ponderado"),
        grupos: violines,
    })
}
