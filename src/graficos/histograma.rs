//! Histograma del puntaje ponderado para una carrera.

use crate::graficos::{Eje, Grafico};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FiguraHistograma {
    pub titulo: String,
    pub bins: u32,
    pub eje_x: Eje,
    pub valores: Vec<f64>,
}

pub fn figura_histograma_puntajes(carrera: &str, valores: &[f64]) -> Grafico<FiguraHistograma> {
    if valores.is_empty() {
        return Grafico::sin_datos(format!("No hay puntajes registrados para {}.", carrera));
    }

    Grafico::Figura(FiguraHistograma {
        titulo: "Distribución del puntaje ponderado total".to_string(),
        bins: 20,
        eje_x: Eje::puntaje("Puntaje Ponderado"),
        valores: valores.to_vec(),
    })
}
