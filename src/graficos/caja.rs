//! Boxplot del puntaje ponderado por carrera y sexo.

use crate::agregacion::GrupoPuntajes;
use crate::graficos::{Eje, Grafico, color_sexo};
use crate::models::Sexo;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CajaGrupo {
    pub carrera: String,
    pub grupo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub puntajes: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraCaja {
    pub titulo: String,
    /// Modo de agrupación de cajas ("group").
    pub modo: String,
    /// Qué puntos individuales mostrar además de la caja ("all").
    pub puntos: String,
    pub eje_x: Eje,
    pub eje_y: Eje,
    pub grupos: Vec<CajaGrupo>,
}

/// Distribución de puntajes por carrera y sexo, con todos los puntos y el
/// rango fijo del eje de puntajes.
pub fn figura_caja_puntajes(grupos: &[GrupoPuntajes]) -> Grafico<FiguraCaja> {
    if grupos.is_empty() {
        return Grafico::sin_datos("No hay puntajes para las carreras seleccionadas.");
    }

    let cajas = grupos
        .iter()
        .map(|g| CajaGrupo {
            carrera: g.carrera.clone(),
            grupo: g.grupo.clone(),
            color: Sexo::parse(&g.grupo).map(|s| color_sexo(s).to_string()),
            puntajes: g.puntajes.clone(),
        })
        .collect();

    Grafico::Figura(FiguraCaja {
        titulo: "Boxplot del Puntaje Ponderado por Sexo y Carrera".to_string(),
        modo: "group".to_string(),
        puntos: "all".to_string(),
        eje_x: Eje::libre("Carrera"),
        eje_y: Eje::puntaje("Puntaje Ponderado"),
        grupos: cajas,
    })
}
