//! Torta (dona) de distribución por tipo de ingreso del año reciente.

use crate::agregacion::ConteoIngreso;
use crate::graficos::Grafico;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Sector {
    pub etiqueta: String,
    pub valor: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraTorta {
    pub titulo: String,
    /// Radio del hoyo central (0.3 = dona).
    pub hoyo: f64,
    pub posicion_texto: String,
    pub info_texto: String,
    pub sectores: Vec<Sector>,
}

pub fn figura_torta_ingreso(filas: &[ConteoIngreso]) -> Grafico<FiguraTorta> {
    if filas.is_empty() {
        return Grafico::sin_datos("No hay tipos de ingreso registrados para el año.");
    }

    Grafico::Figura(FiguraTorta {
        titulo: "Distribución de estudiantes por tipo de ingreso (2025)".to_string(),
        hoyo: 0.3,
        posicion_texto: "inside".to_string(),
        info_texto: "percent+label".to_string(),
        sectores: filas
            .iter()
            .map(|f| Sector { etiqueta: f.ingreso.clone(), valor: f.n })
            .collect(),
    })
}
