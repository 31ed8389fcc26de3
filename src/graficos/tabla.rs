//! Parámetros de la grilla de datos (tabla de estudiantes): definiciones de
//! columna más las filas completas de la base.

use crate::graficos::Grafico;
use crate::models::Postulante;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ColumnaTabla {
    pub campo: String,
    pub filtrable: bool,
    pub ordenable: bool,
    pub redimensionable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraTabla {
    pub alto: u32,
    pub columnas: Vec<ColumnaTabla>,
    pub filas: Vec<serde_json::Value>,
}

/// Columnas de la grilla, alineadas con los campos de `Postulante`.
const CAMPOS: [&str; 8] = [
    "anio",
    "codigo_region",
    "carrera",
    "sexo",
    "ptje_ponderado",
    "grupo_dependencia",
    "ingreso",
    "colegio",
];

pub fn figura_tabla(base: &[Postulante]) -> Grafico<FiguraTabla> {
    if base.is_empty() {
        return Grafico::sin_datos("La base de estudiantes está vacía.");
    }

    let columnas = CAMPOS
        .iter()
        .map(|campo| ColumnaTabla {
            campo: campo.to_string(),
            filtrable: true,
            ordenable: true,
            redimensionable: true,
        })
        .collect();

    let filas = base
        .iter()
        .map(|p| serde_json::to_value(p).unwrap_or(serde_json::Value::Null))
        .collect();

    Grafico::Figura(FiguraTabla { alto: 600, columnas, filas })
}
