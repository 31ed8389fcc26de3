// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Años de admisión admitidos tras la limpieza de la base.
pub const ANIOS_ADMISION: [i32; 3] = [2023, 2024, 2025];

/// Año sentinela asignado a filas cuyo ANIO no pudo parsearse; el filtro de
/// años las excluye de la base.
pub const ANIO_SENTINELA: i32 = 0;

/// Valor sentinela del grupo de dependencia para establecimientos sin dato.
pub const SIN_INFORMACION: &str = "SIN INFORMACIÓN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sexo {
    #[serde(rename = "MASCULINO")]
    Masculino,
    #[serde(rename = "FEMENINO")]
    Femenino,
}

impl Sexo {
    /// Orden fijo de apilado: MASCULINO antes que FEMENINO.
    pub const ORDEN: [Sexo; 2] = [Sexo::Masculino, Sexo::Femenino];

    pub fn parse(s: &str) -> Option<Sexo> {
        match s.trim().to_uppercase().as_str() {
            "MASCULINO" => Some(Sexo::Masculino),
            "FEMENINO" => Some(Sexo::Femenino),
            _ => None,
        }
    }

    pub fn etiqueta(&self) -> &'static str {
        match self {
            Sexo::Masculino => "MASCULINO",
            Sexo::Femenino => "FEMENINO",
        }
    }
}

/// Una fila de la base homologada: una postulación a la admisión.
/// Los campos se declaran una sola vez al cargar; no hay acceso dinámico por
/// nombre de columna.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Postulante {
    pub anio: i32,
    /// Código de región de origen (1-16). `None` cuando la celda no parsea;
    /// esas filas sólo quedan fuera de las agregaciones por región.
    pub codigo_region: Option<u32>,
    pub carrera: String,
    pub sexo: Option<Sexo>,
    /// Puntaje ponderado PAES. En la base filtrada CSV se rellena con el
    /// ponderado PACE cuando el regular viene vacío.
    pub ptje_ponderado: Option<f64>,
    pub grupo_dependencia: String,
    pub ingreso: String,
    pub colegio: Option<String>,
}

impl Postulante {
    /// Código de región como string de dos caracteres con cero a la izquierda,
    /// la clave de join contra los polígonos regionales.
    pub fn region_zfill(&self) -> Option<String> {
        self.codigo_region.map(|c| format!("{:02}", c))
    }
}
