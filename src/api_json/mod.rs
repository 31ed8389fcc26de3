use crate::models::Postulante;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selección de filtros de una interacción del dashboard.
///
/// # Estructura del JSON esperado (todos los campos opcionales):
/// ```json
/// {
///   "carreras": ["Sociología", "Medicina"],
///   "region": 8,
///   "carreras_distribucion": ["Sociología"],
///   "ingreso": "PACE",
///   "carrera": "Derecho"
/// }
/// ```
///
/// # Campos:
/// - `carreras`: carreras a comparar (afecta puntajes, proporciones y cajas)
/// - `region`: región seleccionada para los rankings de colegios/carreras
/// - `carreras_distribucion`: sub-filtro de la vista de distribución por
///   dependencia
/// - `ingreso`: tipo de ingreso para el diagrama de flujo
/// - `carrera`: carrera única para trayectoria e histograma
///
/// El objeto es inmutable: se construye una vez por interacción (completando
/// los campos ausentes con los defaults canónicos) y se pasa como argumento a
/// cada agregación. Ninguna vista lee estado compartido.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltroSeleccion {
    #[serde(default)]
    pub carreras: Vec<String>,
    #[serde(default)]
    pub region: Option<u32>,
    #[serde(default)]
    pub carreras_distribucion: Vec<String>,
    #[serde(default)]
    pub ingreso: Option<String>,
    #[serde(default)]
    pub carrera: Option<String>,
}

/// Defaults canónicos del dashboard.
pub const CARRERAS_DEFAULT: [&str; 3] = ["Sociología", "Medicina", "Derecho"];
pub const REGION_DEFAULT: u32 = 8;
pub const CARRERAS_DISTRIBUCION_DEFAULT: [&str; 1] = ["Sociología"];

/// Valores disponibles en la base, para poblar los controles del front-end
/// y completar filtros parciales.
#[derive(Debug, Clone, Serialize)]
pub struct ValoresDisponibles {
    pub carreras: Vec<String>,
    pub regiones: Vec<u32>,
    pub ingresos: Vec<String>,
    pub dependencias: Vec<String>,
}

impl ValoresDisponibles {
    pub fn desde_base(base: &[Postulante]) -> ValoresDisponibles {
        let mut carreras: BTreeSet<String> = BTreeSet::new();
        let mut regiones: BTreeSet<u32> = BTreeSet::new();
        let mut ingresos: BTreeSet<String> = BTreeSet::new();
        let mut dependencias: BTreeSet<String> = BTreeSet::new();

        for p in base.iter() {
            if !p.carrera.is_empty() {
                carreras.insert(p.carrera.clone());
            }
            if let Some(r) = p.codigo_region {
                regiones.insert(r);
            }
            if !p.ingreso.is_empty() {
                ingresos.insert(p.ingreso.clone());
            }
            if !p.grupo_dependencia.is_empty() {
                dependencias.insert(p.grupo_dependencia.clone());
            }
        }

        ValoresDisponibles {
            carreras: carreras.into_iter().collect(),
            regiones: regiones.into_iter().collect(),
            ingresos: ingresos.into_iter().collect(),
            dependencias: dependencias.into_iter().collect(),
        }
    }
}

impl FiltroSeleccion {
    /// Completa los campos ausentes con los defaults canónicos:
    /// región 8 si existe en la base (si no, la primera disponible), las tres
    /// carreras de comparación por defecto, "Sociología" para la vista de
    /// distribución, y el primer valor ordenado para ingreso y carrera única.
    pub fn completar(mut self, disponibles: &ValoresDisponibles) -> FiltroSeleccion {
        if self.carreras.is_empty() {
            self.carreras = CARRERAS_DEFAULT.iter().map(|s| s.to_string()).collect();
        }
        if self.region.is_none() {
            self.region = if disponibles.regiones.contains(&REGION_DEFAULT) {
                Some(REGION_DEFAULT)
            } else {
                disponibles.regiones.first().copied()
            };
        }
        if self.carreras_distribucion.is_empty() {
            self.carreras_distribucion = CARRERAS_DISTRIBUCION_DEFAULT
                .iter()
                .map(|s| s.to_string())
                .collect();
        }
        if self.ingreso.is_none() {
            self.ingreso = disponibles.ingresos.first().cloned();
        }
        if self.carrera.is_none() {
            self.carrera = disponibles.carreras.first().cloned();
        }
        self
    }
}

pub fn parse_filtro(json_str: &str) -> Result<FiltroSeleccion, serde_json::Error> {
    serde_json::from_str::<FiltroSeleccion>(json_str)
}

/// Parsea el body JSON de un request y completa los campos ausentes contra
/// los valores disponibles en la base cargada.
pub fn parse_y_completar(
    body: &serde_json::Value,
    base: &[Postulante],
) -> Result<FiltroSeleccion, Box<dyn std::error::Error>> {
    let filtro = serde_json::from_value::<FiltroSeleccion>(body.clone())?;
    let disponibles = ValoresDisponibles::desde_base(base);
    Ok(filtro.completar(&disponibles))
}
