//! Módulo `graficos`: constructores de parámetros de gráfico.
//!
//! Cada constructor es un mapeo puro y determinista de una tabla agregada a
//! la estructura que espera el renderer externo (bindings de ejes, mapas de
//! color, nodos/enlaces, coordenadas de cuadrícula). Una tabla vacía produce
//! el estado `SinDatos` con un mensaje, nunca un error.

pub mod barras;
pub mod caja;
pub mod histograma;
pub mod linea;
pub mod mapa;
pub mod nube;
pub mod sankey;
pub mod tabla;
pub mod torta;
pub mod violin;
pub mod waffle;

use crate::models::Sexo;
use serde::Serialize;

/// Rango fijo del eje de puntajes en todas las vistas de puntaje.
pub const RANGO_EJE_PUNTAJE: [f64; 2] = [500.0, 1000.0];

/// Ticks fijos del eje de años.
pub const TICKS_ANIOS: [i32; 3] = crate::models::ANIOS_ADMISION;

/// Tono fijo por sexo en todas las vistas apiladas o coloreadas por sexo.
pub fn color_sexo(sexo: Sexo) -> &'static str {
    match sexo {
        Sexo::Masculino => "#636EFA",
        Sexo::Femenino => "#EF553B",
    }
}

/// Resultado de un constructor: la figura lista para el renderer o el estado
/// explícito de datos insuficientes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "estado", rename_all = "snake_case")]
pub enum Grafico<T> {
    Figura(T),
    SinDatos { mensaje: String },
}

impl<T> Grafico<T> {
    pub fn sin_datos(mensaje: impl Into<String>) -> Grafico<T> {
        Grafico::SinDatos { mensaje: mensaje.into() }
    }

    pub fn es_sin_datos(&self) -> bool {
        matches!(self, Grafico::SinDatos { .. })
    }
}

/// Definición de un eje numérico; los campos en `None` quedan a criterio del
/// renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Eje {
    pub titulo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rango: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formato: Option<String>,
}

impl Eje {
    pub fn libre(titulo: &str) -> Eje {
        Eje { titulo: titulo.to_string(), rango: None, ticks: None, formato: None }
    }

    /// Eje de puntajes con el rango fijo 500-1000.
    pub fn puntaje(titulo: &str) -> Eje {
        Eje {
            titulo: titulo.to_string(),
            rango: Some(RANGO_EJE_PUNTAJE),
            ticks: None,
            formato: None,
        }
    }

    /// Eje de años con los ticks fijos 2023-2025.
    pub fn anios() -> Eje {
        Eje {
            titulo: "Año".to_string(),
            rango: None,
            ticks: Some(TICKS_ANIOS.to_vec()),
            formato: None,
        }
    }
}
