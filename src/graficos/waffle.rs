//! Cuadrícula de bloques ("waffle") de la composición por sexo.
//!
//! Cada proporción se convierte en una cantidad entera de celdas de una
//! cuadrícula fija de 5x20 (100 celdas) redondeando al entero más cercano;
//! las celdas se asignan a cada categoría en el orden del grupo y el total se
//! recorta a la capacidad de la cuadrícula si el redondeo se pasa.

use crate::agregacion::ProporcionSexo;
use crate::graficos::{Grafico, color_sexo};
use crate::models::Sexo;
use serde::Serialize;

pub const FILAS_CUADRICULA: usize = 5;
pub const COLUMNAS_CUADRICULA: usize = 20;
pub const CELDAS_CUADRICULA: usize = FILAS_CUADRICULA * COLUMNAS_CUADRICULA;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CeldaWaffle {
    pub fila: usize,
    pub columna: usize,
    pub categoria: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaffleAnio {
    pub anio: i32,
    pub celdas: Vec<CeldaWaffle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraWaffle {
    pub titulo: String,
    pub filas_cuadricula: usize,
    pub columnas_cuadricula: usize,
    /// Mapa de color por categoría, en el orden de asignación de celdas.
    pub colores: Vec<(String, String)>,
    pub anios: Vec<WaffleAnio>,
}

/// Convierte pares (categoría, proporción) en celdas de la cuadrícula.
/// Redondeo al entero más cercano por categoría; si la suma se pasa de la
/// capacidad, la última categoría se recorta.
pub fn cuadricula_waffle(categorias: &[(String, f64)]) -> Vec<CeldaWaffle> {
    let mut celdas = Vec::new();
    for (categoria, proporcion) in categorias.iter() {
        let mut cupo = (proporcion * CELDAS_CUADRICULA as f64).round() as usize;
        let restantes = CELDAS_CUADRICULA - celdas.len();
        if cupo > restantes {
            cupo = restantes;
        }
        for _ in 0..cupo {
            let idx = celdas.len();
            celdas.push(CeldaWaffle {
                fila: idx / COLUMNAS_CUADRICULA,
                columna: idx % COLUMNAS_CUADRICULA,
                categoria: categoria.clone(),
            });
        }
    }
    celdas
}

/// Waffle de composición por sexo para una carrera: una cuadrícula por año,
/// con MASCULINO asignado antes que FEMENINO.
pub fn figura_waffle_sexo(carrera: &str, filas: &[ProporcionSexo]) -> Grafico<FiguraWaffle> {
    let filas_carrera: Vec<&ProporcionSexo> =
        filas.iter().filter(|f| f.carrera == carrera).collect();
    if filas_carrera.is_empty() {
        return Grafico::sin_datos(format!("No hay postulantes registrados para {}.", carrera));
    }

    let mut anios: Vec<i32> = filas_carrera.iter().map(|f| f.anio).collect();
    anios.sort_unstable();
    anios.dedup();

    let cuadriculas = anios
        .into_iter()
        .map(|anio| {
            let mut categorias: Vec<(String, f64)> = Vec::new();
            for sexo in Sexo::ORDEN {
                if let Some(fila) = filas_carrera
                    .iter()
                    .find(|f| f.anio == anio && f.sexo == sexo)
                {
                    categorias.push((sexo.etiqueta().to_string(), fila.proporcion));
                }
            }
            WaffleAnio { anio, celdas: cuadricula_waffle(&categorias) }
        })
        .collect();

    Grafico::Figura(FiguraWaffle {
        titulo: format!("Composición por sexo de {} (100 bloques por año)", carrera),
        filas_cuadricula: FILAS_CUADRICULA,
        columnas_cuadricula: COLUMNAS_CUADRICULA,
        colores: Sexo::ORDEN
            .iter()
            .map(|s| (s.etiqueta().to_string(), color_sexo(*s).to_string()))
            .collect(),
        anios: cuadriculas,
    })
}
