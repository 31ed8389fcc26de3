//! Módulo `agregacion`: el pipeline que alimenta cada gráfico.
//!
//! Todas las funciones son puras sobre la base cargada más los valores del
//! filtro: agrupan por una tupla de claves categóricas y calculan conteos,
//! promedios o proporciones. Una base filtrada vacía produce una tabla vacía;
//! el constructor de parámetros del gráfico es quien la convierte en el
//! estado "sin datos", nunca en un error.
//!
//! Políticas de orden:
//! - años siempre ascendentes sobre el dominio fijo 2023-2025
//! - sexo en orden fijo MASCULINO, FEMENINO donde el apilado importa
//! - rankings top-N descendentes por conteo, empates por orden de aparición

pub mod conteos;
pub mod puntajes;

pub use conteos::{
    ConteoDependencia, ConteoEtiqueta, ConteoIngreso, ConteoRegion, ProporcionSexo,
    conteo_dependencia_por_anio, conteo_ingreso, conteo_por_region, flujo_ingreso_carrera,
    frecuencia_palabras_colegios, proporcion_sexo_por_anio_carrera, top_carreras_por_region,
    top_colegios_por_region,
};
pub use puntajes::{
    GrupoPuntajes, PromedioAnio, PromedioAnioCarrera, PromedioAnioSexo,
    promedio_puntaje_por_anio_carrera, promedio_puntaje_por_anio_sexo,
    puntajes_carrera, puntajes_por_carrera_dependencia, puntajes_por_carrera_sexo,
    trayectoria_puntaje_carrera,
};

/// Año de admisión más reciente: el foco del mapa regional, la torta de
/// ingreso, el flujo ingreso-carrera y la vista de dependencia.
pub const ANIO_RECIENTE: i32 = 2025;
