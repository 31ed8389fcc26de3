//! Diagrama de flujo (sankey) entre un tipo de ingreso y las carreras.
//!
//! La lista de nodos es bipartita: el tipo de ingreso seleccionado más las
//! carreras de la tabla de flujo, cada uno con un índice entero estable. El
//! nodo origen queda anclado en una posición fija y los destinos se reparten
//! de forma pareja sobre una línea vertical.

use crate::agregacion::ConteoEtiqueta;
use crate::graficos::Grafico;
use serde::Serialize;

/// Posición x del nodo origen y de la columna de destinos.
const X_ORIGEN: f64 = 0.05;
const X_DESTINOS: f64 = 0.95;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodoSankey {
    pub etiqueta: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnlaceSankey {
    pub origen: usize,
    pub destino: usize,
    pub valor: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraSankey {
    pub titulo: String,
    pub nodos: Vec<NodoSankey>,
    pub enlaces: Vec<EnlaceSankey>,
}

/// Construye el sankey para un tipo de ingreso y su tabla de flujo por
/// carrera. El origen toma el índice 0; cada carrera toma el índice
/// siguiente en el orden de la tabla.
pub fn figura_sankey_ingreso(ingreso: &str, flujo: &[ConteoEtiqueta]) -> Grafico<FiguraSankey> {
    if flujo.is_empty() {
        return Grafico::sin_datos(format!(
            "No hay estudiantes con ingreso '{}' para graficar.",
            ingreso
        ));
    }

    let n_destinos = flujo.len();
    let mut nodos = Vec::with_capacity(n_destinos + 1);
    nodos.push(NodoSankey { etiqueta: ingreso.to_string(), x: X_ORIGEN, y: 0.5 });

    let mut enlaces = Vec::with_capacity(n_destinos);
    for (k, fila) in flujo.iter().enumerate() {
        nodos.push(NodoSankey {
            etiqueta: fila.etiqueta.clone(),
            x: X_DESTINOS,
            y: (k + 1) as f64 / (n_destinos + 1) as f64,
        });
        enlaces.push(EnlaceSankey { origen: 0, destino: k + 1, valor: fila.n });
    }

    Grafico::Figura(FiguraSankey {
        titulo: format!("Relación entre Ingreso '{}' y Carrera (2025)", ingreso),
        nodos,
        enlaces,
    })
}
