//! Insumo para la nube de palabras de colegios: pares palabra-peso.
//! La imagen la genera el renderer externo.

use crate::agregacion::ConteoEtiqueta;
use crate::graficos::Grafico;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PalabraNube {
    pub texto: String,
    pub peso: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraNube {
    pub titulo: String,
    pub ancho: u32,
    pub alto: u32,
    pub fondo: String,
    pub palabras: Vec<PalabraNube>,
}

pub fn figura_nube_colegios(frecuencias: &[ConteoEtiqueta]) -> Grafico<FiguraNube> {
    if frecuencias.is_empty() {
        return Grafico::sin_datos(
            "No hay datos suficientes para mostrar una nube de palabras en esta región.",
        );
    }

    Grafico::Figura(FiguraNube {
        titulo: "Nube de Palabras de Colegios".to_string(),
        ancho: 1000,
        alto: 500,
        fondo: "white".to_string(),
        palabras: frecuencias
            .iter()
            .map(|f| PalabraNube { texto: f.etiqueta.clone(), peso: f.n })
            .collect(),
    })
}
