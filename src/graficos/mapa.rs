//! Mapa coroplético de estudiantes por región (año reciente).
//!
//! Une los polígonos regionales disueltos con los conteos agregados; las
//! regiones sin estudiantes quedan en cero, no fuera del mapa.

use crate::agregacion::ConteoRegion;
use crate::geodatos::RegionPoligono;
use crate::graficos::Grafico;
use geojson::{Feature, FeatureCollection};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct Centro {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FiguraMapa {
    pub titulo: String,
    pub estilo: String,
    pub zoom: f64,
    pub centro: Centro,
    pub escala_color: String,
    /// FeatureCollection con propiedades REGION y N_ESTUDIANTES por feature.
    pub features: FeatureCollection,
}

fn feature_region(region: &RegionPoligono, n: usize) -> Feature {
    let mut propiedades = serde_json::Map::new();
    propiedades.insert(
        "REGION".to_string(),
        serde_json::Value::String(region.region.clone()),
    );
    propiedades.insert("N_ESTUDIANTES".to_string(), serde_json::Value::from(n));

    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(&region.geometria))),
        id: Some(geojson::feature::Id::String(region.region.clone())),
        properties: Some(propiedades),
        foreign_members: None,
    }
}

/// Construye el coroplético juntando polígonos y conteos por el código de
/// región con cero a la izquierda.
pub fn figura_mapa_regiones(
    regiones: &[RegionPoligono],
    conteos: &[ConteoRegion],
) -> Grafico<FiguraMapa> {
    if regiones.is_empty() {
        return Grafico::sin_datos("No hay polígonos regionales cargados.");
    }

    let conteo_por_region: HashMap<&str, usize> =
        conteos.iter().map(|c| (c.region.as_str(), c.n)).collect();

    let features: Vec<Feature> = regiones
        .iter()
        .map(|r| {
            let n = conteo_por_region.get(r.region.as_str()).copied().unwrap_or(0);
            feature_region(r, n)
        })
        .collect();

    Grafico::Figura(FiguraMapa {
        titulo: "Estudiantes por Región – Año 2025".to_string(),
        estilo: "carto-positron".to_string(),
        zoom: 4.0,
        centro: Centro { lat: -35.5, lon: -71.5 },
        escala_color: "Blues".to_string(),
        features: FeatureCollection { bbox: None, features, foreign_members: None },
    })
}
