//! Módulo `geodatos`: polígonos regionales para el mapa coroplético.
//!
//! Lee los archivos de comunas (`R*.geojson`, un archivo por región
//! administrativa), normaliza el código de región a dos caracteres con cero a
//! la izquierda y disuelve (une) las geometrías comunales en un polígono por
//! región. El resultado se une en modo lectura contra los conteos agregados.

use geo::{BooleanOps, MultiPolygon};
use geojson::GeoJson;
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// Un polígono regional disuelto, clave de join `region` (p. ej. "08").
#[derive(Debug, Clone)]
pub struct RegionPoligono {
    pub region: String,
    pub geometria: MultiPolygon<f64>,
}

/// Directorio por defecto con los geojson comunales.
pub const GEOJSON_DIR_DEFAULT: &str = "comunas_geojson";

/// Resuelve el directorio de geojson: `PAES_GEOJSON_DIR` o el default.
pub fn resolver_geojson_dir() -> PathBuf {
    let _ = dotenv::dotenv();
    match std::env::var("PAES_GEOJSON_DIR") {
        Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from(GEOJSON_DIR_DEFAULT),
    }
}

/// Código de región como string de dos caracteres ("8" -> "08").
pub fn zfill_region(valor: &str) -> String {
    format!("{:0>2}", valor.trim())
}

fn propiedad_region(feature: &geojson::Feature) -> Option<String> {
    let props = feature.properties.as_ref()?;
    match props.get("REGION")? {
        serde_json::Value::String(s) => Some(zfill_region(s)),
        serde_json::Value::Number(n) => {
            let v = n.as_f64()?;
            Some(format!("{:02}", v as u32))
        }
        _ => None,
    }
}

fn geometria_como_multipoligono(feature: &geojson::Feature) -> Option<MultiPolygon<f64>> {
    let geom = feature.geometry.as_ref()?;
    match geo::Geometry::<f64>::try_from(geom.value.clone()).ok()? {
        geo::Geometry::Polygon(p) => Some(MultiPolygon(vec![p])),
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        _ => None,
    }
}

/// Parsea un archivo geojson y devuelve pares (región, geometría comunal).
fn leer_features(path: &Path) -> Result<Vec<(String, MultiPolygon<f64>)>, Box<dyn Error>> {
    let contenido = std::fs::read_to_string(path)?;
    let geojson: GeoJson = contenido.parse()?;

    let features = match geojson {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(_) => Vec::new(),
    };

    let mut pares = Vec::new();
    for feature in features.iter() {
        let region = match propiedad_region(feature) {
            Some(r) => r,
            None => continue,
        };
        if let Some(mp) = geometria_como_multipoligono(feature) {
            pares.push((region, mp));
        }
    }
    Ok(pares)
}

/// Disuelve una lista de geometrías en una sola por unión sucesiva.
pub fn disolver(geometrias: &[MultiPolygon<f64>]) -> Option<MultiPolygon<f64>> {
    let mut iter = geometrias.iter();
    let primera = iter.next()?.clone();
    Some(iter.fold(primera, |acc, mp| acc.union(mp)))
}

/// Lee todos los `R*.geojson` del directorio y devuelve un polígono disuelto
/// por región, ordenado por código.
pub fn leer_regiones<P: AsRef<Path>>(dir: P) -> Result<Vec<RegionPoligono>, Box<dyn Error>> {
    let dir = dir.as_ref();
    let mut por_region: BTreeMap<String, Vec<MultiPolygon<f64>>> = BTreeMap::new();

    let mut archivos: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            let nombre = p.file_name().and_then(|s| s.to_str()).unwrap_or("");
            nombre.starts_with('R') && nombre.ends_with(".geojson")
        })
        .collect();
    archivos.sort();

    if archivos.is_empty() {
        return Err(format!("no se encontraron archivos R*.geojson en {:?}", dir).into());
    }

    for archivo in archivos.iter() {
        for (region, mp) in leer_features(archivo)? {
            por_region.entry(region).or_default().push(mp);
        }
    }

    let mut regiones = Vec::new();
    for (region, geometrias) in por_region.into_iter() {
        if let Some(geometria) = disolver(&geometrias) {
            regiones.push(RegionPoligono { region, geometria });
        }
    }

    eprintln!(
        "Geodatos cargados: {} regiones disueltas desde {} archivos",
        regiones.len(),
        archivos.len()
    );
    Ok(regiones)
}

static REGIONES_CACHE: OnceLock<Mutex<HashMap<String, Arc<Vec<RegionPoligono>>>>> = OnceLock::new();

/// Devuelve las regiones disueltas para `dir`, leyendo y disolviendo una sola
/// vez por directorio durante la vida del proceso. Las geometrías son
/// inmutables, no hace falta invalidación.
pub fn regiones_cached<P: AsRef<Path>>(dir: P) -> Result<Arc<Vec<RegionPoligono>>, Box<dyn Error>> {
    let cache = REGIONES_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    let key = dir.as_ref().to_string_lossy().to_string();

    {
        let guard = cache.lock().expect("regiones cache mutex poisoned");
        if let Some(existente) = guard.get(&key) {
            return Ok(Arc::clone(existente));
        }
    }

    let regiones = Arc::new(leer_regiones(dir)?);
    let mut guard = cache.lock().expect("regiones cache mutex poisoned");
    guard.insert(key, Arc::clone(&regiones));
    Ok(regiones)
}
