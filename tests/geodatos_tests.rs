use geo::{Area, polygon};
use paesdash::geodatos::{disolver, leer_regiones, zfill_region};
use std::io::Write;

#[test]
fn zfill_de_codigos_de_region() {
    assert_eq!(zfill_region("8"), "08");
    assert_eq!(zfill_region("13"), "13");
    assert_eq!(zfill_region(" 5 "), "05");
}

#[test]
fn disolver_une_cuadrados_adyacentes() {
    let a = geo::MultiPolygon(vec![
        polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)],
    ]);
    let b = geo::MultiPolygon(vec![
        polygon![(x: 1.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 1.0), (x: 1.0, y: 1.0)],
    ]);

    let unido = disolver(&[a, b]).expect("disolver");
    assert_eq!(unido.0.len(), 1);
    assert!((unido.unsigned_area() - 2.0).abs() < 1e-9);
}

#[test]
fn disolver_de_lista_vacia_es_none() {
    assert!(disolver(&[]).is_none());
}

fn geojson_comuna(region: &str, x0: f64) -> String {
    format!(
        r#"{{"type": "Feature", "properties": {{"REGION": "{region}", "COMUNA": "C{x0}"}},
            "geometry": {{"type": "Polygon", "coordinates":
                [[[{x0}, 0.0], [{x1}, 0.0], [{x1}, 1.0], [{x0}, 1.0], [{x0}, 0.0]]]}}}}"#,
        region = region,
        x0 = x0,
        x1 = x0 + 1.0
    )
}

fn escribir_geojson(dir: &std::path::Path, nombre: &str, features: &[String]) {
    let contenido = format!(
        r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
        features.join(",")
    );
    let mut f = std::fs::File::create(dir.join(nombre)).expect("create geojson");
    f.write_all(contenido.as_bytes()).expect("write geojson");
}

#[test]
fn leer_regiones_disuelve_por_codigo_zfill() {
    let dir = tempfile::tempdir().expect("tempdir");

    // dos comunas de la región 8 (código sin cero) y una de la 10
    escribir_geojson(
        dir.path(),
        "R08.geojson",
        &[geojson_comuna("8", 0.0), geojson_comuna("8", 1.0)],
    );
    escribir_geojson(dir.path(), "R10.geojson", &[geojson_comuna("10", 5.0)]);
    // archivos que no calzan el patrón se ignoran
    escribir_geojson(dir.path(), "otro.geojson", &[geojson_comuna("99", 9.0)]);

    let regiones = leer_regiones(dir.path()).expect("leer regiones");
    assert_eq!(regiones.len(), 2);
    assert_eq!(regiones[0].region, "08");
    assert_eq!(regiones[1].region, "10");

    // las dos comunas adyacentes de la región 8 quedan disueltas en una
    assert!((regiones[0].geometria.unsigned_area() - 2.0).abs() < 1e-9);
    assert!((regiones[1].geometria.unsigned_area() - 1.0).abs() < 1e-9);
}

#[test]
fn region_numerica_tambien_se_normaliza() {
    let dir = tempfile::tempdir().expect("tempdir");
    let feature = r#"{"type": "Feature", "properties": {"REGION": 8},
        "geometry": {"type": "Polygon", "coordinates":
            [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]}}"#;
    escribir_geojson(dir.path(), "R08.geojson", &[feature.to_string()]);

    let regiones = leer_regiones(dir.path()).expect("leer regiones");
    assert_eq!(regiones.len(), 1);
    assert_eq!(regiones[0].region, "08");
}

#[test]
fn directorio_sin_archivos_es_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(leer_regiones(dir.path()).is_err());
}
