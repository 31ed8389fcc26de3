use paesdash::api_json::{FiltroSeleccion, ValoresDisponibles, parse_filtro, parse_y_completar};
use paesdash::models::{Postulante, Sexo};

fn postulante(carrera: &str, region: u32, ingreso: &str) -> Postulante {
    Postulante {
        anio: 2025,
        codigo_region: Some(region),
        carrera: carrera.to_string(),
        sexo: Some(Sexo::Femenino),
        ptje_ponderado: None,
        grupo_dependencia: "PARTICULAR SUBVENCIONADO".to_string(),
        ingreso: ingreso.to_string(),
        colegio: None,
    }
}

#[test]
fn filtro_vacio_toma_defaults_canonicos() {
    let base = vec![
        postulante("Enfermería", 8, "REGULAR"),
        postulante("Arquitectura", 5, "PACE"),
    ];
    let filtro = parse_y_completar(&serde_json::json!({}), &base).expect("parse");

    assert_eq!(filtro.carreras, vec!["Sociología", "Medicina", "Derecho"]);
    assert_eq!(filtro.region, Some(8));
    assert_eq!(filtro.carreras_distribucion, vec!["Sociología"]);
    // primer valor ordenado
    assert_eq!(filtro.ingreso.as_deref(), Some("PACE"));
    assert_eq!(filtro.carrera.as_deref(), Some("Arquitectura"));
}

#[test]
fn region_default_cae_a_la_primera_disponible() {
    let base = vec![
        postulante("Enfermería", 5, "REGULAR"),
        postulante("Enfermería", 13, "REGULAR"),
    ];
    let filtro = parse_y_completar(&serde_json::json!({}), &base).expect("parse");
    assert_eq!(filtro.region, Some(5));
}

#[test]
fn campos_presentes_se_respetan() {
    let base = vec![postulante("Enfermería", 8, "REGULAR")];
    let body = serde_json::json!({
        "carreras": ["Enfermería"],
        "region": 13,
        "ingreso": "REGULAR"
    });
    let filtro = parse_y_completar(&body, &base).expect("parse");
    assert_eq!(filtro.carreras, vec!["Enfermería"]);
    assert_eq!(filtro.region, Some(13));
    assert_eq!(filtro.ingreso.as_deref(), Some("REGULAR"));
    // los no especificados siguen completándose
    assert_eq!(filtro.carreras_distribucion, vec!["Sociología"]);
}

#[test]
fn parse_filtro_acepta_json_parcial() {
    let filtro = parse_filtro(r#"{"carreras": ["Medicina"]}"#).expect("parse");
    assert_eq!(filtro.carreras, vec!["Medicina"]);
    assert_eq!(filtro.region, None);
    assert!(filtro.carreras_distribucion.is_empty());
}

#[test]
fn valores_disponibles_unicos_y_ordenados() {
    let base = vec![
        postulante("Medicina", 13, "REGULAR"),
        postulante("Derecho", 8, "PACE"),
        postulante("Medicina", 8, "REGULAR"),
        Postulante {
            anio: 2025,
            codigo_region: None,
            carrera: String::new(),
            sexo: None,
            ptje_ponderado: None,
            grupo_dependencia: String::new(),
            ingreso: String::new(),
            colegio: None,
        },
    ];
    let disponibles = ValoresDisponibles::desde_base(&base);
    assert_eq!(disponibles.carreras, vec!["Derecho", "Medicina"]);
    assert_eq!(disponibles.regiones, vec![8, 13]);
    assert_eq!(disponibles.ingresos, vec!["PACE", "REGULAR"]);
    assert_eq!(disponibles.dependencias, vec!["PARTICULAR SUBVENCIONADO"]);
}

#[test]
fn completar_sobre_base_vacia_no_falla() {
    let disponibles = ValoresDisponibles::desde_base(&[]);
    let filtro = FiltroSeleccion {
        carreras: Vec::new(),
        region: None,
        carreras_distribucion: Vec::new(),
        ingreso: None,
        carrera: None,
    }
    .completar(&disponibles);
    assert_eq!(filtro.region, None);
    assert_eq!(filtro.ingreso, None);
    assert_eq!(filtro.carreras.len(), 3);
}
