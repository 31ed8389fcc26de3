use paesdash::agregacion::{
    conteo_dependencia_por_anio, conteo_por_region, flujo_ingreso_carrera,
    promedio_puntaje_por_anio_sexo, proporcion_sexo_por_anio_carrera,
    puntajes_por_carrera_dependencia, top_colegios_por_region,
};
use paesdash::models::{Postulante, SIN_INFORMACION, Sexo};

fn postulante(anio: i32, carrera: &str, sexo: Option<Sexo>, ptje: Option<f64>) -> Postulante {
    Postulante {
        anio,
        codigo_region: Some(8),
        carrera: carrera.to_string(),
        sexo,
        ptje_ponderado: ptje,
        grupo_dependencia: "MUNICIPAL".to_string(),
        ingreso: "REGULAR".to_string(),
        colegio: None,
    }
}

#[test]
fn proporciones_suman_uno_por_grupo() {
    let base = vec![
        postulante(2023, "Sociología", Some(Sexo::Masculino), None),
        postulante(2023, "Sociología", Some(Sexo::Masculino), None),
        postulante(2023, "Sociología", Some(Sexo::Femenino), None),
        postulante(2024, "Sociología", Some(Sexo::Femenino), None),
        postulante(2023, "Derecho", Some(Sexo::Masculino), None),
        postulante(2023, "Derecho", Some(Sexo::Femenino), None),
    ];
    let carreras = vec!["Sociología".to_string(), "Derecho".to_string()];
    let filas = proporcion_sexo_por_anio_carrera(&base, &carreras);

    let mut grupos: std::collections::HashMap<(i32, String), f64> = std::collections::HashMap::new();
    for fila in filas.iter() {
        *grupos.entry((fila.anio, fila.carrera.clone())).or_default() += fila.proporcion;
    }
    assert_eq!(grupos.len(), 3);
    for (_, suma) in grupos {
        assert!((suma - 1.0).abs() < 1e-9);
    }
}

#[test]
fn proporcion_valores_exactos() {
    let base = vec![
        postulante(2023, "Sociología", Some(Sexo::Masculino), None),
        postulante(2023, "Sociología", Some(Sexo::Masculino), None),
        postulante(2023, "Sociología", Some(Sexo::Femenino), None),
        postulante(2023, "Sociología", Some(Sexo::Femenino), None),
    ];
    let carreras = vec!["Sociología".to_string()];
    let filas = proporcion_sexo_por_anio_carrera(&base, &carreras);

    assert_eq!(filas.len(), 2);
    // MASCULINO primero dentro del grupo
    assert_eq!(filas[0].sexo, Sexo::Masculino);
    assert_eq!(filas[0].n, 2);
    assert_eq!(filas[0].total, 4);
    assert!((filas[0].proporcion - 0.5).abs() < 1e-9);
}

#[test]
fn conteo_total_coincide_con_predicado() {
    let mut base = Vec::new();
    for _ in 0..7 {
        base.push(postulante(2024, "Medicina", Some(Sexo::Femenino), Some(800.0)));
    }
    let mut sin_info = postulante(2024, "Medicina", None, None);
    sin_info.grupo_dependencia = SIN_INFORMACION.to_string();
    base.push(sin_info);

    let filas = conteo_dependencia_por_anio(&base);
    let total: usize = filas.iter().map(|f| f.n).sum();
    // la vista de dependencia incluye el sentinela
    assert_eq!(total, base.len());
    assert!(filas.iter().any(|f| f.grupo == SIN_INFORMACION));
}

#[test]
fn promedio_sexo_ignora_nulos_y_ordena() {
    let base = vec![
        postulante(2024, "Medicina", Some(Sexo::Femenino), Some(900.0)),
        postulante(2023, "Medicina", Some(Sexo::Femenino), Some(700.0)),
        postulante(2023, "Medicina", Some(Sexo::Femenino), None),
        postulante(2023, "Medicina", Some(Sexo::Masculino), Some(600.0)),
        postulante(2023, "Medicina", None, Some(999.0)),
    ];
    let filas = promedio_puntaje_por_anio_sexo(&base);

    // años ascendentes, MASCULINO antes que FEMENINO
    assert_eq!(filas.len(), 3);
    assert_eq!(filas[0].anio, 2023);
    assert_eq!(filas[0].sexo, Sexo::Masculino);
    assert!((filas[0].promedio - 600.0).abs() < 1e-9);
    assert_eq!(filas[1].sexo, Sexo::Femenino);
    assert!((filas[1].promedio - 700.0).abs() < 1e-9);
    assert_eq!(filas[2].anio, 2024);
}

#[test]
fn conteo_region_solo_anio_reciente_y_zfill() {
    let mut base = vec![
        postulante(2025, "Medicina", Some(Sexo::Femenino), None),
        postulante(2025, "Medicina", Some(Sexo::Femenino), None),
        postulante(2023, "Medicina", Some(Sexo::Femenino), None),
    ];
    let mut sin_region = postulante(2025, "Derecho", Some(Sexo::Masculino), None);
    sin_region.codigo_region = None;
    base.push(sin_region);
    let mut otra = postulante(2025, "Derecho", Some(Sexo::Masculino), None);
    otra.codigo_region = Some(13);
    base.push(otra);

    let filas = conteo_por_region(&base);
    assert_eq!(filas.len(), 2);
    assert_eq!(filas[0].region, "08");
    assert_eq!(filas[0].n, 2);
    assert_eq!(filas[1].region, "13");
    assert_eq!(filas[1].n, 1);
}

#[test]
fn fila_sin_region_participa_en_otras_agregaciones() {
    let mut p = postulante(2024, "Medicina", Some(Sexo::Femenino), Some(800.0));
    p.codigo_region = None;
    let base = vec![p];

    assert!(conteo_por_region(&base).is_empty());
    // la misma fila sí cuenta en la vista de dependencia
    let dep = conteo_dependencia_por_anio(&base);
    assert_eq!(dep.len(), 1);
    assert_eq!(dep[0].n, 1);
}

#[test]
fn ranking_estable_con_empates() {
    let mut base = Vec::new();
    let colegios = ["Liceo B", "Liceo A", "Liceo C"];
    // mismos conteos para los tres; el orden de aparición decide
    for nombre in colegios {
        for _ in 0..2 {
            let mut p = postulante(2025, "Medicina", Some(Sexo::Femenino), None);
            p.colegio = Some(nombre.to_string());
            base.push(p);
        }
    }

    let filas = top_colegios_por_region(&base, 8);
    let orden: Vec<&str> = filas.iter().map(|f| f.etiqueta.as_str()).collect();
    assert_eq!(orden, vec!["Liceo B", "Liceo A", "Liceo C"]);
}

#[test]
fn ranking_descendente_y_truncado() {
    let mut base = Vec::new();
    for i in 0..35 {
        let nombre = format!("Colegio {:02}", i);
        for _ in 0..(35 - i) {
            let mut p = postulante(2025, "Medicina", Some(Sexo::Femenino), None);
            p.colegio = Some(nombre.clone());
            base.push(p);
        }
    }
    let filas = top_colegios_por_region(&base, 8);
    assert_eq!(filas.len(), 30);
    assert_eq!(filas[0].etiqueta, "Colegio 00");
    assert_eq!(filas[0].n, 35);
    for ventana in filas.windows(2) {
        assert!(ventana[0].n >= ventana[1].n);
    }
}

#[test]
fn ranking_excluye_colegios_sin_nombre() {
    let base = vec![postulante(2025, "Medicina", Some(Sexo::Femenino), None)];
    assert!(top_colegios_por_region(&base, 8).is_empty());
}

#[test]
fn region_ausente_produce_tabla_vacia() {
    let base = vec![postulante(2025, "Medicina", Some(Sexo::Femenino), None)];
    assert!(top_colegios_por_region(&base, 99).is_empty());
}

#[test]
fn violin_excluye_sentinela_de_dependencia() {
    let mut base = vec![postulante(2025, "Sociología", Some(Sexo::Femenino), Some(750.0))];
    let mut sin_info = postulante(2025, "Sociología", Some(Sexo::Masculino), Some(820.0));
    sin_info.grupo_dependencia = SIN_INFORMACION.to_string();
    base.push(sin_info);
    // fuera del año reciente, tampoco participa
    base.push(postulante(2023, "Sociología", Some(Sexo::Femenino), Some(700.0)));

    let carreras = vec!["Sociología".to_string()];
    let grupos = puntajes_por_carrera_dependencia(&base, &carreras);
    assert_eq!(grupos.len(), 1);
    assert_eq!(grupos[0].grupo, "MUNICIPAL");
    assert_eq!(grupos[0].puntajes, vec![750.0]);
}

#[test]
fn flujo_ingreso_filtra_y_ordena_alfabetico() {
    let mut base = Vec::new();
    for carrera in ["Medicina", "Derecho", "Medicina", "Derecho", "Derecho"] {
        let mut p = postulante(2025, carrera, Some(Sexo::Masculino), None);
        p.ingreso = "PACE".to_string();
        base.push(p);
    }
    base.push(postulante(2025, "Medicina", Some(Sexo::Femenino), None)); // REGULAR
    base.push({
        let mut p = postulante(2023, "Medicina", Some(Sexo::Femenino), None);
        p.ingreso = "PACE".to_string();
        p
    });

    let flujo = flujo_ingreso_carrera(&base, "PACE");
    assert_eq!(flujo.len(), 2);
    assert_eq!(flujo[0].etiqueta, "Derecho");
    assert_eq!(flujo[0].n, 3);
    assert_eq!(flujo[1].etiqueta, "Medicina");
    assert_eq!(flujo[1].n, 2);
}
