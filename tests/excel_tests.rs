use paesdash::excel::{cache, leer_base_csv};
use paesdash::models::Sexo;
use std::io::Write;

const ENCABEZADO: &str =
    "ANIO,CODIGO_REGION,CARRERA_LIMPIA,SEXO,PTJE_PONDERADO,PTJE_PONDERADO_PACE,GRUPO_DEPENDENCIA_EST,INGRESO,NOMBRE_COLEGIO_EGRESO";

fn escribir_csv(dir: &std::path::Path, nombre: &str, filas: &[&str]) -> std::path::PathBuf {
    let path = dir.join(nombre);
    let mut f = std::fs::File::create(&path).expect("create csv");
    writeln!(f, "{}", ENCABEZADO).expect("write header");
    for fila in filas {
        writeln!(f, "{}", fila).expect("write row");
    }
    path
}

#[test]
fn carga_fila_valida_con_tipos() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = escribir_csv(
        dir.path(),
        "base.csv",
        &["2023,8,Sociología,FEMENINO,712.5,,MUNICIPAL,REGULAR,Liceo A"],
    );

    let base = leer_base_csv(&path).expect("leer csv");
    assert_eq!(base.len(), 1);
    let p = &base[0];
    assert_eq!(p.anio, 2023);
    assert_eq!(p.codigo_region, Some(8));
    assert_eq!(p.carrera, "Sociología");
    assert_eq!(p.sexo, Some(Sexo::Femenino));
    assert_eq!(p.ptje_ponderado, Some(712.5));
    assert_eq!(p.grupo_dependencia, "MUNICIPAL");
    assert_eq!(p.ingreso, "REGULAR");
    assert_eq!(p.colegio.as_deref(), Some("Liceo A"));
}

#[test]
fn anio_invalido_o_fuera_de_dominio_se_descarta() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = escribir_csv(
        dir.path(),
        "base.csv",
        &[
            "2023,8,Medicina,MASCULINO,800,,MUNICIPAL,REGULAR,",
            "202X,8,Medicina,MASCULINO,800,,MUNICIPAL,REGULAR,",
            ",8,Medicina,MASCULINO,800,,MUNICIPAL,REGULAR,",
            "2020,8,Medicina,MASCULINO,800,,MUNICIPAL,REGULAR,",
        ],
    );

    let base = leer_base_csv(&path).expect("leer csv");
    assert_eq!(base.len(), 1);
    assert_eq!(base[0].anio, 2023);
}

#[test]
fn region_invalida_queda_nula_pero_la_fila_sobrevive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = escribir_csv(
        dir.path(),
        "base.csv",
        &["2024,no-numerica,Medicina,MASCULINO,800,,MUNICIPAL,REGULAR,"],
    );

    let base = leer_base_csv(&path).expect("leer csv");
    assert_eq!(base.len(), 1);
    assert_eq!(base[0].codigo_region, None);
}

#[test]
fn ponderado_pace_respaldo_cuando_falta_el_regular() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = escribir_csv(
        dir.path(),
        "base.csv",
        &[
            "2025,8,Medicina,FEMENINO,,650.5,MUNICIPAL,PACE,",
            "2025,8,Medicina,FEMENINO,700.0,650.5,MUNICIPAL,REGULAR,",
            "2025,8,Medicina,FEMENINO,,,MUNICIPAL,REGULAR,",
        ],
    );

    let base = leer_base_csv(&path).expect("leer csv");
    assert_eq!(base[0].ptje_ponderado, Some(650.5));
    // el regular manda cuando está presente
    assert_eq!(base[1].ptje_ponderado, Some(700.0));
    assert_eq!(base[2].ptje_ponderado, None);
}

#[test]
fn columna_requerida_ausente_falla_al_cargar() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rota.csv");
    let mut f = std::fs::File::create(&path).expect("create csv");
    writeln!(f, "ANIO,CODIGO_REGION,SEXO").expect("write header");
    writeln!(f, "2023,8,FEMENINO").expect("write row");

    let err = leer_base_csv(&path).expect_err("debe fallar");
    assert!(err.to_string().contains("CARRERA"));
}

#[test]
fn cache_sirve_la_misma_copia_y_se_invalida() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = escribir_csv(
        dir.path(),
        "base.csv",
        &["2023,8,Medicina,MASCULINO,800,,MUNICIPAL,REGULAR,"],
    );
    let key = path.to_string_lossy().to_string();

    let primera = cache::base_cached(&path).expect("primera carga");
    let segunda = cache::base_cached(&path).expect("segunda carga");
    assert!(std::sync::Arc::ptr_eq(&primera, &segunda));
    assert_eq!(primera.len(), 1);

    // reescribir con una fila más e invalidar explícitamente
    escribir_csv(
        dir.path(),
        "base.csv",
        &[
            "2023,8,Medicina,MASCULINO,800,,MUNICIPAL,REGULAR,",
            "2024,8,Medicina,FEMENINO,810,,MUNICIPAL,REGULAR,",
        ],
    );
    cache::invalidar(Some(key.as_str()));

    let tercera = cache::base_cached(&path).expect("tercera carga");
    assert_eq!(tercera.len(), 2);
}
