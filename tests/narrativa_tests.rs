use paesdash::agregacion::{PromedioAnioCarrera, PromedioAnioSexo};
use paesdash::models::Sexo;
use paesdash::narrativa::{
    Clasificacion, brecha_sexo, clasificar_tendencia, tendencia_carreras,
};

fn fila(anio: i32, carrera: &str, promedio: f64) -> PromedioAnioCarrera {
    PromedioAnioCarrera { anio, carrera: carrera.to_string(), promedio }
}

#[test]
fn tendencia_estable_bajo_umbral() {
    let filas = vec![
        fila(2023, "Sociología", 700.0),
        fila(2024, "Sociología", 705.0),
        fila(2025, "Sociología", 703.0),
    ];
    let frases = tendencia_carreras(&filas);
    assert_eq!(frases.len(), 1);
    assert_eq!(frases[0].clasificacion, Clasificacion::Estable);
    assert!(frases[0].frase.contains("se mantuvo estable"));
}

#[test]
fn tendencia_aumento_sobre_umbral() {
    let filas = vec![fila(2023, "Sociología", 700.0), fila(2025, "Sociología", 706.0)];
    let frases = tendencia_carreras(&filas);
    assert_eq!(frases[0].clasificacion, Clasificacion::Aumento);
    assert!(frases[0].frase.contains("aumentó en 6.0 puntos"));
}

#[test]
fn tendencia_disminucion() {
    let filas = vec![fila(2023, "Derecho", 820.0), fila(2025, "Derecho", 812.5)];
    let frases = tendencia_carreras(&filas);
    assert_eq!(frases[0].clasificacion, Clasificacion::Disminucion);
    assert!(frases[0].frase.contains("disminuyó en 7.5 puntos"));
}

#[test]
fn delta_exactamente_cinco_es_aumento() {
    let frase = clasificar_tendencia("Medicina", Some(700.0), Some(705.0));
    assert_eq!(frase.clasificacion, Clasificacion::Aumento);

    let frase = clasificar_tendencia("Medicina", Some(705.0), Some(700.0));
    assert_eq!(frase.clasificacion, Clasificacion::Disminucion);
}

#[test]
fn anio_extremo_faltante_es_sin_datos() {
    // Sólo 2024 y 2025: falta el punto de partida 2023
    let filas = vec![fila(2024, "Medicina", 800.0), fila(2025, "Medicina", 820.0)];
    let frases = tendencia_carreras(&filas);
    assert_eq!(frases[0].clasificacion, Clasificacion::SinDatos);
    assert_eq!(frases[0].delta, None);
    assert!(frases[0].frase.contains("No hay datos suficientes"));
}

#[test]
fn tendencias_por_carrera_independientes() {
    let filas = vec![
        fila(2023, "Derecho", 700.0),
        fila(2025, "Derecho", 720.0),
        fila(2023, "Medicina", 900.0),
        fila(2025, "Medicina", 899.0),
    ];
    let frases = tendencia_carreras(&filas);
    assert_eq!(frases.len(), 2);
    assert_eq!(frases[0].categoria, "Derecho");
    assert_eq!(frases[0].clasificacion, Clasificacion::Aumento);
    assert_eq!(frases[1].categoria, "Medicina");
    assert_eq!(frases[1].clasificacion, Clasificacion::Estable);
}

fn fila_sexo(anio: i32, sexo: Sexo, promedio: f64) -> PromedioAnioSexo {
    PromedioAnioSexo { anio, sexo, promedio }
}

#[test]
fn brecha_nombra_solo_anios_sobre_umbral() {
    let filas = vec![
        fila_sexo(2023, Sexo::Masculino, 720.0),
        fila_sexo(2023, Sexo::Femenino, 705.0),
        fila_sexo(2024, Sexo::Masculino, 710.0),
        fila_sexo(2024, Sexo::Femenino, 705.0),
        // 2025 sin promedio femenino: el año queda fuera de la comparación
        fila_sexo(2025, Sexo::Masculino, 730.0),
    ];
    let brecha = brecha_sexo(&filas);
    assert_eq!(brecha.anios_divergentes, vec![2023]);
    assert!(brecha.frase.contains("2023"));
    assert!(!brecha.frase.contains("2024"));
}

#[test]
fn brecha_similar_en_todos_los_anios() {
    let filas = vec![
        fila_sexo(2023, Sexo::Masculino, 700.0),
        fila_sexo(2023, Sexo::Femenino, 695.0),
        fila_sexo(2025, Sexo::Masculino, 710.0),
        fila_sexo(2025, Sexo::Femenino, 712.0),
    ];
    let brecha = brecha_sexo(&filas);
    assert!(brecha.anios_divergentes.is_empty());
    assert!(brecha.frase.contains("similares"));
}
