//! Módulo `narrativa`: frases cortas derivadas de las tablas agregadas de
//! puntaje. Consume las mismas tablas que los constructores de gráficos.
//!
//! Reglas de clasificación:
//! - |delta| < 5 puntos entre el primer y el último año => "estable"
//! - delta >= 5 => "aumentó", delta <= -5 => "disminuyó"
//! - falta el promedio de un año extremo => frase de datos insuficientes,
//!   nunca una cifra inventada
//! - brecha por sexo: una diferencia absoluta anual sobre 10 puntos es una
//!   divergencia significativa; la frase nombra sólo los años que la superan

use crate::agregacion::{PromedioAnioCarrera, PromedioAnioSexo};
use crate::models::ANIOS_ADMISION;
use serde::Serialize;

/// Delta mínimo (en puntos) para declarar un aumento o una caída.
pub const UMBRAL_TENDENCIA: f64 = 5.0;

/// Diferencia anual mínima (en puntos) entre sexos para declarar divergencia.
pub const UMBRAL_BRECHA: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Clasificacion {
    Estable,
    Aumento,
    Disminucion,
    SinDatos,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraseTendencia {
    pub categoria: String,
    pub clasificacion: Clasificacion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
    pub frase: String,
}

fn anio_inicial() -> i32 {
    ANIOS_ADMISION[0]
}

fn anio_final() -> i32 {
    ANIOS_ADMISION[ANIOS_ADMISION.len() - 1]
}

/// Clasifica el delta entre los promedios de los años extremos de una
/// categoría y arma la frase correspondiente.
pub fn clasificar_tendencia(
    categoria: &str,
    inicial: Option<f64>,
    fin: Option<f64>,
) -> FraseTendencia {
    let (inicial, fin) = match (inicial, fin) {
        (Some(i), Some(f)) => (i, f),
        _ => {
            return FraseTendencia {
                categoria: categoria.to_string(),
                clasificacion: Clasificacion::SinDatos,
                delta: None,
                frase: format!(
                    "No hay datos suficientes para evaluar la tendencia de {} entre {} y {}.",
                    categoria,
                    anio_inicial(),
                    anio_final()
                ),
            };
        }
    };

    let delta = fin - inicial;
    let (clasificacion, frase) = if delta.abs() < UMBRAL_TENDENCIA {
        (
            Clasificacion::Estable,
            format!(
                "El puntaje promedio de {} se mantuvo estable entre {} y {}.",
                categoria,
                anio_inicial(),
                anio_final()
            ),
        )
    } else if delta > 0.0 {
        (
            Clasificacion::Aumento,
            format!(
                "El puntaje promedio de {} aumentó en {:.1} puntos entre {} y {}.",
                categoria,
                delta,
                anio_inicial(),
                anio_final()
            ),
        )
    } else {
        (
            Clasificacion::Disminucion,
            format!(
                "El puntaje promedio de {} disminuyó en {:.1} puntos entre {} y {}.",
                categoria,
                delta.abs(),
                anio_inicial(),
                anio_final()
            ),
        )
    };

    FraseTendencia {
        categoria: categoria.to_string(),
        clasificacion,
        delta: Some(delta),
        frase,
    }
}

/// Una frase de tendencia por carrera presente en la tabla de promedios.
pub fn tendencia_carreras(filas: &[PromedioAnioCarrera]) -> Vec<FraseTendencia> {
    let mut carreras: Vec<String> = filas.iter().map(|f| f.carrera.clone()).collect();
    carreras.sort();
    carreras.dedup();

    carreras
        .into_iter()
        .map(|carrera| {
            let promedio_de = |anio: i32| {
                filas
                    .iter()
                    .find(|f| f.carrera == carrera && f.anio == anio)
                    .map(|f| f.promedio)
            };
            clasificar_tendencia(&carrera, promedio_de(anio_inicial()), promedio_de(anio_final()))
        })
        .collect()
}

/// Una frase de tendencia por sexo sobre la base completa.
pub fn tendencia_sexo(filas: &[PromedioAnioSexo]) -> Vec<FraseTendencia> {
    crate::models::Sexo::ORDEN
        .iter()
        .map(|sexo| {
            let promedio_de = |anio: i32| {
                filas
                    .iter()
                    .find(|f| f.sexo == *sexo && f.anio == anio)
                    .map(|f| f.promedio)
            };
            clasificar_tendencia(
                sexo.etiqueta(),
                promedio_de(anio_inicial()),
                promedio_de(anio_final()),
            )
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraseBrecha {
    /// Años cuya diferencia absoluta de promedios entre sexos supera el
    /// umbral; vacío cuando los perfiles son similares.
    pub anios_divergentes: Vec<i32>,
    pub frase: String,
}

/// Compara los promedios por sexo año a año. Los años sin promedio para
/// alguno de los dos sexos no participan de la comparación.
pub fn brecha_sexo(filas: &[PromedioAnioSexo]) -> FraseBrecha {
    use crate::models::Sexo;

    let mut anios_divergentes = Vec::new();
    for anio in ANIOS_ADMISION {
        let de = |sexo: Sexo| {
            filas
                .iter()
                .find(|f| f.anio == anio && f.sexo == sexo)
                .map(|f| f.promedio)
        };
        if let (Some(m), Some(f)) = (de(Sexo::Masculino), de(Sexo::Femenino)) {
            if (m - f).abs() > UMBRAL_BRECHA {
                anios_divergentes.push(anio);
            }
        }
    }

    let frase = if anios_divergentes.is_empty() {
        "Los perfiles de puntaje por sexo son similares en todos los años.".to_string()
    } else {
        let anios: Vec<String> = anios_divergentes.iter().map(|a| a.to_string()).collect();
        format!(
            "Se observa una divergencia significativa de puntajes entre sexos en {}.",
            anios.join(" y ")
        )
    };

    FraseBrecha { anios_divergentes, frase }
}
