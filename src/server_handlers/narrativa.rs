//! Handlers de las frases narrativas: tendencias de puntaje y brecha por
//! sexo, derivadas de las mismas tablas agregadas que los gráficos.

use super::{base_y_filtro, registrar_consulta};
use crate::agregacion;
use crate::narrativa;
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::time::Instant;

pub async fn tendencias_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();

    let por_carrera = agregacion::promedio_puntaje_por_anio_carrera(&base, &filtro.carreras);
    let por_sexo = agregacion::promedio_puntaje_por_anio_sexo(&base);
    let carreras = narrativa::tendencia_carreras(&por_carrera);
    let sexo = narrativa::tendencia_sexo(&por_sexo);

    registrar_consulta("narrativa-tendencias", &filtro, inicio);
    HttpResponse::Ok().json(json!({"carreras": carreras, "sexo": sexo}))
}

pub async fn brecha_sexo_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();

    let por_sexo = agregacion::promedio_puntaje_por_anio_sexo(&base);
    let brecha = narrativa::brecha_sexo(&por_sexo);

    registrar_consulta("narrativa-brecha-sexo", &filtro, inicio);
    HttpResponse::Ok().json(brecha)
}
