//! Handlers de los gráficos del dashboard: cada uno parsea el filtro,
//! ejecuta la agregación correspondiente, construye los parámetros de figura
//! y registra la consulta.

use super::{base_y_filtro, registrar_consulta};
use crate::agregacion;
use crate::graficos::{self, Grafico};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::time::Instant;

pub async fn puntaje_carrera_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let filas = agregacion::promedio_puntaje_por_anio_carrera(&base, &filtro.carreras);
    let figura = graficos::linea::figura_puntaje_carrera(&filas);
    registrar_consulta("puntaje-carrera", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn puntaje_sexo_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let filas = agregacion::promedio_puntaje_por_anio_sexo(&base);
    let figura = graficos::barras::figura_puntaje_sexo(&filas);
    registrar_consulta("puntaje-sexo", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn proporcion_sexo_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let filas = agregacion::proporcion_sexo_por_anio_carrera(&base, &filtro.carreras);
    let figura = graficos::linea::figura_proporcion_sexo(&filas);
    registrar_consulta("proporcion-sexo", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn waffle_sexo_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let figura = match filtro.carrera.as_deref() {
        Some(carrera) => {
            let carreras = vec![carrera.to_string()];
            let filas = agregacion::proporcion_sexo_por_anio_carrera(&base, &carreras);
            graficos::waffle::figura_waffle_sexo(carrera, &filas)
        }
        None => Grafico::sin_datos("No hay carreras disponibles en la base."),
    };
    registrar_consulta("waffle-sexo", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn caja_puntajes_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let grupos = agregacion::puntajes_por_carrera_sexo(&base, &filtro.carreras);
    let figura = graficos::caja::figura_caja_puntajes(&grupos);
    registrar_consulta("caja-puntajes", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn dependencia_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let filas = agregacion::conteo_dependencia_por_anio(&base);
    let figura = graficos::linea::figura_dependencia(&filas);
    registrar_consulta("dependencia", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn violin_dependencia_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let grupos = agregacion::puntajes_por_carrera_dependencia(&base, &filtro.carreras_distribucion);
    let figura = graficos::violin::figura_violin_dependencia(&grupos);
    registrar_consulta("violin-dependencia", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn torta_ingreso_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let filas = agregacion::conteo_ingreso(&base);
    let figura = graficos::torta::figura_torta_ingreso(&filas);
    registrar_consulta("torta-ingreso", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn sankey_ingreso_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let figura = match filtro.ingreso.as_deref() {
        Some(ingreso) => {
            let flujo = agregacion::flujo_ingreso_carrera(&base, ingreso);
            graficos::sankey::figura_sankey_ingreso(ingreso, &flujo)
        }
        None => Grafico::sin_datos("No hay tipos de ingreso registrados en la base."),
    };
    registrar_consulta("sankey-ingreso", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn mapa_regiones_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let geojson_dir = crate::geodatos::resolver_geojson_dir();
    let regiones = match crate::geodatos::regiones_cached(&geojson_dir) {
        Ok(r) => r,
        Err(e) => {
            return HttpResponse::InternalServerError().json(json!({
                "error": format!("failed to load geodatos {:?}: {}", geojson_dir, e)
            }));
        }
    };

    let inicio = Instant::now();
    let conteos = agregacion::conteo_por_region(&base);
    let figura = graficos::mapa::figura_mapa_regiones(&regiones, &conteos);
    registrar_consulta("mapa-regiones", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn top_colegios_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let figura = match filtro.region {
        Some(region) => {
            let filas = agregacion::top_colegios_por_region(&base, region);
            graficos::barras::figura_top_colegios(region, &filas)
        }
        None => Grafico::sin_datos("No hay regiones registradas en la base."),
    };
    registrar_consulta("top-colegios", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn top_carreras_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let figura = match filtro.region {
        Some(region) => {
            let filas = agregacion::top_carreras_por_region(&base, region);
            graficos::barras::figura_top_carreras(region, &filas)
        }
        None => Grafico::sin_datos("No hay regiones registradas en la base."),
    };
    registrar_consulta("top-carreras", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn nube_colegios_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let figura = match filtro.region {
        Some(region) => {
            let frecuencias = agregacion::frecuencia_palabras_colegios(&base, region);
            graficos::nube::figura_nube_colegios(&frecuencias)
        }
        None => Grafico::sin_datos("No hay regiones registradas en la base."),
    };
    registrar_consulta("nube-colegios", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn trayectoria_carrera_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let figura = match filtro.carrera.as_deref() {
        Some(carrera) => {
            let filas = agregacion::trayectoria_puntaje_carrera(&base, carrera);
            graficos::linea::figura_trayectoria(carrera, &filas)
        }
        None => Grafico::sin_datos("No hay carreras disponibles en la base."),
    };
    registrar_consulta("trayectoria-carrera", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}

pub async fn histograma_puntajes_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let (base, filtro) = match base_y_filtro(&body.into_inner()) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let inicio = Instant::now();
    let figura = match filtro.carrera.as_deref() {
        Some(carrera) => {
            let valores = agregacion::puntajes_carrera(&base, carrera);
            graficos::histograma::figura_histograma_puntajes(carrera, &valores)
        }
        None => Grafico::sin_datos("No hay carreras disponibles en la base."),
    };
    registrar_consulta("histograma-puntajes", &filtro, inicio);
    HttpResponse::Ok().json(figura)
}
