//! Handlers de datos: valores disponibles para los controles, la grilla de
//! estudiantes y el gancho de invalidación del caché.

use super::cargar_base;
use crate::api_json::{CARRERAS_DEFAULT, CARRERAS_DISTRIBUCION_DEFAULT, REGION_DEFAULT, ValoresDisponibles};
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

/// GET /filtros
/// Valores disponibles en la base más los defaults canónicos, para poblar
/// los controles del front-end.
pub async fn filtros_handler() -> impl Responder {
    let base = match cargar_base() {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    let disponibles = ValoresDisponibles::desde_base(&base);
    HttpResponse::Ok().json(json!({
        "disponibles": disponibles,
        "defaults": {
            "carreras": CARRERAS_DEFAULT,
            "region": REGION_DEFAULT,
            "carreras_distribucion": CARRERAS_DISTRIBUCION_DEFAULT,
        }
    }))
}

/// GET /tabla
/// Parámetros de la grilla completa de estudiantes.
pub async fn tabla_handler() -> impl Responder {
    let base = match cargar_base() {
        Ok(b) => b,
        Err(resp) => return resp,
    };
    HttpResponse::Ok().json(crate::graficos::tabla::figura_tabla(&base))
}

/// POST /datos/invalidar-cache
/// Invalidación explícita del caché de la base: con `{"path": "..."}`
/// descarta esa entrada, sin body descarta todo.
pub async fn invalidar_cache_handler(body: web::Json<serde_json::Value>) -> impl Responder {
    let path = body.get("path").and_then(|v| v.as_str());
    crate::excel::cache::invalidar(path);
    HttpResponse::Ok().json(json!({"status": "ok"}))
}
