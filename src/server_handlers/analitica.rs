use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

pub async fn anal_graficos_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let limit = query.get("limit").and_then(|s| s.parse::<usize>().ok());
    match crate::analitica::graficos_mas_consultados(limit) {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("analitica error: {}", e)})),
    }
}

pub async fn anal_filtros_handler() -> impl Responder {
    match crate::analitica::filtros_mas_usados() {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("analitica error: {}", e)})),
    }
}

pub async fn anal_carreras_handler(
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let limit = query.get("limit").and_then(|s| s.parse::<usize>().ok());
    match crate::analitica::carreras_mas_consultadas(limit) {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("analitica error: {}", e)})),
    }
}

pub async fn anal_conteo_handler() -> impl Responder {
    match crate::analitica::conteo_consultas() {
        Ok(v) => HttpResponse::Ok().json(v),
        Err(e) => HttpResponse::InternalServerError()
            .json(json!({"error": format!("analitica error: {}", e)})),
    }
}
