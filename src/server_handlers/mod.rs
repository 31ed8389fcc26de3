pub mod analitica;
pub mod datos;
pub mod docs;
pub mod graficos;
pub mod narrativa;

pub use analitica::*;
pub use datos::*;
pub use docs::*;
pub use graficos::*;
pub use narrativa::*;

use crate::api_json::FiltroSeleccion;
use crate::models::Postulante;
use actix_web::HttpResponse;
use serde_json::json;
use std::sync::Arc;

/// Carga la base memoizada resolviendo la ruta configurada.
pub(crate) fn cargar_base() -> Result<Arc<Vec<Postulante>>, HttpResponse> {
    let path = crate::excel::resolver_base_path();
    crate::excel::cache::base_cached(&path).map_err(|e| {
        HttpResponse::InternalServerError()
            .json(json!({"error": format!("failed to load base {:?}: {}", path, e)}))
    })
}

/// Parsea el body de un request de gráfico y completa el filtro con los
/// defaults canónicos contra la base cargada.
pub(crate) fn base_y_filtro(
    body: &serde_json::Value,
) -> Result<(Arc<Vec<Postulante>>, FiltroSeleccion), HttpResponse> {
    let base = cargar_base()?;
    let filtro = crate::api_json::parse_y_completar(body, &base).map_err(|e| {
        HttpResponse::BadRequest().json(json!({"error": format!("failed to parse filtro: {}", e)}))
    })?;
    Ok((base, filtro))
}

/// Registro best-effort de la consulta en la analítica de uso; un fallo acá
/// nunca afecta la respuesta.
pub(crate) fn registrar_consulta(grafico: &str, filtro: &FiltroSeleccion, inicio: std::time::Instant) {
    let filtros_json = serde_json::to_string(filtro).unwrap_or_default();
    let _ = crate::analitica::log_consulta(
        grafico,
        &filtros_json,
        inicio.elapsed().as_millis() as i64,
    );
}
