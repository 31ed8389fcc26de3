use crate::api_json::FiltroSeleccion;
use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// GET /help
/// Describe el formato del filtro y lista los endpoints disponibles.
pub async fn help_handler() -> impl Responder {
    let example = FiltroSeleccion {
        carreras: vec!["Sociología".to_string(), "Medicina".to_string(), "Derecho".to_string()],
        region: Some(8),
        carreras_distribucion: vec!["Sociología".to_string()],
        ingreso: Some("PACE".to_string()),
        carrera: Some("Derecho".to_string()),
    };

    let help = json!({
        "description": "API del dashboard de admisión PAES. Los endpoints de gráficos aceptan \
un JSON con el filtro (todos los campos opcionales; los ausentes se completan con los defaults \
canónicos) y devuelven los parámetros de figura listos para el renderer, o el estado 'sin_datos'.",
        "filtro_example": example,
        "graficos": [
            "/graficos/puntaje-carrera", "/graficos/puntaje-sexo", "/graficos/proporcion-sexo",
            "/graficos/waffle-sexo", "/graficos/caja-puntajes", "/graficos/dependencia",
            "/graficos/violin-dependencia", "/graficos/torta-ingreso", "/graficos/sankey-ingreso",
            "/graficos/mapa-regiones", "/graficos/top-colegios", "/graficos/top-carreras",
            "/graficos/nube-colegios", "/graficos/trayectoria-carrera", "/graficos/histograma-puntajes"
        ],
        "otros": [
            "/filtros", "/tabla", "/narrativa/tendencias", "/narrativa/brecha-sexo",
            "/analitica/graficos-mas-consultados", "/analitica/filtros-mas-usados",
            "/analitica/carreras-mas-consultadas", "/analitica/conteo-consultas",
            "/datos/invalidar-cache"
        ],
        "note": "La base se memoiza por (ruta, mtime); use /datos/invalidar-cache para forzar la relectura."
    });

    HttpResponse::Ok().json(help)
}
