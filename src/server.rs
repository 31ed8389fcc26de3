use crate::server_handlers::{
    anal_carreras_handler, anal_conteo_handler, anal_filtros_handler, anal_graficos_handler,
    brecha_sexo_handler, caja_puntajes_handler, dependencia_handler, filtros_handler,
    help_handler, histograma_puntajes_handler, invalidar_cache_handler, mapa_regiones_handler,
    nube_colegios_handler, proporcion_sexo_handler, puntaje_carrera_handler, puntaje_sexo_handler,
    sankey_ingreso_handler, tabla_handler, tendencias_handler, top_carreras_handler,
    top_colegios_handler, torta_ingreso_handler, trayectoria_carrera_handler, violin_dependencia_handler,
    waffle_sexo_handler,
};
use actix_cors::Cors;
use actix_web::{App, HttpServer, web};

pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
    // La analítica de uso es best-effort: si la base SQLite no se puede
    // inicializar el servidor parte igual.
    if let Err(e) = crate::analitica::init_db() {
        eprintln!("No se pudo inicializar la base de analítica: {}", e);
    }

    HttpServer::new(|| {
        // El front-end del dashboard se sirve desde otro origen.
        let cors = Cors::permissive();
        App::new()
            .wrap(cors)
            .route("/filtros", web::get().to(filtros_handler))
            .route("/tabla", web::get().to(tabla_handler))
            .route("/graficos/puntaje-carrera", web::post().to(puntaje_carrera_handler))
            .route("/graficos/puntaje-sexo", web::post().to(puntaje_sexo_handler))
            .route("/graficos/proporcion-sexo", web::post().to(proporcion_sexo_handler))
            .route("/graficos/waffle-sexo", web::post().to(waffle_sexo_handler))
            .route("/graficos/caja-puntajes", web::post().to(caja_puntajes_handler))
            .route("/graficos/dependencia", web::post().to(dependencia_handler))
            .route("/graficos/violin-dependencia", web::post().to(violin_dependencia_handler))
            .route("/graficos/torta-ingreso", web::post().to(torta_ingreso_handler))
            .route("/graficos/sankey-ingreso", web::post().to(sankey_ingreso_handler))
            .route("/graficos/mapa-regiones", web::post().to(mapa_regiones_handler))
            .route("/graficos/top-colegios", web::post().to(top_colegios_handler))
            .route("/graficos/top-carreras", web::post().to(top_carreras_handler))
            .route("/graficos/nube-colegios", web::post().to(nube_colegios_handler))
            .route("/graficos/trayectoria-carrera", web::post().to(trayectoria_carrera_handler))
            .route("/graficos/histograma-puntajes", web::post().to(histograma_puntajes_handler))
            .route("/narrativa/tendencias", web::post().to(tendencias_handler))
            .route("/narrativa/brecha-sexo", web::post().to(brecha_sexo_handler))
            .route("/analitica/graficos-mas-consultados", web::get().to(anal_graficos_handler))
            .route("/analitica/filtros-mas-usados", web::get().to(anal_filtros_handler))
            .route("/analitica/carreras-mas-consultadas", web::get().to(anal_carreras_handler))
            .route("/analitica/conteo-consultas", web::get().to(anal_conteo_handler))
            .route("/datos/invalidar-cache", web::post().to(invalidar_cache_handler))
            .route("/help", web::get().to(help_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
