// --- Dashboard de Admisión PAES - Archivo principal ---

use paesdash::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    println!("=== Dashboard de Admisión PAES (API) ===");
    let bind = "127.0.0.1:8080";
    println!("Iniciando servidor en http://{}", bind);
    run_server(bind).await
}
