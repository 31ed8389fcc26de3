//! Caché en memoria para la carga de la base de postulantes.
//!
//! La clave es la ruta del archivo y el valor guarda el mtime observado al
//! leer: si el archivo cambia en disco la próxima consulta relee en vez de
//! servir la copia vieja. `invalidar` es el gancho explícito de invalidación.

use crate::models::Postulante;
use std::collections::HashMap;
use std::error::Error;
use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::SystemTime;

type Entrada = (SystemTime, Arc<Vec<Postulante>>);

static BASE_CACHE: OnceLock<Mutex<HashMap<String, Entrada>>> = OnceLock::new();

fn cache() -> &'static Mutex<HashMap<String, Entrada>> {
    BASE_CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

fn cargar_segun_extension(path: &Path) -> Result<Vec<Postulante>, Box<dyn Error>> {
    let es_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if es_csv {
        crate::excel::leer_base_csv(path)
    } else {
        crate::excel::leer_base_postulantes(path)
    }
}

/// Devuelve la base de postulantes para `path`, releyendo sólo cuando el
/// archivo cambió desde la última lectura. El resultado se comparte como
/// `Arc` para evitar clonar la base completa por request.
pub fn base_cached<P: AsRef<Path>>(path: P) -> Result<Arc<Vec<Postulante>>, Box<dyn Error>> {
    let path = path.as_ref();
    let key = path.to_string_lossy().to_string();
    let mtime = std::fs::metadata(path)?.modified()?;

    {
        let guard = cache().lock().expect("base cache mutex poisoned");
        if let Some((cached_mtime, datos)) = guard.get(&key) {
            if *cached_mtime == mtime {
                return Ok(Arc::clone(datos));
            }
        }
    }

    // Leer fuera del lock; el lock sólo protege la inserción.
    let datos = Arc::new(cargar_segun_extension(path)?);
    let mut guard = cache().lock().expect("base cache mutex poisoned");
    guard.insert(key, (mtime, Arc::clone(&datos)));
    Ok(datos)
}

/// Gancho explícito de invalidación: con `Some(path)` descarta esa entrada,
/// con `None` vacía el caché completo.
pub fn invalidar(path: Option<&str>) {
    let mut guard = cache().lock().expect("base cache mutex poisoned");
    match path {
        Some(p) => {
            guard.remove(p);
        }
        None => guard.clear(),
    }
}
