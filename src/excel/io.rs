use calamine::{Data, open_workbook_auto};
use std::path::Path;

/// Convierte una celda `Data` de calamine a String. Los floats enteros se
/// imprimen sin decimales para que códigos y años no queden como "2023.0".
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Normaliza encabezados eliminando espacios y pasando a minúsculas.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lee una hoja del workbook y la devuelve como Vec<Vec<String>>.
/// Con `sheet_name` vacío toma la primera hoja.
pub fn leer_hoja<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    use calamine::Reader;
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names().to_owned();
    let sheet_to_use = if sheet_name.is_empty() {
        names.first().cloned().unwrap_or_default()
    } else {
        names
            .iter()
            .find(|s| *s == sheet_name)
            .cloned()
            .unwrap_or_else(|| names.first().cloned().unwrap_or_default())
    };

    if sheet_to_use.is_empty() {
        return Ok(Vec::new());
    }

    match workbook.worksheet_range(&sheet_to_use) {
        Ok(range) => {
            let mut rows: Vec<Vec<String>> = Vec::new();
            for r in range.rows() {
                rows.push(r.iter().map(cell_to_string).collect());
            }
            Ok(rows)
        }
        Err(_) => Ok(Vec::new()),
    }
}

/// Fallback cuando calamine no devuelve filas: enumera las hojas internas del
/// zip (xl/worksheets/sheet*) y reintenta la lectura hoja por hoja.
pub fn leer_hojas_via_zip<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error>> {
    let archive = zip::ZipArchive::new(std::fs::File::open(path.as_ref())?)?;
    let file_list: Vec<String> = archive.file_names().map(|s| s.to_string()).collect();

    for fname in file_list.iter() {
        if !fname.starts_with("xl/worksheets/sheet") {
            continue;
        }
        let rows = leer_hoja(path.as_ref(), fname)?;
        if rows.iter().any(|r| r.iter().any(|c| !c.trim().is_empty())) {
            return Ok(rows);
        }
    }
    Ok(Vec::new())
}
