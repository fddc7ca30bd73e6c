use std::path::Path;

pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

/// Prefixes the error of `result` with the file it concerns.
pub fn in_file<T>(result: Result<T>, path: &Path) -> Result<T> {
    result.map_err(|e| format!("{}: {}", path.display(), e))
}
