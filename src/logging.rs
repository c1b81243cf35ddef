use std::fs::File;
use std::path::Path;

/// Opens the log file, or `None` when it cannot be created.
///
/// A missing log file never stops the game; logging is just switched off.
pub fn open_log_file(path: &Path) -> Option<File> {
    match File::create(path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!("logging disabled, could not create {}: {err}", path.display());
            None
        }
    }
}

/// Installs the global logger writing to `path`.
///
/// Logs go to a file because stdout belongs to the terminal UI. Returns
/// whether a logger was installed.
pub fn init(path: &Path) -> bool {
    let Some(file) = open_log_file(path) else {
        return false;
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .is_ok()
}
