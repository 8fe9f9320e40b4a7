use serde_json::{from_slice, to_vec_pretty};
use shared::{start_flatdb_options_builder_from, FlatDbError, FlatDbFile, FlatDbFileMode, FlatDbOptions};
use std::env;
use std::path::Path;
use std::sync::Arc;

//Creates the file with the default options if it doesn't exist. Data files are stored next to it
pub fn load_options(
    path: &str
) -> Result<Arc<FlatDbOptions>, FlatDbError> {
    let path = Path::new(path);
    let options = if path.exists() {
        load_options_from_existing_file(path)?
    } else {
        populate_options_file_with_default_data(path)?
    };

    Ok(Arc::new(add_environment_to_options(options, path)))
}

fn populate_options_file_with_default_data(path: &Path) -> Result<FlatDbOptions, FlatDbError> {
    let options = FlatDbOptions::default();
    let serialized = to_vec_pretty(&options)
        .map_err(|e| FlatDbError::CannotEncodeOptionsFile(e))?;
    let file = FlatDbFile::create(path, &serialized, FlatDbFileMode::RandomWrites)
        .map_err(|e| FlatDbError::CannotWriteOptionsFile(path.to_path_buf(), e))?;
    file.fsync()
        .map_err(|e| FlatDbError::CannotWriteOptionsFile(path.to_path_buf(), e))?;

    Ok(options)
}

fn load_options_from_existing_file(path: &Path) -> Result<FlatDbOptions, FlatDbError> {
    let mut file = FlatDbFile::open(path, FlatDbFileMode::ReadOnly)
        .map_err(|e| FlatDbError::CannotOpenOptionsFile(path.to_path_buf(), e))?;
    let bytes = file.read_all()
        .map_err(|e| FlatDbError::CannotOpenOptionsFile(path.to_path_buf(), e))?;

    from_slice(&bytes)
        .map_err(|e| FlatDbError::CannotDecodeOptionsFile(path.to_path_buf(), e))
}

fn add_environment_to_options(options: FlatDbOptions, path: &Path) -> FlatDbOptions {
    let base_path = path.parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(|parent| parent.to_string_lossy().to_string())
        .unwrap_or_else(|| String::from("."));
    let test_mode = options.test_mode || is_test_environment();

    start_flatdb_options_builder_from(&options)
        .base_path(&base_path)
        .test_mode(test_mode)
        .build()
}

fn is_test_environment() -> bool {
    env::var("FLATDB_TEST").map_or(false, |value| value == "1")
}
