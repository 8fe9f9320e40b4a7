use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

const TEST_FILE_PREFIX: &str = "test.";

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatDbOptions {
    pub base_path: String,
    pub catalog_file_name: String,
    pub tablespace_file_name: String,
    pub server_port: u16,
    pub server_n_worker_threads: usize,
    pub use_debug_logging: bool,
    //Data files get prefixed with "test." and debug logs are turned off
    pub test_mode: bool,
}

impl Default for FlatDbOptions {
    fn default() -> Self {
        FlatDbOptions {
            base_path: String::from("."),
            catalog_file_name: String::from("flatdb.catalog"),
            tablespace_file_name: String::from("flatdb.data"),
            server_port: 2134,
            server_n_worker_threads: 8,
            use_debug_logging: true,
            test_mode: false,
        }
    }
}

impl FlatDbOptions {
    pub fn catalog_path(&self) -> PathBuf {
        self.data_file_path(&self.catalog_file_name)
    }

    pub fn tablespace_path(&self) -> PathBuf {
        self.data_file_path(&self.tablespace_file_name)
    }

    pub fn is_debug_logging_enabled(&self) -> bool {
        self.use_debug_logging && !self.test_mode
    }

    fn data_file_path(&self, file_name: &str) -> PathBuf {
        let mut path = PathBuf::from(self.base_path.as_str());
        if self.test_mode {
            path.push(format!("{}{}", TEST_FILE_PREFIX, file_name));
        } else {
            path.push(file_name);
        }
        path
    }
}

pub fn start_flatdb_options_builder() -> FlatDbOptionsBuilder {
    FlatDbOptionsBuilder {
        options: FlatDbOptions::default()
    }
}

pub fn start_flatdb_options_builder_from(options: &FlatDbOptions) -> FlatDbOptionsBuilder {
    FlatDbOptionsBuilder {
        options: options.clone()
    }
}

pub struct FlatDbOptionsBuilder {
    options: FlatDbOptions,
}

impl FlatDbOptionsBuilder {
    pub fn base_path(&mut self, value: &str) -> &mut FlatDbOptionsBuilder {
        self.options.base_path = value.to_string();
        self
    }

    pub fn catalog_file_name(&mut self, value: &str) -> &mut FlatDbOptionsBuilder {
        self.options.catalog_file_name = value.to_string();
        self
    }

    pub fn tablespace_file_name(&mut self, value: &str) -> &mut FlatDbOptionsBuilder {
        self.options.tablespace_file_name = value.to_string();
        self
    }

    pub fn server_port(&mut self, value: u16) -> &mut FlatDbOptionsBuilder {
        self.options.server_port = value;
        self
    }

    pub fn server_n_worker_threads(&mut self, value: usize) -> &mut FlatDbOptionsBuilder {
        self.options.server_n_worker_threads = value;
        self
    }

    pub fn use_debug_logging(&mut self, value: bool) -> &mut FlatDbOptionsBuilder {
        self.options.use_debug_logging = value;
        self
    }

    pub fn test_mode(&mut self, value: bool) -> &mut FlatDbOptionsBuilder {
        self.options.test_mode = value;
        self
    }

    pub fn build_arc(&self) -> Arc<FlatDbOptions> {
        Arc::new(self.options.clone())
    }

    pub fn build(&self) -> FlatDbOptions {
        self.options.clone()
    }
}
