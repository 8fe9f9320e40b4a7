use crate::FlatDbOptions;
use env_logger::Builder;
use log::{debug, error, info};
use std::sync::{Arc, OnceLock};

pub enum FlatDbLayer {
    Server,
    Client,
    Db,
    Catalog,
    Tablespace,
}

static LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

pub struct Logger {
    options: Arc<FlatDbOptions>,
}

//Falls back to default options when nothing called Logger::init before
pub fn logger() -> Arc<Logger> {
    LOGGER.get_or_init(|| Logger::create(Arc::new(FlatDbOptions::default())))
        .clone()
}

impl Logger {
    pub fn init(options: Arc<FlatDbOptions>) {
        if LOGGER.get().is_none() {
            let _ = LOGGER.set(Logger::create(options));
        }
    }

    fn create(options: Arc<FlatDbOptions>) -> Arc<Logger> {
        let mut builder = Builder::new();
        if options.is_debug_logging_enabled() {
            builder.filter_level(log::LevelFilter::Debug);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }
        //Another logger might have been installed already (e.g. by a test harness)
        let _ = builder.try_init();

        Arc::new(Logger { options })
    }

    pub fn info(&self, layer: FlatDbLayer, message: &str) {
        info!("[{}] {}", layer.to_string(), message);
    }

    pub fn error(&self, layer: FlatDbLayer, message: &str) {
        error!("[{}] {}", layer.to_string(), message);
    }

    pub fn debug(&self, layer: FlatDbLayer, message: &str) {
        if self.options.is_debug_logging_enabled() {
            debug!("[{}] {}", layer.to_string(), message);
        }
    }
}

impl FlatDbLayer {
    pub fn to_string(&self) -> String {
        match self {
            FlatDbLayer::Server => "Server".to_string(),
            FlatDbLayer::Client => "Client".to_string(),
            FlatDbLayer::Db => "DB".to_string(),
            FlatDbLayer::Catalog => "Catalog".to_string(),
            FlatDbLayer::Tablespace => "Tablespace".to_string(),
        }
    }
}
