use courtside::engine::config::AssemblyConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub data_dir: PathBuf,
    pub core_config: AssemblyConfig,
}
