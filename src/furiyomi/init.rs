use crate::analyzer::kakasi::KakasiConverter;
use crate::analyzer::mecab::MecabSegmenter;
use crate::api::FuriApi;
use crate::commands::FuriPaths;
use crate::config::FuriConfig;
use crate::error::{FuriError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data directory, mostly for tests and portable setups.
pub const DATA_DIR_ENV: &str = "FURIYOMI_DATA";

pub type FsApi = FuriApi<MecabSegmenter, KakasiConverter, FsBackend>;

pub struct FuriContext {
    pub api: FsApi,
}

/// `$FURIYOMI_DATA` when set and non-empty, else the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "furiyomi", "furiyomi")
        .ok_or_else(|| FuriError::Config("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub fn initialize() -> Result<FuriContext> {
    let data = data_dir()?;
    initialize_in(data)
}

pub fn initialize_in(data: PathBuf) -> Result<FuriContext> {
    let config = FuriConfig::load(&data)?;
    let segmenter = MecabSegmenter::from_config(&config.mecab)?;
    let converter = KakasiConverter::from_config(&config.kakasi)?;
    let backend = FsBackend::new(data.clone());
    tracing::debug!(data = %data.display(), "initialized context");

    let api = FuriApi::new(backend, segmenter, converter, FuriPaths { data });
    Ok(FuriContext { api })
}
