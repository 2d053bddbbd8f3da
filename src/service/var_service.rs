use crate::prelude::*;
use crate::region::regions::RegionPreset;
use anyhow::anyhow;
use std::{env::var, path::PathBuf};
use tracing::level_filters::LevelFilter;

pub async fn get_speeches_path() -> Result<PathBuf> {
    match var("SPEECHES_PATH") {
        Ok(path) => match path.is_empty() {
            true => {
                let err = "SPEECHES_PATH is empty";
                tracing::error!("{}", err);
                Err(anyhow!(err))
            }
            false => Ok(PathBuf::from(path)),
        },
        Err(e) => {
            let err = format!("SPEECHES_PATH not found in environment: {:?}", e);
            tracing::error!("{}", err);
            Err(anyhow!(err))
        }
    }
}

pub async fn get_top_locations() -> Result<usize> {
    match var("TOP_LOCATIONS") {
        Ok(top) => match top.parse::<usize>() {
            Ok(top) => Ok(top),
            Err(e) => {
                let err = format!("Failed to parse TOP_LOCATIONS to usize: {}", e);
                tracing::error!("{}", err);
                Err(anyhow!(err))
            }
        },
        Err(_) => Ok(15),
    }
}

pub async fn get_location_preset() -> Result<RegionPreset> {
    match var("LOCATION_PRESET") {
        Ok(preset) => match preset.is_empty() {
            true => Ok(RegionPreset::All),
            false => match preset.parse::<RegionPreset>() {
                Ok(preset) => Ok(preset),
                Err(e) => {
                    tracing::error!("Invalid LOCATION_PRESET: {}", e);
                    Err(e)
                }
            },
        },
        Err(_) => Ok(RegionPreset::All),
    }
}

pub async fn get_location_search() -> Result<Option<String>> {
    match var("LOCATION_SEARCH") {
        Ok(search) => match search.trim().is_empty() {
            true => {
                tracing::info!("LOCATION_SEARCH is empty");
                Ok(None)
            }
            false => Ok(Some(search)),
        },
        Err(e) => {
            tracing::debug!("LOCATION_SEARCH not found in environment: {}", e);
            Ok(None)
        }
    }
}

/// Read before the subscriber exists, so failures here are not logged.
pub fn get_log_level() -> Result<LevelFilter> {
    match var("LOG_LEVEL") {
        Ok(level) => match level.parse::<LevelFilter>() {
            Ok(level) => Ok(level),
            Err(e) => Err(anyhow!("Failed to parse LOG_LEVEL {:?}: {}", level, e)),
        },
        Err(_) => Ok(LevelFilter::INFO),
    }
}
