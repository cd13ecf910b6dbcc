use crate::errors::StoreError;
use crate::models::{DailyTip, JourneyRecord};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

const JOURNEY_FILE: &str = "journey.json";
const TIP_FILE: &str = "tip.json";

/// Owns the durable copy of both documents: the journey record and the
/// daily-tip cache. Each is a whole-document overwrite on save; callers
/// read-modify-write the full record.
#[derive(Clone)]
pub struct Store {
    journey_path: PathBuf,
    tip_path: PathBuf,
}

pub fn resolve_data_dir() -> PathBuf {
    env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

impl Store {
    pub fn new(dir: &Path) -> Self {
        Self {
            journey_path: dir.join(JOURNEY_FILE),
            tip_path: dir.join(TIP_FILE),
        }
    }

    /// Absent covers both "never written" and "unreadable": a corrupt
    /// document is logged and treated as a first visit, not a fatal error.
    pub async fn load_journey(&self) -> Option<JourneyRecord> {
        load_doc(&self.journey_path).await
    }

    pub async fn save_journey(&self, record: &JourneyRecord) -> Result<(), StoreError> {
        save_doc(&self.journey_path, record).await
    }

    pub async fn load_tip(&self) -> Option<DailyTip> {
        load_doc(&self.tip_path).await
    }

    pub async fn save_tip(&self, tip: &DailyTip) -> Result<(), StoreError> {
        save_doc(&self.tip_path, tip).await
    }
}

async fn load_doc<T: DeserializeOwned>(path: &Path) -> Option<T> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(doc) => Some(doc),
            Err(err) => {
                error!("failed to parse {}: {err}", path.display());
                None
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            None
        }
    }
}

async fn save_doc<T: Serialize>(path: &Path, doc: &T) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(doc)?;
    fs::write(path, payload).await?;
    Ok(())
}
