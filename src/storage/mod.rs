use crate::error::Result;
use crate::scene::Scene;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

const SCENES_SLOT: &str = "scenes";

/// Named JSON slots on disk: the ordered scene collection lives under the
/// `scenes` slot, and each generated media reference is cached under a
/// `scene_<id>` slot so a rerun can pick up where it left off.
#[derive(Debug, Clone)]
pub struct SlotStorage {
    root: PathBuf,
}

impl SlotStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn init(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }

    /// Loads the last-saved ordered scene collection, or an empty one when
    /// nothing has been saved yet.
    pub async fn load_scenes(&self) -> Result<Vec<Scene>> {
        match tokio::fs::read(self.slot_path(SCENES_SLOT)).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save_scenes(&self, scenes: &[Scene]) -> Result<()> {
        let json = serde_json::to_vec_pretty(scenes)?;
        tokio::fs::write(self.slot_path(SCENES_SLOT), json).await?;
        info!("Saved {} scenes to {}", scenes.len(), self.slot_path(SCENES_SLOT).display());
        Ok(())
    }

    /// Caches a generated media reference under the scene's own slot.
    pub async fn cache_media(&self, scene_id: &str, media: &str) -> Result<()> {
        let json = serde_json::to_vec(&media)?;
        tokio::fs::write(self.slot_path(&format!("scene_{scene_id}")), json).await?;
        Ok(())
    }

    /// Reads a previously cached media reference, if any.
    pub async fn cached_media(&self, scene_id: &str) -> Result<Option<String>> {
        match tokio::fs::read(self.slot_path(&format!("scene_{scene_id}"))).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
