use serde::{Deserialize, Serialize};

mod store;

pub use store::{ScenePatch, SceneStore};

/// Which subset of fields carries meaning for a scene.
///
/// `Text` uses `action` as on-screen text, `Audio` uses `action` as an
/// audio cue description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    Scene,
    Text,
    Audio,
}

/// One unit of storyboard content.
///
/// Free-text fields are empty strings rather than `None` so consumers never
/// distinguish absent from empty. `image_data` stays absent until a
/// generation call succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub character: String,
    pub dialogue: String,
    pub action: String,
    pub visual: String,
    pub sound: String,
    pub music: String,
    #[serde(rename = "type")]
    pub kind: SceneKind,
    #[serde(rename = "imageData", default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl Scene {
    /// A scene of the given kind with every text field empty.
    pub fn new(id: impl Into<String>, kind: SceneKind) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            character: String::new(),
            dialogue: String::new(),
            action: String::new(),
            visual: String::new(),
            sound: String::new(),
            music: String::new(),
            kind,
            image_data: None,
        }
    }
}
