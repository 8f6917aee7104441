use crate::error::{Result, StoryboardError};
use crate::scene::Scene;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Motion model the backend should animate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionType {
    Deforum,
    AnimateDiff,
    Svd,
}

impl MotionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionType::Deforum => "deforum",
            MotionType::AnimateDiff => "animatediff",
            MotionType::Svd => "svd",
        }
    }
}

impl FromStr for MotionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deforum" => Ok(MotionType::Deforum),
            "animatediff" => Ok(MotionType::AnimateDiff),
            "svd" => Ok(MotionType::Svd),
            other => Err(format!(
                "unknown motion type '{other}' (expected deforum, animatediff or svd)"
            )),
        }
    }
}

/// Media parameters for a generation request. `cfg_scale` and `steps` carry
/// the backend defaults (7.5 and 20) when the caller leaves them alone.
#[derive(Debug, Clone)]
pub struct AnimationOptions {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub duration: f64,
    pub style: String,
    pub motion_type: MotionType,
    pub seed: Option<u64>,
    pub cfg_scale: f64,
    pub steps: u32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            frames: 30,
            duration: 2.0,
            style: "cinematic".to_string(),
            motion_type: MotionType::Deforum,
            seed: None,
            cfg_scale: 7.5,
            steps: 20,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    prompt: &'a str,
    width: u32,
    height: u32,
    frames: u32,
    duration: f64,
    style: &'a str,
    motion_type: MotionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    cfg_scale: f64,
    steps: u32,
}

impl<'a> GenerationRequest<'a> {
    fn new(prompt: &'a str, options: &'a AnimationOptions) -> Self {
        Self {
            prompt,
            width: options.width,
            height: options.height,
            frames: options.frames,
            duration: options.duration,
            style: &options.style,
            motion_type: options.motion_type,
            seed: options.seed,
            cfg_scale: options.cfg_scale,
            steps: options.steps,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnimationResponse {
    #[serde(rename = "videoUrl")]
    video_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
}

/// Builds the descriptive generation prompt for a scene. Empty fields
/// interpolate as empty strings; this never fails.
pub fn build_prompt(scene: &Scene) -> String {
    format!(
        r#"A cinematic horror scene with {}.
Character: {} in {}.
Visual elements: {}.

Cinematic horror style with:
- Dramatic lighting and shadows
- Gothic horror elements
- Mysterious atmosphere
- Tension and suspense
- Dark and moody color palette
- Character in dramatic pose
- Environmental details
- Atmospheric effects"#,
        scene.title, scene.character, scene.action, scene.visual
    )
}

/// HTTP client for the generation backend. The backend is a single logical
/// endpoint pair; any non-2xx response or a body without a media reference
/// is a generation failure and leaves caller state untouched.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    base_url: String,
    client: Client,
}

impl GenerationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Requests an animation for the scene and returns its media reference.
    pub async fn generate_animation(
        &self,
        scene: &Scene,
        options: &AnimationOptions,
    ) -> Result<String> {
        let prompt = build_prompt(scene);
        self.generate_animation_with_prompt(&prompt, options).await
    }

    /// Same call with a caller-supplied prompt, for regeneration after the
    /// user has edited the scene details.
    pub async fn generate_animation_with_prompt(
        &self,
        prompt: &str,
        options: &AnimationOptions,
    ) -> Result<String> {
        info!("Requesting {} animation from backend...", options.motion_type.as_str());

        let body = self
            .post_json("/generate/animation", &GenerationRequest::new(prompt, options))
            .await?;

        let parsed: AnimationResponse = serde_json::from_str(&body)
            .map_err(|e| StoryboardError::Generation(format!("malformed animation response: {e}")))?;

        parsed
            .video_url
            .ok_or_else(|| StoryboardError::Generation("no video URL in response".to_string()))
    }

    /// Requests a still image for the scene and returns its media reference.
    pub async fn generate_image(
        &self,
        scene: &Scene,
        options: &AnimationOptions,
    ) -> Result<String> {
        let prompt = build_prompt(scene);
        info!("Requesting image from backend...");

        let body = self
            .post_json("/generate/image", &GenerationRequest::new(&prompt, options))
            .await?;

        let parsed: ImageResponse = serde_json::from_str(&body)
            .map_err(|e| StoryboardError::Generation(format!("malformed image response: {e}")))?;

        parsed
            .image_url
            .ok_or_else(|| StoryboardError::Generation("no image URL in response".to_string()))
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(StoryboardError::Generation(format!(
                "generation API error: {error_text}"
            )));
        }

        Ok(response.text().await?)
    }
}
