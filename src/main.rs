use anyhow::Context;
use clap::Parser;
use storyboard::api::{AnimationOptions, GenerationClient, MotionType, DEFAULT_API_URL};
use storyboard::error::Result;
use storyboard::scene::SceneStore;
use storyboard::script::{convert_to_script, parse, Style};
use storyboard::storage::SlotStorage;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn story text into a storyboard with generated scene media", long_about = None)]
struct Args {
    /// Input story or script text
    #[arg(short, long)]
    text: Option<String>,

    /// Input text file path
    #[arg(short, long)]
    file: Option<String>,

    /// Screenplay style: professional, creative, dramatic, comedy or default
    #[arg(short, long, default_value = "professional")]
    style: String,

    /// Working directory for the scene collection and cached media
    #[arg(short = 'w', long, default_value = "./storyboard")]
    work_dir: String,

    /// Generation backend base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Skip media generation (format and parse only)
    #[arg(long)]
    skip_generation: bool,

    /// Media width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Media height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Frames per generated animation
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Seconds per generated animation
    #[arg(long, default_value_t = 2.0)]
    duration: f64,

    /// Animation style passed to the backend
    #[arg(long, default_value = "cinematic")]
    media_style: String,

    /// Motion model: deforum, animatediff or svd
    #[arg(long, default_value = "deforum")]
    motion: MotionType,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Classifier-free guidance scale
    #[arg(long, default_value_t = 7.5)]
    cfg_scale: f64,

    /// Sampling steps
    #[arg(long, default_value_t = 20)]
    steps: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let api_url = if let Some(url) = args.api_url.clone() {
        url
    } else if let Ok(url) = std::env::var("STORYBOARD_API_URL") {
        url
    } else {
        DEFAULT_API_URL.to_string()
    };

    let input_text = if let Some(text) = args.text.clone() {
        text
    } else if let Some(file_path) = args.file.clone() {
        tokio::fs::read_to_string(&file_path)
            .await
            .context(format!("Failed to read file: {}", file_path))?
    } else {
        eprintln!("Error: Either --text or --file must be provided");
        std::process::exit(1);
    };

    info!("Starting storyboard generation...");
    info!("Input text length: {} characters", input_text.len());

    let options = AnimationOptions {
        width: args.width,
        height: args.height,
        frames: args.frames,
        duration: args.duration,
        style: args.media_style.clone(),
        motion_type: args.motion,
        seed: args.seed,
        cfg_scale: args.cfg_scale,
        steps: args.steps,
    };

    if let Err(e) = run_pipeline(
        input_text,
        &args.style,
        api_url,
        args.work_dir,
        options,
        args.skip_generation,
    )
    .await
    {
        error!("Storyboard generation failed: {}", e);
        std::process::exit(1);
    }

    info!("Storyboard generation completed successfully!");
    Ok(())
}

async fn run_pipeline(
    input_text: String,
    style_name: &str,
    api_url: String,
    work_dir: String,
    options: AnimationOptions,
    skip_generation: bool,
) -> Result<()> {
    let storage = SlotStorage::new(&work_dir);
    storage.init().await?;

    // 1. Reformat the raw text and wrap it into scene blocks
    let style = Style::from_name(style_name);
    info!("Step 1/3: Converting text into a {} script...", style.as_str());
    let script = convert_to_script(&input_text, style);

    // 2. Parse the script into the ordered scene collection
    info!("Step 2/3: Parsing script into scenes...");
    let mut store = SceneStore::new();
    store.replace_all(parse(&script));
    info!("Parsed {} scenes", store.len());
    storage.save_scenes(store.scenes()).await?;

    if skip_generation {
        info!("Step 3/3: Skipped media generation");
        return Ok(());
    }

    // 3. Generate media per scene, reusing cached results from earlier runs
    info!("Step 3/3: Generating media for each scene...");
    let client = GenerationClient::new(api_url);
    let ids: Vec<String> = store.scenes().iter().map(|s| s.id.clone()).collect();
    let total = ids.len();

    for (idx, id) in ids.iter().enumerate() {
        if let Some(media) = storage.cached_media(id).await? {
            info!("Scene {} media already cached, skipping...", id);
            store.attach_media(id, media);
            storage.save_scenes(store.scenes()).await?;
            continue;
        }

        let Some(scene) = store.get(id).cloned() else {
            continue;
        };

        match client.generate_animation(&scene, &options).await {
            Ok(media) => {
                storage.cache_media(id, &media).await?;
                store.attach_media(id, &media);
                storage.save_scenes(store.scenes()).await?;
                info!("Generated media for scene {} ({}/{})", id, idx + 1, total);
            }
            Err(e) => {
                // Retryable: rerun with the same work dir to fill the gap
                warn!("Media generation failed for scene {}: {}", id, e);
            }
        }
    }

    Ok(())
}
