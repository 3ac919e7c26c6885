pub mod command;
pub mod error;
pub mod executor;
pub mod input;
pub mod params;
pub mod selector;

pub use command::CommandLine;
pub use error::Error;
pub use input::InputDescriptor;
pub use params::OutputParameters;
pub use selector::Selector;

const DEFAULT_CONFIG: &str = include_str!("../defaults.toml");

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub selector: SelectorConfig,
    pub menu: MenuConfig,
    pub transcoder: TranscoderConfig,
    pub synthetic: SyntheticConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SelectorConfig {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct MenuConfig {
    pub resolutions: Vec<String>,
    pub frame_rates: Vec<String>,
    pub bitrates: Vec<String>,
    pub custom_bitrate: String,
    pub url_prefixes: Vec<String>,
    pub media_extensions: Vec<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TranscoderConfig {
    pub program: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub format: String,
}

/// Fixed parameters of the lavfi test pattern and tone.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SyntheticConfig {
    pub video_source: String,
    pub tone_frequency: u32,
    pub beep_factor: u32,
    pub profile: String,
    pub pixel_format: String,
    pub font_size: u32,
    pub font_color: String,
    pub text_x: String,
    pub text_y: String,
}

/// Parses the defaults compiled into the binary. Nothing is read from disk.
pub fn load_config() -> Result<Config, anyhow::Error> {
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Runs the whole wizard once: input, parameters, command, transcoder.
///
/// `dir` is where media files are listed, `reader`/`writer` back the two
/// free-text prompts.
pub async fn run<P, R, W>(config: &Config, dir: P, mut reader: R, mut writer: W) -> Result<(), Error>
where
    P: AsRef<std::path::Path>,
    R: std::io::BufRead,
    W: std::io::Write,
{
    let selector = Selector::from_config(&config.selector);

    let input = input::resolve_input(&selector, &config.menu, dir.as_ref()).await?;
    log::info!("input: {}", input);
    let params = params::collect(&selector, &config.menu, &mut reader, &mut writer).await?;
    let command = command::synthesize(config, &input, &params);
    executor::execute(&command, &mut writer).await
}
