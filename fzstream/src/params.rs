use crate::error::Error;
use crate::selector::Selector;

const MENU_BITRATE_SUFFIX: &str = "Mbps";
const BITRATE_SUFFIX: &str = "M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputParameters {
    pub resolution: String,
    pub frame_rate: String,
    pub bitrate: String,
    pub destination_url: String,
}

/// Prompts for resolution, frame rate, bitrate and URL, in that order.
pub async fn collect<R, W>(
    selector: &Selector,
    menu: &crate::MenuConfig,
    reader: &mut R,
    writer: &mut W,
) -> Result<OutputParameters, Error>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let resolution = select_resolution(selector, menu).await?;
    let frame_rate = select_frame_rate(selector, menu).await?;
    let bitrate = select_bitrate(selector, menu, reader, writer).await?;
    let destination_url = read_url(menu, reader, writer)?;
    Ok(OutputParameters {
        resolution,
        frame_rate,
        bitrate,
        destination_url,
    })
}

pub async fn select_resolution(selector: &Selector, menu: &crate::MenuConfig) -> Result<String, Error> {
    selector.choose("Select resolution: ", &menu.resolutions).await
}

pub async fn select_frame_rate(selector: &Selector, menu: &crate::MenuConfig) -> Result<String, Error> {
    selector.choose("Select FPS: ", &menu.frame_rates).await
}

pub async fn select_bitrate<R, W>(
    selector: &Selector,
    menu: &crate::MenuConfig,
    reader: &mut R,
    writer: &mut W,
) -> Result<String, Error>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let mut options = menu.bitrates.clone();
    options.push(menu.custom_bitrate.clone());

    let choice = selector.choose("Select bitrate: ", &options).await?;
    if choice == menu.custom_bitrate {
        // Typed values are passed through as is.
        prompt_line(reader, writer, "Enter custom bitrate (e.g., 2M): ", "custom bitrate")
    } else {
        Ok(normalize_bitrate(&choice))
    }
}

/// `"4Mbps"` -> `"4M"`. Only the first occurrence is replaced.
pub fn normalize_bitrate(choice: &str) -> String {
    choice.replacen(MENU_BITRATE_SUFFIX, BITRATE_SUFFIX, 1)
}

pub fn read_url<R, W>(menu: &crate::MenuConfig, reader: &mut R, writer: &mut W) -> Result<String, Error>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let url = prompt_line(reader, writer, "Enter output URL (rtmp or srt): ", "output URL")?;
    validate_url(url, &menu.url_prefixes)
}

/// Only the scheme prefix is checked; the transcoder reports anything else.
pub fn validate_url<S>(url: String, prefixes: &[S]) -> Result<String, Error>
where
    S: AsRef<str>,
{
    if prefixes.iter().any(|prefix| url.starts_with(prefix.as_ref())) {
        Ok(url)
    } else {
        Err(Error::InvalidUrlFormat {
            url,
            prefixes: prefixes.iter().map(|p| p.as_ref().to_owned()).collect(),
        })
    }
}

fn prompt_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str, what: &'static str) -> Result<String, Error>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let read_failed = |source| Error::InputReadFailed { what, source };

    write!(writer, "{}", prompt).map_err(read_failed)?;
    writer.flush().map_err(read_failed)?;

    let mut line = String::new();
    let n = reader.read_line(&mut line).map_err(read_failed)?;
    if n == 0 {
        return Err(read_failed(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "standard input is closed",
        )));
    }
    Ok(line.trim().to_owned())
}
