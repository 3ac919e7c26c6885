use crate::input::InputDescriptor;
use crate::params::OutputParameters;

/// A transcoder invocation as an argument vector. It is spawned without a
/// shell; `Display` renders a shell-pasteable line for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(arg: &str) -> std::borrow::Cow<'_, str> {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));
    if safe {
        std::borrow::Cow::Borrowed(arg)
    } else {
        // Nothing expands inside single quotes, `!` included.
        std::borrow::Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
    }
}

/// Builds the transcoder command for `input`. Pure: same inputs, same output.
pub fn synthesize(config: &crate::Config, input: &InputDescriptor, params: &OutputParameters) -> CommandLine {
    let mut args: Vec<String> = vec!["-re".into(), "-stream_loop".into(), "-1".into()];
    match input {
        InputDescriptor::File { path } => {
            args.push("-i".into());
            args.push(path.to_string_lossy().into_owned());
            args.extend(vec![
                "-s".into(),
                params.resolution.clone(),
                "-r".into(),
                params.frame_rate.clone(),
                "-b:v".into(),
                params.bitrate.clone(),
            ]);
        }
        InputDescriptor::Synthetic => {
            let synthetic = &config.synthetic;
            args.extend(vec![
                "-f".into(),
                "lavfi".into(),
                "-i".into(),
                format!(
                    "{}=size={}:rate={}",
                    synthetic.video_source, params.resolution, params.frame_rate
                ),
                "-f".into(),
                "lavfi".into(),
                "-i".into(),
                format!(
                    "sine=frequency={}:beep_factor={}",
                    synthetic.tone_frequency, synthetic.beep_factor
                ),
                "-b:v".into(),
                params.bitrate.clone(),
                "-profile:v".into(),
                synthetic.profile.clone(),
                "-pix_fmt".into(),
                synthetic.pixel_format.clone(),
                "-vf".into(),
                format!(
                    r"drawtext=fontsize={}:fontcolor={}:x={}:y={}:text='%{{pts\:hms}} %{{n}}':timecode_rate={}",
                    synthetic.font_size,
                    synthetic.font_color,
                    synthetic.text_x,
                    synthetic.text_y,
                    params.frame_rate
                ),
            ]);
        }
    }

    let transcoder = &config.transcoder;
    args.extend(vec![
        "-c:v".into(),
        transcoder.video_codec.clone(),
        "-c:a".into(),
        transcoder.audio_codec.clone(),
        "-f".into(),
        transcoder.format.clone(),
        params.destination_url.clone(),
    ]);

    CommandLine {
        program: transcoder.program.clone(),
        args,
    }
}
