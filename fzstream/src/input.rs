use crate::error::{Error, NoFileCause};
use crate::selector::Selector;

const FILE: &str = "file";
const LAVFI: &str = "lavfi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDescriptor {
    File { path: std::path::PathBuf },
    Synthetic,
}

impl std::fmt::Display for InputDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InputDescriptor::File { path } => write!(f, "file {}", path.display()),
            InputDescriptor::Synthetic => f.write_str("lavfi test source"),
        }
    }
}

/// Asks for the input type and, for `file`, which media file in `dir`.
pub async fn resolve_input(
    selector: &Selector,
    menu: &crate::MenuConfig,
    dir: &std::path::Path,
) -> Result<InputDescriptor, Error> {
    let input_type = selector.choose("Select input type: ", &[FILE, LAVFI]).await?;
    match input_type.as_str() {
        FILE => select_file(selector, menu, dir).await,
        LAVFI => Ok(InputDescriptor::Synthetic),
        _ => Err(Error::InvalidSelection {
            prompt: "Select input type: ".to_owned(),
            value: input_type,
        }),
    }
}

async fn select_file(
    selector: &Selector,
    menu: &crate::MenuConfig,
    dir: &std::path::Path,
) -> Result<InputDescriptor, Error> {
    let no_file = |source| Error::NoFileSelected {
        dir: dir.to_path_buf(),
        source,
    };

    let names = list_media_files(dir, &menu.media_extensions)
        .map_err(|e| no_file(NoFileCause::ListDir(e)))?;
    if names.is_empty() {
        return Err(no_file(NoFileCause::Empty));
    }

    match selector.choose("Select file: ", &names).await {
        Ok(name) => Ok(InputDescriptor::File {
            path: media_path(dir, name),
        }),
        Err(Error::SelectionFailed { source, .. }) => Err(no_file(NoFileCause::Selection(source))),
        Err(e) => Err(e),
    }
}

// Files in the working directory are passed by bare name, as `ls` prints them.
fn media_path(dir: &std::path::Path, name: String) -> std::path::PathBuf {
    if dir == std::path::Path::new(".") {
        std::path::PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// Names of the regular, non-hidden files in `dir` whose extension is one of
/// `extensions` (case-sensitive), sorted.
pub fn list_media_files<S>(dir: &std::path::Path, extensions: &[S]) -> Result<Vec<String>, std::io::Error>
where
    S: AsRef<str>,
{
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matched = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| extensions.iter().any(|e| e.as_ref() == ext));
        if !matched {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) if name.starts_with('.') => {}
            Ok(name) => names.push(name),
            Err(name) => log::warn!("skipping non UTF-8 file name {:?}", name),
        }
    }
    names.sort();
    Ok(names)
}
