use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::error::{EdugenError, Result};

/// Pick the learning material: a `.txt` file wins over pasted text.
///
/// Returns `None` when neither source has any non-whitespace content.
pub async fn load_content(file: Option<&Path>, text: Option<&str>) -> Result<Option<String>> {
    let content = match file {
        Some(path) => Some(read_text_file(path).await?),
        None => text.map(str::to_string),
    };

    Ok(content.filter(|c| !c.trim().is_empty()))
}

async fn read_text_file(path: &Path) -> Result<String> {
    let is_txt = path
        .extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("txt"));
    if !is_txt {
        return Err(EdugenError::UnsupportedInput {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read learning material");

    String::from_utf8(bytes).map_err(|_| EdugenError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
