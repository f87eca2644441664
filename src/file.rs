// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::config::OutputOptions;
use crate::error::{Result, ScrapeError};
use crate::model::Card;

/// Serialize cards as a JSON array according to `out`.
pub fn to_json(cards: &[Card], out: &OutputOptions) -> Result<String> {
    let mut value = serde_json::to_value(cards)?;
    if out.omit_null {
        strip_nulls(&mut value);
    }
    let text = if out.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Write cards to `out.path`, creating parent directories as needed.
/// Returns the path written to.
pub fn write_cards(cards: &[Card], out: &OutputOptions) -> Result<PathBuf> {
    let path = out.path.clone();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_json(cards, out)?;
    fs::write(&path, contents).map_err(|source| io_err(&path, source))?;
    logd!("Wrote {} card(s) to {}", cards.len(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| io_err(dir, source))
}

/* ---------- helpers ---------- */

/// Drop `null` object members at every depth. Array elements stay put.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

fn io_err(path: &Path, source: std::io::Error) -> ScrapeError {
    ScrapeError::Io { path: path.to_path_buf(), source }
}
