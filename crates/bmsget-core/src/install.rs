//! Installing downloaded payloads into the songs directory.

use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Component, Path, PathBuf};

use encoding_rs::SHIFT_JIS;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fetch::Payload;

const ZIP_CONTENT_TYPES: [&str; 2] = ["application/zip", "application/x-zip-compressed"];

/// Install a downloaded payload into `dest_dir`, dispatching on the
/// declared content type. Returns the path of whatever was created.
///
/// - zip: extract through a temporary directory inside `dest_dir`; an
///   archive with exactly one top-level entry is flattened one level,
///   anything else lands in a directory named from `name_hint`.
/// - octet-stream: written as a single file named from `name_hint`.
/// - anything else (including rar, which has no backend here) is an
///   `UnsupportedContentType` error.
pub fn install_payload(payload: &Payload, dest_dir: &Path, name_hint: &str) -> Result<PathBuf> {
    fs::create_dir_all(dest_dir)?;

    let content_type = payload.content_type.as_str();
    if ZIP_CONTENT_TYPES.contains(&content_type) {
        install_zip(&payload.bytes, dest_dir, name_hint)
    } else if content_type == "application/octet-stream" {
        let file_name = Path::new(name_hint)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("download");
        let target = dest_dir.join(file_name);
        fs::write(&target, &payload.bytes)?;
        info!("wrote {:?}", target);
        Ok(target)
    } else {
        Err(Error::UnsupportedContentType(content_type.to_string()))
    }
}

/// Extract a zip archive. The temporary extraction directory lives
/// inside `dest_dir` so the final move is a cheap rename; it is removed
/// on every failure path and the original error propagates unchanged.
fn install_zip(bytes: &[u8], dest_dir: &Path, name_hint: &str) -> Result<PathBuf> {
    let temp = tempfile::Builder::new()
        .prefix(".bmsget-")
        .tempdir_in(dest_dir)?;

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = decode_entry_name(file.name_raw());
        let relative = safe_entry_path(&name)?;
        let out_path = temp.path().join(relative);

        if file.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&out_path)?;
        io::copy(&mut file, &mut out)?;
    }

    let mut top_level: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(temp.path())? {
        top_level.push(entry?.path());
    }

    if let [only] = top_level.as_slice() {
        // Single top-level entry: lift it out and drop the temp dir
        let file_name = only
            .file_name()
            .ok_or_else(|| Error::Archive("nameless archive entry".to_string()))?;
        let target = dest_dir.join(file_name);
        fs::rename(only, &target)?;
        debug!("flattened single-entry archive into {:?}", target);
        return Ok(target);
    }

    // Multiple entries: the temp dir itself becomes the song directory
    let target = dest_dir.join(sanitize_name(name_hint));
    let temp_path = temp.keep();
    if let Err(e) = fs::rename(&temp_path, &target) {
        let _ = fs::remove_dir_all(&temp_path);
        return Err(e.into());
    }
    debug!("installed archive as {:?}", target);
    Ok(target)
}

/// Zip entry names are raw bytes. UTF-8 is taken as-is; everything else
/// is decoded as Shift-JIS, the code page BMS archives are written with.
fn decode_entry_name(raw: &[u8]) -> String {
    match std::str::from_utf8(raw) {
        Ok(s) => s.to_string(),
        Err(_) => SHIFT_JIS.decode(raw).0.into_owned(),
    }
}

/// Reject entry paths that would escape the extraction directory.
fn safe_entry_path(name: &str) -> Result<PathBuf> {
    let mut path = PathBuf::new();
    for component in Path::new(name).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            _ => {
                return Err(Error::Archive(format!("unsafe entry path: {}", name)));
            }
        }
    }
    Ok(path)
}

/// Derive a filesystem name from an archive name or song title. The
/// extension is dropped and path separators are squashed.
fn sanitize_name(hint: &str) -> String {
    let base = Path::new(hint)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(hint);
    let stem = match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.len() <= 4 => stem,
        _ => base,
    };
    let cleaned: String = stem
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}

/// Guess a content type label for `install`ing a local file, from its
/// extension alone.
pub fn guess_content_type(path: &Path) -> Option<&'static str> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("zip") => Some("application/zip"),
        Some("rar") => Some("application/vnd.rar"),
        _ => None,
    }
}

/// Read a local file into a payload with a guessed content type.
pub fn read_local_payload(path: &Path) -> Result<Payload> {
    let content_type = guess_content_type(path)
        .ok_or_else(|| {
            Error::UnsupportedContentType(format!("cannot guess content type of {:?}", path))
        })?
        .to_string();
    let mut bytes = Vec::new();
    fs::File::open(path)?.read_to_end(&mut bytes)?;
    Ok(Payload {
        content_type,
        bytes,
    })
}
