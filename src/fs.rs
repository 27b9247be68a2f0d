use anyhow::Result;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub(crate) const DEFAULT_DATA_DIR: &str = "../Data/";

pub(crate) fn expand_home(path: &str) -> Result<String> {
    let expanded_path = if let Some(rest) = path.strip_prefix("~/") {
        let home = env::var("HOME")?;
        PathBuf::from(home).join(rest).to_string_lossy().into_owned()
    } else {
        path.to_string()
    };
    Ok(expanded_path)
}

/// Joins the data directory and the requested filename as plain strings.
///
/// The filename is not normalized: `..` segments and absolute-looking names are
/// carried through as given, and so are bytes that are not UTF-8.
pub(crate) fn data_file_path(data_dir: &str, filename: &OsStr) -> PathBuf {
    let mut joined = OsString::with_capacity(data_dir.len() + filename.len() + 1);
    joined.push(data_dir);
    if !data_dir.is_empty() && !data_dir.ends_with('/') {
        joined.push("/");
    }
    joined.push(filename);
    PathBuf::from(joined)
}
