//! Runtime loading entrypoints for configuration files.

use std::path::Path;

use camino::Utf8PathBuf;
use tracing::debug;

use super::error::file_error;
use super::options::{Format, LoadOptions};
use super::parser::parse;
use crate::{AttrDict, AttrResult, AttrResultExt, Mapping, WrapConfig, merge_all};

/// One decoded configuration file.
#[derive(Debug, Clone)]
pub struct FileLayer {
    /// Where the layer was read from.
    pub path: Utf8PathBuf,
    /// The decoded document.
    pub mapping: Mapping,
}

/// Convert a path to UTF-8, falling back to lossy conversion.
fn to_utf8_path(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

fn decode_file(path: &Path, options: &LoadOptions) -> AttrResult<Mapping> {
    let data = std::fs::read_to_string(path).map_err(|e| file_error(path, e))?;
    let value = match &options.decoder {
        Some(decoder) => decoder(path, &data),
        None => parse(
            options.format.unwrap_or_else(|| Format::from_path(path)),
            &data,
        ),
    }
    .in_file(path)?;
    Mapping::try_from(value).in_file(path)
}

/// Read and decode each file in order, without merging.
///
/// # Errors
///
/// Returns an [`crate::AttrError::File`] naming the offending path when a
/// file cannot be read or decoded, or when its document is not a mapping.
pub fn load_layers<I, P>(paths: I, options: &LoadOptions) -> AttrResult<Vec<FileLayer>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .map(|path| {
            let path = path.as_ref();
            let mapping = decode_file(path, options)?;
            debug!(path = %path.display(), keys = mapping.len(), "loaded configuration file");
            Ok(FileLayer {
                path: to_utf8_path(path),
                mapping,
            })
        })
        .collect()
}

/// Load `paths` in order and merge them, later files winning.
///
/// No paths yield an empty [`AttrDict`]. The result rebuilds sequences into
/// [`LoadOptions::sequence_type`].
///
/// # Examples
///
/// ```rust,no_run
/// use attr_map::{AttrMapping, LoadOptions, load};
///
/// # fn run() -> attr_map::AttrResult<()> {
/// let config = load(["defaults.json", "local.toml"], &LoadOptions::default())?;
/// let port = config.attr("server")?.attr("port")?;
/// println!("port = {}", port.to_value());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an [`crate::AttrError::File`] naming the offending path when a
/// file cannot be read or decoded, or when its document is not a mapping.
pub fn load<I, P>(paths: I, options: &LoadOptions) -> AttrResult<AttrDict>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let layers = load_layers(paths, options)?;
    let config = WrapConfig::new().with_sequence_type(options.sequence_type);
    Ok(merge_all(layers.into_iter().map(|layer| layer.mapping)).with_config(config))
}
