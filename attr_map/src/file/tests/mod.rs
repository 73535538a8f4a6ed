//! Loader coverage: decoding, merging and error routing.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::json;
use test_helpers::ConfigDir;

use super::{Format, LoadOptions, load, load_layers};
use crate::{AttrError, AttrMapping, Node, SequenceKind, Value};


#[rstest]
fn no_paths_yield_an_empty_mapping() -> Result<()> {
    let config = load(Vec::<&str>::new(), &LoadOptions::default())?;
    ensure!(config.is_empty());
    Ok(())
}

#[rstest]
fn later_files_win() -> Result<()> {
    let dir = ConfigDir::new()?;
    let first = dir.write("first.json", r#"{"a": {"x": 1, "y": 2}, "list": [1, 2]}"#)?;
    let second = dir.write("second.json", r#"{"a": {"y": 3}, "b": true}"#)?;

    let config = load([&first, &second], &LoadOptions::default())?;
    ensure!(
        config.mapping().to_json() == json!({"a": {"x": 1, "y": 3}, "list": [1, 2], "b": true})
    );
    let list = config.attr("list")?;
    ensure!(list.as_sequence().map(|(kind, _)| kind) == Some(SequenceKind::Tuple));
    Ok(())
}

#[rstest]
fn sequence_type_option_reaches_the_result() -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write("config.json", r#"{"list": [{"id": 1}]}"#)?;
    let options = LoadOptions::from_options([("sequence_type", json!("list"))])?;
    let config = load([&path], &options)?;
    ensure!(config.sequence_type() == Some(SequenceKind::List));
    let list = config.attr("list")?;
    let first = list.index(0).and_then(Node::as_map);
    ensure!(first.map(|item| item.item("id")).transpose()? == Some(Value::Int(1)));
    Ok(())
}

#[cfg(feature = "toml")]
#[rstest]
fn toml_is_picked_by_extension() -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write("config.toml", "[server]\nport = 8080\n")?;
    let config = load([&path], &LoadOptions::default())?;
    ensure!(config.attr("server")?.attr("port")? == Value::Int(8080));
    Ok(())
}

#[rstest]
fn custom_decoders_take_precedence() -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write("config.toml", "name=demo\n")?;
    let options = LoadOptions::new().with_decoder(|_, data| {
        let (key, value) = data.trim().split_once('=').unwrap_or((data, ""));
        Ok(json!({ key: value }))
    });
    let config = load([&path], &options)?;
    ensure!(config.item("name")? == "demo");
    Ok(())
}

#[rstest]
fn explicit_format_overrides_extension() -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write("config.conf", r#"{"a": 1}"#)?;
    let layers = load_layers([&path], &LoadOptions::new().with_format(Format::Json))?;
    ensure!(layers.len() == 1);
    ensure!(layers.first().map(|layer| layer.path.clone()) == Some(path));
    Ok(())
}

#[rstest]
#[case::array("list.json", "[1, 2]")]
#[case::scalar("scalar.json", "3")]
fn non_mapping_documents_are_rejected(#[case] name: &str, #[case] contents: &str) -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write(name, contents)?;
    let err = load([&path], &LoadOptions::default()).expect_err("document is not a mapping");
    let AttrError::File { path: reported, source } = &err else {
        anyhow::bail!("expected a file error, got {err}");
    };
    ensure!(reported.as_path() == path.as_std_path());
    ensure!(source.to_string().starts_with("expected a mapping"));
    Ok(())
}

#[rstest]
fn malformed_documents_name_the_file() -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write("broken.json", "{")?;
    let err = load([&path], &LoadOptions::default()).expect_err("document is malformed");
    ensure!(err.to_string().contains("broken.json"), "{err}");
    ensure!(err.to_string().contains("JSON error"), "{err}");
    Ok(())
}

#[cfg(feature = "toml")]
#[rstest]
fn malformed_toml_is_a_file_error() -> Result<()> {
    let dir = ConfigDir::new()?;
    let path = dir.write("broken.toml", "name = ")?;
    let err = load([&path], &LoadOptions::default()).expect_err("document is malformed");
    let AttrError::File { path: reported, .. } = &err else {
        anyhow::bail!("expected a file error, got {err}");
    };
    ensure!(reported.as_path() == path.as_std_path());
    Ok(())
}

#[rstest]
fn missing_files_are_file_errors() -> Result<()> {
    let dir = ConfigDir::new()?;
    let err = load([dir.join("absent.json")], &LoadOptions::default())
        .expect_err("file does not exist");
    ensure!(matches!(err, AttrError::File { .. }));
    Ok(())
}
