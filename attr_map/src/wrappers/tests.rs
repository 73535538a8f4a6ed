//! Unit tests for the wrapper types.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::{AttrMapping, DefaultFactory, Mapping, MutableAttrMapping, SequenceKind, Value};

#[test]
fn renders_with_type_specific_prefixes() -> Result<()> {
    let mapping = Mapping::from_pairs([("foo", "bar")]);
    ensure!(Attr::new(mapping.clone()).to_string() == r#"a{"foo": "bar"}"#);
    ensure!(AttrMap::new(mapping.clone()).to_string() == r#"a{"foo": "bar"}"#);
    ensure!(AttrDict::new(mapping.clone()).to_string() == r#"AttrDict({"foo": "bar"})"#);
    let defaults = AttrDefault::new(None).with_mapping(mapping);
    ensure!(defaults.to_string() == r#"AttrDefault(None, false, {"foo": "bar"})"#);
    Ok(())
}

#[test]
fn template_factory_renders_its_template() {
    let defaults = AttrDefault::new(Some(DefaultFactory::template(Value::list([1]))));
    assert_eq!(defaults.to_string(), "AttrDefault([1], false, {})");
}

#[rstest]
#[case::attr(Attr::is_valid_name("copy"), true)]
#[case::attr_map(AttrMap::is_valid_name("copy"), true)]
#[case::attr_dict(AttrDict::is_valid_name("copy"), false)]
#[case::attr_default(AttrDefault::is_valid_name("copy"), true)]
fn copy_is_only_reserved_where_defined(#[case] valid: bool, #[case] expected: bool) {
    assert_eq!(valid, expected);
}

#[test]
fn mutable_names_are_reserved_on_mutable_types_only() {
    assert!(Attr::is_valid_name("pop"));
    assert!(!AttrMap::is_valid_name("pop"));
    assert!(!AttrDefault::is_valid_name("pop"));
    assert!(!AttrDefault::is_valid_name("pass_key"));
}

#[test]
fn addition_keeps_the_left_type_and_configuration() -> Result<()> {
    let left = AttrMap::try_from(json!({"a": {"x": 1}, "l": [1]}))?
        .with_sequence_type(Some(SequenceKind::List));
    let right = Mapping::try_from(json!({"a": {"y": 2}}))?;

    let sum = &left + &right;
    ensure!(sum.sequence_type() == Some(SequenceKind::List));
    ensure!(sum.mapping().to_json() == json!({"a": {"x": 1, "y": 2}, "l": [1]}));

    let reversed = &right + &left;
    ensure!(reversed.sequence_type() == Some(SequenceKind::List));
    Ok(())
}

#[test]
fn addition_of_mismatched_wrappers_falls_back_to_tuples() -> Result<()> {
    let lists = Attr::try_from(json!({"a": 1}))?.with_sequence_type(Some(SequenceKind::List));
    let tuples = Attr::try_from(json!({"b": 2}))?;
    ensure!((&lists + &tuples).sequence_type() == Some(SequenceKind::Tuple));
    ensure!((lists.clone() + lists).sequence_type() == Some(SequenceKind::List));
    Ok(())
}

#[test]
fn addition_rejects_non_mappings() {
    let dict = AttrDict::default();
    let err = dict
        .checked_add(&Value::from("string"))
        .expect_err("strings are not mappings");
    assert!(err.is_type_error());
    assert_eq!(
        err.to_string(),
        "unsupported operand type(s) for +: 'AttrDict' and 'str'"
    );
    let err = dict
        .checked_radd(&Value::list([1]))
        .expect_err("lists are not mappings");
    assert!(err.is_type_error());
}

#[test]
fn copy_detaches_the_top_level_only() -> Result<()> {
    let original = AttrDict::try_from(json!({"sub": {"a": 1}}))?;
    let mut copy = original.copy();
    copy.set_item("new", 1);
    ensure!(!original.contains_key("new"));

    let Some(mut sub) = copy.attr("sub")?.into_map() else {
        anyhow::bail!("expected nested wrapper");
    };
    sub.set_item("b", 2);
    ensure!(original.attr("sub")?.attr("b")? == Value::Int(2));
    Ok(())
}

#[test]
fn clones_share_and_deep_copies_do_not() -> Result<()> {
    let original = AttrDict::try_from(json!({"sub": {"a": 1}}))?;
    let mut shallow = original.clone();
    let deep = original.deep_copy();
    shallow.set_item("shared", true);
    ensure!(original.contains_key("shared"));
    ensure!(!deep.contains_key("shared"));
    Ok(())
}

#[test]
fn wrappers_compare_equal_to_plain_mappings() -> Result<()> {
    let mapping = Mapping::try_from(json!({"a": [1, 2]}))?;
    let dict = AttrDict::new(mapping.deep_copy());
    ensure!(dict == mapping);
    ensure!(mapping == dict);
    ensure!(dict == Value::Map(mapping));
    ensure!(dict != Value::from("a"));
    Ok(())
}

#[test]
fn different_wrapper_types_compare_by_items() -> Result<()> {
    let mapping = Mapping::try_from(json!({"a": {"b": 1}}))?;
    let attr = Attr::new(mapping.deep_copy()).with_sequence_type(None);
    let dict = AttrDict::new(mapping.deep_copy());
    let defaults = AttrDefault::new(Some(DefaultFactory::template(0))).with_mapping(mapping);
    ensure!(attr == dict);
    ensure!(dict == defaults);
    ensure!(defaults == AttrMap::new(dict.mapping().deep_copy()));
    ensure!(attr != AttrDict::default());
    Ok(())
}

#[test]
fn serde_round_trip_goes_through_state() -> Result<()> {
    let dict = AttrDict::try_from(json!({"a": [1, {"b": null}]}))?
        .with_default_factory(DefaultFactory::template(0), true);
    let text = serde_json::to_string(&dict)?;
    let back: AttrDict = serde_json::from_str(&text)?;
    ensure!(back == dict);
    ensure!(back.config() == dict.config());
    Ok(())
}
