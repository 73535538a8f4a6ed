//! Mutation through item and attribute syntax on every mutable wrapper.

mod common;

use anyhow::{Result, ensure};
use attr_map::{
    AttrDefault, AttrDict, AttrError, AttrMap, AttrMapping, Key, Mapping, MutableAttrMapping,
    Value,
};
use common::sample;
use rstest::rstest;

fn check_create_and_delete<W: MutableAttrMapping>(mut wrapper: W) -> Result<()> {
    wrapper.set_attr("created", "by attribute")?;
    wrapper.set_item("also", "by item");
    ensure!(wrapper.attr("also")? == "by item");
    ensure!(wrapper.item("created")? == "by attribute");

    wrapper.set_item("foo", "overwritten");
    ensure!(wrapper.attr("foo")? == "overwritten");

    wrapper.del_attr("created")?;
    wrapper.del_item("also")?;
    ensure!(wrapper.attr("created").is_err() && wrapper.item("also").is_err());

    // Keys that are not attribute-safe are still writable through items.
    wrapper.set_item("get", "still an item");
    ensure!(wrapper.item("get")? == "still an item");
    ensure!(wrapper.set_attr("get", 1).is_err_and(|err| err.is_type_error()));
    ensure!(wrapper.del_attr("get").is_err_and(|err| err.is_type_error()));
    wrapper.del_item("get")?;
    ensure!(!wrapper.contains_key("get"));
    Ok(())
}

fn check_derived_operations<W: MutableAttrMapping>(mut wrapper: W) -> Result<()> {
    ensure!(wrapper.pop("foo")? == "bar");
    ensure!(wrapper.attr("foo").is_err());
    ensure!(wrapper.pop("foo").is_err_and(|err| err.is_lookup_error()));
    ensure!(wrapper.pop_or("foo", "fallback") == "fallback");

    let (key, value) = wrapper.popitem()?;
    ensure!(key == Key::from("bytes"));
    ensure!(value == Value::Bytes(b"raw".to_vec()));

    wrapper.update(&Mapping::from_pairs([("fresh", Value::from(1)), ("lorem", Value::Null)]));
    ensure!(wrapper.attr("fresh")?.to_value() == Value::Int(1));
    ensure!(wrapper.item("lorem")?.is_null());

    wrapper.update_pairs([("paired", true)]);
    ensure!(wrapper.attr("paired")?.to_value() == Value::Bool(true));

    ensure!(wrapper.setdefault("paired", false) == Value::Bool(true));
    ensure!(wrapper.setdefault("defaulted", "set") == "set");
    ensure!(wrapper.attr("defaulted")? == "set");

    wrapper.clear();
    ensure!(wrapper.is_empty());
    ensure!(wrapper.attr("paired").is_err());
    ensure!(matches!(wrapper.popitem(), Err(AttrError::EmptyMapping)));
    Ok(())
}

fn check_writes_reach_the_backing_mapping<W: MutableAttrMapping>(
    mut wrapper: W,
    backing: &Mapping,
) -> Result<()> {
    wrapper.set_attr("shared", 1)?;
    ensure!(backing.contains_key(&Key::from("shared")));

    let Some(mut lorem) = wrapper.attr("lorem")?.into_map() else {
        anyhow::bail!("expected nested wrapper");
    };
    lorem.set_attr("nested", 2)?;
    let Some(Value::Map(raw)) = backing.get(&Key::from("lorem")) else {
        anyhow::bail!("expected nested mapping");
    };
    ensure!(raw.get(&Key::from("nested")) == Some(Value::Int(2)));
    Ok(())
}

#[rstest]
fn attr_map_mutation(sample: Mapping) -> Result<()> {
    check_create_and_delete(AttrMap::new(sample.deep_copy()))?;
    check_derived_operations(AttrMap::new(sample.deep_copy()))?;
    check_writes_reach_the_backing_mapping(AttrMap::new(sample.clone()), &sample)
}

#[rstest]
fn attr_dict_mutation(sample: Mapping) -> Result<()> {
    check_create_and_delete(AttrDict::new(sample.deep_copy()))?;
    check_derived_operations(AttrDict::new(sample.deep_copy()))?;
    check_writes_reach_the_backing_mapping(AttrDict::new(sample.clone()), &sample)
}

#[rstest]
fn attr_default_mutation(sample: Mapping) -> Result<()> {
    let wrap = |mapping: Mapping| AttrDefault::new(None).with_mapping(mapping);
    check_create_and_delete(wrap(sample.deep_copy()))?;
    check_derived_operations(wrap(sample.deep_copy()))?;
    check_writes_reach_the_backing_mapping(wrap(sample.clone()), &sample)
}

#[rstest]
fn private_attributes_are_opt_in(sample: Mapping) -> Result<()> {
    let mut dict = AttrDict::new(sample);
    ensure!(dict.set_attr("_bookkeeping", 1).is_err());

    dict.set_allow_invalid_attributes(true);
    dict.set_attr("_bookkeeping", 1)?;
    ensure!(dict.attr("_bookkeeping")?.to_value() == Value::Int(1));
    // The key of the same name in the mapping is untouched.
    ensure!(dict.item("_private")? == Value::Int(1));
    ensure!(!dict.contains_key("_bookkeeping"));

    ensure!(dict.force_remove_attribute("_bookkeeping") == Some(Value::Int(1)));
    ensure!(dict.force_remove_attribute("_bookkeeping").is_none());
    Ok(())
}

#[test]
fn from_keys_copies_the_value_per_key() -> Result<()> {
    let dict = AttrDict::from_keys(["a", "b"], Value::map([("x", 1)]));
    let Value::Map(a) = dict.item("a")? else {
        anyhow::bail!("expected mapping");
    };
    a.insert("y", 2);
    ensure!(dict.attr("b")?.attr("y").is_err());
    Ok(())
}
