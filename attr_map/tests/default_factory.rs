//! Default-factory synthesis for missing keys.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Result, ensure};
use attr_map::{
    AttrDefault, AttrDict, AttrMapping, DefaultFactory, Key, MutableAttrMapping, SequenceKind,
    Value,
};
use rstest::rstest;

fn counting_factory() -> (DefaultFactory, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let factory = DefaultFactory::callback(move |_| {
        seen.set(seen.get() + 1);
        Value::list(Vec::<Value>::new())
    });
    (factory, calls)
}

#[test]
fn item_access_synthesises_and_stores() -> Result<()> {
    let (factory, calls) = counting_factory();
    let defaults = AttrDefault::new(Some(factory));
    ensure!(defaults.item("foo")? == Value::list(Vec::<Value>::new()));
    ensure!(defaults.contains_key("foo"));
    ensure!(defaults.item("foo")?.as_slice().is_some());
    ensure!(calls.get() == 1, "stored values are not synthesised again");
    Ok(())
}

#[rstest]
#[case::attribute(true)]
#[case::callable(false)]
fn wrapped_access_synthesises_and_wraps(#[case] by_attribute: bool) -> Result<()> {
    let defaults =
        AttrDefault::new(Some(DefaultFactory::template(Value::map(Vec::<(Key, Value)>::new()))));
    let node = if by_attribute {
        defaults.attr("nested")?
    } else {
        defaults.call("nested")?
    };
    let Some(mut nested) = node.into_map() else {
        anyhow::bail!("synthesised mappings are wrapped");
    };
    nested.set_attr("inner", 1)?;
    ensure!(defaults.attr("nested")?.attr("inner")?.to_value() == Value::Int(1));
    Ok(())
}

#[test]
fn get_never_synthesises() {
    let (factory, calls) = counting_factory();
    let defaults = AttrDefault::new(Some(factory));
    assert!(defaults.get("foo").is_none());
    assert!(!defaults.contains_key("foo"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn pop_and_setdefault_ignore_the_factory() -> Result<()> {
    let (factory, calls) = counting_factory();
    let mut defaults = AttrDefault::new(Some(factory));
    ensure!(defaults.pop("foo").is_err());
    ensure!(defaults.setdefault("foo", 1) == Value::Int(1));
    ensure!(calls.get() == 0);
    Ok(())
}

#[test]
fn unsafe_attribute_names_are_not_synthesised() {
    let (factory, calls) = counting_factory();
    let defaults = AttrDefault::new(Some(factory));
    assert!(defaults.attr("_hidden").is_err());
    assert!(defaults.attr("get").is_err());
    assert_eq!(calls.get(), 0);
}

#[rstest]
#[case::with_key(true, Value::from("missing"))]
#[case::without_key(false, Value::Null)]
fn pass_key_controls_the_argument(#[case] pass_key: bool, #[case] expected: Value) -> Result<()> {
    let factory = DefaultFactory::callback(|key| Value::from(key.map(Key::label)));
    let defaults = AttrDefault::new(Some(factory)).with_pass_key(pass_key);
    ensure!(defaults.item("missing")? == expected);
    Ok(())
}

#[test]
fn nested_wrappers_inherit_the_factory() -> Result<()> {
    let defaults = AttrDefault::new(Some(DefaultFactory::template(0)))
        .with_items([("sub", Value::map([("a", 1)]))])
        .with_sequence_type(Some(SequenceKind::List));
    let sub = defaults.attr("sub")?;
    ensure!(sub.attr("unset")?.to_value() == Value::Int(0));
    let Some(sub) = sub.as_map() else {
        anyhow::bail!("expected nested wrapper");
    };
    ensure!(sub.sequence_type() == Some(SequenceKind::List));
    ensure!(sub.default_factory() == defaults.default_factory());
    Ok(())
}

#[test]
fn no_factory_behaves_like_a_plain_mapping() {
    let defaults = AttrDefault::new(None);
    assert!(defaults.item("foo").is_err_and(|err| err.is_lookup_error()));
    assert!(defaults.attr("foo").is_err_and(|err| err.is_attribute_error()));
}

#[test]
fn attr_dict_accepts_an_optional_factory() -> Result<()> {
    let dict = AttrDict::default().with_default_factory(DefaultFactory::template("x"), false);
    ensure!(dict.attr("anything")? == "x");
    ensure!(AttrDict::default().attr("anything").is_err());
    Ok(())
}
