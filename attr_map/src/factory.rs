//! Default-value factories for missing keys.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::Error as _};

use crate::{Key, Value};

type Callback = Rc<dyn Fn(Option<&Key>) -> Value>;

/// Synthesises values for keys that are read but absent.
///
/// When a wrapper configured with a factory is read at a missing key through
/// item, callable or attribute access, the factory produces a value which is
/// stored in the backing mapping and returned. [`crate::AttrMapping::get`]
/// never consults the factory.
///
/// Template factories are serialisable; callback factories are not, and a
/// wrapper holding one fails to serialise.
#[derive(Clone)]
pub enum DefaultFactory {
    /// Produce a deep copy of the template on every call. Never receives the
    /// key.
    Template(Value),
    /// Call a function. It receives `Some(key)` when the wrapper was
    /// configured with `pass_key`, and `None` otherwise.
    Callback(Callback),
}

impl DefaultFactory {
    /// A factory returning copies of `template`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attr_map::{AttrDefault, AttrMapping, DefaultFactory, Value};
    ///
    /// let empty = Value::list(Vec::<Value>::new());
    /// let defaults = AttrDefault::new(Some(DefaultFactory::template(empty)));
    /// assert_eq!(defaults.item("foo")?, Value::list(Vec::<Value>::new()));
    /// assert!(defaults.contains_key("foo"));
    /// # Ok::<_, attr_map::AttrError>(())
    /// ```
    pub fn template(template: impl Into<Value>) -> Self {
        Self::Template(template.into())
    }

    /// A factory backed by `callback`.
    pub fn callback<F>(callback: F) -> Self
    where
        F: Fn(Option<&Key>) -> Value + 'static,
    {
        Self::Callback(Rc::new(callback))
    }

    /// Produce a value for the missing `key`.
    #[must_use]
    pub fn produce(&self, key: &Key, pass_key: bool) -> Value {
        match self {
            Self::Template(template) => template.deep_copy(),
            Self::Callback(callback) => callback(pass_key.then_some(key)),
        }
    }
}

impl PartialEq for DefaultFactory {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Template(left), Self::Template(right)) => left == right,
            (Self::Callback(left), Self::Callback(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Debug for DefaultFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl fmt::Display for DefaultFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Template(template) => write!(f, "{template}"),
            Self::Callback(_) => f.write_str("<callback>"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum FactoryRepr<T> {
    Template(T),
}

impl Serialize for DefaultFactory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Template(template) => FactoryRepr::Template(template).serialize(serializer),
            Self::Callback(_) => Err(S::Error::custom(
                "callback default factories cannot be serialised",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for DefaultFactory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let FactoryRepr::Template(template) = FactoryRepr::<Value>::deserialize(deserializer)?;
        Ok(Self::Template(template))
    }
}
