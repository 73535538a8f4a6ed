//! The concrete wrapper types.
//!
//! | Type          | Mutable | Default factory |
//! |---------------|---------|-----------------|
//! | [`Attr`]        | no      | no              |
//! | [`AttrMap`]     | yes     | no              |
//! | [`AttrDict`]    | yes     | optional        |
//! | [`AttrDefault`] | yes     | yes             |

macro_rules! wrapper_common {
    ($name:ident) => {
        impl $crate::merge::AsMapping for $name {
            fn as_mapping(&self) -> &$crate::Mapping {
                $crate::AttrMapping::mapping(self)
            }

            fn wrap_config(&self) -> Option<&$crate::WrapConfig> {
                Some($crate::AttrMapping::config(self))
            }
        }

        impl From<$crate::Mapping> for $name {
            fn from(mapping: $crate::Mapping) -> Self {
                <Self as $crate::AttrMapping>::construct(mapping, $crate::WrapConfig::default())
            }
        }

        impl TryFrom<serde_json::Value> for $name {
            type Error = $crate::AttrError;

            fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
                $crate::Mapping::try_from(value).map(Self::from)
            }
        }

        // Any wrapper or plain mapping compares by items.
        impl<M: $crate::merge::AsMapping + ?Sized> PartialEq<M> for $name {
            fn eq(&self, other: &M) -> bool {
                self.slots.mapping() == $crate::merge::AsMapping::as_mapping(other)
            }
        }

        impl PartialEq<$name> for $crate::Mapping {
            fn eq(&self, other: &$name) -> bool {
                self == other.slots.mapping()
            }
        }

        impl PartialEq<$crate::Value> for $name {
            fn eq(&self, other: &$crate::Value) -> bool {
                other.as_mapping() == Some(self.slots.mapping())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&$crate::AttrMapping::state(self), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <$crate::WrapperState as serde::Deserialize>::deserialize(deserializer)
                    .map(<Self as $crate::AttrMapping>::from_state)
            }
        }

        impl<R: $crate::merge::AsMapping + ?Sized> std::ops::Add<&R> for &$name {
            type Output = $name;

            fn add(self, rhs: &R) -> $name {
                $crate::AttrMapping::merged(self, rhs)
            }
        }

        impl<R: $crate::merge::AsMapping> std::ops::Add<R> for $name {
            type Output = Self;

            fn add(self, rhs: R) -> Self {
                $crate::AttrMapping::merged(&self, &rhs)
            }
        }

        impl std::ops::Add<&$name> for &$crate::Mapping {
            type Output = $name;

            fn add(self, rhs: &$name) -> $name {
                $crate::AttrMapping::merged_into(rhs, self)
            }
        }

        impl std::ops::Add<$name> for $crate::Mapping {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $crate::AttrMapping::merged_into(&rhs, &self)
            }
        }
    };
}

mod default;
mod dict;
mod map;
mod read_only;

pub use default::AttrDefault;
pub use dict::AttrDict;
pub use map::AttrMap;
pub use read_only::Attr;

#[cfg(test)]
mod tests;
