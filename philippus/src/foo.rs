use std::sync::RwLock;

use anyhow::anyhow;
use strum::{Display, EnumIter, EnumString};

use crate::StdResult;

/// The collaborator consumed by [Bar][crate::Bar].
#[cfg_attr(test, mockall::automock)]
pub trait Foo: Send + Sync {
    /// Get the foo value.
    fn get_foo(&self) -> StdResult<Option<String>>;

    /// Get the qux value.
    fn get_qux(&self) -> StdResult<Option<String>>;

    /// Return a value computed from the given one.
    fn return_provided_value(&self, value: &str) -> StdResult<Option<String>>;

    /// Replace the foo value.
    fn set_foo(&self, value: &str) -> StdResult<()>;
}

/// Names of the capabilities declared by [Foo].
///
/// Parsing a name that is not declared by [Foo] fails, which is what allows a double to
/// refuse configuring an unknown method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FooCapability {
    /// [Foo::get_foo]
    GetFoo,
    /// [Foo::get_qux]
    GetQux,
    /// [Foo::return_provided_value]
    ReturnProvidedValue,
    /// [Foo::set_foo]
    SetFoo,
}

/// Real [Foo] implementation keeping its foo value in memory.
pub struct InMemoryFoo {
    foo: RwLock<Option<String>>,
}

impl InMemoryFoo {
    /// Value always returned by [Foo::get_qux].
    pub const QUX: &'static str = "qux";

    /// [InMemoryFoo] factory
    pub fn new(foo: Option<String>) -> Self {
        Self {
            foo: RwLock::new(foo),
        }
    }
}

impl Default for InMemoryFoo {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Foo for InMemoryFoo {
    fn get_foo(&self) -> StdResult<Option<String>> {
        let foo = self
            .foo
            .read()
            .map_err(|e| anyhow!("InMemoryFoo lock is poisoned: {e}"))?;

        Ok(foo.clone())
    }

    fn get_qux(&self) -> StdResult<Option<String>> {
        Ok(Some(Self::QUX.to_string()))
    }

    fn return_provided_value(&self, value: &str) -> StdResult<Option<String>> {
        Ok(Some(value.to_string()))
    }

    fn set_foo(&self, value: &str) -> StdResult<()> {
        let mut foo = self
            .foo
            .write()
            .map_err(|e| anyhow!("InMemoryFoo lock is poisoned: {e}"))?;
        *foo = Some(value.to_string());

        Ok(())
    }
}
