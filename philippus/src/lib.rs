#![warn(missing_docs)]

//! Test doubles around a small collaboration between two types.
//!
//! Provide:
//! - The [Foo] collaborator trait and its real implementation [InMemoryFoo].
//! - The [Bar] subject, which reads its collaborator once at construction and delegates
//!   every other call to the collaborator it is given.
//! - A hand-written [test double][test::double::FooDouble] that can act as a dummy, a
//!   stub, a fake, a mock, a spy or a partial mock, and a [MockBuilder][test::mock_extensions::MockBuilder]
//!   helper for `mockall` generated mocks.

mod bar;
mod foo;
pub mod logging;

#[cfg(test)]
pub(crate) mod test_tools;

pub use bar::Bar;
pub use foo::{Foo, FooCapability, InMemoryFoo};

#[cfg(test)]
pub(crate) use foo::MockFoo;

/// Generic error type
pub type StdError = anyhow::Error;

/// Generic result type
pub type StdResult<T> = anyhow::Result<T, StdError>;
