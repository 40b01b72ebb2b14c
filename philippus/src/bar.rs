use slog::{Logger, debug};

use crate::StdResult;
use crate::foo::Foo;
use crate::logging::LoggerExtensions;

/// Subject built on top of a [Foo] collaborator.
///
/// The foo value is read from the collaborator once, when the `Bar` is created, and never
/// read again: [Bar::get_foo] keeps returning it whatever happens to the collaborator
/// afterwards. Every other operation delegates to the collaborator given to it at call time.
///
/// Errors raised by a collaborator are returned unchanged.
pub struct Bar {
    foo: Option<String>,
    logger: Logger,
}

impl Bar {
    /// Create a new `Bar`, capturing the current foo value of the given collaborator.
    pub fn new(foo: &dyn Foo, logger: Logger) -> StdResult<Self> {
        let logger = logger.new_with_component_name::<Self>();
        let foo = foo.get_foo()?;
        debug!(logger, "Captured foo value"; "foo" => ?foo);

        Ok(Self { foo, logger })
    }

    /// Foo value captured at construction.
    pub fn get_foo(&self) -> Option<&str> {
        self.foo.as_deref()
    }

    /// Qux value of the given collaborator.
    pub fn get_qux(&self, foo: &dyn Foo) -> StdResult<Option<String>> {
        debug!(self.logger, ">> get_qux");
        foo.get_qux()
    }

    /// Ask the given collaborator for the value it derives from `value`.
    pub fn get_provided_foo_value(&self, foo: &dyn Foo, value: &str) -> StdResult<Option<String>> {
        debug!(self.logger, ">> get_provided_foo_value"; "value" => value);
        foo.return_provided_value(value)
    }

    /// Set the foo value of the given collaborator, then read it back from it.
    ///
    /// The value captured by this `Bar` at construction is left untouched.
    pub fn set_and_get_foo(&self, foo: &dyn Foo, value: &str) -> StdResult<Option<String>> {
        debug!(self.logger, ">> set_and_get_foo"; "value" => value);
        foo.set_foo(value)?;
        foo.get_foo()
    }
}
