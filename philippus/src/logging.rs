//! Logging helpers shared by the components of this crate.

use slog::Logger;

/// Extension trait for `slog::Logger`
pub trait LoggerExtensions {
    /// Derive a child logger whose `src` key is the short name of the type `T`.
    fn new_with_component_name<T>(&self) -> Self;

    /// Derive a child logger whose `src` key is the given name.
    fn new_with_name(&self, name: &str) -> Self;
}

impl LoggerExtensions for Logger {
    fn new_with_component_name<T>(&self) -> Self {
        self.new_with_name(component_name::<T>())
    }

    fn new_with_name(&self, name: &str) -> Self {
        self.new(slog::o!("src" => name.to_owned()))
    }
}

/// Short name of a type: no module path, no generic parameters.
fn component_name<T>() -> &'static str {
    let full_name = std::any::type_name::<T>();
    let without_generics = full_name.split('<').next().unwrap_or(full_name);

    without_generics.rsplit("::").next().unwrap_or(full_name)
}
