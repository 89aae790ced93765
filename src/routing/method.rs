//! Method tokens, aliases and the method gate.
//!
//! Methods are plain strings: nothing here validates them. The alias table
//! only decides which convenience wrappers over `RouteTable::add` exist.

use crate::routing::entry::Template;
use crate::routing::table::{RouteError, RouteTable};

/// Method sentinel for entries that accept every method.
pub const WILDCARD: &str = "";

/// Method that falls back to GET-registered entries.
pub const HEAD: &str = "HEAD";

const GET: &str = "GET";

/// Whether an entry registered for `entry_method` is a candidate for `method`.
///
/// HEAD requests also see GET entries.
pub fn accepts(entry_method: &str, method: &str) -> bool {
    entry_method == WILDCARD || entry_method == method || (method == HEAD && entry_method == GET)
}

macro_rules! method_aliases {
    ($($name:ident => $method:literal),* $(,)?) => {
        /// Methods that have a convenience wrapper on [`RouteTable`].
        pub const ALIASED: &[&str] = &[$($method),*];

        impl<H> RouteTable<H> {
            $(
                #[doc = concat!("Shorthand for `add(\"", $method, "\", template, handlers)`.")]
                pub fn $name<'t, I>(
                    &mut self,
                    template: impl Into<Template<'t>>,
                    handlers: I,
                ) -> Result<&mut Self, RouteError>
                where
                    I: IntoIterator<Item = H>,
                {
                    self.add($method, template, handlers)
                }
            )*
        }
    };
}

method_aliases! {
    get => "GET",
    head => "HEAD",
    patch => "PATCH",
    options => "OPTIONS",
    connect => "CONNECT",
    delete => "DELETE",
    trace => "TRACE",
    post => "POST",
    put => "PUT",
}
