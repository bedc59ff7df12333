//! Declared names for registrable objects.
//!
//! The registration wrapper falls back to an object's declared name when no
//! key is given. Types get one through `#[derive(Symbol)]`; functions get one
//! by wrapping them with [`named!`](crate::named). Closures are anonymous, so
//! they must always be registered under an explicit key.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// An object that knows the identifier it was declared with.
pub trait Symbol {
    /// The declared identifier, e.g. the struct or function name.
    fn symbol_name(&self) -> &str;
}

impl<T: Symbol + ?Sized> Symbol for &T {
    fn symbol_name(&self) -> &str {
        (**self).symbol_name()
    }
}

impl<T: Symbol + ?Sized> Symbol for Box<T> {
    fn symbol_name(&self) -> &str {
        (**self).symbol_name()
    }
}

impl<T: Symbol + ?Sized> Symbol for Arc<T> {
    fn symbol_name(&self) -> &str {
        (**self).symbol_name()
    }
}

/// A value paired with the name it was declared under.
///
/// Derefs to the wrapped value, so a wrapped function is still called as
/// `f(x)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Named<F> {
    name: &'static str,
    inner: F,
}

impl<F> Named<F> {
    pub const fn new(name: &'static str, inner: F) -> Self {
        Self { name, inner }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F> Deref for Named<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.inner
    }
}

impl<F> Symbol for Named<F> {
    fn symbol_name(&self) -> &str {
        self.name
    }
}

impl<F> fmt::Debug for Named<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Named").field("name", &self.name).finish()
    }
}

/// Wrap a function in [`Named`] using its own identifier.
///
/// ```
/// use regman_core::{named, Symbol};
///
/// fn double(x: i32) -> i32 {
///     x * 2
/// }
///
/// let f = named!(double as fn(i32) -> i32);
/// assert_eq!(f.symbol_name(), "double");
/// assert_eq!(f(21), 42);
/// ```
#[macro_export]
macro_rules! named {
    ($f:ident) => {
        $crate::Named::new(stringify!($f), $f)
    };
    ($f:ident as $ty:ty) => {
        $crate::Named::new(stringify!($f), $f as $ty)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    struct Plugin;

    impl Symbol for Plugin {
        fn symbol_name(&self) -> &str {
            "Plugin"
        }
    }

    #[test]
    fn test_named_macro_uses_identifier() {
        let f = named!(add_one);
        assert_eq!(f.symbol_name(), "add_one");
        assert_eq!(f.name(), "add_one");
    }

    #[test]
    fn test_named_is_callable() {
        let f = named!(add_one as fn(i32) -> i32);
        assert_eq!(f(1), add_one(1));
        assert_eq!((f.get())(41), 42);
        assert_eq!(f.into_inner()(0), 1);
    }

    #[test]
    fn test_named_debug_shows_name() {
        let f = named!(add_one as fn(i32) -> i32);
        assert_eq!(format!("{:?}", f), "Named { name: \"add_one\" }");
    }

    #[test]
    fn test_symbol_through_pointers() {
        let plugin = Plugin;
        assert_eq!((&plugin).symbol_name(), "Plugin");
        assert_eq!(Box::new(Plugin).symbol_name(), "Plugin");
        assert_eq!(Arc::new(Plugin).symbol_name(), "Plugin");

        let dynamic: Arc<dyn Symbol> = Arc::new(Plugin);
        assert_eq!(dynamic.symbol_name(), "Plugin");
    }
}
