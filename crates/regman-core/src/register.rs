//! Registration wrapper.
//!
//! `register(&registry, key)` returns a function that adds its argument to
//! the registry and hands it back unchanged, so the call site keeps using the
//! object as if it had never been registered:
//!
//! ```
//! use regman_core::{named, register, Registry, Named};
//!
//! fn greet(name: &str) -> String {
//!     format!("hello {name}")
//! }
//!
//! let registry: Registry<Named<fn(&str) -> String>> = Registry::new("handlers");
//! let greet = register(&registry, None)(named!(greet as fn(&str) -> String)).unwrap();
//!
//! assert_eq!(greet("bob"), "hello bob");
//! assert_eq!(registry.get("greet").unwrap()("amy"), "hello amy");
//! ```

use crate::error::RegistryError;
use crate::key::RegistryKey;
use crate::registry::Registry;
use crate::symbol::Symbol;

/// Picks the explicit key unless it is missing or blank, otherwise the
/// object's declared name.
fn resolve_key<K, T>(key: Option<K>, obj: &T) -> K
where
    K: RegistryKey + From<String>,
    T: Symbol + ?Sized,
{
    match key {
        Some(key) if !key.is_blank() => key,
        _ => K::from(obj.symbol_name().to_string()),
    }
}

/// Register an object and return it unchanged.
///
/// The object is stored as `obj.clone().into()`. Duplicate keys fail with
/// [`RegistryError::DuplicateKey`] exactly as [`Registry::add`] does.
pub fn register<V, K, T>(
    registry: &Registry<V, K>,
    key: Option<K>,
) -> impl FnOnce(T) -> Result<T, RegistryError>
where
    K: RegistryKey + From<String>,
    V: Clone + Send + Sync,
    T: Symbol + Clone + Into<V>,
{
    move |obj: T| {
        let key = resolve_key(key, &obj);
        registry.add(key, obj.clone().into())?;
        Ok(obj)
    }
}

/// Register an object through `convert` and return it unchanged.
///
/// Use this when the stored type cannot be produced with `Into`, e.g. an
/// `Arc<dyn Trait>` registry.
pub fn register_with<V, K, T, C>(
    registry: &Registry<V, K>,
    key: Option<K>,
    convert: C,
) -> impl FnOnce(T) -> Result<T, RegistryError>
where
    K: RegistryKey + From<String>,
    V: Clone + Send + Sync,
    T: Symbol,
    C: FnOnce(&T) -> V,
{
    move |obj: T| {
        let key = resolve_key(key, &obj);
        registry.add(key, convert(&obj))?;
        Ok(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use crate::named;
    use crate::symbol::Named;
    use std::sync::Arc;

    fn square(x: i64) -> i64 {
        x * x
    }

    fn negate(x: i64) -> i64 {
        -x
    }

    trait Shape: Send + Sync {
        fn area(&self) -> f64;
    }

    #[derive(Clone)]
    struct Square(f64);

    impl Symbol for Square {
        fn symbol_name(&self) -> &str {
            "Square"
        }
    }

    impl Shape for Square {
        fn area(&self) -> f64 {
            self.0 * self.0
        }
    }

    type MathFn = Named<fn(i64) -> i64>;

    #[test]
    fn test_register_without_key_uses_symbol_name() {
        let registry: Registry<MathFn> = Registry::new("test_registry");
        let f = register(&registry, None)(named!(square as fn(i64) -> i64)).unwrap();

        assert!(registry.contains("square").unwrap());
        assert_eq!(registry.get("square").unwrap()(4), 16);
        assert_eq!(f(3), square(3));
    }

    #[test]
    fn test_register_with_key() {
        let registry: Registry<MathFn> = Registry::new("test_registry");
        register(&registry, Some("custom_key".to_string()))(named!(square as fn(i64) -> i64))
            .unwrap();

        assert!(registry.contains("custom_key").unwrap());
        assert!(!registry.contains("square").unwrap());
    }

    #[test]
    fn test_register_empty_key_uses_symbol_name() {
        let registry: Registry<MathFn> = Registry::new("test_registry");
        register(&registry, Some(String::new()))(named!(negate as fn(i64) -> i64)).unwrap();

        assert_eq!(registry.keys(), vec!["negate".to_string()]);
    }

    #[test]
    fn test_register_whitespace_key_is_kept() {
        let registry: Registry<MathFn> = Registry::new("test_registry");
        register(&registry, Some(" ".to_string()))(named!(negate as fn(i64) -> i64)).unwrap();

        assert_eq!(registry.keys(), vec![" ".to_string()]);
    }

    #[test]
    fn test_register_duplicate_fails() {
        let registry: Registry<MathFn> = Registry::new("test_registry");
        let key = Some("duplicate_key".to_string());
        register(&registry, key.clone())(named!(square as fn(i64) -> i64)).unwrap();

        let err = register(&registry, key)(named!(negate as fn(i64) -> i64)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "test_registry: 'duplicate_key' already registered."
        );
        assert_eq!(registry.get("duplicate_key").unwrap()(5), 25);
    }

    #[test]
    fn test_register_with_conversion() {
        let registry: Registry<Arc<dyn Shape>> = Registry::new("shapes");
        let square = register_with(&registry, None, |s: &Square| {
            Arc::new(s.clone()) as Arc<dyn Shape>
        })(Square(3.0))
        .unwrap();

        assert_eq!(square.0, 3.0);
        assert_eq!(registry.get("Square").unwrap().area(), 9.0);
    }

    #[test]
    fn test_register_method_form() {
        let registry: Registry<MathFn> = Registry::new("methods");
        let f = registry.register(None)(named!(square as fn(i64) -> i64)).unwrap();
        let g = registry
            .register_with(Some("neg".to_string()), |n: &MathFn| *n)(named!(
            negate as fn(i64) -> i64
        ))
        .unwrap();

        assert_eq!(f(2), 4);
        assert_eq!(g(2), -2);
        assert_eq!(registry.keys(), vec!["square".to_string(), "neg".to_string()]);
    }

    #[test]
    fn test_register_dynamic_key() {
        let registry: Registry<MathFn, Key> = Registry::new("dynamic");
        register(&registry, Some(Key::Int(7)))(named!(square as fn(i64) -> i64)).unwrap();
        register(&registry, Some(Key::from("")))(named!(negate as fn(i64) -> i64)).unwrap();

        assert!(registry.contains(&Key::Int(7)).unwrap());
        assert!(registry.contains(&Key::from("negate")).unwrap());
    }

    #[test]
    fn test_register_invalid_key_fails() {
        let registry: Registry<MathFn, Key> = Registry::new("dynamic");
        let err = register(&registry, Some(Key::Float(f64::NAN)))(named!(
            square as fn(i64) -> i64
        ))
        .unwrap_err();

        assert!(matches!(err, RegistryError::InvalidKeyType { .. }));
        assert!(registry.is_empty());
    }
}
