//! Type-erased listener identity tokens.

use std::any::Any;
use std::fmt;

/// Identity token scoping a listener's caches.
///
/// Built from any equality-comparable value: an entity id, a route, a
/// tuple of both. Two tokens are equal when they hold the same concrete
/// type and the values compare equal; tokens of different concrete types
/// are never equal, so an `id` switch is always detected.
pub struct ListenerId(Box<dyn ErasedId>);

impl ListenerId {
    /// Erase `value` into an identity token.
    pub fn new<T>(value: T) -> Self
    where
        T: PartialEq + Send + Sync + 'static,
    {
        ListenerId(Box::new(value))
    }
}

impl PartialEq for ListenerId {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_erased(other.0.as_ref())
    }
}

impl fmt::Debug for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ListenerId(..)")
    }
}

trait ErasedId: Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn eq_erased(&self, other: &dyn ErasedId) -> bool;
}

impl<T> ErasedId for T
where
    T: PartialEq + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_erased(&self, other: &dyn ErasedId) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| other == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_compare_equal() {
        assert_eq!(ListenerId::new("row-1"), ListenerId::new("row-1"));
        assert_eq!(ListenerId::new(42u32), ListenerId::new(42u32));
    }

    #[test]
    fn different_values_compare_unequal() {
        assert_ne!(ListenerId::new("row-1"), ListenerId::new("row-2"));
    }

    #[test]
    fn different_types_never_compare_equal() {
        // The string "1" and the integer 1 are distinct identities.
        assert_ne!(ListenerId::new("1"), ListenerId::new(1i64));
    }

    #[test]
    fn tuple_identities_work() {
        assert_eq!(
            ListenerId::new(("user", 7u64)),
            ListenerId::new(("user", 7u64))
        );
        assert_ne!(
            ListenerId::new(("user", 7u64)),
            ListenerId::new(("post", 7u64))
        );
    }
}
