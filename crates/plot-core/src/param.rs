// File: crates/plot-core/src/param.rs
// Summary: Tagged-presence parameter values and field-by-field merge for config structs.

/// A value that is either explicitly set by the user or left at its default.
///
/// `Param::default()` is unset. Converting from a bare `T` marks it set, so
/// `params.grid_on = true.into();` overrides only that field.
#[derive(Clone, Debug, PartialEq)]
pub struct Param<T> {
    value: Option<T>,
}

impl<T> Default for Param<T> {
    fn default() -> Self { Self { value: None } }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self { Self { value: Some(value) } }
}

impl<T> Param<T> {
    pub const fn unset() -> Self { Self { value: None } }

    pub fn is_set(&self) -> bool { self.value.is_some() }

    pub fn get(&self) -> Option<&T> { self.value.as_ref() }
}

impl<T: Clone> Param<T> {
    /// The set value, or `fallback` when unset.
    pub fn value_or(&self, fallback: T) -> T {
        self.value.clone().unwrap_or(fallback)
    }

    /// `over` if it is set, otherwise `self`.
    pub fn merged(&self, over: &Param<T>) -> Param<T> {
        match &over.value {
            Some(v) => Param::from(v.clone()),
            None => self.clone(),
        }
    }
}

/// Partial-override merge for parameter structs.
///
/// `base.merge(&over)` returns a copy of `base` where every field set in
/// `over` replaces the corresponding field. Unset fields of `over` leave
/// `base` untouched.
pub trait Merge: Sized {
    fn merge(&self, over: &Self) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset_and_assignment_sets() {
        let mut p: Param<u32> = Param::default();
        assert!(!p.is_set());
        assert_eq!(p.value_or(7), 7);
        p = 3.into();
        assert!(p.is_set());
        assert_eq!(p.get(), Some(&3));
    }

    #[test]
    fn merge_keeps_base_when_override_unset() {
        let base: Param<&str> = "base".into();
        assert_eq!(base.merged(&Param::unset()).get(), Some(&"base"));
        assert_eq!(base.merged(&"over".into()).get(), Some(&"over"));
        assert!(Param::<i32>::unset().merged(&Param::unset()).get().is_none());
    }
}
