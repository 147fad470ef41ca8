//! Scoped access to the theme store.
//!
//! Views resolve their store through [`ThemeHandle::current`] instead of
//! threading it through every constructor. Resolving outside an entered
//! scope is a programming error and fails loudly.

use std::cell::RefCell;

use super::ThemeStore;

thread_local! {
    static SCOPES: RefCell<Vec<ThemeStore>> = const { RefCell::new(Vec::new()) };
}

/// Guard installing a [`ThemeStore`] as the thread's current provider.
///
/// Scopes nest; the innermost one wins. Dropping the guard uninstalls
/// it.
pub struct ThemeScope {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ThemeScope {
    #[must_use]
    pub fn enter(store: &ThemeStore) -> Self {
        SCOPES.with(|scopes| scopes.borrow_mut().push(store.clone()));
        Self {
            _not_send: std::marker::PhantomData,
        }
    }
}

impl Drop for ThemeScope {
    fn drop(&mut self) {
        SCOPES.with(|scopes| {
            scopes.borrow_mut().pop();
        });
    }
}

/// Access point to the scoped store.
pub struct ThemeHandle;

impl ThemeHandle {
    /// The store installed by the innermost [`ThemeScope`].
    ///
    /// # Panics
    ///
    /// Panics when no scope has been entered on this thread: a theme
    /// consumer was constructed outside its provider.
    #[must_use]
    pub fn current() -> ThemeStore {
        Self::try_current().unwrap_or_else(|| {
            panic!("theme consumer used outside a ThemeScope; enter ThemeScope::enter first")
        })
    }

    /// Like [`Self::current`], returning `None` outside any scope.
    #[must_use]
    pub fn try_current() -> Option<ThemeStore> {
        SCOPES.with(|scopes| scopes.borrow().last().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeRegistry;

    #[test]
    fn current_resolves_inside_a_scope() {
        let store = ThemeStore::new(ThemeRegistry::builtin());
        store.set_theme("blue");
        let _scope = ThemeScope::enter(&store);
        assert_eq!(ThemeHandle::current().active().name, "Ocean Blue");
    }

    #[test]
    fn scope_is_uninstalled_on_drop() {
        let store = ThemeStore::new(ThemeRegistry::builtin());
        {
            let _scope = ThemeScope::enter(&store);
            assert!(ThemeHandle::try_current().is_some());
        }
        assert!(ThemeHandle::try_current().is_none());
    }

    #[test]
    fn inner_scope_wins() {
        let outer = ThemeStore::new(ThemeRegistry::builtin());
        let inner = ThemeStore::new(ThemeRegistry::builtin());
        inner.set_theme("red");
        let _outer_scope = ThemeScope::enter(&outer);
        {
            let _inner_scope = ThemeScope::enter(&inner);
            assert_eq!(ThemeHandle::current().active().name, "Crimson Fire");
        }
        assert_eq!(ThemeHandle::current().active().name, "Purple Dream");
    }

    #[test]
    #[should_panic(expected = "outside a ThemeScope")]
    fn current_panics_outside_any_scope() {
        let _ = ThemeHandle::current();
    }
}
