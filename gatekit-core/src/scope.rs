//! Active-context selector
//!
//! Tracks which provider is active for the current consumption scope.
//! Absence of an override means "use the registry's default provider".
//!
//! The override is ambient, scoped state on the current thread: entering a
//! scope pushes onto a stack, leaving pops it, so nested overrides follow
//! stack discipline (innermost wins) and the previous context is restored
//! whatever way the scope exits — normal return, early `?`, or panic.
//!
//! ```rust
//! use gatekit_core::scope;
//!
//! assert_eq!(scope::current_override(), None);
//! scope::with_provider("supabase", || {
//!     assert_eq!(scope::current_override().as_deref(), Some("supabase"));
//! });
//! assert_eq!(scope::current_override(), None);
//! ```

use std::cell::RefCell;

thread_local! {
    static OVERRIDES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// RAII guard holding a provider override on the current thread
///
/// Prefer [`with_provider`]; the guard form exists for call sites that
/// cannot wrap their extent in a closure.
#[derive(Debug)]
pub struct ProviderScope {
    // Depth at entry, used to catch out-of-order guard drops in debug builds.
    depth: usize,
}

impl ProviderScope {
    /// Push an override for the given provider id
    pub fn enter(provider_id: impl Into<String>) -> Self {
        let provider_id = provider_id.into();
        tracing::debug!(provider_id = %provider_id, "provider scope entered");
        let depth = OVERRIDES.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push(provider_id);
            stack.len()
        });
        Self { depth }
    }
}

impl Drop for ProviderScope {
    fn drop(&mut self) {
        OVERRIDES.with(|stack| {
            let mut stack = stack.borrow_mut();
            debug_assert_eq!(
                stack.len(),
                self.depth,
                "provider scopes must be dropped innermost-first"
            );
            stack.pop();
        });
    }
}

/// Run `f` with the active provider overridden to `provider_id`
///
/// The previous context is restored when `f` returns or panics. Overrides
/// nest; the innermost one wins.
pub fn with_provider<R>(provider_id: &str, f: impl FnOnce() -> R) -> R {
    let _scope = ProviderScope::enter(provider_id);
    f()
}

/// The innermost override on the current thread, if any
pub fn current_override() -> Option<String> {
    OVERRIDES.with(|stack| stack.borrow().last().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_scoped_to_closure() {
        assert_eq!(current_override(), None);
        let out = with_provider("firebase", || {
            assert_eq!(current_override().as_deref(), Some("firebase"));
            42
        });
        assert_eq!(out, 42);
        assert_eq!(current_override(), None);
    }

    #[test]
    fn test_nested_overrides_restore_in_order() {
        with_provider("a", || {
            with_provider("b", || {
                assert_eq!(current_override().as_deref(), Some("b"));
            });
            assert_eq!(current_override().as_deref(), Some("a"));
        });
        assert_eq!(current_override(), None);
    }

    #[test]
    fn test_restored_after_panic() {
        let result = std::panic::catch_unwind(|| {
            with_provider("firebase", || panic!("implementation exploded"));
        });
        assert!(result.is_err());
        assert_eq!(current_override(), None);
    }

    #[test]
    fn test_guard_form() {
        {
            let _scope = ProviderScope::enter("auth0");
            assert_eq!(current_override().as_deref(), Some("auth0"));
        }
        assert_eq!(current_override(), None);
    }
}
