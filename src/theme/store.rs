//! The theme store: one active theme, fanned out to subscribers and
//! mirrored into named style variables.

use std::{cell::RefCell, mem, rc::Rc, rc::Weak};

use super::{ColorTheme, ThemeRegistry, DEFAULT_KEY};

/// Named style variables mirroring the active theme.
///
/// Rewritten wholesale on every theme change; readers never observe a
/// mix of old and new values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVars {
    entries: Vec<(&'static str, String)>,
}

impl StyleVars {
    fn compose(key: &str, theme: &ColorTheme) -> Self {
        Self {
            entries: vec![
                ("color.primary", theme.primary.to_string()),
                ("color.secondary", theme.secondary.to_string()),
                ("color.accent", theme.accent.to_string()),
                ("color.background", theme.background.to_string()),
                ("color.surface", theme.surface.to_string()),
                ("color.text", theme.text.to_string()),
                ("color.text-secondary", theme.text_secondary.to_string()),
                ("gradient.primary", theme.gradient.to_string()),
                ("gradient.hover", theme.gradient_hover.to_string()),
                ("theme.key", key.to_owned()),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

type Callback = Box<dyn FnMut(&ColorTheme)>;

struct Inner {
    registry: ThemeRegistry,
    active_key: String,
    active_theme: ColorTheme,
    vars: StyleVars,
    subscribers: Vec<(u64, Callback)>,
    /// Subscriptions dropped while the subscriber list was checked out
    /// for notification.
    dead: Vec<u64>,
    next_id: u64,
}

/// Holds the active [`ColorTheme`] and propagates changes.
///
/// Cheap to clone; clones share state. Delivery to subscribers is
/// synchronous and in registration order. Subscriber callbacks may
/// subscribe, unsubscribe or read the store, but must not call
/// [`ThemeStore::set_theme`] re-entrantly.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Rc<RefCell<Inner>>,
}

impl ThemeStore {
    /// Store over the given registry, active on the default key.
    #[must_use]
    pub fn new(registry: ThemeRegistry) -> Self {
        let theme = registry
            .get(DEFAULT_KEY)
            .cloned()
            .unwrap_or_else(|| panic!("registry is missing the default theme {DEFAULT_KEY:?}"));
        let vars = StyleVars::compose(DEFAULT_KEY, &theme);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                registry,
                active_key: DEFAULT_KEY.to_owned(),
                active_theme: theme,
                vars,
                subscribers: Vec::new(),
                dead: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// The current theme. Never fails.
    #[must_use]
    pub fn active(&self) -> ColorTheme {
        self.inner.borrow().active_theme.clone()
    }

    /// Key of the current theme.
    #[must_use]
    pub fn active_key(&self) -> String {
        self.inner.borrow().active_key.clone()
    }

    /// Switch to the theme registered under `key`.
    ///
    /// Unknown keys leave the store unchanged: the only callers are the
    /// store's own selection UI, whose keys come from [`Self::themes`].
    pub fn set_theme(&self, key: &str) {
        let (theme, mut checked_out) = {
            let mut inner = self.inner.borrow_mut();
            let Some(theme) = inner.registry.get(key).cloned() else {
                tracing::debug!(key, "ignoring unknown theme key");
                return;
            };
            inner.active_key = key.to_owned();
            inner.active_theme = theme.clone();
            inner.vars = StyleVars::compose(key, &theme);
            (theme, mem::take(&mut inner.subscribers))
        };

        tracing::info!(key, name = %theme.name, "theme applied");
        for (_, callback) in &mut checked_out {
            callback(&theme);
        }

        // Merge back, honoring subscribes and unsubscribes that happened
        // during delivery.
        let mut inner = self.inner.borrow_mut();
        let added = mem::take(&mut inner.subscribers);
        checked_out.extend(added);
        let dead = mem::take(&mut inner.dead);
        checked_out.retain(|(id, _)| !dead.contains(id));
        inner.subscribers = checked_out;
    }

    /// Snapshot of the registry in registration order.
    #[must_use]
    pub fn themes(&self) -> Vec<(String, ColorTheme)> {
        self.inner
            .borrow()
            .registry
            .iter()
            .map(|(k, t)| (k.to_owned(), t.clone()))
            .collect()
    }

    /// Snapshot of the mirrored style variables.
    #[must_use]
    pub fn style_vars(&self) -> StyleVars {
        self.inner.borrow().vars.clone()
    }

    /// Register `callback` for synchronous delivery on every applied
    /// theme change. Dropping the returned [`Subscription`] stops
    /// delivery.
    pub fn subscribe(&self, callback: impl FnMut(&ColorTheme) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, Box::new(callback)));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }
}

/// Guard for one subscriber registration; unsubscribes on drop.
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(rc) = self.inner.upgrade() else {
            return;
        };
        let mut inner = rc.borrow_mut();
        let before = inner.subscribers.len();
        let id = self.id;
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        if inner.subscribers.len() == before {
            // List is checked out for notification; tombstone instead.
            inner.dead.push(id);
        }
    }
}
