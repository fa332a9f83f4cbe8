use crate::Result;

use serde::Deserialize;
use std::collections::HashMap;

/// Resolves application ids to display names.
///
/// The broader system keeps a process-wide name cache refreshed from the
/// platform's app listing; the core only ever sees it through this
/// read-mostly capability, injected at the composition root. Resolution
/// must never fail: an unknown id simply resolves to `None` and callers
/// fall back to a placeholder.
pub trait AppNameResolver {
    /// Resolved display name for an application id, if known.
    fn get(&self, app_id: &str) -> Option<String>;

    /// Invalidates any cached names. The owner is expected to re-load
    /// from its source afterwards; the default implementation keeps
    /// whatever is already cached.
    fn refresh(&mut self) {}
}

/// Resolver that knows no names; every id falls back to the placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl AppNameResolver for NullResolver {
    fn get(&self, _app_id: &str) -> Option<String> {
        None
    }
}

/// One entry of the platform's app listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRef {
    pub app_id: String,
    pub name: String,
}

/// Owned id → name directory, loaded from app listings.
#[derive(Debug, Clone, Default)]
pub struct AppDirectory {
    names: HashMap<String, String>,
}

impl AppDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an app-listing payload (`[ { "appId": ..., "name": ... } ]`).
    pub fn from_json(src: &str) -> Result<Self> {
        let apps: Vec<AppRef> = serde_json::from_str(src)?;
        let mut directory = Self::new();
        directory.load(apps);
        Ok(directory)
    }

    /// Merges a listing into the directory, overwriting existing entries.
    pub fn load(&mut self, apps: impl IntoIterator<Item = AppRef>) {
        for app in apps {
            self.names.insert(app.app_id, app.name);
        }
    }

    pub fn insert(&mut self, app_id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(app_id.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl AppNameResolver for AppDirectory {
    fn get(&self, app_id: &str) -> Option<String> {
        self.names.get(app_id).cloned()
    }

    fn refresh(&mut self) {
        self.names.clear();
    }
}

/// Display form of an application reference: `Name (id)` when the name
/// resolves, otherwise an `app id:` placeholder. Never fails.
pub fn display_app_name(resolver: &dyn AppNameResolver, app_id: &str) -> String {
    match resolver.get(app_id) {
        Some(name) => format!("{name} ({app_id})"),
        None => format!("app id: {app_id}"),
    }
}
