use std::fmt;

use serde::Serialize;

/// One rendered menu entry.
///
/// The fragment is produced once, when the item is appended, and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MenuItem {
    html: String,
}

impl MenuItem {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// Ordered list of menu items, in render order.
///
/// Items are only ever appended; nothing re-sorts them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    /// All fragments joined by newlines, in order.
    pub fn to_html(&self) -> String {
        self.items
            .iter()
            .map(MenuItem::html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Menu {
    type Item = MenuItem;
    type IntoIter = std::vec::IntoIter<MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
