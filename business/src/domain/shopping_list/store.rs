use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::domain::purchase_history::model::{PurchaseHistoryEntry, TopItemStat};
use crate::domain::shopping_item::model::ShoppingItem;

#[derive(Debug, Default)]
struct Snapshot {
    items: Vec<ShoppingItem>,
    history: Vec<PurchaseHistoryEntry>,
    weekly_history: Vec<PurchaseHistoryEntry>,
    top_items: Vec<TopItemStat>,
    check_versions: HashMap<Uuid, u64>,
    next_check_version: u64,
}

/// An optimistic check-state change that can still be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedChange {
    pub previous: bool,
    version: u64,
}

/// Local view of the active list and of the history-derived data.
///
/// Every refresh replaces a whole collection (last write wins). Locks are
/// never held across an `.await`. Once [`close`](Self::close) is called,
/// late fetch results are dropped instead of applied.
#[derive(Debug, Default)]
pub struct ShoppingListStore {
    snapshot: RwLock<Snapshot>,
    closed: AtomicBool,
}

impl ShoppingListStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.snapshot.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn items(&self) -> Vec<ShoppingItem> {
        self.read().items.clone()
    }

    pub fn find(&self, id: Uuid) -> Option<ShoppingItem> {
        self.read().items.iter().find(|item| item.id == id).cloned()
    }

    pub fn checked_items(&self) -> Vec<ShoppingItem> {
        self.read()
            .items
            .iter()
            .filter(|item| item.checked)
            .cloned()
            .collect()
    }

    /// Returns `false` when the store is closed and the items were dropped.
    pub fn replace_items(&self, items: Vec<ShoppingItem>) -> bool {
        if self.is_closed() {
            return false;
        }
        self.write().items = items;
        true
    }

    /// Puts a freshly accepted item at the head of the list. If a resync
    /// already brought it in, the existing copy is replaced instead.
    pub fn insert_item(&self, item: ShoppingItem) -> bool {
        if self.is_closed() {
            return false;
        }
        let mut snapshot = self.write();
        match snapshot.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => snapshot.items.insert(0, item),
        }
        true
    }

    /// Sets the checked flag, or returns `None` when the item is not in the
    /// snapshot.
    pub fn set_checked(&self, id: Uuid, checked: bool) -> Option<CheckedChange> {
        let mut snapshot = self.write();
        let version = snapshot.next_check_version;
        let item = snapshot.items.iter_mut().find(|item| item.id == id)?;
        let previous = item.checked;
        item.checked = checked;
        snapshot.next_check_version += 1;
        snapshot.check_versions.insert(id, version);
        Some(CheckedChange { previous, version })
    }

    /// Undoes `change` unless a later change on the same item superseded it.
    pub fn revert_checked(&self, id: Uuid, change: CheckedChange) -> bool {
        let mut snapshot = self.write();
        if snapshot.check_versions.get(&id) != Some(&change.version) {
            return false;
        }
        snapshot.check_versions.remove(&id);
        match snapshot.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = change.previous;
                true
            }
            None => false,
        }
    }

    /// Removes one item, returning it with the position it held.
    pub fn remove_item(&self, id: Uuid) -> Option<(usize, ShoppingItem)> {
        let mut snapshot = self.write();
        let index = snapshot.items.iter().position(|item| item.id == id)?;
        snapshot.check_versions.remove(&id);
        Some((index, snapshot.items.remove(index)))
    }

    /// Puts a removed item back at `index` (clamped), unless it is already there.
    pub fn restore_item(&self, index: usize, item: ShoppingItem) {
        let mut snapshot = self.write();
        if snapshot.items.iter().any(|existing| existing.id == item.id) {
            return;
        }
        let index = index.min(snapshot.items.len());
        snapshot.items.insert(index, item);
    }

    /// Removes every item whose id is listed and returns how many were removed.
    pub fn remove_items(&self, ids: &[Uuid]) -> usize {
        let mut snapshot = self.write();
        let before = snapshot.items.len();
        snapshot.items.retain(|item| !ids.contains(&item.id));
        snapshot.check_versions.retain(|id, _| !ids.contains(id));
        before - snapshot.items.len()
    }

    pub fn history(&self) -> Vec<PurchaseHistoryEntry> {
        self.read().history.clone()
    }

    pub fn replace_history(&self, history: Vec<PurchaseHistoryEntry>) -> bool {
        if self.is_closed() {
            return false;
        }
        self.write().history = history;
        true
    }

    pub fn weekly_history(&self) -> Vec<PurchaseHistoryEntry> {
        self.read().weekly_history.clone()
    }

    pub fn replace_weekly_history(&self, history: Vec<PurchaseHistoryEntry>) -> bool {
        if self.is_closed() {
            return false;
        }
        self.write().weekly_history = history;
        true
    }

    pub fn top_items(&self) -> Vec<TopItemStat> {
        self.read().top_items.clone()
    }

    pub fn replace_top_items(&self, top_items: Vec<TopItemStat>) -> bool {
        if self.is_closed() {
            return false;
        }
        self.write().top_items = top_items;
        true
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}
