//! # Record Store
//!
//! [`Inventory`] owns the collection of items and the id counter. Everything
//! else in the crate goes through it.
//!
//! ## Identifiers
//!
//! - Ids are assigned by the store from a monotonic counter; callers never
//!   choose them.
//! - The counter is always strictly greater than every id present.
//! - Ids are never reused, not even after a remove.
//! - Merge-import (and load) may keep an incoming id when it does not collide.
//!
//! ## Ordering
//!
//! Items keep insertion / load order. The store never sorts; that is left to
//! the presentation layer (see [`crate::view`]).
//!
//! ## Persistence
//!
//! File operations (load, save, import, export) live in [`file`] and go
//! through the [`crate::codec`]. Paths are plain arguments; the store knows
//! nothing about where settings live.

use crate::codec::DecodePolicy;
use crate::model::{Item, ItemFields};

pub mod file;

pub use file::{LineIssue, LoadReport, Reassignment};

#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<Item>,
    next_id: u64,
    policy: DecodePolicy,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            policy: DecodePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DecodePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Stores a copy of `candidate` under a fresh id and returns it.
    /// Any id already on the candidate is ignored.
    pub fn add(&mut self, candidate: Item) -> Item {
        let mut item = candidate;
        item.id = self.take_id();
        self.items.push(item.clone());
        item
    }

    pub fn remove(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    /// Replaces everything but the id on the matching item.
    pub fn update(&mut self, id: u64, fields: ItemFields) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                fields.apply_to(item);
                true
            }
            None => false,
        }
    }

    pub fn list_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Case-insensitive substring match on the name. An empty term matches all.
    pub fn search_by_name(&self, term: &str) -> Vec<Item> {
        let term_lower = term.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&term_lower))
            .cloned()
            .collect()
    }

    pub fn low_stock(&self, threshold: i64) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.quantity <= threshold)
            .cloned()
            .collect()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn contains_id(&self, id: u64) -> bool {
        self.position(id).is_some()
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Appends an incoming item, keeping its id unless it is unassigned or
    /// already taken. Returns the id it was stored under.
    fn merge_one(&mut self, mut item: Item) -> u64 {
        if !item.is_assigned() || self.contains_id(item.id) {
            item.id = self.take_id();
        } else if item.id >= self.next_id {
            self.next_id = item.id.saturating_add(1);
        }
        let id = item.id;
        self.items.push(item);
        id
    }
}
