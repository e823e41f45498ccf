//! Entity List
//!
//! Ordered in-memory copy of the server's list for the selected scope.
//! Rows are addressed by position, and every positional operation checks the
//! name it expects to find there.

use crate::model::NamedEntity;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityList {
    entries: Vec<NamedEntity>,
}

impl EntityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a fresh server list
    pub fn replace(&mut self, entries: Vec<NamedEntity>) {
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn append(&mut self, entity: NamedEntity) {
        self.entries.push(entity);
    }

    /// Remove the row at `index` if it still holds `name`
    ///
    /// Falls back to a lookup by name when the row moved. Returns the
    /// position the entry was removed from.
    pub fn remove(&mut self, index: usize, name: &str) -> Option<usize> {
        let index = self.locate(index, name)?;
        self.entries.remove(index);
        Some(index)
    }

    /// Rename the row at `index` if it still holds `old_name`
    pub fn rename(&mut self, index: usize, old_name: &str, new_name: &str) -> bool {
        match self.locate(index, old_name) {
            Some(index) => {
                self.entries[index].name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&NamedEntity> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedEntity> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn locate(&self, index: usize, name: &str) -> Option<usize> {
        match self.entries.get(index) {
            Some(entry) if entry.name == name => Some(index),
            _ => self.position(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(names: &[&str]) -> EntityList {
        let mut list = EntityList::new();
        list.replace(names.iter().map(|n| NamedEntity::new(*n)).collect());
        list
    }

    #[test]
    fn test_append_keeps_order() {
        let mut list = list_of(&["eth0"]);
        list.append(NamedEntity::new("eth1"));
        assert_eq!(list.names(), vec!["eth0", "eth1"]);
    }

    #[test]
    fn test_remove_by_position() {
        let mut list = list_of(&["eth0", "eth1", "eth2"]);
        assert_eq!(list.remove(1, "eth1"), Some(1));
        assert_eq!(list.names(), vec!["eth0", "eth2"]);
    }

    #[test]
    fn test_remove_falls_back_to_name() {
        let mut list = list_of(&["eth0", "eth1", "eth2"]);
        assert_eq!(list.remove(0, "eth2"), Some(2));
        assert_eq!(list.names(), vec!["eth0", "eth1"]);
        assert!(list.remove(0, "missing").is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_rename_in_place() {
        let mut list = list_of(&["eth0", "eth1"]);
        assert!(list.rename(0, "eth0", "wan0"));
        assert_eq!(list.names(), vec!["wan0", "eth1"]);
        assert!(!list.rename(0, "eth0", "lan0"));
    }

    #[test]
    fn test_replace_and_clear() {
        let mut list = list_of(&["a", "b"]);
        list.replace(vec![NamedEntity::new("c")]);
        assert_eq!(list.names(), vec!["c"]);
        list.clear();
        assert!(list.is_empty());
    }
}
