use crate::{ItemCategory, ItemDef};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("not enough free slots")]
    NoCapacity,
    #[error("invalid item index {0}")]
    InvalidIndex(usize),
}

/// Slot-constrained bag of owned item instances, in loot order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub slots: u8,
    pub items: Vec<ItemDef>,
}

impl Inventory {
    pub fn new(slots: u8) -> Self {
        Self {
            slots,
            items: Vec::new(),
        }
    }

    pub fn used_slots(&self) -> u32 {
        self.items.iter().map(|item| item.slot_cost as u32).sum()
    }

    pub fn free_slots(&self) -> u32 {
        (self.slots as u32).saturating_sub(self.used_slots())
    }

    pub fn can_fit(&self, item: &ItemDef) -> bool {
        self.free_slots() >= item.slot_cost as u32
    }

    pub fn add(&mut self, item: ItemDef) -> Result<(), InventoryError> {
        if !self.can_fit(&item) {
            return Err(InventoryError::NoCapacity);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<ItemDef, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::InvalidIndex(index));
        }
        Ok(self.items.remove(index))
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<ItemDef> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(idx))
    }

    pub fn count_category(&self, category: ItemCategory) -> usize {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .count()
    }

    pub fn has_category(&self, category: ItemCategory) -> bool {
        self.items.iter().any(|item| item.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemCategory, Rarity};

    fn item(id: &str, slot_cost: u8) -> ItemDef {
        ItemDef {
            id: id.into(),
            name: id.into(),
            category: ItemCategory::Artifact,
            rarity: Rarity::Common,
            slot_cost,
            attack: 0,
            defense: 0,
            heal: 0,
            cursed: false,
            consumable: false,
            fire: false,
            ice: false,
            synergy_partners: Vec::new(),
            anti_synergy_partners: Vec::new(),
            biomes: Vec::new(),
            drop_weight: 1.0,
        }
    }

    #[test]
    fn slot_accounting_counts_two_slot_items() {
        let mut inv = Inventory::new(5);
        inv.add(item("a", 2)).unwrap();
        inv.add(item("b", 2)).unwrap();
        assert_eq!(inv.free_slots(), 1);
        assert!(inv.can_fit(&item("c", 1)));
        assert_eq!(inv.add(item("d", 2)), Err(InventoryError::NoCapacity));
    }

    #[test]
    fn remove_out_of_range_is_rejected() {
        let mut inv = Inventory::new(3);
        inv.add(item("a", 1)).unwrap();
        assert_eq!(inv.remove(3), Err(InventoryError::InvalidIndex(3)));
        assert_eq!(inv.len(), 1);
    }
}
