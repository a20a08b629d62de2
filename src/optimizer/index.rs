use std::collections::HashMap;

use tracing::debug;

use crate::models::StockItem;

/// Lowercase stock name to the position of the stock item it binds to.
///
/// Built once per optimization run. When two stock items share a name the first one
/// wins; the later ones are never matched by any recipe.
#[derive(Debug, Clone, Default)]
pub struct StockIndex {
    slots: HashMap<String, usize>,
}

impl StockIndex {
    pub fn new(stock: &[StockItem]) -> Self {
        let mut slots: HashMap<String, usize> = HashMap::with_capacity(stock.len());
        for (slot, item) in stock.iter().enumerate() {
            let key = item.key();
            if let Some(&first) = slots.get(&key) {
                debug!(
                    name = %item.name,
                    id = %item.id,
                    bound_to = %stock[first].id,
                    "duplicate stock name; this batch will not be matched by recipes"
                );
                continue;
            }
            slots.insert(key, slot);
        }
        Self { slots }
    }

    /// Position of the stock item named `name` (case-insensitive).
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(&name.to_lowercase()).copied()
    }

    pub fn lookup<'a>(&self, stock: &'a [StockItem], name: &str) -> Option<&'a StockItem> {
        self.slot(name).and_then(|slot| stock.get(slot))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
