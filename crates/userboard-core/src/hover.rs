//! Per-category hover selection for the detail panels.

use crate::model::UserId;

/// Which detail panel a trigger cell controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetailCategory {
    Address,
    Company,
}

/// Row currently expanded for each detail category.
///
/// The two slots are independent: entering the company cell of one row does
/// not affect the address slot, and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverSelection {
    pub address: Option<UserId>,
    pub company: Option<UserId>,
}

impl HoverSelection {
    fn slot_mut(&mut self, category: DetailCategory) -> &mut Option<UserId> {
        match category {
            DetailCategory::Address => &mut self.address,
            DetailCategory::Company => &mut self.company,
        }
    }

    /// Selected row for `category`, if any.
    pub fn get(&self, category: DetailCategory) -> Option<UserId> {
        match category {
            DetailCategory::Address => self.address,
            DetailCategory::Company => self.company,
        }
    }

    /// Pointer entered the trigger cell of row `id`.
    pub fn enter(&mut self, category: DetailCategory, id: UserId) {
        *self.slot_mut(category) = Some(id);
    }

    /// Pointer left a trigger cell of `category`.
    pub fn leave(&mut self, category: DetailCategory) {
        *self.slot_mut(category) = None;
    }

    /// Whether the `category` panel of row `id` is shown.
    pub fn is_open(&self, category: DetailCategory, id: UserId) -> bool {
        self.get(category) == Some(id)
    }
}
