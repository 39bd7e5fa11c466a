//! Shopping cart owned by the root of the page.
//!
//! The cart is an ordered multiset of variant ids kept as a sequence: every
//! add-to-cart press appends one entry, and a removal drops every entry for
//! that variant.

use crate::catalog::{CartCommand, VariantId};

/// Ordered sequence of variant ids added by the shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<VariantId>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `id` to the cart.
    pub fn add_item(&mut self, id: VariantId) {
        self.items.push(id);
        tracing::debug!(%id, size = self.items.len(), "added item to cart");
    }

    /// Removes every entry equal to `id`, keeping the order of the rest.
    ///
    /// Returns how many entries were removed.
    pub fn remove_item(&mut self, id: VariantId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| *item != id);
        let removed = before - self.items.len();
        tracing::debug!(%id, removed, size = self.items.len(), "removed item from cart");
        removed
    }

    /// Applies a cart command issued by the product widget.
    pub fn apply(&mut self, command: CartCommand) {
        match command {
            CartCommand::Add(id) => self.add_item(id),
            CartCommand::Remove(id) => {
                let _removed = self.remove_item(id);
            }
        }
    }

    /// Number of entries in the cart.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the cart holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart entries in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[VariantId] {
        &self.items
    }
}

impl FromIterator<VariantId> for Cart {
    fn from_iter<I: IntoIterator<Item = VariantId>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn cart_of(ids: &[u32]) -> Cart {
        ids.iter().copied().map(VariantId::new).collect()
    }

    fn raw(cart: &Cart) -> Vec<u32> {
        cart.items().iter().map(|id| id.get()).collect()
    }

    #[test]
    fn add_item_appends_duplicates() {
        let mut cart = Cart::new();
        cart.add_item(VariantId::new(2234));
        cart.add_item(VariantId::new(2234));

        assert_eq!(raw(&cart), vec![2234, 2234]);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn remove_item_drops_every_occurrence() {
        let mut cart = cart_of(&[2234, 2235, 2234]);

        let removed = cart.remove_item(VariantId::new(2234));

        assert_eq!(removed, 2);
        assert_eq!(raw(&cart), vec![2235]);
    }

    #[test]
    fn remove_item_of_unknown_id_is_a_no_op() {
        let mut cart = cart_of(&[1, 2]);

        assert_eq!(cart.remove_item(VariantId::new(9)), 0);
        assert_eq!(raw(&cart), vec![1, 2]);
    }

    #[rstest]
    #[case::empty(&[], 7)]
    #[case::without_id(&[1, 2, 3], 7)]
    #[case::with_id(&[7, 1, 7, 2], 7)]
    #[case::only_id(&[7, 7], 7)]
    fn add_then_remove_preserves_relative_order(#[case] initial: &[u32], #[case] id: u32) {
        let mut cart = cart_of(initial);
        let expected: Vec<u32> = initial.iter().copied().filter(|item| *item != id).collect();

        cart.add_item(VariantId::new(id));
        cart.remove_item(VariantId::new(id));

        assert_eq!(raw(&cart), expected);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut cart = Cart::new();
        cart.apply(CartCommand::Add(VariantId::new(1)));
        cart.apply(CartCommand::Add(VariantId::new(2)));
        cart.apply(CartCommand::Remove(VariantId::new(1)));

        assert_eq!(raw(&cart), vec![2]);
        assert!(!cart.is_empty());
    }
}
