//! Product widget state and its computed display values.

use super::error::CatalogError;
use super::models::{Catalog, Review, Variant, VariantId};

/// Shipping label shown to customers without a premium membership.
pub const STANDARD_SHIPPING: &str = "$2.99";

const PREMIUM_SHIPPING: &str = "Free";

/// Cart mutation requested by the product widget.
///
/// The product never touches the cart itself; it hands one of these to the
/// root, which owns the cart sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartCommand {
    /// Append the variant id to the cart.
    Add(VariantId),
    /// Remove every occurrence of the variant id from the cart.
    Remove(VariantId),
}

/// State of the product widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductState {
    catalog: Catalog,
    selected: usize,
    reviews: Vec<Review>,
}

impl Default for ProductState {
    fn default() -> Self {
        Self::new(Catalog::socks())
    }
}

impl ProductState {
    /// Creates a product widget showing the first variant of `catalog`.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: 0,
            reviews: Vec::new(),
        }
    }

    /// Returns the underlying catalog record.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the catalog variants in swatch order.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        &self.catalog.variants
    }

    /// Returns the index of the selected variant.
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Returns the selected variant, or `None` for a catalog without variants.
    #[must_use]
    pub fn current_variant(&self) -> Option<&Variant> {
        self.catalog.variants.get(self.selected)
    }

    /// Brand followed by product name.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.catalog.brand, self.catalog.product)
    }

    /// Image path of the selected variant.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.current_variant().map(|variant| variant.image.as_str())
    }

    /// Alternative text for the product image.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.catalog.alt_text
    }

    /// Whether the selected variant has stock.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.current_variant().is_some_and(Variant::in_stock)
    }

    /// Sale banner text.
    #[must_use]
    pub fn sale_message(&self) -> String {
        let title = self.title();
        if self.catalog.on_sale {
            format!("{title} are on sale!")
        } else {
            format!("{title} are not on sale.")
        }
    }

    /// Shipping cost label for the given membership status.
    #[must_use]
    pub const fn shipping(premium: bool) -> &'static str {
        if premium {
            PREMIUM_SHIPPING
        } else {
            STANDARD_SHIPPING
        }
    }

    /// Reviews received so far, in submission order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Makes the variant at `index` the active one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::VariantOutOfRange`] when `index` does not name
    /// a variant. The selection is left unchanged.
    pub fn select_variant(&mut self, index: usize) -> Result<(), CatalogError> {
        let count = self.catalog.variants.len();
        if index >= count {
            return Err(CatalogError::VariantOutOfRange { index, count });
        }
        self.selected = index;
        tracing::debug!(index, "selected product variant");
        Ok(())
    }

    /// Selects the next swatch, stopping at the last one.
    pub fn next_variant(&mut self) {
        let last = self.catalog.variants.len().saturating_sub(1);
        self.selected = self.selected.saturating_add(1).min(last);
    }

    /// Selects the previous swatch, stopping at the first one.
    pub const fn previous_variant(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Requests that the selected variant be added to the cart.
    #[must_use]
    pub fn add_to_cart(&self) -> Option<CartCommand> {
        self.current_variant()
            .map(|variant| CartCommand::Add(variant.id))
    }

    /// Requests that the selected variant be removed from the cart.
    #[must_use]
    pub fn remove_from_cart(&self) -> Option<CartCommand> {
        self.current_variant()
            .map(|variant| CartCommand::Remove(variant.id))
    }

    /// Records a review delivered through the review-submitted topic.
    pub fn append_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::models::Rating;

    #[fixture]
    fn product() -> ProductState {
        ProductState::default()
    }

    fn catalog_with_stock(quantities: &[u32]) -> Catalog {
        let variants = quantities
            .iter()
            .zip(1_u32..)
            .map(|(&quantity, id)| Variant {
                id: VariantId::new(id),
                color: "#000000".to_owned(),
                image: format!("./assets/{id}.jpg"),
                quantity,
            })
            .collect();
        Catalog {
            variants,
            ..Catalog::socks()
        }
    }

    #[rstest]
    fn title_joins_brand_and_product(product: ProductState) {
        assert_eq!(product.title(), "Vue Mastery Socks");
    }

    #[rstest]
    fn sale_message_branches_on_sale_flag(mut product: ProductState) {
        assert_eq!(product.sale_message(), "Vue Mastery Socks are on sale!");

        product.catalog.on_sale = false;
        assert_eq!(product.sale_message(), "Vue Mastery Socks are not on sale.");
    }

    #[rstest]
    #[case::premium(true, "Free")]
    #[case::standard(false, "$2.99")]
    fn shipping_depends_on_membership(#[case] premium: bool, #[case] expected: &str) {
        assert_eq!(ProductState::shipping(premium), expected);
    }

    #[rstest]
    #[case(0, "./assets/vmSocks-green-onWhite.jpg", 2234)]
    #[case(1, "./assets/vmSocks-blue-onWhite.jpg", 2235)]
    fn selecting_variant_updates_derived_values(
        mut product: ProductState,
        #[case] index: usize,
        #[case] image: &str,
        #[case] id: u32,
    ) {
        product
            .select_variant(index)
            .expect("index should be in range");

        assert_eq!(product.image(), Some(image));
        assert!(product.in_stock());
        assert_eq!(
            product.add_to_cart(),
            Some(CartCommand::Add(VariantId::new(id)))
        );
    }

    #[rstest]
    fn out_of_range_selection_is_rejected(mut product: ProductState) {
        product.select_variant(1).expect("index should be in range");

        let result = product.select_variant(2);

        assert_eq!(
            result,
            Err(CatalogError::VariantOutOfRange { index: 2, count: 2 })
        );
        assert_eq!(product.selected_index(), 1);
    }

    #[test]
    fn in_stock_reflects_each_variant_quantity() {
        let mut product = ProductState::new(catalog_with_stock(&[3, 0, 1]));
        let observed: Vec<bool> = (0..3)
            .map(|index| {
                product.select_variant(index).expect("index in range");
                product.in_stock()
            })
            .collect();
        assert_eq!(observed, vec![true, false, true]);
    }

    #[test]
    fn swatch_navigation_clamps_at_the_ends() {
        let mut product = ProductState::new(catalog_with_stock(&[1, 1, 1]));

        product.previous_variant();
        assert_eq!(product.selected_index(), 0);

        for _ in 0..5 {
            product.next_variant();
        }
        assert_eq!(product.selected_index(), 2);
    }

    #[test]
    fn empty_catalog_has_no_cart_commands() {
        let product = ProductState::new(catalog_with_stock(&[]));

        assert!(!product.in_stock());
        assert_eq!(product.image(), None);
        assert_eq!(product.add_to_cart(), None);
        assert_eq!(product.remove_from_cart(), None);
    }

    #[rstest]
    fn remove_request_names_the_selected_variant(product: ProductState) {
        assert_eq!(
            product.remove_from_cart(),
            Some(CartCommand::Remove(VariantId::new(2234)))
        );
    }

    #[rstest]
    fn reviews_append_in_order(mut product: ProductState) {
        for (name, stars) in [("Ana", 5), ("Ben", 3)] {
            product.append_review(Review {
                name: name.to_owned(),
                review: "Warm".to_owned(),
                rating: Rating::new(stars).expect("valid rating"),
            });
        }

        let names: Vec<&str> = product.reviews().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Ben"]);
    }
}
