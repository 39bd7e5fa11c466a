//! Tab selection state shared by the info and product tab widgets.

/// A fixed set of tab labels.
pub trait Tab: Copy + Eq + 'static {
    /// Every tab in display order. The first entry is the default.
    const ALL: &'static [Self];

    /// Label rendered in the tab bar.
    fn label(self) -> &'static str;
}

/// Tabs beside the product details: shipping cost and product details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoTab {
    /// Shipping cost pane.
    #[default]
    Shipping,
    /// Product details pane.
    Details,
}

impl Tab for InfoTab {
    const ALL: &'static [Self] = &[Self::Shipping, Self::Details];

    fn label(self) -> &'static str {
        match self {
            Self::Shipping => "Shipping",
            Self::Details => "Details",
        }
    }
}

/// Tabs under the product: the review list and the review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductTab {
    /// List of submitted reviews.
    #[default]
    Reviews,
    /// Review submission form.
    MakeAReview,
}

impl Tab for ProductTab {
    const ALL: &'static [Self] = &[Self::Reviews, Self::MakeAReview];

    fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::MakeAReview => "Make a Review",
        }
    }
}

/// Currently selected tab of one tab widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState<T: Tab> {
    selected: T,
}

impl<T: Tab + Default> Default for TabState<T> {
    fn default() -> Self {
        Self {
            selected: T::default(),
        }
    }
}

impl<T: Tab> TabState<T> {
    /// Creates a tab state with `selected` active.
    #[must_use]
    pub const fn new(selected: T) -> Self {
        Self { selected }
    }

    /// Returns the active tab.
    #[must_use]
    pub const fn selected(&self) -> T {
        self.selected
    }

    /// Makes `tab` the active tab.
    pub const fn select(&mut self, tab: T) {
        self.selected = tab;
    }

    /// Selects the tab whose label equals `label`.
    ///
    /// Unknown labels leave the selection unchanged and return false.
    pub fn select_label(&mut self, label: &str) -> bool {
        let Some(tab) = T::ALL.iter().copied().find(|tab| tab.label() == label) else {
            return false;
        };
        self.selected = tab;
        true
    }

    /// Returns true when `tab` is the active tab, i.e. its pane is visible.
    #[must_use]
    pub fn is_active(&self, tab: T) -> bool {
        self.selected == tab
    }

    /// Advances to the next tab, wrapping to the first.
    pub fn cycle(&mut self) {
        let position = T::ALL
            .iter()
            .position(|tab| *tab == self.selected)
            .unwrap_or(0);
        let next = T::ALL
            .get(position.saturating_add(1))
            .or_else(|| T::ALL.first())
            .copied();
        if let Some(tab) = next {
            self.selected = tab;
        }
    }
}
