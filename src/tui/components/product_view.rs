//! Product display: image, title, stock, sale banner, info tabs, colour
//! swatches, sizes, and the cart buttons.

use std::fmt::{self, Write};

use crossterm::style::{Color, Stylize};

use super::info_tabs::{InfoTabsComponent, InfoTabsViewContext};
use crate::catalog::{ProductState, Variant};
use crate::tui::state::{InfoTab, TabState};

/// Context for rendering the product view.
#[derive(Debug, Clone)]
pub struct ProductViewContext<'a> {
    /// Product widget state.
    pub product: &'a ProductState,
    /// Whether the shopper is a premium customer.
    pub premium: bool,
    /// Active info tab.
    pub info_tabs: &'a TabState<InfoTab>,
}

/// Component rendering the product widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductViewComponent {
    info_tabs: InfoTabsComponent,
}

impl ProductViewComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            info_tabs: InfoTabsComponent::new(),
        }
    }

    /// Renders the product widget as a string.
    #[must_use]
    pub fn view(&self, ctx: &ProductViewContext<'_>) -> String {
        let product = ctx.product;
        let in_stock = product.in_stock();
        let mut output = String::new();

        // Ignoring error as writing to String cannot fail
        #[expect(
            clippy::let_underscore_must_use,
            reason = "Writing to String cannot fail"
        )]
        let _ = write_summary(&mut output, product, in_stock);

        let info_ctx = InfoTabsViewContext {
            tabs: ctx.info_tabs,
            shipping: ProductState::shipping(ctx.premium),
            details: &product.catalog().details,
        };
        output.push_str(&self.info_tabs.view(&info_ctx));
        output.push('\n');

        output.push_str(&swatch_line(product.variants(), product.selected_index()));
        output.push_str("Sizes:  ");
        output.push_str(&product.catalog().sizes.join("  "));
        output.push('\n');
        output.push_str(&button_line(in_stock));
        output
    }
}

fn write_summary(output: &mut String, product: &ProductState, in_stock: bool) -> fmt::Result {
    let image = product.image().unwrap_or("(no image)");
    writeln!(output, "Image: {image} ({})", product.alt_text())?;
    writeln!(output, "{}", product.title())?;
    output.push_str(&stock_line(in_stock));
    writeln!(output, "{}", product.sale_message())?;
    writeln!(output, "{}\n", product.catalog().description)
}

fn stock_line(in_stock: bool) -> String {
    if in_stock {
        "In Stock\n".to_owned()
    } else {
        format!("{}\n", "Out of Stock".crossed_out())
    }
}

fn swatch_line(variants: &[Variant], selected: usize) -> String {
    let swatches: Vec<String> = variants
        .iter()
        .enumerate()
        .map(|(index, variant)| {
            let marker = if index == selected { '>' } else { ' ' };
            let block = variant.rgb().map_or_else(
                || "██".to_owned(),
                |(r, g, b)| "██".with(Color::Rgb { r, g, b }).to_string(),
            );
            format!("{marker}{block} {}", variant.color)
        })
        .collect();
    format!("Colors: {}\n", swatches.join("  "))
}

fn button_line(enabled: bool) -> String {
    let labels = ["Add To Cart", "Remove From Cart"];
    let buttons: Vec<String> = labels
        .iter()
        .map(|label| {
            if enabled {
                format!("[{label}]")
            } else {
                format!("({label})").dim().to_string()
            }
        })
        .collect();
    format!("{}\n", buttons.join("  "))
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalog::Catalog;
    use crate::tui::components::test_utils::strip_ansi_codes;

    #[fixture]
    fn product() -> ProductState {
        ProductState::default()
    }

    fn render(product: &ProductState, premium: bool, tab: InfoTab) -> String {
        let tabs = TabState::new(tab);
        let ctx = ProductViewContext {
            product,
            premium,
            info_tabs: &tabs,
        };
        strip_ansi_codes(&ProductViewComponent::new().view(&ctx))
    }

    #[rstest]
    fn view_shows_title_stock_and_sale(product: ProductState) {
        let output = render(&product, false, InfoTab::Shipping);

        assert!(output.contains("Vue Mastery Socks\n"));
        assert!(output.contains("In Stock"));
        assert!(output.contains("Vue Mastery Socks are on sale!"));
        assert!(output.contains("A pair of warm, fuzzy socks."));
        assert!(output.contains("Sizes:  S  M  L"));
    }

    #[rstest]
    fn summary_lines_lead_the_view(product: ProductState) {
        let output = render(&product, false, InfoTab::Shipping);
        let lines: Vec<&str> = output.lines().take(6).collect();

        assert_eq!(
            lines,
            [
                "Image: ./assets/vmSocks-green-onWhite.jpg (A pair of socks.)",
                "Vue Mastery Socks",
                "In Stock",
                "Vue Mastery Socks are on sale!",
                "A pair of warm, fuzzy socks.",
                "",
            ]
        );
    }

    #[rstest]
    #[case::standard(false, "Shipping: $2.99")]
    #[case::premium(true, "Shipping: Free")]
    fn view_shows_shipping_for_membership(
        product: ProductState,
        #[case] premium: bool,
        #[case] expected: &str,
    ) {
        assert!(render(&product, premium, InfoTab::Shipping).contains(expected));
    }

    #[rstest]
    fn swatch_marker_follows_selection(mut product: ProductState) {
        product.select_variant(1).expect("index in range");

        let output = render(&product, false, InfoTab::Shipping);

        assert!(output.contains("./assets/vmSocks-blue-onWhite.jpg"));
        assert!(output.contains(" ██ #2D985F  >██ #546B84"), "{output}");
    }

    #[test]
    fn out_of_stock_disables_buttons() {
        let mut catalog = Catalog::socks();
        for variant in &mut catalog.variants {
            variant.quantity = 0;
        }
        let product = ProductState::new(catalog);
        let tabs = TabState::default();
        let ctx = ProductViewContext {
            product: &product,
            premium: false,
            info_tabs: &tabs,
        };

        let raw = ProductViewComponent::new().view(&ctx);
        let output = strip_ansi_codes(&raw);

        assert!(output.contains("Out of Stock"));
        assert!(output.contains("(Add To Cart)  (Remove From Cart)"));
        assert!(raw.contains("\x1b[9m"), "out-of-stock label should be crossed out");
    }

    #[rstest]
    fn in_stock_buttons_are_enabled(product: ProductState) {
        let output = render(&product, false, InfoTab::Details);

        assert!(output.contains("[Add To Cart]  [Remove From Cart]"));
        assert!(output.contains("• 80% cotton"));
    }
}
