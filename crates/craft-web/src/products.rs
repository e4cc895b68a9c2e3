//! Product grid rendering and category filter buttons.

use crate::dom;
use craft_core::{Filter, Product, PRODUCTS};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init(document: &web::Document) {
    render_grid(document);
    wire_filters(document);
}

/// Build one card per catalog product inside `#products-grid`.
fn render_grid(document: &web::Document) {
    let grid = match document.get_element_by_id("products-grid") {
        Some(el) => el,
        None => return,
    };
    for product in PRODUCTS.iter() {
        if let Ok(card) = document.create_element("div") {
            card.set_class_name(&format!(
                "product-card bg-white rounded-xl shadow-md overflow-hidden transition-all duration-300 data-category-{}",
                product.category.slug()
            ));
            card.set_inner_html(&card_html(product));
            let _ = grid.append_child(&card);
        }
    }
    log::info!("[products] rendered {} cards", PRODUCTS.len());
}

fn card_html(product: &Product) -> String {
    format!(
        r#"<div class="image-container h-48 bg-amber-50 flex items-center justify-center">
  <div class="text-craft-amber">
    <svg class="w-12 h-12 mx-auto" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
      <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M5 8h14M5 8a2 2 0 110-4h14a2 2 0 110 4M5 8v10a2 2 0 002 2h10a2 2 0 002-2V8m-9 4h4"></path>
    </svg>
    <span class="text-sm italic">{category}</span>
  </div>
</div>
<div class="p-5">
  <h3 class="text-lg font-semibold text-craft-brown mb-1">{name}</h3>
  <p class="text-gray-600 text-sm mb-3">{description}</p>
  <div class="flex justify-between items-center">
    <span class="font-bold text-craft-terracotta">{price}</span>
    <a href="https://wa.link/u2oa3j" target="_blank" class="bg-craft-amber hover:bg-craft-terracotta text-white px-4 py-2 rounded-lg text-sm transition-colors">
      Buy Now
    </a>
  </div>
</div>"#,
        category = product.category.slug(),
        name = product.name,
        description = product.description,
        price = product.price_label(),
    )
}

const ACTIVE_CLASSES: [&str; 3] = ["active", "bg-craft-amber", "text-white"];
const INACTIVE_CLASSES: [&str; 4] = ["bg-white", "text-craft-brown", "border", "border-craft-amber"];

fn wire_filters(document: &web::Document) {
    let buttons = match document.query_selector_all(".product-filter-btn") {
        Ok(b) => b,
        Err(_) => return,
    };
    for i in 0..buttons.length() {
        let node = match buttons.item(i) {
            Some(n) => n,
            None => continue,
        };
        let button: web::Element = match node.dyn_into() {
            Ok(el) => el,
            Err(_) => continue,
        };
        let doc = document.clone();
        let btn = button.clone();
        dom::on_event(button.as_ref(), "click", move |_| {
            let filter = btn
                .get_attribute("data-filter")
                .map(|s| Filter::from_slug(&s))
                .unwrap_or(Filter::All);
            style_buttons(&doc, &btn);
            apply_filter(&doc, filter);
        });
    }
}

/// Highlight the clicked button, reset the rest to the outlined style.
fn style_buttons(document: &web::Document, active: &web::Element) {
    if let Ok(buttons) = document.query_selector_all(".product-filter-btn") {
        for i in 0..buttons.length() {
            if let Some(node) = buttons.item(i) {
                if let Ok(button) = node.dyn_into::<web::Element>() {
                    let cl = button.class_list();
                    let is_active = button == *active;
                    for class in ACTIVE_CLASSES {
                        let _ = if is_active {
                            cl.add_1(class)
                        } else {
                            cl.remove_1(class)
                        };
                    }
                    for class in INACTIVE_CLASSES {
                        let _ = if is_active {
                            cl.remove_1(class)
                        } else {
                            cl.add_1(class)
                        };
                    }
                }
            }
        }
    }
}

/// Show or hide cards by the category class stamped on each card.
fn apply_filter(document: &web::Document, filter: Filter) {
    if let Ok(cards) = document.query_selector_all(".product-card") {
        for i in 0..cards.length() {
            if let Some(node) = cards.item(i) {
                if let Ok(card) = node.dyn_into::<web::HtmlElement>() {
                    let shown = match filter {
                        Filter::All => true,
                        Filter::Category(c) => card
                            .class_list()
                            .contains(&format!("data-category-{}", c.slug())),
                    };
                    let display = if shown { "block" } else { "none" };
                    let _ = card.style().set_property("display", display);
                }
            }
        }
    }
}
