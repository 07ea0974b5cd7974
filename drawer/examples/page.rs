use std::cell::RefCell;
use std::rc::Rc;

use drawer::{init, DrawerConfig, DrawerController};
use pagedom::{Document, Element};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config: DrawerConfig = serde_json::from_str(r#"{ "lockScroll": true }"#)?;
    let controller = Rc::new(RefCell::new(DrawerController::new(config)));
    let mut page = ui();
    init(&controller, &mut page);

    for trigger in ["nav-btn", "cart-btn", "cart-btn", "typo-btn"] {
        page.click(trigger)?;
        print_state(&controller.borrow(), &page);
    }

    Ok(())
}

fn ui() -> Document {
    Document::new([
        Element::box_()
            .id("header")
            .child(Element::button("Menu").id("nav-btn").attr("data-drawer-trigger", "nav"))
            .child(Element::button("Cart").id("cart-btn").attr("data-drawer-trigger", "cart"))
            .child(Element::button("Oops").id("typo-btn").attr("data-drawer-trigger", "crat")),
        Element::box_().id("nav").attr("data-drawer", "nav"),
        Element::box_().id("cart").attr("data-drawer", "cart"),
    ])
}

fn print_state(controller: &DrawerController, page: &Document) {
    let marker = &controller.config().open_marker;
    let drawers: Vec<String> = ["nav", "cart"]
        .iter()
        .map(|id| {
            let open = page.get(id).is_some_and(|el| el.has_class(marker));
            format!("{id}={}", if open { "open" } else { "closed" })
        })
        .collect();

    println!(
        "open_drawer={:?} {} body.overflow={}",
        controller.open_drawer(),
        drawers.join(" "),
        page.body().get_style("overflow").unwrap_or("-"),
    );
}
