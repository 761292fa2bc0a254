mod checkout;
mod config;
mod course;
mod entitlement;
mod gate;
mod location;
mod navigation;
mod quiz;
mod stripe;
mod ui;

use std::rc::Rc;

use config::PaymentConfig;
use course::Catalog;
use entitlement::{EntitlementStore, LocalStorage};
use location::BrowserAddressBar;
use ui::{App, AppProps, ContentError, ContentErrorProps};

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting the language guide...");

    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Course content is invalid: {}", err);
            yew::Renderer::<ContentError>::with_props(ContentErrorProps {
                message: err.to_string().into(),
            })
            .render();
            return;
        }
    };
    log::info!("Loaded {} modules", catalog.len());

    // Resolve the entitlement, return marker included, before the first
    // render so no module is ever drawn with a stale lock state.
    let mut entitlement = EntitlementStore::open(LocalStorage);
    entitlement.acknowledge_return(&BrowserAddressBar);

    yew::Renderer::<App>::with_props(AppProps {
        catalog: Rc::new(catalog),
        unlocked: entitlement.is_unlocked(),
        payment: Rc::new(PaymentConfig::from_build_env()),
    })
    .render();
}
