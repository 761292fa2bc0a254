//! Yew components. [`App`] is the root composition: it receives the
//! entitlement resolved at startup, gates the modules with it and routes
//! unlock requests to the purchase dialog.

mod header;
mod lesson;
mod module;
mod purchase;

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::checkout::{initiate_checkout, CheckoutError, PurchaseDialog};
use crate::config::PaymentConfig;
use crate::course::Catalog;
use crate::gate::module_access;
use crate::location::{AddressBar, BrowserAddressBar};
use crate::navigation::{BrowserViewport, NavigationController};
use crate::stripe::StripeJs;

use header::{Header, TableOfContents};
use module::ModuleContainer;
use purchase::PurchaseModal;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub catalog: Rc<Catalog>,
    pub unlocked: bool,
    pub payment: Rc<PaymentConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // Mutated from the async checkout task, so it lives behind a RefCell
    // and the component is re-rendered by hand after each change.
    let dialog = use_mut_ref(PurchaseDialog::default);
    let rerender = use_force_update();

    use_effect_with((), |_| {
        let controller = NavigationController::install(BrowserViewport);
        move || drop(controller)
    });

    let on_unlock_request = {
        let dialog = dialog.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            dialog.borrow_mut().show();
            rerender.force_update();
        })
    };

    let on_close = {
        let dialog = dialog.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            if dialog.borrow_mut().close() {
                rerender.force_update();
            }
        })
    };

    let on_pay = {
        let dialog = dialog.clone();
        let rerender = rerender.clone();
        let payment = Rc::clone(&props.payment);
        Callback::from(move |_: ()| {
            if !dialog.borrow_mut().begin() {
                return;
            }
            rerender.force_update();

            let dialog = dialog.clone();
            let rerender = rerender.clone();
            let payment = Rc::clone(&payment);
            spawn_local(async move {
                let result = match BrowserAddressBar.location() {
                    Some(page) => initiate_checkout(&payment, &StripeJs, &page).await,
                    None => Err(CheckoutError::Rejected("current page location is unavailable".to_string())),
                };
                // on success the browser is already leaving the page
                if let Err(err) = result {
                    log::error!("Failed to initiate payment: {}", err);
                    dialog.borrow_mut().fail(&err);
                    rerender.force_update();
                }
            });
        })
    };

    let entries: Vec<_> = module_access(&props.catalog, props.unlocked)
        .map(|(module, access)| (module.clone(), access))
        .collect();

    html! {
        <div class="min-h-screen bg-slate-100">
            <Header />
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row md:space-x-8 py-8">
                    <aside class="w-full md:w-1/4 lg:w-1/5 md:sticky md:top-20 self-start mb-8 md:mb-0">
                        <TableOfContents entries={entries.clone()} on_unlock_request={on_unlock_request.clone()} />
                    </aside>
                    <main class="w-full md:w-3/4 lg:w-4/5">
                        { for entries.into_iter().map(|(module, access)| {
                            let key = module.id.clone();
                            html! {
                                <ModuleContainer
                                    key={key}
                                    {module}
                                    {access}
                                    on_unlock_request={on_unlock_request.clone()}
                                />
                            }
                        }) }
                    </main>
                </div>
            </div>
            <PurchaseModal
                dialog={dialog.borrow().clone()}
                price_label={AttrValue::from(props.payment.price_label.clone())}
                {on_pay}
                {on_close}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentErrorProps {
    pub message: AttrValue,
}

/// Shown instead of the course when the embedded content fails validation.
#[function_component(ContentError)]
pub fn content_error(props: &ContentErrorProps) -> Html {
    html! {
        <div class="min-h-screen bg-slate-100">
            <Header />
            <div class="container mx-auto p-8">
                <p class="text-red-700 font-semibold">{ "No se pudo cargar el contenido de la guía." }</p>
                <p class="text-slate-500 text-sm mt-2">{ props.message.clone() }</p>
            </div>
        </div>
    }
}
