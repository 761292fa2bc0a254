use yew::prelude::*;

use crate::checkout::PurchaseDialog;

#[derive(Properties, PartialEq)]
pub struct PurchaseModalProps {
    pub dialog: PurchaseDialog,
    pub price_label: AttrValue,
    pub on_pay: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(PurchaseModal)]
pub fn purchase_modal(props: &PurchaseModalProps) -> Html {
    let dialog = &props.dialog;
    if !dialog.open {
        return html! {};
    }

    let on_pay = props.on_pay.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-60 flex items-center justify-center z-50 p-4">
            <div class="bg-white rounded-2xl shadow-2xl p-8 max-w-md w-full text-center transform transition-all duration-300 scale-100">
                <h2 class="text-3xl font-bold text-slate-800 mb-2">{ "Desbloquear Guía Completa" }</h2>
                <p class="text-slate-600 mb-6">{ "Obtén acceso instantáneo a todos los módulos y quizzes para prepararte al máximo." }</p>
                <div class="bg-sky-50 border border-sky-200 rounded-lg p-6 my-4">
                    <p class="text-5xl font-extrabold text-sky-600">{ props.price_label.clone() }</p>
                    <p class="text-slate-500 font-medium">{ "Pago único de por vida" }</p>
                </div>
                if let Some(message) = dialog.error {
                    <p class="text-red-600 text-sm mb-4" role="alert">{ message }</p>
                }
                <button
                    onclick={on_pay}
                    disabled={dialog.in_flight}
                    class="w-full bg-gradient-to-r from-green-400 to-blue-500 text-white font-bold py-3 px-6 rounded-lg shadow-lg hover:shadow-xl transition-all duration-300 transform hover:scale-105 disabled:opacity-75 disabled:cursor-wait"
                >
                    { if dialog.in_flight { "Redirigiendo a pago..." } else { "Pagar y Desbloquear Ahora" } }
                </button>
                if !dialog.in_flight {
                    <button onclick={on_close} class="mt-4 text-slate-500 hover:text-slate-700 transition-colors">
                        { "Quizás más tarde" }
                    </button>
                }
            </div>
        </div>
    }
}
