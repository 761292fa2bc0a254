use yew::prelude::*;

use crate::course::Module;
use crate::gate::ModuleAccess;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="bg-slate-800 text-white shadow-lg sticky top-0 z-30">
            <div class="container mx-auto px-6 py-4 flex justify-between items-center">
                <div class="flex items-center space-x-3">
                    <span class="text-3xl text-sky-400">{ "📖" }</span>
                    <div>
                        <h1 class="text-xl md:text-2xl font-bold tracking-tight">{ "Guía de Lenguaje - PCB 2025" }</h1>
                        <p class="text-xs md:text-sm text-slate-300">{ "Universidad de San Carlos de Guatemala" }</p>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct TableOfContentsProps {
    pub entries: Vec<(Module, ModuleAccess)>,
    pub on_unlock_request: Callback<()>,
}

/// Anchor links to every module. Following a locked entry would only land
/// on the placeholder, so it asks for the unlock instead.
#[function_component(TableOfContents)]
pub fn table_of_contents(props: &TableOfContentsProps) -> Html {
    let items = props
        .entries
        .iter()
        .map(|(module, access)| {
            let locked = access.is_locked();
            let onclick = {
                let on_unlock_request = props.on_unlock_request.clone();
                Callback::from(move |e: MouseEvent| {
                    if locked {
                        e.prevent_default();
                        on_unlock_request.emit(());
                    }
                })
            };
            html! {
                <li key={module.id.clone()}>
                    <a
                        href={format!("#{}", module.id)}
                        {onclick}
                        class={classes!(
                            "flex", "items-center", "justify-between", "text-sky-700", "hover:text-sky-500",
                            "hover:underline", "transition-colors", "duration-200",
                            locked.then_some("text-slate-400 hover:text-slate-500 cursor-pointer")
                        )}
                    >
                        <span>{ module.title.clone() }</span>
                        if locked {
                            <span class="w-4 h-4 text-slate-400">{ "🔒" }</span>
                        }
                    </a>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="p-4 rounded-lg shadow-md bg-white">
            <h4 class="text-lg font-bold text-slate-700 border-b pb-2 mb-3">{ "Contenido" }</h4>
            <ul class="space-y-2">{ items }</ul>
        </div>
    }
}
