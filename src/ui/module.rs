use yew::prelude::*;

use crate::course::Module;
use crate::gate::ModuleAccess;
use crate::ui::lesson::LessonPanel;

#[derive(Properties, PartialEq)]
pub struct ModuleContainerProps {
    pub module: Module,
    pub access: ModuleAccess,
    pub on_unlock_request: Callback<()>,
}

#[function_component(ModuleContainer)]
pub fn module_container(props: &ModuleContainerProps) -> Html {
    let module = &props.module;

    // Locked content is never rendered, not even hidden.
    if props.access.is_locked() {
        let onclick = props.on_unlock_request.reform(|_: MouseEvent| ());
        return html! {
            <div id={module.id.clone()} class="scroll-mt-20 p-6 rounded-lg bg-slate-100 border border-slate-300 my-8 relative text-center">
                <div class="absolute inset-0 bg-white/70 backdrop-blur-sm z-10"></div>
                <div class="relative z-20 flex flex-col items-center justify-center h-full p-8">
                    <span class="text-6xl text-slate-400 mb-4">{ "🔒" }</span>
                    <h2 class="text-3xl font-bold text-slate-600">{ module.title.clone() }</h2>
                    <p class="text-slate-500 mt-2">{ "Este módulo está bloqueado." }</p>
                    <button
                        {onclick}
                        class="mt-6 bg-gradient-to-r from-sky-500 to-indigo-500 text-white font-bold py-3 px-8 rounded-full shadow-lg hover:shadow-xl transition-all duration-300 transform hover:scale-105"
                    >
                        { "Desbloquear Todos los Módulos" }
                    </button>
                </div>
            </div>
        };
    }

    html! {
        <div id={module.id.clone()} class="my-8 scroll-mt-20">
            <div class="p-6 rounded-t-lg bg-slate-700 text-white">
                <h2 class="text-3xl font-extrabold tracking-tight">{ module.title.clone() }</h2>
            </div>
            <div class="bg-white p-2 md:p-6 rounded-b-lg shadow-lg">
                { for module.lessons.iter().map(|lesson| html! {
                    <LessonPanel key={lesson.id.clone()} lesson={lesson.clone()} />
                }) }
                if module.lessons.is_empty() {
                    <p class="text-slate-500 p-4">{ "Contenido próximamente..." }</p>
                }
            </div>
        </div>
    }
}
