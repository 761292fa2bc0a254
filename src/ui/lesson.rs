use yew::prelude::*;

use crate::course::Lesson;
use crate::quiz::{OptionFeedback, Quiz, QuizSession};

#[derive(Properties, PartialEq)]
pub struct LessonPanelProps {
    pub lesson: Lesson,
}

#[function_component(LessonPanel)]
pub fn lesson_panel(props: &LessonPanelProps) -> Html {
    let lesson = &props.lesson;
    let expanded = use_state(|| false);
    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    // exampleHtml is authored with the course, never user input
    let example = Html::from_html_unchecked(AttrValue::from(lesson.example_html.clone()));

    html! {
        <div id={lesson.id.clone()} class="bg-sky-50 border-l-4 border-sky-500 p-6 rounded-r-lg my-6 shadow-sm scroll-mt-20">
            <button onclick={toggle} class="w-full flex justify-between items-center text-left">
                <h3 class="text-xl font-bold text-sky-800">{ lesson.title.clone() }</h3>
                <span class={classes!("text-sky-700", "transition-transform", "duration-300", (*expanded).then_some("rotate-180"))}>
                    { "▾" }
                </span>
            </button>
            // collapsed panels stay mounted so quiz answers survive a toggle
            <div class={classes!("overflow-hidden", if *expanded { "mt-4" } else { "hidden" })}>
                <div class="prose max-w-none prose-slate">
                    <p><strong>{ "Contenido Declarativo:" }</strong>{ " " }{ lesson.declarative_content.clone() }</p>
                    <p><strong>{ "Contenido Procedimental:" }</strong>{ " " }{ lesson.procedural_content.clone() }</p>
                    <div class="bg-green-50 border border-green-200 p-4 rounded-lg my-4">{ example }</div>
                </div>
                if let Some(quiz) = lesson.active_quiz() {
                    <QuizPanel quiz={quiz.clone()} />
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizPanelProps {
    pub quiz: Quiz,
}

fn option_classes(feedback: OptionFeedback) -> Classes {
    match feedback {
        OptionFeedback::Neutral => classes!("bg-white", "hover:bg-slate-100"),
        OptionFeedback::Selected => classes!("bg-sky-100", "ring-2", "ring-sky-300"),
        OptionFeedback::Correct => classes!("bg-green-100", "border-l-4", "border-green-500"),
        OptionFeedback::Incorrect => classes!("bg-red-100", "border-l-4", "border-red-500"),
    }
}

#[function_component(QuizPanel)]
pub fn quiz_panel(props: &QuizPanelProps) -> Html {
    let session = use_state(QuizSession::new);

    let on_verify = {
        let session = session.clone();
        let quiz = props.quiz.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.verify(&quiz);
            session.set(next);
        })
    };

    let questions = props
        .quiz
        .questions
        .iter()
        .map(|question| {
            let marker = match session.outcome(&question.id) {
                Some(true) => html! { <span class="text-green-600 font-bold">{ "✓" }</span> },
                Some(false) => html! { <span class="text-red-600 font-bold">{ "✗" }</span> },
                None => html! {},
            };
            let options = question
                .options
                .iter()
                .map(|option| {
                    let feedback = session.feedback(question, &option.id);
                    let onchange = {
                        let session = session.clone();
                        let question_id = question.id.clone();
                        let option_id = option.id.clone();
                        Callback::from(move |_: Event| {
                            let mut next = (*session).clone();
                            next.select(&question_id, &option_id);
                            session.set(next);
                        })
                    };
                    let text_class = if feedback == OptionFeedback::Correct {
                        "font-bold text-green-800"
                    } else {
                        "text-slate-700"
                    };
                    html! {
                        <label key={option.id.clone()} class={classes!("block", "p-3", "rounded-md", "transition-all", "duration-200", "cursor-pointer", option_classes(feedback))}>
                            <input
                                type="radio"
                                name={question.id.clone()}
                                value={option.id.clone()}
                                checked={session.selected(&question.id) == Some(option.id.as_str())}
                                {onchange}
                                class="mr-3"
                            />
                            <span class={text_class}>{ option.text.clone() }</span>
                        </label>
                    }
                })
                .collect::<Html>();

            html! {
                <div key={question.id.clone()}>
                    <div class="flex items-start justify-between">
                        <p class="font-semibold text-slate-800 mb-2">{ question.question.clone() }</p>
                        { marker }
                    </div>
                    <div class="space-y-2 pl-4">{ options }</div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="bg-yellow-50 border border-yellow-200 p-6 rounded-lg my-4">
            <h4 class="text-lg font-bold text-slate-700 mb-4">{ "Quiz" }</h4>
            <div class="space-y-6">{ questions }</div>
            if session.all_correct(&props.quiz) {
                <p class="mt-4 text-green-700 font-semibold">{ "¡Todas las respuestas son correctas!" }</p>
            }
            <button
                onclick={on_verify}
                class="mt-6 w-full bg-sky-600 text-white font-bold py-2 px-4 rounded-lg hover:bg-sky-700 focus:outline-none focus:ring-2 focus:ring-sky-500 focus:ring-opacity-50 transition-transform transform hover:scale-105"
            >
                { "Verificar respuestas" }
            </button>
        </div>
    }
}
