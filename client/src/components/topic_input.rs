//! Topic entry card: the first screen of the research flow.

use leptos::prelude::*;

use crate::components::backend_status::BackendStatus;
use crate::state::topic_form::TopicFormState;

/// Topic form with loading hint and error box.
///
/// Reads and writes the shared `TopicFormState`; submission itself is owned by
/// the page via `on_submit`.
#[component]
pub fn TopicInput(on_submit: Callback<()>) -> impl IntoView {
    let form = expect_context::<RwSignal<TopicFormState>>();

    let loading = move || form.get().loading;

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="topic-page">
            <div class="topic-card">
                <h1 class="topic-card__title">"AI Research Paper Analysis"</h1>
                <p class="topic-card__subtitle">
                    "Enter an AI technology topic to discover and analyze the latest research papers"
                </p>

                <form class="topic-form" on:submit=handle_submit>
                    <label class="topic-form__label">
                        "AI Technology Topic"
                        <input
                            class="topic-form__input"
                            type="text"
                            placeholder="e.g., Transformer Architecture, RAG Systems, LLM Fine-tuning"
                            disabled=loading
                            prop:value=move || form.get().topic
                            on:input=move |ev| form.update(|f| f.topic = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary topic-form__submit" type="submit" disabled=loading>
                        {move || if loading() { "Processing..." } else { "Analyze Research Papers" }}
                    </button>
                </form>

                <Show when=loading>
                    <div class="topic-card__loading">
                        <div class="spinner"></div>
                        <p>
                            "Validating topic, fetching papers, and generating comprehensive analysis..."
                            <br/>
                            "This may take 30-60 seconds."
                        </p>
                    </div>
                </Show>

                <Show when=move || !form.get().error.is_empty()>
                    <div class="error-box">
                        <p class="error-box__title">"Error"</p>
                        <p class="error-box__message">{move || form.get().error}</p>
                    </div>
                </Show>

                <BackendStatus/>
            </div>
        </div>
    }
}
