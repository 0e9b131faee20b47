//! Research page: topic entry, then summary, papers, and chat for the
//! accepted topic.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::comprehensive_summary::{ComprehensiveSummary, SummaryUnavailable};
use crate::components::papers_list::PapersList;
use crate::components::topic_input::TopicInput;
use crate::state::research::{ResearchState, View};
use crate::state::topic_form::TopicFormState;

/// Root page of the app. Switches between the topic form and the results.
#[component]
pub fn ResearchPage() -> impl IntoView {
    let research = expect_context::<RwSignal<ResearchState>>();
    let form = expect_context::<RwSignal<TopicFormState>>();

    let on_submit = Callback::new(move |()| submit_topic(research, form));

    let on_new_search = Callback::new(move |()| {
        research.update(ResearchState::new_search);
        form.set(TopicFormState::default());
    });

    // Error changes must not remount the form.
    let shown = Memo::new(move |_| research.with(|r| (r.view == View::Results).then(|| r.clone())));

    view! {
        <div class="research-page">
            {move || match shown.get() {
                Some(state) => {
                    view! { <ResultsView state=state on_new_search=on_new_search/> }.into_any()
                }
                None => view! { <TopicInput on_submit=on_submit/> }.into_any(),
            }}
        </div>
    }
}

/// Validate the form topic and send it. Blank input stops at the form.
fn submit_topic(research: RwSignal<ResearchState>, form: RwSignal<TopicFormState>) {
    let mut pending = None;
    form.update(|f| pending = f.begin_submit());
    let Some(topic) = pending else {
        return;
    };
    research.update(|r| r.error.clear());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::process_topic(&topic).await;
        if let Err(e) = &outcome {
            log::warn!("process-topic failed: {e}");
        }
        research.update(|r| match outcome {
            Ok(resp) => r.apply_process_result(resp),
            Err(e) => r.apply_failure(&e),
        });
        let error = research.get_untracked().error;
        form.update(|f| f.finish_submit(if error.is_empty() { Ok(()) } else { Err(error) }));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = topic;
    }
}

/// Results layout: summary and papers in the main column, chat on the side.
#[component]
fn ResultsView(state: ResearchState, on_new_search: Callback<()>) -> impl IntoView {
    let session = state.chat_session();
    let has_chat = session.is_some();
    let is_valid_topic = state.results.as_ref().is_some_and(|r| r.is_valid_ai_topic);
    let comprehensive_summary = state.summary().cloned();
    let papers = state.papers().to_vec();

    view! {
        <div class="results-layout" class:results-layout--with-chat=has_chat>
            <main class="results-layout__main">
                <div class="results-layout__toolbar">
                    <button class="btn" on:click=move |_| on_new_search.run(())>
                        "New Search"
                    </button>
                </div>

                {match comprehensive_summary {
                    Some(summary) => {
                        view! { <ComprehensiveSummary summary=summary is_valid_topic=is_valid_topic/> }.into_any()
                    }
                    None => view! { <SummaryUnavailable/> }.into_any(),
                }}

                <PapersList papers=papers/>
            </main>

            {session
                .map(|s| {
                    view! {
                        <ChatPanel session_id=s.session_id rag_ready=s.rag_ready rag_progress=s.rag_progress/>
                    }
                })}
        </div>
    }
}
