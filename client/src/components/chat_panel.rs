//! Research assistant side panel: RAG status banner, message history, and a
//! question input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends questions for the current RAG session via `POST /api/query-rag` and
//! renders answers as markdown with their cited papers. One query is in
//! flight at a time; the input stays disabled until it settles.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatRole, ChatState, format_source, placeholder};
use crate::util::markdown::render_markdown_html;
use crate::util::scroll::scroll_to_bottom;

/// Chat panel bound to one RAG session.
#[component]
pub fn ChatPanel(session_id: String, rag_ready: bool, rag_progress: Option<String>) -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let session = StoredValue::new(session_id);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.loading;
        scroll_to_bottom(messages_ref);
    });

    let do_send = move || {
        let mut pending = None;
        chat.update(|c| pending = c.begin_query(rag_ready));
        let Some(question) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let session_id = session.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::query_rag(&session_id, &question).await;
                if let Err(e) = &result {
                    log::warn!("rag query failed: {e}");
                }
                chat.update(|c| c.finish_query(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (question, session);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let loading = move || chat.get().loading;
    let can_send = move || chat.get().can_submit(rag_ready);

    view! {
        <aside class="chat-panel">
            <header class="chat-panel__header">
                <h2>"Research Assistant"</h2>
                <p>"Ask questions about the papers"</p>
            </header>

            <RagStatus rag_ready=rag_ready rag_progress=rag_progress/>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return rag_ready
                            .then(|| {
                                view! {
                                    <div class="chat-panel__empty">
                                        <p class="chat-panel__empty-title">"Start a conversation"</p>
                                        <p>"Ask questions about the research papers"</p>
                                    </div>
                                }
                            })
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|message| view! { <MessageBubble message=message/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                {move || {
                    loading()
                        .then(|| {
                            view! {
                                <div class="chat-panel__bubble chat-panel__bubble--assistant chat-panel__loading">
                                    <div class="spinner spinner--small"></div>
                                    <span>"Thinking..."</span>
                                </div>
                            }
                        })
                }}
            </div>

            <form class="chat-panel__form" on:submit=on_submit>
                <textarea
                    class="chat-panel__input"
                    rows="2"
                    placeholder=placeholder(rag_ready)
                    disabled=move || loading() || !rag_ready
                    prop:value=move || chat.get().question
                    on:input=move |ev| chat.update(|c| c.question = event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="btn btn--primary chat-panel__send" type="submit" disabled=move || !can_send()>
                    {move || if loading() { "Processing..." } else { "Send Message" }}
                </button>
            </form>
            <p class="chat-panel__hint">"Press Enter to send, Shift+Enter for new line"</p>
        </aside>
    }
}

/// Banner showing whether the RAG index is still building.
#[component]
fn RagStatus(rag_ready: bool, rag_progress: Option<String>) -> impl IntoView {
    if rag_ready {
        return view! {
            <div class="rag-status rag-status--ready">
                <p>"RAG System Active - Ready for questions!"</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="rag-status rag-status--building">
            <div class="spinner spinner--small"></div>
            <div>
                <p class="rag-status__title">"Building knowledge base..."</p>
                {rag_progress.map(|progress| view! { <p class="rag-status__progress">{progress}</p> })}
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let ChatMessage { role, content, sources, error } = message;

    if role == ChatRole::User {
        return view! {
            <div class="chat-panel__row chat-panel__row--user">
                <div class="chat-panel__bubble chat-panel__bubble--user">{content}</div>
            </div>
        }
        .into_any();
    }

    let rendered = render_markdown_html(&content);
    view! {
        <div class="chat-panel__row chat-panel__row--assistant">
            <div class="chat-panel__bubble chat-panel__bubble--assistant" class:chat-panel__bubble--error=error>
                <div class="markdown" inner_html=rendered></div>
                {(!sources.is_empty())
                    .then(|| {
                        view! {
                            <div class="chat-panel__sources">
                                <p class="chat-panel__sources-title">"Sources:"</p>
                                {sources
                                    .iter()
                                    .map(|source| view! { <div class="chat-panel__source">{format_source(source)}</div> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
    .into_any()
}
