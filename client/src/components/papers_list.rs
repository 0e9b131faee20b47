//! Accordion of source papers. Each row expands to show the abstract and an
//! arXiv link.

use leptos::prelude::*;

use crate::net::types::Paper;
use crate::state::papers::ExpandedPapers;

/// Papers accordion; renders nothing for an empty list.
#[component]
pub fn PapersList(papers: Vec<Paper>) -> impl IntoView {
    let expanded = RwSignal::new(ExpandedPapers::default());
    let count = papers.len();

    (count > 0).then(move || {
        view! {
            <div class="papers">
                <h2 class="papers__title">{format!("Research Papers ({count})")}</h2>
                <div class="papers__list">
                    {papers
                        .into_iter()
                        .enumerate()
                        .map(|(index, paper)| view! { <PaperRow index=index paper=paper expanded=expanded/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
    })
}

#[component]
fn PaperRow(index: usize, paper: Paper, expanded: RwSignal<ExpandedPapers>) -> impl IntoView {
    let is_expanded = move || expanded.get().is_expanded(index);
    let Paper { title, authors, abstract_text, arxiv_id, url, .. } = paper;

    view! {
        <div class="paper-card" class:paper-card--expanded=is_expanded>
            <div class="paper-card__header" on:click=move |_| expanded.update(|e| e.toggle(index))>
                <div class="paper-card__heading">
                    <h3 class="paper-card__title">{title}</h3>
                    <p class="paper-card__authors">{authors}</p>
                </div>
                <svg class="paper-card__chevron" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d=move || if is_expanded() { "M5 15l7-7 7 7" } else { "M19 9l-7 7-7-7" }
                    ></path>
                </svg>
            </div>

            {move || {
                is_expanded()
                    .then(|| {
                        view! {
                            <div class="paper-card__body">
                                <p class="paper-card__abstract">{abstract_text.clone()}</p>
                                <div class="paper-card__meta">
                                    <span class="paper-card__arxiv">{format!("arXiv: {arxiv_id}")}</span>
                                    <a
                                        class="paper-card__link"
                                        href=url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "View on arXiv"
                                    </a>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
