//! Rendered comprehensive summary: validity badge, title, and markdown
//! sections with nested subsections.

use leptos::prelude::*;

use crate::net::types::{ComprehensiveSummary as Summary, Section};
use crate::util::markdown::render_markdown_html;

/// Full summary card for an accepted topic.
#[component]
pub fn ComprehensiveSummary(summary: Summary, is_valid_topic: bool) -> impl IntoView {
    let title = summary.display_title().to_owned();
    let sections = summary.sections;

    view! {
        <div class="summary">
            <div class="summary__badge-row">
                {if is_valid_topic {
                    view! { <span class="badge badge--ok">"Valid AI Topic"</span> }.into_any()
                } else {
                    view! { <span class="badge badge--error">"Not an AI Topic"</span> }.into_any()
                }}
            </div>

            <article class="summary__card">
                <h1 class="summary__title">{title}</h1>
                {if sections.is_empty() {
                    view! { <p class="summary__empty">"No summary sections available"</p> }.into_any()
                } else {
                    sections
                        .into_iter()
                        .map(|section| view! { <SummarySection section=section/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </article>
        </div>
    }
}

#[component]
fn SummarySection(section: Section) -> impl IntoView {
    let body = render_markdown_html(&section.content);
    let subsections = section.subsections;

    view! {
        <section class="summary__section">
            <h2 class="summary__heading">{section.heading}</h2>
            <div class="summary__body markdown" inner_html=body></div>
            {(!subsections.is_empty())
                .then(|| {
                    view! {
                        <div class="summary__subsections">
                            {subsections
                                .into_iter()
                                .map(|sub| {
                                    let body = render_markdown_html(&sub.content);
                                    view! {
                                        <div class="summary__subsection">
                                            <h3 class="summary__subheading">{sub.heading}</h3>
                                            <div class="summary__body markdown" inner_html=body></div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })}
        </section>
    }
}

/// Placeholder card when the backend returned no summary.
#[component]
pub fn SummaryUnavailable() -> impl IntoView {
    view! {
        <div class="summary summary--unavailable">
            <p class="summary__unavailable-title">"Comprehensive summary not available"</p>
            <p class="summary__unavailable-hint">
                "The AI-generated comprehensive summary could not be generated"
            </p>
        </div>
    }
}
