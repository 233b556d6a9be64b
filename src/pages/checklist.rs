use yew::prelude::*;

use crate::checklist::catalog::Catalog;
use crate::checklist::selection::ChecklistSelection;
use crate::components::accordion::AccordionItem;
use crate::components::card::Card;
use crate::components::layout::PageShell;

#[function_component(Checklist)]
pub fn checklist() -> Html {
    let selection = use_state(|| ChecklistSelection::new(Catalog::default()));

    // Report catalog references that will be dropped from the question list
    use_effect_with_deps(
        |_| {
            for (question, doc) in Catalog::default().dangling_references() {
                log::warn!("Question '{}' references unknown document '{}'", question, doc);
            }
            || ()
        },
        (),
    );

    let on_doc_toggle = {
        let selection = selection.clone();
        move |doc_id: &'static str| {
            let selection = selection.clone();
            Callback::from(move |_: Event| {
                let mut next = (*selection).clone();
                match next.toggle_document(doc_id) {
                    Some(checked) => log::debug!("Document {} checked: {}", doc_id, checked),
                    None => log::warn!("Ignoring toggle for unknown document {}", doc_id),
                }
                selection.set(next);
            })
        }
    };

    let on_question_toggle = {
        let selection = selection.clone();
        Callback::from(move |question_id: AttrValue| {
            let mut next = (*selection).clone();
            if next.toggle_question_expanded(&question_id).is_none() {
                log::warn!("Ignoring toggle for unknown question {}", question_id);
            }
            selection.set(next);
        })
    };

    let progress = selection.progress();
    let catalog = selection.catalog();
    let outstanding: Vec<&str> = selection.essential_outstanding().map(|doc| doc.name).collect();

    html! {
        <PageShell title="Document Checklist" class="checklist-page">
            <Card
                class="checklist-card"
                title="Tax Document Checklist"
                description="Ensure you have all the necessary documents for your Canadian personal income tax return."
            >
                <div class="progress-section">
                    <h3 class="gradient-text">{"Document Progress"}</h3>
                    <div class="progress-track">
                        <div class="progress-fill" style={format!("width: {}%;", progress)}></div>
                    </div>
                    <p class="progress-label">
                        {format!("{}% complete", progress)}
                        <span class="progress-count">
                            {format!(" ({} of {} documents)", selection.checked_count(), catalog.documents.len())}
                        </span>
                    </p>
                    if !outstanding.is_empty() {
                        <p class="essential-reminder">
                            {format!("Still missing essentials: {}", outstanding.join(", "))}
                        </p>
                    }
                </div>

                <div class="document-list">
                    { for catalog.documents.iter().map(|doc| html! {
                        <div class="document-row" key={doc.id}>
                            <input
                                type="checkbox"
                                id={doc.id}
                                checked={selection.is_checked(doc.id)}
                                onchange={on_doc_toggle(doc.id)}
                            />
                            <div class="document-text">
                                <label for={doc.id} class={classes!("document-name", doc.essential.then(|| "essential"))}>
                                    {doc.name}
                                    if doc.essential {
                                        <span class="required">{" *"}</span>
                                    }
                                </label>
                                <p class="document-description">{doc.description}</p>
                            </div>
                            if doc.essential {
                                <span class="essential-badge">{"Essential"}</span>
                            }
                        </div>
                    }) }
                </div>

                <div class="questions-section">
                    <h3 class="gradient-text">{"Helpful Questions"}</h3>
                    { for catalog.questions.iter().map(|q| html! {
                        <AccordionItem
                            key={q.id}
                            id={q.id}
                            title={q.question}
                            expanded={selection.is_expanded(q.id)}
                            on_toggle={on_question_toggle.clone()}
                        >
                            <p class="related-intro">{"If yes, make sure you have the following documents:"}</p>
                            <ul class="related-docs">
                                { for selection.documents_for_question(q.id).map(|doc| html! {
                                    <li key={doc.id} class={classes!(selection.is_checked(doc.id).then(|| "gathered"))}>
                                        {doc.name}
                                    </li>
                                }) }
                            </ul>
                        </AccordionItem>
                    }) }
                </div>

                <div class="checklist-footer">
                    <button class="outline-button">{"📄 Save Progress"}</button>
                    <button class="pill-button">{"Continue to Filing"}</button>
                </div>
            </Card>

            <style>
                {r#"
                .checklist-page {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #eff6ff, #ffffff);
                    padding: 3rem 1rem;
                }

                .checklist-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    background: #ffffff;
                    border-radius: 0.75rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.05);
                    padding: 1.5rem;
                }

                .checklist-card > .card-header .card-title {
                    font-size: 1.875rem;
                    font-weight: 700;
                }

                .gradient-text {
                    background: linear-gradient(45deg, #2563eb, #7c3aed);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .progress-section {
                    margin-bottom: 2rem;
                }

                .progress-track {
                    width: 100%;
                    height: 1rem;
                    background: #e5e7eb;
                    border-radius: 9999px;
                    overflow: hidden;
                }

                .progress-fill {
                    height: 100%;
                    background: #2563eb;
                    border-radius: 9999px;
                    transition: width 0.5s ease-out;
                }

                .progress-label, .document-description, .related-intro, .related-docs {
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-top: 0.5rem;
                }

                .essential-reminder {
                    font-size: 0.875rem;
                    color: #b91c1c;
                }

                .document-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .document-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    animation: rise-in 0.3s ease;
                }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .document-text {
                    flex-grow: 1;
                }

                .document-name {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #111827;
                }

                .document-name.essential {
                    color: #2563eb;
                    font-weight: 600;
                }

                .required {
                    color: #ef4444;
                }

                .essential-badge {
                    font-size: 0.75rem;
                    background: #dbeafe;
                    color: #1e40af;
                    padding: 0.25rem 0.5rem;
                    border-radius: 9999px;
                }

                .questions-section {
                    margin-top: 3rem;
                }

                .accordion-item {
                    border-bottom: 1px solid #e5e7eb;
                }

                .accordion-trigger {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }

                .accordion-title {
                    flex-grow: 1;
                }

                .help-icon, .toggle-icon {
                    color: #3b82f6;
                }

                .accordion-content {
                    padding-bottom: 1rem;
                }

                .related-docs li.gathered {
                    text-decoration: line-through;
                    color: #9ca3af;
                }

                .checklist-footer {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 1.5rem;
                }

                .outline-button {
                    font-size: 1.125rem;
                    padding: 1rem 1.5rem;
                    background: #ffffff;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    cursor: pointer;
                }

                .checklist-footer .pill-button {
                    font-size: 1.125rem;
                    padding: 1rem 1.5rem;
                    background: #2563eb;
                    color: #ffffff;
                    font-weight: 700;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .checklist-footer .pill-button:hover {
                    background: #1d4ed8;
                    transform: scale(1.05);
                }
                "#}
            </style>
        </PageShell>
    }
}
