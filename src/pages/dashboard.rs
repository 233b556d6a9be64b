use serde::Deserialize;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::card::Card;
use crate::components::layout::PageShell;
use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Calculator,
    Forms,
    Help,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [DashboardTab::Calculator, DashboardTab::Forms, DashboardTab::Help];

    pub fn key(self) -> &'static str {
        match self {
            DashboardTab::Calculator => "calculator",
            DashboardTab::Forms => "forms",
            DashboardTab::Help => "help",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Calculator => "Tax Calculator",
            DashboardTab::Forms => "Tax Forms",
            DashboardTab::Help => "Help & Resources",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DashboardTab::Calculator => "Calculate your estimated taxes quickly and easily.",
            DashboardTab::Forms => "Access and fill out your Canadian tax forms.",
            DashboardTab::Help => "Find answers to your tax-related questions.",
        }
    }
}

/// Query string accepted by `/dashboard`, e.g. `?tab=forms`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    tab: Option<DashboardTab>,
}

impl DashboardQuery {
    pub fn initial_tab(&self) -> DashboardTab {
        self.tab.unwrap_or_default()
    }
}

/// Tabs whose panel is rendered, which is only ever the active one.
pub fn rendered_panels(active: DashboardTab) -> impl Iterator<Item = DashboardTab> {
    DashboardTab::ALL.into_iter().filter(move |tab| *tab == active)
}

const TAX_FORMS: &[(&str, &str)] = &[
    ("T1 General", "Individual Income Tax Return"),
    ("T2", "Corporation Income Tax Return"),
];

const HELP_LINKS: &[&str] = &["FAQ", "Tax Guide", "Contact Support"];

fn panel_body(tab: DashboardTab) -> Html {
    match tab {
        DashboardTab::Calculator => html! {
            <form class="calculator-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <div class="input-grid">
                    <div class="field">
                        <label for="income">{"Annual Income"}</label>
                        <input id="income" type="number" placeholder="Enter your annual income" />
                    </div>
                    <div class="field">
                        <label for="deductions">{"Total Deductions"}</label>
                        <input id="deductions" type="number" placeholder="Enter total deductions" />
                    </div>
                </div>
                <button type="button" class="primary-button wide">{"🧮 Calculate Taxes"}</button>
            </form>
        },
        DashboardTab::Forms => html! {
            <div class="forms-grid">
                { for TAX_FORMS.iter().map(|(name, subtitle)| html! {
                    <button class="outline-button form-link">
                        <span class="icon">{"📄"}</span>
                        <div>
                            <div class="form-name">{*name}</div>
                            <div class="muted">{*subtitle}</div>
                        </div>
                    </button>
                }) }
            </div>
        },
        DashboardTab::Help => html! {
            <div class="help-list">
                { for HELP_LINKS.iter().map(|label| html! {
                    <button class="outline-button wide">
                        <span class="icon">{"?"}</span>{*label}
                    </button>
                }) }
            </div>
        },
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let location = use_location();
    // An unparsable query (e.g. `?tab=billing`) falls back to the calculator
    let active_tab = use_state(|| {
        location
            .and_then(|location| location.query::<DashboardQuery>().ok())
            .map(|query| query.initial_tab())
            .unwrap_or_default()
    });

    html! {
        <PageShell title="Dashboard" class="dashboard-page">
            <h1 class="dashboard-title">{config::BRAND_NAME}</h1>
            <div class="tabs">
                <div class="tab-list">
                    { for DashboardTab::ALL.into_iter().map(|tab| html! {
                        <button
                            class={classes!("tab-button", (*active_tab == tab).then(|| "active"))}
                            onclick={{
                                let active_tab = active_tab.clone();
                                Callback::from(move |_| {
                                    log::debug!("Dashboard tab selected: {}", tab.key());
                                    active_tab.set(tab);
                                })
                            }}
                        >
                            {tab.label()}
                        </button>
                    }) }
                </div>
                { for rendered_panels(*active_tab).map(|tab| html! {
                    <div class="tab-panel" key={tab.key()}>
                        <Card title={tab.label()} description={tab.description()}>
                            { panel_body(tab) }
                        </Card>
                    </div>
                }) }
            </div>

            <style>
                {r#"
                .dashboard-page {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2rem 1rem;
                }

                .dashboard-title {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .tab-list {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    background: #f3f4f6;
                    border-radius: 0.5rem;
                    padding: 0.25rem;
                    margin-bottom: 1rem;
                }

                .tab-button {
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    border-radius: 0.375rem;
                    cursor: pointer;
                    color: #6b7280;
                }

                .tab-button.active {
                    background: #ffffff;
                    color: #111827;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.1);
                }

                .input-grid, .forms-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .field input {
                    padding: 0.5rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                }

                .primary-button {
                    background: #111827;
                    color: #ffffff;
                    border: none;
                    border-radius: 0.375rem;
                    padding: 0.625rem 1rem;
                    cursor: pointer;
                }

                .outline-button {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #ffffff;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    padding: 0.625rem 1rem;
                    text-align: left;
                    cursor: pointer;
                }

                .form-link {
                    height: 5rem;
                }

                .form-name {
                    font-weight: 600;
                }

                .muted {
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .wide {
                    width: 100%;
                }

                .help-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                "#}
            </style>
        </PageShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_calculator() {
        assert_eq!(DashboardTab::default(), DashboardTab::Calculator);
        assert_eq!(DashboardQuery::default().initial_tab(), DashboardTab::Calculator);
    }

    #[test]
    fn query_selects_initial_tab() {
        let query: DashboardQuery = serde_json::from_str(r#"{"tab":"help"}"#).unwrap();
        assert_eq!(query.initial_tab(), DashboardTab::Help);

        let empty: DashboardQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.initial_tab(), DashboardTab::Calculator);

        assert!(serde_json::from_str::<DashboardQuery>(r#"{"tab":"billing"}"#).is_err());
    }

    #[test]
    fn tab_keys_deserialize_lowercase() {
        let tab: DashboardTab = serde_json::from_str("\"forms\"").unwrap();
        assert_eq!(tab, DashboardTab::Forms);
        for tab in DashboardTab::ALL {
            let parsed: DashboardTab = serde_json::from_str(&format!("\"{}\"", tab.key())).unwrap();
            assert_eq!(parsed, tab);
        }
        assert!(serde_json::from_str::<DashboardTab>("\"Forms\"").is_err());
    }

    #[test]
    fn exactly_one_panel_rendered_per_selection() {
        for active in [DashboardTab::Forms, DashboardTab::Help, DashboardTab::Calculator] {
            let rendered: Vec<_> = rendered_panels(active).collect();
            assert_eq!(rendered, vec![active]);
        }
    }
}
