//! Inline detail panels shown while a trigger cell is hovered.

use leptos::prelude::*;
use userboard_core::{AddressPanel, CompanyPanel};

use super::css;
use crate::config::PANEL_TRANSITION_MS;

fn transition_style() -> String {
    format!("animation-duration: {}ms;", PANEL_TRANSITION_MS)
}

#[component]
pub fn AddressDetails(panel: AddressPanel) -> impl IntoView {
    let rows = panel.rows().map(|(label, value)| (label, value.to_string()));

    view! {
        <div class=css::panel style=transition_style()>
            <table class=css::panelTable>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(label, value)| view! {
                            <tr>
                                <th scope="row">{label}</th>
                                <td>{value}</td>
                            </tr>
                        })
                        .collect_view()}
                    <tr>
                        <th scope="row">"Geo:"</th>
                        <td>"Longitude:"</td>
                        <td>{panel.lng}</td>
                    </tr>
                    <tr>
                        <th scope="row"></th>
                        <td>"Latitude:"</td>
                        <td>{panel.lat}</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn CompanyDetails(panel: CompanyPanel) -> impl IntoView {
    view! {
        <div class=css::panel style=transition_style()>
            <table class=css::panelTable>
                <thead>
                    <tr>
                        <th scope="col">{panel.catch_phrase}</th>
                    </tr>
                </thead>
                <tbody>
                    <tr>
                        <td>{panel.bs}</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
