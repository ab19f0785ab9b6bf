//! Users table and its rows.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use userboard_core::render::{ADDRESS_TRIGGER_LABEL, COLUMNS};
use userboard_core::{DetailCategory, HoverSelection, User, UserRow};

use super::css;
use super::details::{AddressDetails, CompanyDetails};
use crate::components::icons as ic;

#[component]
pub fn UsersTable(users: Vec<User>, hover: RwSignal<HoverSelection>) -> impl IntoView {
    view! {
        <div class=css::card>
            <div class=css::tableWrap>
                <table class=css::table>
                    <thead>
                        <tr>
                            {COLUMNS
                                .iter()
                                .map(|title| view! { <th scope="col">{*title}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.clone()
                            key=|user| user.id
                            children=move |user| view! { <UserRowView user=user hover=hover /> }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// One user row with its two hover triggers.
#[component]
fn UserRowView(user: User, hover: RwSignal<HoverSelection>) -> impl IntoView {
    let id = user.id;
    let cells = UserRow::new(&user, HoverSelection::default());

    // Only rows whose panels actually change are notified.
    let panels = Memo::new(move |_| {
        let row = UserRow::new(&user, hover.get());
        (row.address_panel, row.company_panel)
    });

    let on_address_enter =
        move |_: MouseEvent| hover.update(|h| h.enter(DetailCategory::Address, id));
    let on_address_leave = move |_: MouseEvent| hover.update(|h| h.leave(DetailCategory::Address));
    let on_company_enter =
        move |_: MouseEvent| hover.update(|h| h.enter(DetailCategory::Company, id));
    let on_company_leave = move |_: MouseEvent| hover.update(|h| h.leave(DetailCategory::Company));

    let address_panel = move || {
        panels
            .with(|(address, _)| address.clone())
            .map(|panel| view! { <AddressDetails panel=panel /> })
    };
    let company_panel = move || {
        panels
            .with(|(_, company)| company.clone())
            .map(|panel| view! { <CompanyDetails panel=panel /> })
    };

    view! {
        <tr>
            <th scope="row">{cells.id.to_string()}</th>
            <td>{cells.name}</td>
            <td>{cells.username}</td>
            <td>{cells.email}</td>
            <td>{cells.phone}</td>
            <td>
                <a class=css::link href=cells.website.href>{cells.website.text}</a>
            </td>
            <td
                class=css::trigger
                on:mouseenter=on_address_enter
                on:mouseleave=on_address_leave
            >
                <span class=css::triggerIcon aria-hidden="true"><Icon icon=ic::LOCATION /></span>
                {ADDRESS_TRIGGER_LABEL}
                {address_panel}
            </td>
            <td
                class=css::trigger
                on:mouseenter=on_company_enter
                on:mouseleave=on_company_leave
            >
                <span class=css::triggerIcon aria-hidden="true"><Icon icon=ic::COMPANY /></span>
                {cells.company_name}
                {company_panel}
            </td>
        </tr>
    }
}
