//! Pure mapping from view state to what the users view displays.
//!
//! [`render`] has no side effects and no hidden state: equal inputs always
//! produce equal [`Screen`]s. The browser component only turns a `Screen`
//! into DOM nodes.

use crate::hover::{DetailCategory, HoverSelection};
use crate::model::{User, UserId};
use crate::state::ViewState;

/// Text of the loading indicator.
pub const LOADING_TEXT: &str = "Loading...";

/// Table header labels, in column order.
pub const COLUMNS: [&str; 8] = [
    "ID", "NAME", "USERNAME", "EMAIL", "PHONE", "WEBSITE", "ADDRESS", "COMPANY",
];

/// Label of the address trigger cell.
pub const ADDRESS_TRIGGER_LABEL: &str = "Hover for Address";

/// One of the three mutually exclusive views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Error(String),
    Table(Vec<UserRow>),
}

/// Website cell: raw text plus the link target derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebsiteLink {
    pub href: String,
    pub text: String,
}

impl WebsiteLink {
    pub fn new(raw: &str) -> Self {
        Self {
            href: website_href(raw),
            text: raw.to_string(),
        }
    }
}

/// Link target for a website string: unchanged when it already starts with
/// `http`, otherwise prefixed with `https://`.
pub fn website_href(raw: &str) -> String {
    if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

/// Expanded address details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressPanel {
    pub city: String,
    pub zipcode: String,
    pub street: String,
    pub suite: String,
    pub lng: String,
    pub lat: String,
}

impl AddressPanel {
    fn from_user(user: &User) -> Self {
        let address = &user.address;
        Self {
            city: address.city.clone(),
            zipcode: address.zipcode.clone(),
            street: address.street.clone(),
            suite: address.suite.clone(),
            lng: address.geo.lng.clone(),
            lat: address.geo.lat.clone(),
        }
    }

    /// Labelled single-value rows, in display order. Geo is rendered
    /// separately as a longitude/latitude pair.
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("City:", self.city.as_str()),
            ("Zip:", self.zipcode.as_str()),
            ("Street:", self.street.as_str()),
            ("Suite:", self.suite.as_str()),
        ]
    }
}

/// Expanded company details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyPanel {
    pub catch_phrase: String,
    pub bs: String,
}

/// One table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: WebsiteLink,
    /// Text of the company trigger cell.
    pub company_name: String,
    pub address_panel: Option<AddressPanel>,
    pub company_panel: Option<CompanyPanel>,
}

impl UserRow {
    pub fn new(user: &User, hover: HoverSelection) -> Self {
        let address_panel = hover
            .is_open(DetailCategory::Address, user.id)
            .then(|| AddressPanel::from_user(user));
        let company_panel = hover
            .is_open(DetailCategory::Company, user.id)
            .then(|| CompanyPanel {
                catch_phrase: user.company.catch_phrase.clone(),
                bs: user.company.bs.clone(),
            });

        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: WebsiteLink::new(&user.website),
            company_name: user.company.name.clone(),
            address_panel,
            company_panel,
        }
    }
}

/// Map the current state and hover selection to a [`Screen`].
pub fn render(state: &ViewState, hover: HoverSelection) -> Screen {
    match state {
        ViewState::Loading => Screen::Loading,
        ViewState::Error(msg) => Screen::Error(msg.clone()),
        ViewState::Loaded(users) => Screen::Table(
            users
                .iter()
                .map(|user| UserRow::new(user, hover))
                .collect(),
        ),
    }
}
