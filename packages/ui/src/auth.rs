//! Login state in the navigation bar.

use api::auth::{consume_token_from_query, fetch_user_info, link_anonymous_records};
use api::UserInfo;
use dioxus::prelude::*;

use crate::browser;
use crate::icons::{FaComment, FaRightFromBracket};
use crate::services::{use_services, ClientIdentity, Services};
use crate::Icon;

/// Pick up a `?token=` delivered by the OAuth redirect and drop it from the
/// address bar so it does not linger in history.
pub fn consume_token_from_url(identity: &ClientIdentity) {
    if consume_token_from_query(identity, &browser::current_query()) {
        tracing::info!("stored token from login redirect");
        browser::strip_query();
    }
}

/// Forget the token and go home.
pub fn logout(services: &Services) {
    api::auth::logout(&services.identity);
    browser::navigate_to(&services.config.routes.home);
}

/// What the navigation bar shows on the right.
#[derive(Clone, Debug, PartialEq)]
pub enum NavView {
    Login,
    /// `/auth/me` still in flight
    Pending,
    Profile(UserInfo),
}

/// Pick the navigation view from the token state and the user lookup
/// (`None` while the lookup runs, `Some(None)` once it failed).
pub fn nav_view(logged_in: bool, lookup: Option<Option<UserInfo>>) -> NavView {
    if !logged_in {
        return NavView::Login;
    }
    match lookup {
        None => NavView::Pending,
        Some(None) => NavView::Login,
        Some(Some(user)) => NavView::Profile(user),
    }
}

/// Login link or profile badge, depending on the stored token.
#[component]
pub fn NavAuth() -> Element {
    let services = use_services();
    let logged_in = services.identity.is_logged_in();

    let lookup = services.clone();
    let user = use_resource(move || {
        let services = lookup.clone();
        async move {
            let user = fetch_user_info(&services.backend, &services.identity).await?;
            link_anonymous_records(&services.backend, &services.identity, &user).await;
            Some(user)
        }
    });

    let lookup = user.read().clone();
    match nav_view(logged_in, lookup) {
        NavView::Login => rsx! { LoginLink {} },
        NavView::Pending => rsx! {},
        NavView::Profile(user) => rsx! { ProfileBadge { user } },
    }
}

#[component]
pub fn LoginLink() -> Element {
    let services = use_services();
    let href = services.config.routes.login.clone();

    rsx! {
        a {
            class: "btn-kakao",
            href: "{href}",
            Icon { icon: FaComment, width: 14, height: 14 }
            " 로그인"
        }
    }
}

#[component]
fn ProfileBadge(user: UserInfo) -> Element {
    let services = use_services();
    let on_logout = use_callback(move |_: ()| logout(&services));

    rsx! {
        div {
            class: "nav-profile",
            if let Some(src) = user.avatar() {
                img { src: "{src}", alt: "" }
            }
            span { "{user.display_name()}" }
        }
        button {
            class: "btn-logout",
            onclick: move |_| on_logout.call(()),
            Icon { icon: FaRightFromBracket, width: 12, height: 12 }
            " 로그아웃"
        }
    }
}
