use leptos::prelude::*;

use crate::shared::icons::{icon, IconName};
use crate::system::session::use_session;

/// PageHeader component - top bar for content pages.
///
/// Left region holds the page title; the right region renders injected
/// children followed by a logout button. The sign-out capability comes
/// from [`SessionActions`](crate::system::session::SessionActions) in
/// context, so the header never owns session behavior itself.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Content for the actions slot, rendered in the order supplied
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let session = use_session();

    // One dispatch per click, no debouncing or confirmation.
    let on_logout = move |_| session.sign_out();

    view! {
        <div class="page-header">
            <div class="page-header__left">
                <div class="page-header__title">{move || title.get()}</div>
            </div>
            <div class="page-header__right">
                <div class="page-header__slot">
                    {children.map(|children| children())}
                </div>
                <button class="page-header__logout" on:click=on_logout title="Sign out">
                    {icon(IconName::LogOut)}
                </button>
            </div>
        </div>
    }
}
