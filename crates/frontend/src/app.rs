use leptos::prelude::*;

use crate::shared::components::PageHeader;
use crate::shared::icons::{icon, IconName};
use crate::system::session::{provide_session, SessionActions};

/// Application shell.
///
/// Owns the sign-out capability and hands it to the component tree via
/// context. The handler here only logs; a real deployment wires token
/// clearing and redirect in its place.
#[component]
pub fn App() -> impl IntoView {
    provide_session(SessionActions::new(|| {
        log::info!("sign-out action dispatched");
    }));

    view! {
        <PageHeader title="Fellowship Points".to_string()>
            <button class="page-header__action" title="Notifications">
                {icon(IconName::Bell)}
            </button>
            <div class="page-header__user">
                {icon(IconName::User)}
            </div>
        </PageHeader>
        <main class="page-content"></main>
    }
}
