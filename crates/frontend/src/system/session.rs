use leptos::prelude::*;

/// Session-level actions supplied by the surrounding application.
///
/// Components never construct this themselves; the app shell builds one
/// around whatever sign-out mechanism it owns (API call, token clearing,
/// redirect) and provides it via context.
#[derive(Clone, Copy)]
pub struct SessionActions {
    sign_out: UnsyncCallback<()>,
}

impl SessionActions {
    pub fn new(sign_out: impl Fn() + 'static) -> Self {
        Self {
            sign_out: UnsyncCallback::new(move |()| sign_out()),
        }
    }

    /// Dispatch the sign-out action once, synchronously.
    ///
    /// Any async effect of signing out belongs to the handler the app
    /// registered, not to the caller.
    pub fn sign_out(&self) {
        self.sign_out.run(());
    }
}

/// Register the session actions for the component tree below.
pub fn provide_session(actions: SessionActions) {
    provide_context(actions);
}

/// Hook to access the session actions from any component.
pub fn use_session() -> SessionActions {
    use_context::<SessionActions>().expect("SessionActions not found in component tree")
}
