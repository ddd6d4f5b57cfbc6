use shared::SessionHandle;
use yew::prelude::*;

use crate::api::fetch_logged_in;
use crate::config::AppConfig;

/// App-wide authentication state handed to pages through context.
///
/// `logged_in` is `None` until the first check against the server finishes.
/// `checks` ticks on every refresh that completes, even when `logged_in`
/// comes back unchanged.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub logged_in: Option<bool>,
    pub checks: u32,
    pub refresh: Callback<()>,
}

#[derive(Clone, Copy, PartialEq)]
struct SessionCheck {
    logged_in: Option<bool>,
    generation: u32,
}

impl SessionHandle for SessionContext {
    fn is_logged_in(&self) -> bool {
        self.logged_in.unwrap_or(false)
    }

    fn refresh(&self) {
        self.refresh.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub config: AppConfig,
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let check = use_state(|| SessionCheck {
        logged_in: None,
        generation: 0,
    });
    let refresh_trigger = use_state(|| 0u32);
    let refresh_count = use_mut_ref(|| 0u32);

    {
        let check = check.clone();
        let session_url = props.config.session_url();
        let refresh = *refresh_trigger;

        use_effect_with(refresh, move |generation| {
            let generation = *generation;
            wasm_bindgen_futures::spawn_local(async move {
                let now_logged_in = fetch_logged_in(&session_url).await;
                log::debug!("Session check: logged_in={}", now_logged_in);
                check.set(SessionCheck {
                    logged_in: Some(now_logged_in),
                    generation,
                });
            });
            || ()
        });
    }

    let refresh = {
        let refresh_trigger = refresh_trigger.clone();
        // Callers may hold an older clone of this callback, so count outside the state handle.
        Callback::from(move |_: ()| {
            let mut count = refresh_count.borrow_mut();
            *count = count.wrapping_add(1);
            refresh_trigger.set(*count);
        })
    };

    let context = SessionContext {
        logged_in: check.logged_in,
        checks: check.generation,
        refresh,
    };

    html! {
        <ContextProvider<SessionContext> {context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}
