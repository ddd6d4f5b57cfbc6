use shared::{redirect_for, Credentials, LoginController};
use web_sys::{window, HtmlInputElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::HttpAuthClient;
use crate::components::{ErrorAlert, TextField};
use crate::config::AppConfig;
use crate::session::SessionContext;

type Controller = LoginController<HttpAuthClient, SessionContext>;

fn navigate_to(target: &str) {
    let Some(w) = window() else {
        log::error!("No window to redirect from");
        return;
    };
    if let Err(e) = w.location().set_href(target) {
        log::error!("Redirect to {} failed: {:?}", target, e);
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub config: AppConfig,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let session = use_context::<SessionContext>().unwrap_or_else(|| {
        log::error!("LoginPage rendered outside SessionProvider");
        SessionContext {
            logged_in: Some(false),
            checks: 0,
            refresh: Callback::noop(),
        }
    });
    let location = use_location();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember = use_state(|| Credentials::default().remember);
    let update = use_force_update();

    let controller: std::rc::Rc<Controller> = {
        let login_url = props.config.login_url();
        let session = session.clone();
        use_memo((), move |_| {
            LoginController::new(HttpAuthClient::new(login_url), session)
        })
    };

    // A response that lands after unmount must not touch this page.
    {
        let controller = controller.clone();
        use_effect_with((), move |_| move || controller.detach());
    }

    // Leave as soon as the session says we're in, whether on first load or
    // after the refresh a successful login triggers.
    {
        let query = location
            .map(|l| l.query_str().to_string())
            .unwrap_or_default();
        let default_redirect = props.config.default_redirect.clone();
        let session = session.clone();

        use_effect_with(session.logged_in, move |_| {
            if let Some(target) = redirect_for(&session, &query, &default_redirect) {
                log::info!("Logged in; redirecting to {}", target);
                navigate_to(&target);
            }
            || ()
        });
    }

    // A login the session check didn't confirm hands the form back.
    {
        let controller = controller.clone();
        let update = update.clone();

        use_effect_with((session.logged_in, session.checks), move |(logged_in, _)| {
            if let Some(logged_in) = *logged_in {
                if controller.session_checked(logged_in) {
                    update.force_update();
                }
            }
            || ()
        });
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let on_remember_change = {
        let remember = remember.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            remember.set(input.checked());
        })
    };

    let on_dismiss = {
        let controller = controller.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            controller.dismiss_error();
            update.force_update();
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let email = email.clone();
        let password = password.clone();
        let remember = remember.clone();
        let update = update.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = Credentials::new((*email).clone(), (*password).clone(), *remember);

            let accepted = controller.begin(&credentials);
            update.force_update();
            let Ok(credentials) = accepted else {
                return;
            };

            let controller = controller.clone();
            let update = update.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.finish(credentials).await;
                update.force_update();
            });
        })
    };

    // The form stays hidden while the session check is pending or once we're
    // about to redirect.
    match session.logged_in {
        None => {
            return html! {
                <div class="login-container">
                    <div class="login-card">
                        <p>{ "Loading..." }</p>
                    </div>
                </div>
            };
        }
        Some(true) => {
            return html! {
                <div class="login-container">
                    <div class="login-card">
                        <p>{ "Redirecting..." }</p>
                    </div>
                </div>
            };
        }
        Some(false) => {}
    }

    let form = controller.form();
    let loading = form.is_loading();
    let field_errors = form.field_errors();

    let error_banner = match form.error_message() {
        Some(message) => html! {
            <ErrorAlert message={message} on_close={on_dismiss} />
        },
        None => html! {},
    };

    html! {
        <div class="login-container">
            <div class="login-card">
                <form name="login_form" class="login-form" onsubmit={on_submit} novalidate={true}>
                    <TextField
                        id="email"
                        input_type="email"
                        placeholder="Email"
                        autocomplete="username"
                        value={(*email).clone()}
                        oninput={on_email_input}
                        error={field_errors.email}
                        disabled={loading}
                    />
                    <TextField
                        id="password"
                        input_type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        error={field_errors.password}
                        disabled={loading}
                    />
                    { error_banner }
                    <div class="form-group form-actions">
                        <label class="checkbox">
                            <input
                                type="checkbox"
                                checked={*remember}
                                onchange={on_remember_change}
                                disabled={loading}
                            />
                            { " Remember me" }
                        </label>
                        <button type="submit" class="login-button" disabled={loading}>
                            { if loading { "Logging in..." } else { "Login" } }
                        </button>
                        { "Or " }
                        <a href={props.config.register_url.clone()}>{ "register now!" }</a>
                    </div>
                </form>
            </div>
        </div>
    }
}
