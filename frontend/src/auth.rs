use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info};
use shared::auth::{authenticate, validate_registration};
use shared::{LoginRequest, RegisterRequest};
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::config::Config;

/// In-memory stand-in for a signed-in session. Lost on reload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub email: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.email.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    Submitted,
    SignedIn { email: String },
    Rejected(String),
    ClearError,
    SignOut,
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Submitted => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            SessionAction::SignedIn { email } => Rc::new(Self {
                email: Some(email),
                loading: false,
                error: None,
            }),
            SessionAction::Rejected(error) => Rc::new(Self {
                email: None,
                loading: false,
                error: Some(error),
            }),
            SessionAction::ClearError => Rc::new(Self {
                error: None,
                ..(*self).clone()
            }),
            SessionAction::SignOut => Rc::new(Self::default()),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthContext {
    pub state: SessionState,
    pub login: Callback<LoginRequest>,
    pub register: Callback<RegisterRequest>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let session = use_reducer_eq(SessionState::default);

    // The credential check runs only once the simulated delay has passed.
    let login = {
        let session = session.clone();
        Callback::from(move |request: LoginRequest| {
            session.dispatch(SessionAction::Submitted);
            let session = session.clone();
            Timeout::new(Config::simulated_latency_ms(), move || {
                match authenticate(&request) {
                    Ok(()) => session.dispatch(SessionAction::SignedIn { email: request.email }),
                    Err(e) => session.dispatch(SessionAction::Rejected(e.to_string())),
                }
            })
            .forget();
        })
    };

    // Form errors surface immediately; a valid form still waits out the delay.
    let register = {
        let session = session.clone();
        Callback::from(move |request: RegisterRequest| {
            if let Err(e) = validate_registration(&request) {
                debug!("Registration rejected: {}", e);
                session.dispatch(SessionAction::Rejected(e.to_string()));
                return;
            }
            session.dispatch(SessionAction::Submitted);
            let session = session.clone();
            Timeout::new(Config::simulated_latency_ms(), move || {
                info!("Registered mock account for {}", request.email);
                session.dispatch(SessionAction::SignedIn { email: request.email });
            })
            .forget();
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            info!("Signed out");
            session.dispatch(SessionAction::SignOut);
        })
    };

    let clear_error = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::ClearError))
    };

    let context = AuthContext {
        state: (*session).clone(),
        login,
        register,
        logout,
        clear_error,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reduce(state: SessionState, action: SessionAction) -> SessionState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_submit_sets_loading_and_clears_error() {
        let state = SessionState {
            error: Some("Invalid email or password".to_string()),
            ..Default::default()
        };
        let state = reduce(state, SessionAction::Submitted);
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_sign_in_then_out() {
        let state = reduce(SessionState::default(), SessionAction::Submitted);
        let state = reduce(
            state,
            SessionAction::SignedIn {
                email: "player@example.com".to_string(),
            },
        );
        assert!(state.is_signed_in());
        assert!(!state.loading);
        assert_eq!(reduce(state, SessionAction::SignOut), SessionState::default());
    }

    #[test]
    fn test_rejection_keeps_user_signed_out() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Rejected("Invalid email or password".to_string()),
        );
        assert!(!state.is_signed_in());
        assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
        assert_eq!(reduce(state, SessionAction::ClearError).error, None);
    }
}
