use crate::auth::use_session;
use dioxus::prelude::*;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, FormField, Input,
    StatusMessage,
};

/// Email/password sign-in. On success the shell switches to the employee's
/// dashboard.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |_: FormEvent| {
        if loading() {
            return;
        }
        let client = session.login_client();
        spawn(async move {
            loading.set(true);
            error_msg.set(String::new());

            match client.login(&email(), &password()).await {
                Ok(user) => {
                    password.set(String::new());
                    session.sign_in(user);
                }
                Err(err) => error_msg.set(err.friendly_message()),
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your employee credentials" }
                }

                CardContent {
                    StatusMessage { message: error_msg() }

                    Form { onsubmit: handle_login,
                        FormField { label: "Email",
                            Input {
                                input_type: "email",
                                value: email(),
                                placeholder: "you@store.com",
                                required: true,
                                on_input: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }
                        FormField { label: "Password",
                            Input {
                                input_type: "password",
                                value: password(),
                                required: true,
                                on_input: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }
                        Button {
                            submit: true,
                            disabled: loading(),
                            class: "auth-submit",
                            if loading() { "Signing in..." } else { "Login" }
                        }
                    }
                }
            }
        }
    }
}
