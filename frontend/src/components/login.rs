use crate::auth::{login, use_auth, use_client};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas::forms::LoginForm;
use medicitas_shared::Rol;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = use_client();
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(LoginForm::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let datos = form.get_untracked();
        spawn_local(async move {
            match login(client, datos).await {
                Ok(profile) => router.navigate(&profile.home_path()),
                Err(e) => set_error_msg.set(Some(e.user_message())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Show
            when=move || auth.initialized.get()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content flex-col w-full max-w-md">
                    <div class="text-center mb-4">
                        <h1 class="text-3xl font-bold">"MediCitas"</h1>
                        <p class="text-base-content/70">"Ingrese sus datos para continuar"</p>
                    </div>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            <Show when=move || error_msg.get().is_some()>
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                                </div>
                            </Show>

                            <div class="join w-full">
                                {Rol::ALL
                                    .into_iter()
                                    .map(|rol| {
                                        view! {
                                            <input
                                                class="join-item btn flex-1"
                                                type="radio"
                                                name="tipo"
                                                aria-label=rol.label()
                                                prop:checked=move || form.with(|f| f.tipo == Some(rol))
                                                on:change=move |_| form.update(|f| f.tipo = Some(rol))
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="form-control">
                                <label class="label" for="dni">
                                    <span class="label-text">"DNI"</span>
                                </label>
                                <input
                                    id="dni"
                                    type="text"
                                    inputmode="numeric"
                                    placeholder="12345678"
                                    on:input=move |ev| form.update(|f| f.dni = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.dni.clone())
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Contraseña"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.password.clone())
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Ingresando..." }.into_any()
                                    } else {
                                        "Ingresar".into_any()
                                    }}
                                </button>
                            </div>
                            <p class="text-sm text-center mt-2">
                                "¿No tiene cuenta? "
                                <Link to="/registro-paciente" class="link link-primary">"Regístrese como paciente"</Link>
                            </p>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
