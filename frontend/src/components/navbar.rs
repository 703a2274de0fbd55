use crate::auth::{logout, use_auth, use_client};
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let client = use_client();

    let home = move || auth.profile.with(|p| p.as_ref().map(|p| p.home_path()));

    view! {
        <div class="navbar bg-base-100 shadow-sm">
            <div class="flex-1 gap-2">
                <span class="text-xl font-bold px-2">"MediCitas"</span>
                <Link to="/especialidades" class="btn btn-ghost btn-sm">"Especialidades"</Link>
                <Link to="/doctores" class="btn btn-ghost btn-sm">"Doctores"</Link>
            </div>
            <div class="flex-none gap-2">
                {move || match home() {
                    Some(path) => view! {
                        <Link to=path class="btn btn-ghost btn-sm">"Mi perfil"</Link>
                        <button class="btn btn-outline btn-sm" on:click=move |_| logout(client)>
                            "Cerrar sesión"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <Link to="/login" class="btn btn-primary btn-sm">"Ingresar"</Link>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
