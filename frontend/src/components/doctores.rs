use crate::auth::use_client;
use crate::components::especialidades::DoctorCard;
use crate::components::navbar::Navbar;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas::listing::MENSAJE_ERROR_DOCTORES;
use medicitas_shared::{DoctorListState, Especialidad};

/// 医生列表：按姓名与专科过滤，"Ver más" 追加一页
#[component]
pub fn DoctoresPage() -> impl IntoView {
    let client = use_client();
    let page_size = client.with_value(|c| c.catalog.page_size());

    let estado = RwSignal::new(DoctorListState::new(page_size));
    let especialidades = RwSignal::new(Vec::<Especialidad>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<&'static str>::None);

    let catalog = client.with_value(|c| c.catalog.clone());
    spawn_local(async move {
        match catalog.lista_doctores().await {
            Ok((state, lista)) => {
                estado.set(state);
                especialidades.set(lista);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load doctors");
                set_error_msg.set(Some(MENSAJE_ERROR_DOCTORES));
            }
        }
        set_loading.set(false);
    });

    view! {
        <Navbar />
        <div class="container mx-auto p-4 space-y-4">
            <h1 class="text-2xl font-bold">"Doctores"</h1>

            <div class="flex flex-col md:flex-row gap-2">
                <input
                    type="search"
                    class="input input-bordered flex-1"
                    placeholder="Buscar por nombre o apellido"
                    on:input=move |ev| estado.update(|s| s.set_busqueda(event_target_value(&ev)))
                />
                <select
                    class="select select-bordered"
                    on:change=move |ev| estado.update(|s| s.set_especialidad(event_target_value(&ev)))
                >
                    <option value="">"Todas las especialidades"</option>
                    <For
                        each=move || especialidades.get()
                        key=|e| e.id.clone()
                        children=|e| view! { <option value=e.id.clone()>{e.nombre.clone()}</option> }
                    />
                </select>
            </div>

            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg text-primary"></span> }
            >
                {move || {
                    estado
                        .with(|s| s.mensaje_info())
                        .filter(|_| error_msg.get().is_none())
                        .map(|mensaje| view! {
                            <div role="alert" class="alert alert-info"><span>{mensaje}</span></div>
                        })
                }}
                <div class="grid gap-2 md:grid-cols-2">
                    {move || {
                        estado
                            .with(|s| s.displayed().to_vec())
                            .into_iter()
                            .map(|d| view! { <DoctorCard doctor=d /> })
                            .collect_view()
                    }}
                </div>
                <Show when=move || estado.with(|s| s.tiene_mas_doctores())>
                    <div class="text-center">
                        <button
                            class="btn btn-outline"
                            on:click=move |_| {
                                estado.update(|s| {
                                    s.ver_mas();
                                })
                            }
                        >
                            "Ver más"
                        </button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
