use crate::auth::use_client;
use crate::components::navbar::Navbar;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas::listing::MENSAJE_ERROR_ESPECIALIDADES;
use medicitas_shared::{Doctor, EspecialidadConDoctores};

#[component]
pub fn EspecialidadesPage() -> impl IntoView {
    let client = use_client();

    let grupos = RwSignal::new(Vec::<EspecialidadConDoctores>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<&'static str>::None);

    let cargar = move || {
        let catalog = client.with_value(|c| c.catalog.clone());
        set_loading.set(true);
        set_error_msg.set(None);
        spawn_local(async move {
            match catalog.especialidades_con_doctores().await {
                Ok(data) => grupos.set(data),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load specialties");
                    set_error_msg.set(Some(MENSAJE_ERROR_ESPECIALIDADES));
                }
            }
            set_loading.set(false);
        });
    };

    cargar();

    view! {
        <Navbar />
        <div class="container mx-auto p-4 space-y-4">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"Especialidades"</h1>
                <button class="btn btn-ghost btn-sm" on:click=move |_| cargar()>"Actualizar"</button>
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
                    grupos
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, grupo)| view! { <GrupoCard idx=idx grupo=grupo grupos=grupos /> })
                        .collect_view()
                }}
            </Show>
        </div>
    }
}

#[component]
fn GrupoCard(
    idx: usize,
    grupo: EspecialidadConDoctores,
    grupos: RwSignal<Vec<EspecialidadConDoctores>>,
) -> impl IntoView {
    let toggle = move |_| {
        grupos.update(|gs| {
            if let Some(g) = gs.get_mut(idx) {
                g.toggle();
            }
        })
    };
    let ver_mas = move |_| {
        grupos.update(|gs| {
            if let Some(g) = gs.get_mut(idx) {
                g.ver_mas_doctores();
            }
        })
    };

    let total = grupo.doctores.len();
    let mostrados = grupo.total_mostrados();
    let expandida = grupo.expandida;
    let tiene_mas = grupo.tiene_mas_doctores();
    let doctores: Vec<Doctor> = grupo.mostrando_doctores().to_vec();

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <div>
                        <h2 class="card-title">{grupo.nombre}</h2>
                        <p class="text-sm text-base-content/70">{grupo.descripcion}</p>
                    </div>
                    <button class="btn btn-outline btn-sm" on:click=toggle>
                        {if expandida { "Ocultar doctores" } else { "Ver doctores" }}
                        <span class="badge">{total}</span>
                    </button>
                </div>

                <Show when=move || expandida>
                    <div class="grid gap-2 md:grid-cols-2 mt-2">
                        {doctores
                            .clone()
                            .into_iter()
                            .map(|d| view! { <DoctorCard doctor=d /> })
                            .collect_view()}
                    </div>
                    <div class="flex justify-between items-center mt-2 text-sm">
                        <span>{format!("Mostrando {} de {}", mostrados, total)}</span>
                        <Show when=move || tiene_mas>
                            <button class="btn btn-link btn-sm" on:click=ver_mas>"Ver más"</button>
                        </Show>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// 医生卡片；点击预约进入挂号页
#[component]
pub fn DoctorCard(doctor: Doctor) -> impl IntoView {
    let router = use_router();
    let destino = format!("/reserva-turno/{}", doctor.id);

    view! {
        <div class="border rounded-box p-3 flex justify-between items-center">
            <div>
                <p class="font-semibold">{doctor.nombre_completo()}</p>
                <p class="text-xs text-base-content/70">
                    {format!("Matrícula {} · {}", doctor.matricula, doctor.especialidad.nombre)}
                </p>
            </div>
            <button class="btn btn-primary btn-sm" on:click=move |_| router.navigate(&destino)>
                "Reservar turno"
            </button>
        </div>
    }
}
