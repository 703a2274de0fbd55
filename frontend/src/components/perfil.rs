use crate::auth::use_client;
use crate::components::navbar::Navbar;
use crate::components::toast::{Notification, Toast, notification};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas_shared::doctor::ActualizarDoctorRequest;
use medicitas_shared::{Rol, UserProfile};

const SIN_PERFIL: &str = "No se pudo cargar el perfil.";

/// 患者 / 医生首页共用的外壳：资料来自路由进入前的解析结果
#[component]
pub fn PerfilPage(id: String) -> impl IntoView {
    let router = use_router();
    let toast = notification();

    view! {
        <Toast notification=toast />
        <Navbar />
        <div class="container mx-auto p-4 max-w-2xl">
            {move || match router.resolved_profile().get() {
                Some(profile) => {
                    if profile.id != id {
                        tracing::warn!(route_id = %id, profile_id = %profile.id, "profile id differs from route");
                    }
                    view! { <PerfilCard profile=profile toast=toast /> }.into_any()
                }
                None => view! {
                    <div role="alert" class="alert alert-warning"><span>{SIN_PERFIL}</span></div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn PerfilCard(profile: UserProfile, toast: Notification) -> impl IntoView {
    let client = use_client();
    let email = RwSignal::new(profile.email.clone());
    let telefono = RwSignal::new(profile.telefono.clone().unwrap_or_default());
    let (is_saving, set_is_saving) = signal(false);

    let tipo = profile.tipo;
    let id = profile.id.clone();
    let guardar = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_is_saving.set(true);
        let ctx = client.get_value();
        let id = id.clone();
        let (email, telefono) = (email.get_untracked(), telefono.get_untracked());
        spawn_local(async move {
            let result = match tipo {
                Rol::Doctor => {
                    let cambios = ActualizarDoctorRequest {
                        email: Some(email),
                        telefono: Some(telefono),
                        ..Default::default()
                    };
                    ctx.doctores.actualizar(&id, cambios).await
                }
                _ => ctx.pacientes.actualizar(&id, &email, &telefono).await,
            };
            match result {
                Ok(()) => {
                    toast.set(Some(("Datos actualizados.".to_string(), false)));
                    ctx.session.refresh_profile().await;
                }
                Err(e) => toast.set(Some((e.user_message(), true))),
            }
            set_is_saving.set(false);
        });
    };

    let detalle = match (&profile.matricula, &profile.fecha_nacimiento) {
        (Some(matricula), _) => format!("Matrícula: {}", matricula),
        (None, Some(fecha)) => format!("Fecha de nacimiento: {}", fecha.format("%d/%m/%Y")),
        _ => String::new(),
    };

    view! {
        <div class="card bg-base-100 shadow">
            <form class="card-body" on:submit=guardar>
                <h1 class="card-title text-2xl">{profile.nombre_completo()}</h1>
                <p class="text-base-content/70">{format!("DNI {}", profile.dni)}</p>
                <p class="text-base-content/70">{detalle}</p>

                <div class="form-control">
                    <label class="label"><span class="label-text">"Email"</span></label>
                    <input
                        type="email"
                        class="input input-bordered"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">"Teléfono"</span></label>
                    <input
                        type="tel"
                        class="input input-bordered"
                        prop:value=move || telefono.get()
                        on:input=move |ev| telefono.set(event_target_value(&ev))
                    />
                </div>
                <div class="card-actions justify-end mt-4">
                    <button class="btn btn-primary" disabled=move || is_saving.get()>"Guardar"</button>
                </div>
            </form>
        </div>
    }
}
