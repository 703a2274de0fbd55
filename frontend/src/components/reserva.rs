use crate::auth::use_client;
use crate::components::navbar::Navbar;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas_shared::Doctor;

/// 预约入口：展示所选医生，挂号流程由后端页面承接
#[component]
pub fn ReservaTurnoPage(doctor_id: String) -> impl IntoView {
    let client = use_client();
    let doctor = RwSignal::new(Option::<Doctor>::None);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let servicio = client.with_value(|c| c.doctores.clone());
    spawn_local(async move {
        match servicio.get(&doctor_id).await {
            Ok(d) => doctor.set(Some(d)),
            Err(e) => set_error_msg.set(Some(e.user_message())),
        }
    });

    view! {
        <Navbar />
        <div class="container mx-auto p-4 max-w-xl">
            <Show when=move || error_msg.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error_msg.get().unwrap_or_default()}</span>
                </div>
            </Show>
            {move || doctor.get().map(|d| view! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h1 class="card-title">"Reservar turno"</h1>
                        <p class="font-semibold">{d.nombre_completo()}</p>
                        <p>{d.especialidad.nombre.clone()}</p>
                        <p>{format!("Consulta: ${:.2}", d.precio_consulta)}</p>
                    </div>
                </div>
            })}
        </div>
    }
}
