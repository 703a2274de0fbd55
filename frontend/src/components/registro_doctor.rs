use crate::auth::use_client;
use crate::components::form_field::campo;
use crate::components::toast::{Toast, notification};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas::forms::validate_registro_doctor;
use medicitas_shared::{Especialidad, RegistroDoctorRequest};

/// 管理员注册医生
#[component]
pub fn RegistroDoctorPage() -> impl IntoView {
    let client = use_client();
    let router = use_router();
    let toast = notification();

    let datos = RwSignal::new(RegistroDoctorRequest::new());
    let especialidades = RwSignal::new(Vec::<Especialidad>::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 下拉框用的专科目录
    let catalogo = client.with_value(|c| c.especialidades.clone());
    spawn_local(async move {
        match catalogo.list().await {
            Ok(lista) => especialidades.set(lista),
            Err(e) => toast.set(Some((e.user_message(), true))),
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = datos.get_untracked();
        if let Err(e) = validate_registro_doctor(&request) {
            toast.set(Some((e.user_message(), true)));
            return;
        }

        set_is_submitting.set(true);
        let doctores = client.with_value(|c| c.doctores.clone());
        spawn_local(async move {
            match doctores.registrar(&request).await {
                Ok(()) => {
                    tracing::info!(matricula = %request.matricula, "doctor registered");
                    router.navigate("/admin");
                }
                Err(e) => toast.set(Some((e.user_message(), true))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <Toast notification=toast />
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-4">
            <div class="card w-full max-w-lg shadow-2xl bg-base-100">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="card-title">"Registrar doctor"</h2>
                    {campo(datos, |d| &mut d.nombre, "Nombre", "text")}
                    {campo(datos, |d| &mut d.apellido, "Apellido", "text")}
                    {campo(datos, |d| &mut d.dni, "DNI", "text")}
                    {campo(datos, |d| &mut d.email, "Email", "email")}
                    {campo(datos, |d| &mut d.telefono, "Teléfono", "tel")}
                    {campo(datos, |d| &mut d.matricula, "Matrícula", "text")}
                    {campo(datos, |d| &mut d.password, "Contraseña", "password")}

                    <div class="form-control">
                        <label class="label"><span class="label-text">"Especialidad"</span></label>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| datos.update(|d| d.especialidad_id = event_target_value(&ev))
                        >
                            <option value="">"Seleccione una especialidad"</option>
                            <For
                                each=move || especialidades.get()
                                key=|e| e.id.clone()
                                children=|e| view! { <option value=e.id.clone()>{e.nombre.clone()}</option> }
                            />
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">"Precio de la consulta"</span></label>
                        <input
                            type="number"
                            min="0"
                            step="any"
                            class="input input-bordered"
                            on:input=move |ev| {
                                // 无法解析时记为 NaN，由校验拒绝
                                let precio = event_target_value(&ev).parse::<f64>().unwrap_or(f64::NAN);
                                datos.update(|d| d.precio_consulta = precio);
                            }
                        />
                    </div>

                    <div class="card-actions justify-between items-center mt-4">
                        <Link to="/admin" class="link">"Cancelar"</Link>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            "Registrar"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
