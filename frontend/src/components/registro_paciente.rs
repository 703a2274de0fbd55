use crate::auth::use_client;
use crate::components::form_field::campo;
use crate::components::toast::{Toast, notification};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas::forms::validate_registro_paciente;
use medicitas_shared::RegistroPacienteRequest;

#[component]
pub fn RegistroPacientePage() -> impl IntoView {
    let client = use_client();
    let router = use_router();
    let toast = notification();

    let datos = RwSignal::new(RegistroPacienteRequest::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = datos.get_untracked();
        if let Err(e) = validate_registro_paciente(&request) {
            toast.set(Some((e.user_message(), true)));
            return;
        }

        set_is_submitting.set(true);
        let pacientes = client.with_value(|c| c.pacientes.clone());
        spawn_local(async move {
            match pacientes.registrar(&request).await {
                Ok(()) => {
                    tracing::info!("patient registered");
                    router.navigate("/login");
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
                    <h2 class="card-title">"Registro de paciente"</h2>
                    {campo(datos, |d| &mut d.nombre, "Nombre", "text")}
                    {campo(datos, |d| &mut d.apellido, "Apellido", "text")}
                    {campo(datos, |d| &mut d.dni, "DNI", "text")}
                    {campo(datos, |d| &mut d.email, "Email", "email")}
                    {campo(datos, |d| &mut d.telefono, "Teléfono", "tel")}
                    {campo(datos, |d| &mut d.fecha_nacimiento, "Fecha de nacimiento", "date")}
                    {campo(datos, |d| &mut d.password, "Contraseña", "password")}
                    <div class="card-actions justify-between items-center mt-4">
                        <Link to="/login" class="link">"Volver"</Link>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            "Registrarse"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
