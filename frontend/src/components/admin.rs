use crate::auth::use_client;
use crate::components::navbar::Navbar;
use crate::components::toast::{Toast, notification};
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use medicitas_shared::{Doctor, EstadoDoctor, Paciente};

/// 管理面板：患者列表、医生列表与停用操作
#[component]
pub fn AdminPage() -> impl IntoView {
    let client = use_client();
    let toast = notification();

    let pacientes = RwSignal::new(Vec::<Paciente>::new());
    let doctores = RwSignal::new(Vec::<Doctor>::new());
    let (loading, set_loading) = signal(true);

    let cargar = move || {
        let ctx = client.get_value();
        set_loading.set(true);
        spawn_local(async move {
            let (lista_pacientes, lista_doctores) =
                futures::join!(ctx.pacientes.list(), ctx.doctores.list());
            match lista_pacientes {
                Ok(data) => pacientes.set(data),
                Err(e) => toast.set(Some((e.user_message(), true))),
            }
            match lista_doctores {
                Ok(data) => doctores.set(data),
                Err(e) => toast.set(Some((e.user_message(), true))),
            }
            set_loading.set(false);
        });
    };

    cargar();

    let desactivar = move |id: String| {
        let servicio = client.with_value(|c| c.doctores.clone());
        spawn_local(async move {
            match servicio.desactivar(&id).await {
                Ok(()) => {
                    toast.set(Some(("Doctor desactivado.".to_string(), false)));
                    doctores.update(|list| {
                        if let Some(d) = list.iter_mut().find(|d| d.id == id) {
                            d.estado = EstadoDoctor::Inactivo;
                        }
                    });
                }
                Err(e) => toast.set(Some((e.user_message(), true))),
            }
        });
    };

    view! {
        <Toast notification=toast />
        <Navbar />
        <div class="container mx-auto p-4 space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"Panel de administración"</h1>
                <Link to="/registro-doctor" class="btn btn-primary btn-sm">"Registrar doctor"</Link>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <span class="loading loading-spinner loading-lg text-primary"></span> }
            >
                <section>
                    <h2 class="text-xl font-semibold mb-2">"Doctores"</h2>
                    <table class="table table-zebra">
                        <thead>
                            <tr><th>"Nombre"</th><th>"Especialidad"</th><th>"Matrícula"</th><th>"Estado"</th><th></th></tr>
                        </thead>
                        <tbody>
                            {move || doctores.get().into_iter().map(|d| {
                                let id = d.id.clone();
                                let activo = d.estado == EstadoDoctor::Activo;
                                view! {
                                    <tr>
                                        <td>{d.nombre_completo()}</td>
                                        <td>{d.especialidad.nombre}</td>
                                        <td>{d.matricula}</td>
                                        <td>{if activo { "Activo" } else { "Inactivo" }}</td>
                                        <td>
                                            <button
                                                class="btn btn-error btn-xs"
                                                disabled=!activo
                                                on:click=move |_| desactivar(id.clone())
                                            >
                                                "Desactivar"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>

                <section>
                    <h2 class="text-xl font-semibold mb-2">"Pacientes"</h2>
                    <table class="table table-zebra">
                        <thead>
                            <tr><th>"Nombre"</th><th>"DNI"</th><th>"Email"</th><th>"Teléfono"</th></tr>
                        </thead>
                        <tbody>
                            {move || pacientes.get().into_iter().map(|p| view! {
                                <tr>
                                    <td>{format!("{} {}", p.nombre, p.apellido)}</td>
                                    <td>{p.dni}</td>
                                    <td>{p.email}</td>
                                    <td>{p.telefono}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </section>
            </Show>
        </div>
    }
}
