use leptos::prelude::*;

/// 带标签的输入框，输入时写回表单状态中的某个字段
pub fn campo<T: Send + Sync + 'static>(
    datos: RwSignal<T>,
    field: fn(&mut T) -> &mut String,
    label: &'static str,
    tipo: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=tipo
                class="input input-bordered"
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    datos.update(|d| *field(d) = value);
                }
            />
        </div>
    }
}
