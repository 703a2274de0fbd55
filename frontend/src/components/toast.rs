use leptos::prelude::*;

/// 提示消息：(内容, 是否出错)
pub type Notification = RwSignal<Option<(String, bool)>>;

pub fn notification() -> Notification {
    RwSignal::new(None)
}

/// 右上角的提示条，3 秒后自动消失
#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    Effect::new(move |_| {
        if notification.get().is_some() {
            set_timeout(
                move || {
                    let _ = notification.try_set(None);
                },
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        {move || {
            notification.get().map(|(mensaje, is_err)| {
                let class = if is_err {
                    "alert alert-error shadow-lg"
                } else {
                    "alert alert-success shadow-lg"
                };
                view! {
                    <div class="toast toast-top toast-end z-50">
                        <div class=class>
                            <span>{mensaje}</span>
                        </div>
                    </div>
                }
            })
        }}
    }
}
