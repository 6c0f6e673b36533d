use leptos::prelude::*;

use crate::notify::{Toast, ToastKind, ToastQueue, TOAST_LIFETIME};

/// Handle for raising toasts from anywhere under the app root.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Toaster {
    pub fn success(&self, title: &str, description: Option<String>) {
        self.push(ToastKind::Success, title, description);
    }

    pub fn error(&self, title: &str, description: Option<String>) {
        self.push(ToastKind::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn push(&self, kind: ToastKind, title: &str, description: Option<String>) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, title, description)) else {
            return;
        };
        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_LIFETIME);
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div
            class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80 max-w-[calc(100vw-2rem)]"
            aria-live="polite"
        >
            <For
                each=move || toaster.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast toaster /> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast, toaster: Toaster) -> impl IntoView {
    let tone = match toast.kind {
        ToastKind::Success => "border-green-500/40 bg-green-50 text-green-900 dark:bg-green-950 dark:text-green-100",
        ToastKind::Error => "border-red-500/40 bg-red-50 text-red-900 dark:bg-red-950 dark:text-red-100",
    };
    let id = toast.id;

    view! {
        <div
            role="status"
            class=format!("toast-enter rounded-lg border shadow-lg p-4 flex items-start gap-3 {tone}")
        >
            <div class="flex-1">
                <p class="text-sm font-semibold">{toast.title}</p>
                {toast.description.map(|d| view! { <p class="text-sm opacity-90 mt-1">{d}</p> })}
            </div>
            <button
                class="text-sm opacity-60 hover:opacity-100"
                aria-label="Cerrar"
                on:click=move |_| toaster.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
