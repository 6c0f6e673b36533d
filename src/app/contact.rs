use std::sync::Arc;

use leptos::{
    ev::{self, SubmitEvent},
    html,
    prelude::*,
    task::spawn_local,
};

use crate::{
    contact::{
        ContactDelivery, ContactMessage, ContactSubmission, DeliveryError, Field, Receipt,
        SimulatedDelivery, SubmitError,
    },
    content::{ContactContent, IconName},
    reveal::{delay_style, Entrance, RevealConfig},
};

use super::{homepage::SectionTitle, icons::Icon, reveal::use_reveal, toast::use_toaster};

const SENT_TITLE: &str = "Mensaje enviado";
const SENT_DESCRIPTION: &str = "Gracias por contactarme. Te responderé lo antes posible.";
const FAILED_TITLE: &str = "No se pudo enviar el mensaje";

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border bg-white dark:bg-gray-900 border-gray-300 dark:border-gray-700 text-gray-900 dark:text-white focus:outline-none focus:border-blue-500";

/// The transport the contact form hands messages to.
#[derive(Clone)]
pub struct ContactService(Arc<dyn ContactDelivery>);

impl ContactService {
    pub fn new(delivery: impl ContactDelivery + 'static) -> Self {
        Self(Arc::new(delivery))
    }

    pub async fn deliver(&self, message: ContactMessage) -> Result<Receipt, DeliveryError> {
        self.0.deliver(message).await
    }
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new(SimulatedDelivery::default())
    }
}

#[component]
pub fn Contact(content: &'static ContactContent) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, RevealConfig::default());

    view! {
        <section id="contact" node_ref=section_ref class="py-20 scroll-mt-16">
            <div class="max-w-5xl mx-auto">
                <SectionTitle text="Contacto" />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                    <div class=move || {
                        format!("space-y-6 {}", Entrance::FromLeft.class(visible.get()))
                    }>
                        <h3 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            {content.heading.clone()}
                        </h3>
                        <p class="text-gray-700 dark:text-gray-300">{content.pitch.clone()}</p>

                        <div class="space-y-4 mt-8">
                            {content
                                .methods
                                .iter()
                                .map(|method| {
                                    view! {
                                        <a
                                            href=method.href.clone()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center p-4 bg-gray-100 dark:bg-gray-900 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-800 transition-colors duration-300"
                                        >
                                            <div class="flex-shrink-0 text-blue-500">
                                                <Icon name=method.icon class="h-6 w-6" />
                                            </div>
                                            <div class="ml-4">
                                                <p class="text-sm font-medium text-gray-500 dark:text-gray-400">
                                                    {method.name.clone()}
                                                </p>
                                                <p class="text-base text-gray-900 dark:text-white">
                                                    {method.value.clone()}
                                                </p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class=move || Entrance::FromRight.class(visible.get())
                        style=delay_style(200)
                    >
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let submission = RwSignal::new(ContactSubmission::default());
    let submitting = move || submission.with(ContactSubmission::is_submitting);
    let toaster = use_toaster();
    let service = use_context::<ContactService>().unwrap_or_default();

    let value = move |field: Field| move || submission.with(|s| s.form().get(field).to_string());
    let update = move |field: Field| {
        move |ev: ev::Event| {
            let text = event_target_value(&ev);
            submission.update(|s| s.set(field, text));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let begun = match submission.try_update(ContactSubmission::begin) {
            Some(begun) => begun,
            None => return,
        };
        let message = match begun {
            Ok(message) => message,
            Err(SubmitError::Busy) => return,
            Err(err) => {
                toaster.error(FAILED_TITLE, Some(err.to_string()));
                return;
            }
        };

        let service = service.clone();
        spawn_local(async move {
            let outcome = service.deliver(message).await;
            match &outcome {
                Ok(receipt) => {
                    log::info!("contact message delivered at {}", receipt.delivered_at);
                    toaster.success(SENT_TITLE, Some(SENT_DESCRIPTION.to_string()));
                }
                Err(err) => {
                    log::warn!("contact delivery failed: {err}");
                    toaster.error(FAILED_TITLE, Some(err.to_string()));
                }
            }
            submission.update(|s| s.complete(&outcome));
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label for=Field::Name.id() class="block text-sm font-medium text-gray-300 mb-1">
                    "Nombre"
                </label>
                <input
                    id=Field::Name.id()
                    name=Field::Name.id()
                    placeholder="Tu nombre"
                    required=true
                    class=INPUT_CLASS
                    prop:value=value(Field::Name)
                    on:input=update(Field::Name)
                />
            </div>
            <div>
                <label for=Field::Email.id() class="block text-sm font-medium text-gray-300 mb-1">
                    "Email"
                </label>
                <input
                    id=Field::Email.id()
                    name=Field::Email.id()
                    type="email"
                    placeholder="tu@email.com"
                    required=true
                    class=INPUT_CLASS
                    prop:value=value(Field::Email)
                    on:input=update(Field::Email)
                />
            </div>
            <div>
                <label for=Field::Message.id() class="block text-sm font-medium text-gray-300 mb-1">
                    "Mensaje"
                </label>
                <textarea
                    id=Field::Message.id()
                    name=Field::Message.id()
                    placeholder="Cuéntame sobre tu proyecto..."
                    required=true
                    class=format!("{INPUT_CLASS} min-h-[150px]")
                    prop:value=value(Field::Message)
                    on:input=update(Field::Message)
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=submitting
                class="w-full px-4 py-2 rounded-md bg-blue-600 hover:bg-blue-700 disabled:opacity-60 disabled:cursor-not-allowed text-white transition-colors duration-300 flex items-center justify-center gap-2"
            >
                {move || if submitting() { "Enviando..." } else { "Enviar mensaje" }}
                <Icon name=IconName::Send size=16 />
            </button>
        </form>
    }
}
