mod contact;
mod experience;
mod footer;
mod hero;
mod homepage;
mod icons;
mod navbar;
mod projects;
mod reveal;
mod shapes;
mod skills;
mod theme;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::theme::theme_init_script;
use contact::ContactService;
use homepage::HomePage;
use theme::provide_theme;
use toast::{provide_toaster, ToastViewport};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                // applies the stored theme before first paint
                <script inner_html=theme_init_script()></script>
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_toaster();
    provide_context(ContactService::default());

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
        <ToastViewport />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Página no encontrada" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50 dark:bg-gray-950 text-gray-800 dark:text-gray-200">
            <h1 class="text-4xl font-bold text-blue-500">"404"</h1>
            <p>"Página no encontrada."</p>
            <a href="/" class="text-blue-500 hover:underline">
                "Volver al inicio"
            </a>
        </main>
    }
}
