use leptos::prelude::*;

use crate::content::Profile;

/// Baked in by build.rs so the server and the hydrated client agree.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer(profile: &'static Profile) -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-gray-200 dark:border-gray-800 mt-20">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-500 dark:text-gray-400 text-sm">
                        {format!(
                            "© {BUILD_YEAR} Portfolio {}. Todos los derechos reservados.",
                            profile.name,
                        )}
                    </p>
                    <p class="text-gray-500 dark:text-gray-400 text-sm mt-2 md:mt-0">
                        {profile.headline.clone()}
                    </p>
                </div>
            </div>
        </footer>
    }
}
