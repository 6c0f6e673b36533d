use leptos::prelude::*;

use crate::{
    content::{IconName, Profile},
    reveal::delay_style,
};

use super::{icons::Icon, shapes::FloatingShapes};

/// Delay before the title, the introduction and the buttons fade in.
const STAGES_MS: [u64; 3] = [100, 300, 500];

fn stage_class(entered: bool) -> &'static str {
    if entered {
        "transition-all duration-[800ms] ease-out opacity-100 translate-y-0"
    } else {
        "transition-all duration-[800ms] ease-out opacity-0 translate-y-5"
    }
}

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let (entered, set_entered) = signal(false);
    Effect::new(move |_| request_animation_frame(move || set_entered.set(true)));

    let [title_delay, intro_delay, buttons_delay] = STAGES_MS.map(delay_style);

    view! {
        <section
            id="hero"
            class="min-h-screen relative flex flex-col justify-center items-center text-center pt-16"
        >
            <FloatingShapes />

            <div class="max-w-3xl mx-auto px-4 relative z-10">
                <h1
                    class=move || {
                        format!(
                            "text-4xl md:text-5xl lg:text-6xl font-bold mb-6 bg-gradient-to-r from-blue-500 to-blue-300 bg-clip-text text-transparent {}",
                            stage_class(entered.get()),
                        )
                    }
                    style=title_delay
                >
                    {profile.headline.clone()}
                </h1>
                <p
                    class=move || {
                        format!(
                            "text-lg md:text-xl text-gray-700 dark:text-gray-300 mb-8 leading-relaxed {}",
                            stage_class(entered.get()),
                        )
                    }
                    style=intro_delay
                >
                    {profile.intro.join(" ")}
                </p>
                <div
                    class=move || {
                        format!(
                            "flex flex-col sm:flex-row gap-4 justify-center {}",
                            stage_class(entered.get()),
                        )
                    }
                    style=buttons_delay
                >
                    <a
                        href=profile.primary_cta.href.clone()
                        class="bg-blue-600 hover:bg-blue-700 text-white px-6 py-2 rounded-md transition-colors duration-300 flex items-center justify-center gap-2"
                    >
                        {profile.primary_cta.label.clone()}
                    </a>
                    <a
                        href=profile.secondary_cta.href.clone()
                        class="border border-blue-600 text-blue-500 hover:bg-blue-600/10 px-6 py-2 rounded-md transition-colors duration-300"
                    >
                        {profile.secondary_cta.label.clone()}
                    </a>
                </div>
            </div>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce z-10">
                <Icon name=IconName::ArrowDown class="text-blue-500" />
            </div>
        </section>
    }
}
