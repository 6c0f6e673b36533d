use leptos::{html, prelude::*};

use crate::{
    content::SkillCategory,
    reveal::{stagger_delay, Entrance, RevealConfig},
};

use super::{homepage::SectionTitle, icons::Icon, reveal::use_reveal};

#[component]
pub fn Skills(categories: &'static [SkillCategory]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, RevealConfig::default());

    view! {
        <section id="skills" node_ref=section_ref class="py-20 scroll-mt-16">
            <div class="max-w-5xl mx-auto">
                <SectionTitle text="Habilidades" />

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <div
                                    class=move || Entrance::Rise.class(visible.get())
                                    style=stagger_delay(index, 150)
                                >
                                    <div class="h-full rounded-xl border bg-white dark:bg-gray-900 border-gray-200 dark:border-gray-800 hover:border-blue-500/50 transition-all duration-300 p-6">
                                        <div class="flex items-center mb-4">
                                            <Icon name=category.icon class="h-6 w-6 text-blue-500" />
                                            <h3 class="text-xl font-semibold ml-2 text-gray-900 dark:text-white">
                                                {category.name.clone()}
                                            </h3>
                                        </div>
                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(i, skill)| view! { <SkillBadge name=skill.clone() index=i /> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBadge(name: String, index: usize) -> impl IntoView {
    view! {
        <span
            class="skill-badge px-3 py-1.5 bg-gray-100 dark:bg-gray-800 text-gray-800 dark:text-gray-200 rounded-md text-sm font-medium hover:bg-blue-100 dark:hover:bg-blue-600/20 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-300"
            style=format!("animation-delay: {}ms", index * 50)
        >
            {name}
        </span>
    }
}
