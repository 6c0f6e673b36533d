use leptos::{html, prelude::*};

use crate::{
    content::{ExperienceItem, IconName},
    reveal::{stagger_delay, Entrance, RevealConfig},
};

use super::{homepage::SectionTitle, icons::Icon, reveal::use_reveal};

#[component]
pub fn Experience(items: &'static [ExperienceItem]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, RevealConfig::default());

    view! {
        <section id="experience" node_ref=section_ref class="py-20 scroll-mt-16">
            <div class="max-w-5xl mx-auto">
                <SectionTitle text="Experiencia" />

                <div class="space-y-8">
                    {items
                        .iter()
                        .enumerate()
                        .map(|(index, exp)| {
                            view! {
                                <div
                                    class=move || Entrance::Rise.class(visible.get())
                                    style=stagger_delay(index, 200)
                                >
                                    <ExperienceCard exp />
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
fn ExperienceCard(exp: &'static ExperienceItem) -> impl IntoView {
    view! {
        <article class="rounded-xl border bg-white dark:bg-gray-900 border-gray-200 dark:border-gray-800 hover:border-blue-500/50 transition-all duration-300 overflow-hidden">
            <header class="p-6 pb-2">
                <div class="flex flex-col md:flex-row md:justify-between md:items-center gap-2">
                    <h3 class="text-xl md:text-2xl font-bold text-gray-900 dark:text-white">
                        {exp.title.clone()}
                    </h3>
                    <div class="flex items-center text-gray-500 dark:text-gray-400 text-sm">
                        <Icon name=IconName::Calendar size=16 class="mr-1" />
                        {exp.period.clone()}
                    </div>
                </div>
                <div class="flex items-center text-blue-500 mt-1">
                    <Icon name=IconName::Briefcase size=16 class="mr-2" />
                    <span class="font-medium">{exp.company.clone()}</span>
                </div>
            </header>
            <div class="p-6 pt-0">
                <ul class="space-y-2 mb-4">
                    {exp
                        .description
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="text-gray-700 dark:text-gray-300 flex items-start">
                                    <span class="text-blue-500 mr-2 mt-1">"•"</span>
                                    <span>{item.clone()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <TechTags tags=exp.technologies.as_slice() />
            </div>
        </article>
    }
}

/// Pill list of technologies, shared with the project cards.
#[component]
pub fn TechTags(tags: &'static [String]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2 mt-4">
            {tags
                .iter()
                .map(|tech| {
                    view! {
                        <span class="px-3 py-1 bg-gray-100 dark:bg-gray-800 text-blue-600 dark:text-blue-400 text-xs rounded-full">
                            {tech.clone()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
