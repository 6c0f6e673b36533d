use leptos::{html, prelude::*};

use crate::{
    content::ProjectItem,
    reveal::{stagger_delay, Entrance, RevealConfig},
};

use super::{experience::TechTags, homepage::SectionTitle, reveal::use_reveal};

#[component]
pub fn Projects(projects: &'static [ProjectItem]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, RevealConfig::default());

    view! {
        <section id="projects" node_ref=section_ref class="py-20 scroll-mt-16">
            <div class="max-w-5xl mx-auto">
                <SectionTitle text="Proyectos" />

                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <div
                                    class=move || Entrance::Rise.class(visible.get())
                                    style=stagger_delay(index, 200)
                                >
                                    <ProjectCard project />
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
fn ProjectCard(project: &'static ProjectItem) -> impl IntoView {
    view! {
        <article class="rounded-xl border bg-white dark:bg-gray-900 border-gray-200 dark:border-gray-800 hover:border-blue-500/50 transition-all duration-300 overflow-hidden">
            <header class="p-6 pb-2">
                <h3 class="text-xl md:text-2xl font-bold text-gray-900 dark:text-white">
                    {project.title.clone()}
                </h3>
            </header>
            <div class="p-6 pt-0">
                <a
                    href=project.href.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="relative block h-40 rounded-lg overflow-hidden group cursor-pointer"
                >
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        width="400"
                        height="300"
                        loading="lazy"
                        class="w-full h-full object-cover rounded-lg transition duration-300 group-hover:scale-105 group-hover:blur-sm"
                    />
                    <div class="absolute inset-0 bg-black/70 flex items-center justify-center p-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300 rounded-lg">
                        <ul class="space-y-1 text-white text-sm text-center">
                            {project
                                .description
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="flex items-start justify-center">
                                            <span class="text-blue-300 mr-2 mt-1">"•"</span>
                                            <span>{item.clone()}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </a>
                <TechTags tags=project.technologies.as_slice() />
            </div>
        </article>
    }
}
