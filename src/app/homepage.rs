use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};

use crate::content::site_content;

use super::{
    contact::Contact, experience::Experience, footer::Footer, hero::Hero, navbar::Navbar,
    projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let content = match site_content() {
        Ok(content) => content,
        Err(err) => {
            log::error!("couldn't load site content: {err}");
            return Either::Right(view! {
                <Title text="Portfolio" />
                <p class="p-8 text-center">"Contenido no disponible."</p>
            });
        }
    };
    let profile = &content.profile;

    Either::Left(view! {
        <Title text=profile.page_title.clone() />
        <Meta name="description" content=profile.meta_description.clone() />
        <div class="min-h-screen bg-gray-50 dark:bg-gray-950 text-gray-800 dark:text-gray-200">
            <Navbar brand=profile.name.clone() links=profile.nav.clone() />
            <main class="container mx-auto px-4 py-8">
                <Hero profile />
                <Experience items=content.experience.as_slice() />
                <Skills categories=content.skills.as_slice() />
                <Projects projects=content.projects.as_slice() />
                <Contact content=&content.contact />
                <Footer profile />
            </main>
        </div>
    })
}

/// Gradient heading shared by the content sections.
#[component]
pub fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl md:text-4xl font-bold mb-12 text-center">
            <span class="bg-gradient-to-r from-blue-500 to-blue-300 bg-clip-text text-transparent">
                {text}
            </span>
        </h2>
    }
}
