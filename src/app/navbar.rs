use leptos::{either::Either, ev, prelude::*};

use crate::{
    content::{IconName, NavLink},
    listener::ScopedListener,
    nav::NavState,
};

use super::{icons::Icon, theme::ThemeToggle};

#[component]
pub fn Navbar(brand: String, links: Vec<NavLink>) -> impl IntoView {
    let (nav, set_nav) = signal(NavState::default());

    let read_scroll = move || {
        let y = window().scroll_y().unwrap_or_default();
        set_nav.update(|n| n.on_scroll(y));
    };

    // pick up the offset when the page is restored mid-scroll
    Effect::new(move |_| read_scroll());

    let handle = window_event_listener(ev::scroll, move |_| read_scroll());
    ScopedListener::for_handle("scroll", handle, |handle| handle.remove()).scoped();

    let desktop_links = links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href.clone()
                    class="text-gray-300 hover:text-blue-500 transition-colors duration-300 text-sm font-medium"
                >
                    {link.label.clone()}
                </a>
            }
        })
        .collect_view();

    let mobile_menu = move || {
        if !nav.get().menu_open() {
            return None;
        }
        let items = links
            .iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href.clone()
                        class="block px-3 py-2 rounded-md text-base font-medium text-gray-700 dark:text-gray-300 hover:text-blue-500 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors duration-300"
                        on:click=move |_| set_nav.update(NavState::link_activated)
                    >
                        {link.label.clone()}
                    </a>
                }
            })
            .collect_view();
        Some(view! {
            <div class="md:hidden bg-white dark:bg-gray-900 shadow-lg rounded-b-lg">
                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">{items}</div>
            </div>
        })
    };

    view! {
        <nav class=move || nav.get().bar_class()>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex-shrink-0">
                        <a href="#hero" class="text-xl font-bold text-blue-500 tracking-tight">
                            {brand}
                        </a>
                    </div>

                    <div class="hidden md:block">
                        <div class="ml-10 flex items-center space-x-8">
                            {desktop_links} <ThemeToggle />
                        </div>
                    </div>

                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle />
                        <button
                            on:click=move |_| set_nav.update(NavState::toggle_menu)
                            class="text-gray-300 hover:text-blue-500 focus:outline-none"
                            aria-label="Toggle menu"
                            aria-expanded=move || nav.get().menu_open().to_string()
                        >
                            {move || {
                                if nav.get().menu_open() {
                                    Either::Left(view! { <Icon name=IconName::Close /> })
                                } else {
                                    Either::Right(view! { <Icon name=IconName::Menu /> })
                                }
                            }}
                        </button>
                    </div>
                </div>

                {mobile_menu}
            </div>
        </nav>
    }
}
