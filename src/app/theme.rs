use leptos::{either::Either, prelude::*};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos::{wasm_bindgen::JsCast, web_sys};
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::{content::IconName, theme::Theme};

use super::icons::Icon;

/// Page-wide theme preference. Installed once at the root and kept for the
/// lifetime of the document.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn set(&self, theme: Theme) {
        self.set_theme.set(theme);
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("switching theme to {next}");
        self.set(next);
    }
}

pub fn provide_theme() -> ThemeContext {
    // the server has no storage, it always renders the default and the head
    // script corrects the class before paint
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, FromToStringCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let theme = theme.get();
        let Some(root) = document()
            .document_element()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_2("light", "dark");
        let _ = classes.add_1(theme.as_str());
        // only the property the head script sets, other inline styles stay
        let _ = root.style().set_property("color-scheme", theme.as_str());
    });

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let (mounted, set_mounted) = signal(false);

    // effects only run in the browser, after the stored preference is read
    Effect::new(move |_| set_mounted.set(true));

    move || {
        if !mounted.get() {
            return Either::Left(view! {
                <div class="p-2 rounded-md text-gray-300">
                    <div class="w-5 h-5"></div>
                </div>
            });
        }
        Either::Right(view! {
            <button
                on:click=move |_| ctx.toggle()
                class="p-2 rounded-md text-gray-300 hover:text-blue-500 focus:outline-none transition-colors duration-300"
                aria-label="Toggle theme"
            >
                {move || {
                    let name = if ctx.theme.get().is_dark() {
                        IconName::Sun
                    } else {
                        IconName::Moon
                    };
                    view! { <Icon name size=20 /> }
                }}
            </button>
        })
    }
}
