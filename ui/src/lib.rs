use yew::prelude::*;

pub mod components;
pub mod content;
pub mod hooks;
pub mod icons;
mod logs;
pub mod motion;
pub mod utils;

pub use components::footer::{Footer, FooterLayout, StaticFooter};

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());

    html! {
        <div class="min-h-screen flex flex-col bg-white text-neutral-900">
            <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <h1 class="text-3xl font-bold">{"Northwind Supply"}</h1>
            </main>
            <Footer />
        </div>
    }
}
