mod bottom_section;
mod brand_section;
mod links_section;
mod social_link;

pub use bottom_section::BottomSection;
pub use brand_section::BrandSection;
pub use links_section::{LinkCategory, LinksSection};
pub use social_link::SocialLink;

use yew::prelude::*;

use crate::content::FooterContent;
use crate::motion::MotionSettings;
use crate::utils::time::current_year;

#[function_component]
pub fn Footer() -> Html {
    // Read on every render, never cached.
    let year = current_year();

    html! {
        <FooterLayout content={FooterContent::storefront()} {year} />
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterLayoutProps {
    pub content: &'static FooterContent,
    pub year: i16,
}

/// The footer for a fixed content set and copyright year.
#[function_component]
pub fn FooterLayout(props: &FooterLayoutProps) -> Html {
    let content = props.content;

    html! {
        <footer class="bg-neutral-950 text-neutral-300">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-8">
                    <div class="lg:col-span-4">
                        <BrandSection
                            brand_name={content.brand_name}
                            description={content.description}
                            socials={content.socials}
                        />
                    </div>
                    <div class="lg:col-span-8">
                        <LinksSection categories={content.categories} />
                    </div>
                </div>
            </div>
            <BottomSection
                year={props.year}
                brand_name={content.brand_name}
                legal={content.legal}
            />
        </footer>
    }
}

/// The footer with animations switched off, for static prerendering.
#[function_component]
pub fn StaticFooter() -> Html {
    html! {
        <ContextProvider<MotionSettings> context={MotionSettings { animate: false }}>
            <Footer />
        </ContextProvider<MotionSettings>>
    }
}
