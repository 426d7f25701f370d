use yew::prelude::*;

use crate::content::FooterLinkCategory;
use crate::hooks::use_motion;
use crate::icons::{Icon, IconSvg};
use crate::motion::MotionConfig;

const COLUMN_DURATION_MS: u32 = 600;

#[derive(Properties, PartialEq)]
pub struct LinksSectionProps {
    pub categories: &'static [FooterLinkCategory],
}

#[function_component]
pub fn LinksSection(props: &LinksSectionProps) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
            {for props.categories.iter().enumerate().map(|(index, category)| html! {
                <LinkCategory key={category.name} category={*category} {index} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LinkCategoryProps {
    pub category: FooterLinkCategory,
    /// Column position, used to stagger the entrance.
    pub index: usize,
}

#[function_component]
pub fn LinkCategory(props: &LinkCategoryProps) -> Html {
    let motion =
        use_motion(MotionConfig::staggered(COLUMN_DURATION_MS, props.index));
    let category = props.category;

    html! {
        <div ref={motion.node_ref} style={motion.style} data-motion={motion.phase.as_str()}>
            <h3 class="text-sm font-semibold uppercase tracking-wider text-white">
                {category.name}
            </h3>
            <ul class="mt-4 space-y-3">
                {for category.links.iter().map(|link| html! {
                    <li key={link.name}>
                        <a
                            href={link.href}
                            class="group inline-flex items-center gap-1 text-sm text-neutral-400 hover:text-white transition-colors"
                        >
                            <span>{link.name}</span>
                            <IconSvg
                                icon={Icon::ArrowRight}
                                size={14}
                                class="opacity-0 group-hover:opacity-100 transition-opacity"
                            />
                        </a>
                    </li>
                })}
            </ul>
        </div>
    }
}
