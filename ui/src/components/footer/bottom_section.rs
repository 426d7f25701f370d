use yew::prelude::*;

use crate::content::LinkItem;
use crate::hooks::use_motion;
use crate::motion::MotionConfig;

const BOTTOM_MOTION: MotionConfig = MotionConfig::viewport(600).with_delay(300);

#[derive(Properties, PartialEq)]
pub struct BottomSectionProps {
    pub year: i16,
    pub brand_name: &'static str,
    pub legal: &'static [LinkItem],
}

#[function_component]
pub fn BottomSection(props: &BottomSectionProps) -> Html {
    let motion = use_motion(BOTTOM_MOTION);

    html! {
        <div ref={motion.node_ref} style={motion.style} data-motion={motion.phase.as_str()} class="border-t border-neutral-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6 flex flex-col md:flex-row items-center justify-center gap-4 text-sm text-neutral-500">
                <p>{format!("© {} {}. All rights reserved.", props.year, props.brand_name)}</p>
                <nav aria-label="Legal" class="flex space-x-6">
                    {for props.legal.iter().map(|link| html! {
                        <a key={link.name} href={link.href} class="hover:text-white transition-colors">
                            {link.name}
                        </a>
                    })}
                </nav>
            </div>
        </div>
    }
}
