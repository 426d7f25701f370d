use yew::prelude::*;

use super::SocialLink;
use crate::content::SocialProfile;
use crate::hooks::use_motion;
use crate::motion::MotionConfig;

const BRAND_MOTION: MotionConfig = MotionConfig::viewport(600);

#[derive(Properties, PartialEq)]
pub struct BrandSectionProps {
    pub brand_name: &'static str,
    pub description: &'static str,
    pub socials: &'static [SocialProfile],
}

#[function_component]
pub fn BrandSection(props: &BrandSectionProps) -> Html {
    let motion = use_motion(BRAND_MOTION);

    html! {
        <div ref={motion.node_ref} style={motion.style} data-motion={motion.phase.as_str()} class="space-y-4">
            <h2 class="text-2xl font-bold text-white">{props.brand_name}</h2>
            <p class="text-sm leading-6 text-neutral-400">{props.description}</p>
            <div class="flex space-x-3">
                {for props.socials.iter().map(|social| html! {
                    <SocialLink key={social.name} social={*social} />
                })}
            </div>
        </div>
    }
}
