use yew::prelude::*;

use crate::content::SocialProfile;
use crate::hooks::use_motion;
use crate::icons::IconSvg;
use crate::motion::MotionConfig;

const SOCIAL_MOTION: MotionConfig = MotionConfig::hover(200);
const ICON_SIZE: u32 = 18;

#[derive(Properties, PartialEq)]
pub struct SocialLinkProps {
    pub social: SocialProfile,
}

/// Round icon button; the label is only exposed to screen readers.
#[function_component]
pub fn SocialLink(props: &SocialLinkProps) -> Html {
    let motion = use_motion(SOCIAL_MOTION);
    let social = props.social;

    html! {
        <a
            ref={motion.node_ref}
            href={social.href}
            target="_blank"
            rel="noopener noreferrer"
            style={motion.style}
            data-motion={motion.phase.as_str()}
            onmouseenter={motion.onmouseenter}
            onmouseleave={motion.onmouseleave}
            class="flex h-10 w-10 items-center justify-center rounded-full bg-neutral-800 text-neutral-300 hover:bg-neutral-700 hover:text-white"
        >
            <IconSvg icon={social.icon} size={ICON_SIZE} />
            <span class="sr-only">{social.name}</span>
        </a>
    }
}
