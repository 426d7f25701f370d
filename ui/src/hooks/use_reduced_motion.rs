use yew::prelude::*;

// Browser only; the server renderer has no media queries to ask.
#[cfg(target_arch = "wasm32")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn prefers_reduced_motion() -> bool {
    false
}

/// Whether the user agent asks for reduced motion.
///
/// Read synchronously on the first render so that nothing is hidden, even
/// briefly, for users who opted out of animation.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state_eq(prefers_reduced_motion);
    *reduced
}
