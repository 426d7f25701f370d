use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

use crate::hooks::use_reduced_motion;
use crate::motion::{
    MotionConfig, MotionError, MotionPhase, MotionSettings, MotionTrigger,
};

/// What an animated element binds: `ref`, `style`, the pointer handlers and
/// the phase, exposed as `data-motion`.
#[derive(Clone, PartialEq)]
pub struct MotionHandle {
    pub node_ref: NodeRef,
    /// `None` when animation is off.
    pub style: Option<AttrValue>,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub phase: MotionPhase,
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches one element until it first intersects the viewport.
/// Disconnects when dropped.
struct ViewportWatcher {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportWatcher {
    fn attach(
        node_ref: &NodeRef,
        phase: UseStateSetter<MotionPhase>,
    ) -> Result<Self, MotionError> {
        let element =
            node_ref.cast::<Element>().ok_or(MotionError::Unmounted)?;

        let callback = EntriesCallback::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if visible {
                    phase.set(MotionPhase::Observing.intersect(true));
                    observer.disconnect();
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| MotionError::Observer(format!("{e:?}")))?;
        observer.observe(&element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Drives a viewport or hover animation for one element.
///
/// Viewport animations fire at most once per mount. If the observer cannot be
/// set up the element is shown immediately rather than left hidden. With
/// animation off the element is reported as triggered and never hidden.
#[hook]
pub fn use_motion(config: MotionConfig) -> MotionHandle {
    let settings = use_context::<MotionSettings>().unwrap_or_default();
    let reduced = use_reduced_motion();
    let animate = settings.animate && !reduced;

    let node_ref = use_node_ref();
    let phase = use_state_eq(|| MotionPhase::initial(animate));

    {
        let node_ref = node_ref.clone();
        let phase = phase.clone();
        use_effect_with((config, animate), move |(config, animate)| {
            let mut watcher = None;
            if *animate
                && config.trigger == MotionTrigger::Viewport
                && phase.is_waiting()
            {
                match ViewportWatcher::attach(&node_ref, phase.setter()) {
                    Ok(attached) => watcher = Some(attached),
                    Err(e) => tracing::warn!(
                        "showing element without animation: {e}"
                    ),
                }
                phase.set(phase.attached(watcher.is_some()));
            }
            move || drop(watcher)
        });
    }

    let (onmouseenter, onmouseleave) = match config.trigger {
        MotionTrigger::Hover => {
            let enter = {
                let phase = phase.clone();
                Callback::from(move |_: MouseEvent| {
                    phase.set(phase.pointer_enter())
                })
            };
            let leave = {
                let phase = phase.clone();
                Callback::from(move |_: MouseEvent| {
                    phase.set(phase.pointer_leave())
                })
            };
            (enter, leave)
        }
        MotionTrigger::Viewport => (Callback::noop(), Callback::noop()),
    };

    let current = phase.resolve(animate);
    let style = config.style(current, animate);

    MotionHandle {
        node_ref,
        style: (!style.is_empty()).then(|| style.into()),
        onmouseenter,
        onmouseleave,
        phase: current,
    }
}
