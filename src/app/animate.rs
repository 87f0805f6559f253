//! requestAnimationFrame driver that applies `crate::motion` poses to DOM
//! elements. Elements keep their server-rendered, fully-visible styles until
//! a driver actually ticks, so a scheduler that never starts degrades to a
//! static page.

use std::rc::Rc;

use leptos::{html, prelude::*};
use leptos_use::{
    use_raf_fn, use_raf_fn_with_options, use_window_scroll, utils::Pausable, UseRafFnOptions,
};

use crate::motion::{parallax_shift, FloatLoop, Sample, Timeline};

/// Plays `timeline` over the elements produced by `targets`, one per step.
/// Returns a start handle; with `autostart` the driver begins ticking
/// immediately, `delay` seconds before the first step. The driver pauses
/// itself after the final pose is applied and is released with the owner on
/// unmount.
pub fn drive_timeline(
    timeline: Timeline,
    delay: f64,
    autostart: bool,
    targets: impl Fn() -> Vec<Option<web_sys::HtmlElement>> + Clone + 'static,
) -> impl Fn() + Clone {
    let elapsed = StoredValue::new_local(-delay);
    let stop = StoredValue::new_local(None::<Rc<dyn Fn()>>);
    let Pausable { pause, resume, .. } = use_raf_fn_with_options(
        move |args| {
            let t = elapsed.get_value() + args.delta / 1000.0;
            elapsed.set_value(t);
            if t < 0.0 {
                return;
            }
            let samples = timeline.sample_all(t);
            for (el, sample) in targets().into_iter().zip(samples.iter()) {
                if let Some(el) = el {
                    apply_sample(&el, sample);
                }
            }
            if timeline.is_complete(t) {
                if let Some(halt) = stop.get_value() {
                    halt();
                }
            }
        },
        UseRafFnOptions::default().immediate(autostart),
    );
    stop.set_value(Some(Rc::new(pause) as Rc<dyn Fn()>));
    resume
}

/// Endless vertical bob for the hero profile image.
pub fn drive_float(node: NodeRef<html::Img>, float: FloatLoop) {
    let elapsed = StoredValue::new_local(0.0);
    let _ = use_raf_fn(move |args| {
        let t = elapsed.get_value() + args.delta / 1000.0;
        elapsed.set_value(t);
        if let Some(el) = node.get_untracked() {
            let _ = el.style().set_property(
                "transform",
                &format!("translateY({:.2}px)", float.offset_at(t)),
            );
        }
    });
}

/// Couples the hero background's vertical offset to the scroll position over
/// the hero's scroll range.
pub fn bind_parallax(region: NodeRef<html::Header>, background: NodeRef<html::Div>) {
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        let (Some(region), Some(background)) =
            (region.get_untracked(), background.get_untracked())
        else {
            return;
        };
        let rect = region.get_bounding_client_rect();
        let shift = parallax_shift(y, rect.top() + y, rect.height());
        let _ = background
            .style()
            .set_property("transform", &format!("translateY({:.2}px)", shift));
    });
}

fn apply_sample(el: &web_sys::HtmlElement, sample: &Sample) {
    let style = el.style();
    let _ = style.set_property("opacity", &format!("{:.4}", sample.opacity));
    let _ = style.set_property("transform", &sample.css_transform());
}
