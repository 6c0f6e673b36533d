use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{RevealConfig, RevealLatch};

/// Flips to `true` the first time `threshold` of the section is on screen and
/// stays there. Without a mounted element nothing is observed.
///
/// The observer is stopped as soon as the section is revealed. leptos-use
/// stops it on owner cleanup otherwise.
pub fn use_reveal(target: NodeRef<html::Section>, config: RevealConfig) -> Signal<bool> {
    let latch = StoredValue::new(RevealLatch::new(config));
    let (revealed, set_revealed) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                let fired = latch
                    .try_update_value(|l| {
                        l.observe(entry.intersection_ratio(), entry.is_intersecting())
                    })
                    .unwrap_or(false);
                if fired {
                    set_revealed.set(true);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![config.threshold()]),
    );

    Effect::watch(
        move || revealed.get(),
        move |is_revealed, _, _| {
            if *is_revealed {
                stop();
            }
        },
        false,
    );

    revealed.into()
}
