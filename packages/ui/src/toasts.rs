//! Toast overlay consuming the message queue.
//!
//! The queue itself is append-only; this component owns removal. Every
//! message with a duration gets one dismissal timer, `Loading` messages
//! stay until dismissed by hand (or by whoever pushed them).

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCircleCheck, FaCircleInfo, FaCircleXmark, FaSpinner, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;

use crate::messages::{use_messages, MessageKind};

#[component]
pub fn Toasts() -> Element {
    let mut queue = use_messages();
    let scheduled: Rc<RefCell<HashSet<u64>>> = use_hook(|| Rc::new(RefCell::new(HashSet::new())));

    // one dismissal timer per expiring message
    use_effect(move || {
        let entries = queue().entries().to_vec();
        for message in entries {
            let Some(duration) = message.duration_secs else {
                continue;
            };
            if !scheduled.borrow_mut().insert(message.id) {
                continue;
            }
            let id = message.id;
            spawn(async move {
                crate::time::sleep(Duration::from_secs(u64::from(duration))).await;
                queue.write().dismiss(id);
            });
        }
    });

    let entries = queue().entries().to_vec();
    rsx! {
        div {
            class: "toast-stack",
            for message in entries {
                div {
                    key: "{message.id}",
                    class: format!("toast toast--{}", kind_class(message.kind)),
                    span {
                        class: "toast-icon",
                        ToastIcon { kind: message.kind }
                    }
                    span { class: "toast-text", "{message.text}" }
                    button {
                        class: "toast-dismiss",
                        onclick: {
                            let id = message.id;
                            move |_| queue.write().dismiss(id)
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}

fn kind_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "info",
        MessageKind::Success => "success",
        MessageKind::Warning => "warning",
        MessageKind::Error => "error",
        MessageKind::Loading => "loading",
    }
}

#[component]
fn ToastIcon(kind: MessageKind) -> Element {
    match kind {
        MessageKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } },
        MessageKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } },
        MessageKind::Warning => {
            rsx! { Icon { icon: FaTriangleExclamation, width: 16, height: 16 } }
        }
        MessageKind::Error => rsx! { Icon { icon: FaCircleXmark, width: 16, height: 16 } },
        MessageKind::Loading => rsx! { Icon { icon: FaSpinner, width: 16, height: 16 } },
    }
}
