//! Toast notifications.
//!
//! Screens push a notice through [`NoticeService`]; [`NoticeStack`] renders
//! them in a corner and each one dismisses itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
struct Notice {
    id: u64,
    kind: NoticeKind,
    title: String,
    description: String,
}

#[derive(Clone, Copy)]
pub struct NoticeService {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Success, title.into(), description.into());
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(NoticeKind::Error, title.into(), description.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, title: String, description: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notice {
                id,
                kind,
                title,
                description,
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notice() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not found in context")
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let svc = use_notice();

    view! {
        <div class="notice-stack">
            {move || svc.items.get().into_iter().map(|notice| {
                let id = notice.id;
                let kind_class = match notice.kind {
                    NoticeKind::Success => "notice notice--success",
                    NoticeKind::Error => "notice notice--error",
                };
                view! {
                    <div class=kind_class on:click=move |_| svc.dismiss(id)>
                        <div class="notice__title">{notice.title}</div>
                        <div class="notice__description">{notice.description}</div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
