//! Transient notifications ("toasts") shown after catalog operations

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// How long a notification stays on screen
pub const AUTO_DISMISS_MS: u32 = 5000;

/// Older notifications are dropped beyond this
pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Ordered, bounded list of visible notifications, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, title: String, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            title,
            message,
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn success(&self, title: &str, message: &str) {
        self.show(NotificationKind::Success, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.show(NotificationKind::Error, title, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn show(&self, kind: NotificationKind, title: &str, message: &str) {
        let id = self
            .queue
            .try_update(|q| q.push(kind, title.to_string(), message.to_string()));
        if let Some(id) = id {
            let this = *self;
            Timeout::new(AUTO_DISMISS_MS, move || this.dismiss(id)).forget();
        }
    }
}

/// Renders the notification stack in the corner of the viewport
#[component]
pub fn NotificationHost(service: NotificationService) -> impl IntoView {
    view! {
        <div class="notifications">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let (class, icon_name) = match n.kind {
                        NotificationKind::Success => ("notification notification--success", "check"),
                        NotificationKind::Error => ("notification notification--error", "alert"),
                    };
                    view! {
                        <div class=class role="status">
                            <span class="notification__icon">{icon(icon_name)}</span>
                            <div class="notification__body">
                                <div class="notification__title">{n.title}</div>
                                <div class="notification__message">{n.message}</div>
                            </div>
                            <button
                                class="notification__close"
                                title="Cerrar"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
