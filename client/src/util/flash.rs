//! Transient status messages shown above forms and tables.

#[cfg(test)]
#[path = "flash_test.rs"]
mod flash_test;

use leptos::prelude::*;

/// How long a success message stays up.
pub const SUCCESS_MILLIS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Warning,
    Error,
}

impl FlashKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "flash flash--success",
            Self::Warning => "flash flash--warning",
            Self::Error => "flash flash--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub title: String,
    pub detail: Option<String>,
}

impl Flash {
    pub fn success(title: impl Into<String>) -> Self {
        Self { kind: FlashKind::Success, title: title.into(), detail: None }
    }

    pub fn warning(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { kind: FlashKind::Warning, title: title.into(), detail: Some(detail.into()) }
    }

    /// `title` plus the error's display text.
    pub fn error(title: impl Into<String>, err: &impl std::fmt::Display) -> Self {
        Self { kind: FlashKind::Error, title: title.into(), detail: Some(err.to_string()) }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Show `flash`; successes clear themselves after [`SUCCESS_MILLIS`].
pub fn show(slot: RwSignal<Option<Flash>>, flash: Flash) {
    let auto_clear = flash.kind == FlashKind::Success;
    slot.set(Some(flash.clone()));
    if auto_clear {
        crate::util::browser::spawn(async move {
            crate::util::browser::sleep_ms(SUCCESS_MILLIS).await;
            if slot.get_untracked().as_ref() == Some(&flash) {
                slot.set(None);
            }
        });
    }
}

/// Banner for the flash in `slot`, with a dismiss button.
#[component]
pub fn FlashBanner(slot: RwSignal<Option<Flash>>) -> impl IntoView {
    move || {
        slot.get().map(|flash| {
            view! {
                <div class=flash.kind.class() role="status">
                    <strong>{flash.title}</strong>
                    {flash.detail.map(|d| view! { <span class="flash__detail">{d}</span> })}
                    <button class="flash__close" aria-label="Fechar" on:click=move |_| slot.set(None)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
