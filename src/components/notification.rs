use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::constants::NOTIFICATION_DISMISS_MS;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "notification notification-success",
            ToastKind::Error => "notification notification-error",
            ToastKind::Info => "notification notification-info",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "⚠️",
            ToastKind::Info => "ℹ️",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Toast,
    pub on_close: Callback<()>,
}

/// Transient toast. Auto-dismisses after 4 seconds; the timer is dropped if
/// the component goes away first.
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with(props.toast.clone(), move |_| {
            let timeout = Timeout::new(NOTIFICATION_DISMISS_MS, move || on_close.emit(()));
            move || drop(timeout)
        });
    }

    let onclick = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class={props.toast.kind.class()}>
            <span class="notification-icon">{ props.toast.kind.icon() }</span>
            <span class="notification-message">{ props.toast.message.clone() }</span>
            <button class="notification-close" {onclick}>{ "×" }</button>
        </div>
    }
}
