use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::{show_alert, show_toast, ToastKind};

use super::messages::Msg;
use super::state::{FetchState, TrashComponent};

pub fn update(component: &mut TrashComponent, ctx: &Context<TrashComponent>, msg: Msg) -> bool {
    match msg {
        Msg::TrashLoaded(entries) => {
            component.entries = entries;
            component.fetch = FetchState::Loaded;
            true
        }
        Msg::LoadFailed(detail) => {
            error!(format!("ट्रैश लोड नहीं हुआ: {detail}"));
            component.fetch = FetchState::Failed;
            true
        }
        Msg::Restore(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::restore_entry(id).await {
                    Ok(()) => link.send_message(Msg::Restored(id)),
                    Err(err) => link.send_message(Msg::RestoreFailed(err.to_string())),
                }
            });
            false
        }
        Msg::Restored(id) => {
            component.entries.retain(|entry| entry.id != id);
            show_toast(ToastKind::Success, "सेवा पुनः जोड़ दी गई");
            true
        }
        Msg::RestoreFailed(detail) => {
            error!(format!("सेवा पुनः जोड़ने में त्रुटि: {detail}"));
            show_alert(&format!("पुनः जोड़ने में त्रुटि हुई 😢: {detail}"));
            false
        }
        Msg::Purge(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::purge_entry(id).await {
                    Ok(()) => link.send_message(Msg::Purged(id)),
                    Err(err) => link.send_message(Msg::PurgeFailed(err.to_string())),
                }
            });
            false
        }
        Msg::Purged(id) => {
            component.entries.retain(|entry| entry.id != id);
            show_toast(ToastKind::Danger, "सेवा स्थाई रूप से हटा दी गई");
            true
        }
        Msg::PurgeFailed(detail) => {
            error!(format!("स्थाई रूप से हटाने में त्रुटि: {detail}"));
            show_alert(&format!("स्थाई रूप से हटाने में त्रुटि हुई 😢: {detail}"));
            false
        }
    }
}
