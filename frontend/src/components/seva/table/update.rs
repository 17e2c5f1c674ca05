//! Update logic for the entries table.
//!
//! Sort and search-field changes touch only local state; search submissions
//! and date lookups go back to the service; a delete acts on exactly the id
//! carried by its message and removes that entry alone on success.

use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::{show_alert, show_toast, ToastKind};

use super::load_entries;
use super::messages::Msg;
use super::state::{FetchState, SevaTableComponent};

pub fn update(
    component: &mut SevaTableComponent,
    ctx: &Context<SevaTableComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::EntriesLoaded(entries) => {
            component.entries = entries;
            component.fetch = FetchState::Loaded;
            true
        }
        Msg::LoadFailed(detail) => {
            error!(format!("सेवा सूची लोड नहीं हुई: {detail}"));
            component.fetch = FetchState::Failed;
            true
        }
        Msg::SetSort(order) => {
            // Reorders the held set; no refetch.
            component.sort = order;
            true
        }
        Msg::SetSearchField(field) => {
            component.search_field = field;
            true
        }
        Msg::SubmitSearch => {
            let query = input_value(&component.search_input_ref);
            let query = query.trim().to_string();
            if query.is_empty() {
                load_entries(ctx.link().clone());
                return false;
            }

            let field = component.search_field;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::search_entries(field, &query).await {
                    Ok(entries) => link.send_message(Msg::EntriesLoaded(entries)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
            false
        }
        Msg::DateChanged => {
            let raw = input_value(&component.date_input_ref);
            let raw = raw.trim().to_string();
            if raw.is_empty() {
                load_entries(ctx.link().clone());
                return false;
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::search_by_date(&raw).await {
                    Ok(entries) => link.send_message(Msg::EntriesLoaded(entries)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
            false
        }
        Msg::Delete(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_entry(id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(err) => link.send_message(Msg::DeleteFailed(err.to_string())),
                }
            });
            false
        }
        Msg::Deleted(id) => {
            component.entries.retain(|entry| entry.id != id);
            show_toast(ToastKind::Danger, "सेवा हटा दी गई");
            true
        }
        Msg::DeleteFailed(detail) => {
            error!(format!("सेवा हटाने में त्रुटि: {detail}"));
            show_alert(&format!("सेवा हटाने में त्रुटि हुई 😢: {detail}"));
            false
        }
    }
}

fn input_value(input_ref: &NodeRef) -> String {
    input_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}
