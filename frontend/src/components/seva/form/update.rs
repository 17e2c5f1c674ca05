use gloo_console::error;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::dates::mdy_to_iso;
use common::model::seva::NewSevaEntry;

use crate::api;
use crate::toast::{show_alert, show_toast, ToastKind};

use super::messages::Msg;
use super::state::SevaFormComponent;

pub fn update(
    component: &mut SevaFormComponent,
    ctx: &Context<SevaFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Submit => {
            // Dates leave the datepicker as MM/DD/YYYY; the service wants ISO.
            let payload = NewSevaEntry {
                paath_name: input_value(&component.paath_ref),
                person_name: input_value(&component.person_ref),
                gotra_name: input_value(&component.gotra_ref),
                start_date: mdy_to_iso(&input_value(&component.start_ref)),
                end_date: mdy_to_iso(&input_value(&component.end_ref)),
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::create_entry(&payload).await {
                    Ok(()) => link.send_message(Msg::Saved),
                    Err(err) => link.send_message(Msg::SaveFailed(err.to_string())),
                }
            });
            false
        }
        Msg::Saved => {
            show_toast(ToastKind::Success, "सेवा सुरक्षित हो गई");
            if let Some(form) = component.form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
            false
        }
        Msg::SaveFailed(detail) => {
            // Fields stay as entered so the user can correct and resubmit.
            error!(format!("सेवा सेव नहीं हुई: {detail}"));
            show_alert(&format!("सेवा सेव करने में त्रुटि हुई 😢: {detail}"));
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
