use yew::prelude::*;

use super::messages::Msg;
use super::state::SevaFormComponent;

pub fn view(component: &SevaFormComponent, ctx: &Context<SevaFormComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="seva-form" ref={component.form_ref.clone()} {onsubmit}>
            { text_field("paath", "पाठ का नाम", &component.paath_ref) }
            { text_field("person", "व्यक्ति का नाम", &component.person_ref) }
            { text_field("gotra", "गोत्र", &component.gotra_ref) }
            { date_field("datepicker-range-start", "आरंभ तिथि", &component.start_ref) }
            { date_field("datepicker-range-end", "समाप्ति तिथि", &component.end_ref) }
            <button type="submit">{ "सेवा जोड़ें" }</button>
        </form>
    }
}

fn text_field(id: &'static str, label: &'static str, input_ref: &NodeRef) -> Html {
    html! {
        <div class="form-field">
            <label for={id}>{ label }</label>
            <input id={id} type="text" ref={input_ref.clone()} required=true />
        </div>
    }
}

fn date_field(id: &'static str, label: &'static str, input_ref: &NodeRef) -> Html {
    html! {
        <div class="form-field">
            <label for={id}>{ label }</label>
            <input
                id={id}
                type="text"
                ref={input_ref.clone()}
                placeholder="MM/DD/YYYY"
                required=true
            />
        </div>
    }
}
