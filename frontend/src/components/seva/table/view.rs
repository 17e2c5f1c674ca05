//! View for the entries table: search controls, sort controls, and the
//! table itself. Row construction goes through the pure `TableBody` mapping
//! so the markup layer stays a thin shell over tested row models.

use yew::html::Scope;
use yew::prelude::*;

use common::model::search::SearchField;
use common::order::{sort_by_start_date, SortOrder};
use common::table::{SevaRow, TableBody};

use super::messages::Msg;
use super::state::{FetchState, SevaTableComponent};

pub fn view(component: &SevaTableComponent, ctx: &Context<SevaTableComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="seva-table-root">
            { build_controls(component, link) }
            <table class="seva-table">
                <thead>
                    <tr>
                        <th scope="col">{ "पाठ का नाम" }</th>
                        <th scope="col">{ "व्यक्ति का नाम" }</th>
                        <th scope="col">{ "गोत्र" }</th>
                        <th scope="col">{ "आरंभ तिथि" }</th>
                        <th scope="col">{ "समाप्ति तिथि" }</th>
                        <th scope="col">{ "हटाएं" }</th>
                    </tr>
                </thead>
                <tbody>
                    { build_body(component, link) }
                </tbody>
            </table>
        </div>
    }
}

/// Search form, search-field radios, sort radios, and the date lookup input.
fn build_controls(component: &SevaTableComponent, link: &Scope<SevaTableComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitSearch
    });

    html! {
        <div class="table-controls">
            <form id="search-form" {onsubmit}>
                <span id="selected-category">{ component.search_field.label() }</span>
                <input
                    id="search-input"
                    type="text"
                    ref={component.search_input_ref.clone()}
                    placeholder="खोजें..."
                />
                <button type="submit">{ "खोजें" }</button>
            </form>

            <div class="search-fields">
                { for SearchField::ALL.iter().map(|&field| search_field_radio(component, link, field)) }
            </div>

            <div class="sort-options">
                { sort_radio(component, link, SortOrder::Desc, "नवीनतम पहले") }
                { sort_radio(component, link, SortOrder::Asc, "पुरानी पहले") }
            </div>

            <input
                id="datepicker-custom"
                type="text"
                ref={component.date_input_ref.clone()}
                placeholder="MM/DD/YYYY"
                onchange={link.callback(|_: Event| Msg::DateChanged)}
            />
        </div>
    }
}

fn search_field_radio(
    component: &SevaTableComponent,
    link: &Scope<SevaTableComponent>,
    field: SearchField,
) -> Html {
    html! {
        <label>
            <input
                type="radio"
                name="search-radio"
                checked={component.search_field == field}
                onchange={link.callback(move |_: Event| Msg::SetSearchField(field))}
            />
            { field.label() }
        </label>
    }
}

fn sort_radio(
    component: &SevaTableComponent,
    link: &Scope<SevaTableComponent>,
    order: SortOrder,
    label: &'static str,
) -> Html {
    html! {
        <label>
            <input
                type="radio"
                name="sort-radio"
                checked={component.sort == order}
                onchange={link.callback(move |_: Event| Msg::SetSort(order))}
            />
            { label }
        </label>
    }
}

fn build_body(component: &SevaTableComponent, link: &Scope<SevaTableComponent>) -> Html {
    match component.fetch {
        FetchState::Loading => placeholder_row("लोड हो रहा है..."),
        FetchState::Failed => placeholder_row("सेवा लोड करने में त्रुटि"),
        FetchState::Loaded => {
            let sorted = sort_by_start_date(&component.entries, component.sort);
            match TableBody::from_entries(&sorted) {
                TableBody::Empty => placeholder_row("कोई सेवा नहीं मिली"),
                TableBody::Rows(rows) => {
                    rows.iter().map(|row| data_row(row, link)).collect::<Html>()
                }
            }
        }
    }
}

fn placeholder_row(message: &'static str) -> Html {
    html! {
        <tr>
            <td colspan="6" class="placeholder">{ message }</td>
        </tr>
    }
}

fn data_row(row: &SevaRow, link: &Scope<SevaTableComponent>) -> Html {
    let id = row.id;
    html! {
        <tr key={id.to_string()}>
            <th scope="row">{ row.paath_name.clone() }</th>
            <td>{ row.person_name.clone() }</td>
            <td>{ row.gotra_name.clone() }</td>
            <td>{ row.start_date.clone() }</td>
            <td>{ row.end_date.clone() }</td>
            <td>
                <input
                    type="checkbox"
                    class="delete-checkbox"
                    data-id={id.to_string()}
                    onchange={link.callback(move |_: Event| Msg::Delete(id))}
                />
            </td>
        </tr>
    }
}
