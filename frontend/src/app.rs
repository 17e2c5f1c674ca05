use yew::{classes, html, Component, Context, Html};

use crate::components::seva::form::SevaFormComponent;
use crate::components::seva::table::SevaTableComponent;
use crate::components::seva::trash::TrashComponent;

/// The three pages of the management interface.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Entries,
    NewEntry,
    Trash,
}

impl Page {
    fn label(self) -> &'static str {
        match self {
            Page::Entries => "सेवा सूची",
            Page::NewEntry => "नई सेवा",
            Page::Trash => "ट्रैश",
        }
    }
}

pub enum Msg {
    SetPage(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Entries }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetPage(page) => {
                if self.page == page {
                    false
                } else {
                    self.page = page;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let nav_button = |page: Page| {
            html! {
                <button
                    class={classes!("nav-btn", if self.page == page { "active" } else { "" })}
                    onclick={link.callback(move |_| Msg::SetPage(page))}
                >
                    { page.label() }
                </button>
            }
        };

        html! {
            <div>
                <nav class="nav-bar">
                    { nav_button(Page::Entries) }
                    { nav_button(Page::NewEntry) }
                    { nav_button(Page::Trash) }
                </nav>
                {
                    match self.page {
                        Page::Entries => html! { <SevaTableComponent /> },
                        Page::NewEntry => html! { <SevaFormComponent /> },
                        Page::Trash => html! { <TrashComponent /> },
                    }
                }
            </div>
        }
    }
}
