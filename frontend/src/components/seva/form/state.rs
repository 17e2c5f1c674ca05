use yew::prelude::*;

/// Field refs for the new-entry form. Values are read off the DOM at submit
/// time and the form element itself is reset after a confirmed save, so the
/// component carries no field state of its own.
pub struct SevaFormComponent {
    pub form_ref: NodeRef,
    pub paath_ref: NodeRef,
    pub person_ref: NodeRef,
    pub gotra_ref: NodeRef,
    pub start_ref: NodeRef,
    pub end_ref: NodeRef,
}

impl SevaFormComponent {
    pub fn new() -> Self {
        Self {
            form_ref: Default::default(),
            paath_ref: Default::default(),
            person_ref: Default::default(),
            gotra_ref: Default::default(),
            start_ref: Default::default(),
            end_ref: Default::default(),
        }
    }
}
