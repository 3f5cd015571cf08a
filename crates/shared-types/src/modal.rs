/// Open/closed state of a resource panel's modal.
///
/// One value replaces the separate "is open" flag and "editing target"
/// option, so a panel can never be editing while closed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState<T> {
    #[default]
    Closed,
    Creating,
    Editing(T),
    Viewing(T),
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// True for the create and edit forms.
    pub fn is_form(&self) -> bool {
        matches!(self, ModalState::Creating | ModalState::Editing(_))
    }

    pub fn editing(&self) -> Option<&T> {
        match self {
            ModalState::Editing(item) => Some(item),
            _ => None,
        }
    }

    pub fn viewing(&self) -> Option<&T> {
        match self {
            ModalState::Viewing(item) => Some(item),
            _ => None,
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Form heading, e.g. "Create New Product" / "Edit Product".
    pub fn form_title(&self, noun: &str) -> String {
        match self {
            ModalState::Editing(_) => format!("Edit {noun}"),
            _ => format!("Create New {noun}"),
        }
    }

    /// Submit button label.
    pub fn submit_label(&self) -> &'static str {
        match self {
            ModalState::Editing(_) => "Update",
            _ => "Create",
        }
    }
}
