#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A user-facing notice; the shell surfaces it as a toast.
    Notify { title: String, detail: String },
}

impl Effect {
    pub fn notify(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Effect::Notify {
            title: title.into(),
            detail: detail.into(),
        }
    }
}
