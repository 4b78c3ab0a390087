use strum_macros::{AsRefStr, EnumString};

/// Outcome of a form submission, carried back to `/` as `?success=<notice>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Notice {
    Added,
    Deleted,
    Edited,
}

impl Notice {
    /// Where to send the browser after the action succeeded.
    pub fn redirect_target(self) -> String {
        format!("/?success={}", self.as_ref())
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::Added => "Entry added.",
            Notice::Deleted => "Entry deleted.",
            Notice::Edited => "Entry updated.",
        }
    }
}
