use serde::{Deserialize, Serialize};

/// A person shown in profile and listing pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub lastname: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
