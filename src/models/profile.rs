use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub email: String,
}

impl UserProfile {
    /// The identity checked by the boot gate.
    pub fn username(&self) -> &str {
        &self.name
    }

    pub fn is_signed_in(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Shape of the `user` key on disk. Older data holds only the raw username.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredUser {
    Profile(UserProfile),
    Legacy(String),
}

impl From<StoredUser> for UserProfile {
    fn from(stored: StoredUser) -> Self {
        match stored {
            StoredUser::Profile(p) => p,
            StoredUser::Legacy(name) => UserProfile {
                name,
                ..UserProfile::default()
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub school: Option<String>,
    pub email: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.school.is_none() && self.email.is_none()
    }

    pub fn apply(self, p: &mut UserProfile) {
        if let Some(name) = self.name {
            p.name = name;
        }
        if let Some(school) = self.school {
            p.school = school;
        }
        if let Some(email) = self.email {
            p.email = email;
        }
    }
}

impl From<UserProfile> for ProfilePatch {
    fn from(p: UserProfile) -> Self {
        Self {
            name: Some(p.name),
            school: Some(p.school),
            email: Some(p.email),
        }
    }
}
