//! User record types.
//!
//! Wire format is snake_case, matching the public API (`phone_number`,
//! `date_of_birth`, `membership_status`, `account_verified`).

use serde::{Deserialize, Serialize};

use wayfarer_core::{Email, Entity, StoreError, UserId};

use super::{check, require};

/// A stored user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned ID; never supplied by the caller.
    pub id: UserId,
    pub name: String,
    /// Unique across all users; uniqueness enforced at creation only.
    pub email: Email,
    pub password: String,
    pub phone_number: String,
    pub gender: String,
    /// Opaque date string (e.g., "1990-01-01").
    pub date_of_birth: String,
    pub membership_status: String,
    pub account_verified: bool,
    pub company: String,
}

/// Creation payload for a user. All fields are required; optionality here
/// exists so validation can name the missing ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub membership_status: Option<String>,
    pub account_verified: Option<bool>,
    pub company: Option<String>,
}

/// Partial-update payload for a user. Present fields overwrite; no
/// re-validation of the merged record (a PUT may even change the email
/// without a uniqueness check, mirroring the permissive update semantics).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<String>,
    pub membership_status: Option<String>,
    pub account_verified: Option<bool>,
    pub company: Option<String>,
}

impl Entity for User {
    type Id = UserId;
    type Draft = NewUser;
    type Patch = UserPatch;

    const NAME: &'static str = "user";

    fn id(&self) -> UserId {
        self.id
    }

    fn missing_fields(draft: &NewUser) -> Vec<&'static str> {
        let mut missing = Vec::new();
        check(&mut missing, "name", draft.name.as_deref());
        check(&mut missing, "email", draft.email.as_deref());
        check(&mut missing, "password", draft.password.as_deref());
        check(&mut missing, "phone_number", draft.phone_number.as_deref());
        check(&mut missing, "gender", draft.gender.as_deref());
        check(&mut missing, "date_of_birth", draft.date_of_birth.as_deref());
        check(
            &mut missing,
            "membership_status",
            draft.membership_status.as_deref(),
        );
        if draft.account_verified.is_none() {
            missing.push("account_verified");
        }
        check(&mut missing, "company", draft.company.as_deref());
        missing
    }

    fn conflict(draft: &NewUser, existing: &Self) -> Option<&'static str> {
        (draft.email.as_deref() == Some(existing.email.as_str())).then_some("email")
    }

    fn build(id: UserId, draft: NewUser) -> Result<Self, StoreError> {
        let mut missing = Vec::new();
        let name = require(&mut missing, "name", draft.name);
        let raw_email = require(&mut missing, "email", draft.email);
        let password = require(&mut missing, "password", draft.password);
        let phone_number = require(&mut missing, "phone_number", draft.phone_number);
        let gender = require(&mut missing, "gender", draft.gender);
        let date_of_birth = require(&mut missing, "date_of_birth", draft.date_of_birth);
        let membership_status = require(&mut missing, "membership_status", draft.membership_status);
        let account_verified = draft.account_verified.unwrap_or_else(|| {
            missing.push("account_verified");
            false
        });
        let company = require(&mut missing, "company", draft.company);

        if !missing.is_empty() {
            return Err(StoreError::MissingFields(missing));
        }

        let email = Email::parse(&raw_email).map_err(|e| StoreError::InvalidField {
            field: "email",
            reason: e.to_string(),
        })?;

        Ok(Self {
            id,
            name,
            email,
            password,
            phone_number,
            gender,
            date_of_birth,
            membership_status,
            account_verified,
            company,
        })
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(membership_status) = patch.membership_status {
            self.membership_status = membership_status;
        }
        if let Some(account_verified) = patch.account_verified {
            self.account_verified = account_verified;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;
    use wayfarer_core::{EntityStore, StoreError};

    pub(crate) fn john_draft() -> NewUser {
        NewUser {
            name: Some("John Doe".to_string()),
            email: Some("john@example.com".to_string()),
            password: Some("password123".to_string()),
            phone_number: Some("1234567890".to_string()),
            gender: Some("Male".to_string()),
            date_of_birth: Some("1990-01-01".to_string()),
            membership_status: Some("Inactive".to_string()),
            account_verified: Some(true),
            company: Some("Tech Corp".to_string()),
        }
    }

    #[test]
    fn test_add_valid_user() {
        let mut store = EntityStore::<User>::new();
        let user = store.add(john_draft()).unwrap();

        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email.as_str(), "john@example.com");
        assert!(user.account_verified);
    }

    #[test]
    fn test_account_verified_false_is_present() {
        let draft = NewUser {
            account_verified: Some(false),
            ..john_draft()
        };
        assert!(User::missing_fields(&draft).is_empty());
    }

    #[test]
    fn test_duplicate_email_rejected_and_store_unchanged() {
        let mut store = EntityStore::<User>::new();
        store.add(john_draft()).unwrap();

        let duplicate = NewUser {
            name: Some("Johnny".to_string()),
            ..john_draft()
        };
        let err = store.add(duplicate).unwrap_err();

        assert_eq!(err, StoreError::Duplicate { field: "email" });
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut store = EntityStore::<User>::new();
        let draft = NewUser {
            email: Some("not-an-email".to_string()),
            ..john_draft()
        };

        let err = store.add(draft).unwrap_err();
        assert!(matches!(err, StoreError::InvalidField { field: "email", .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_missing_fields_are_named() {
        let draft = NewUser {
            email: None,
            account_verified: None,
            ..john_draft()
        };

        let missing = User::missing_fields(&draft);
        assert_eq!(missing, ["email", "account_verified"]);
    }

    #[test]
    fn test_patch_preserves_unpatched_fields() {
        let mut user = User::build(UserId::new(1), john_draft()).unwrap();
        user.apply(UserPatch {
            membership_status: Some("Active".to_string()),
            ..UserPatch::default()
        });

        assert_eq!(user.membership_status, "Active");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.company, "Tech Corp");
    }

    #[test]
    fn test_wire_format_is_snake_case() {
        let user = User::build(UserId::new(1), john_draft()).unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["phone_number"], "1234567890");
        assert_eq!(json["account_verified"], true);
        assert_eq!(json["email"], "john@example.com");
    }
}
