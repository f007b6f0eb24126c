use serde::Deserialize;

use userd_core::{NewUser, User, UserId};

// -------------------------
// Request DTOs
// -------------------------
//
// Wire keys are capitalized (`Name`, `Email`, `ID`); responses use the
// lowercase `User` serialization.

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "ID")]
    pub id: UserId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
        }
    }
}

impl From<UpdateUserRequest> for User {
    fn from(req: UpdateUserRequest) -> Self {
        User {
            id: req.id,
            name: req.name,
            email: req.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_decodes_capitalized_keys() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"Name":"Bob","Email":"bob@x.com"}"#).unwrap();
        assert_eq!(req.name, "Bob");
        assert_eq!(req.email, "bob@x.com");
    }

    #[test]
    fn update_request_decodes_id_as_i64() {
        let req: UpdateUserRequest =
            serde_json::from_str(r#"{"ID":12,"Name":"Bob","Email":"bob@x.com"}"#).unwrap();
        assert_eq!(req.id, UserId::new(12));
    }

    #[test]
    fn create_request_rejects_missing_fields() {
        let result = serde_json::from_str::<CreateUserRequest>(r#"{"Name":"Bob"}"#);
        assert!(result.is_err());
    }
}
