use serde::{Deserialize, Serialize};

/// Number of positional fields in a stored session
pub const PROFILE_FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub member_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    /// seconds since epoch
    pub birthday: f64,
}

/// The logged-in member, stored positionally as
/// `[firstName, lastName, gender, phone, email, memberId]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberProfile {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub member_id: String,
}

impl MemberProfile {
    /// Rebuild a profile from its stored fields, `None` when the array is short
    pub fn from_fields(fields: &[String]) -> Option<Self> {
        match fields {
            [first_name, last_name, gender, phone, email, member_id, ..] => Some(Self {
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                gender: gender.clone(),
                phone: phone.clone(),
                email: email.clone(),
                member_id: member_id.clone(),
            }),
            _ => None,
        }
    }

    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.gender.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.member_id.clone(),
        ]
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Profile from a successful login; fields the backend omitted stay empty
    pub fn from_login(email: &str, res: &LoginResponse) -> Option<Self> {
        let member_id = res.member_id.clone()?;
        Some(Self {
            first_name: res.first_name.clone().unwrap_or_default(),
            last_name: res.last_name.clone().unwrap_or_default(),
            gender: res.gender.clone().unwrap_or_default(),
            phone: res.phone_number.clone().unwrap_or_default(),
            email: email.to_string(),
            member_id,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn reads_fields_positionally() {
        let profile = MemberProfile::from_fields(&fields(&["Ada", "Lee", "F", "0912", "ada@x.io", "m1"])).unwrap();
        assert_eq!(profile.display_name(), "Ada Lee");
        assert_eq!(profile.member_id, "m1");
        assert_eq!(profile.to_fields().len(), PROFILE_FIELD_COUNT);
    }

    #[test]
    fn short_array_is_rejected() {
        assert!(MemberProfile::from_fields(&fields(&["Ada", "Lee", "F", "0912", "ada@x.io"])).is_none());
    }

    #[test]
    fn login_without_member_id_has_no_profile() {
        let res: LoginResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(MemberProfile::from_login("ada@x.io", &res).is_none());
    }
}
