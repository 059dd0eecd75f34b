use crate::client::controller::error::ValidationError;
use crate::client::model::member::{LoginRequest, SignUpRequest};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn is_valid(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    pub fn into_request(self) -> Result<LoginRequest, ValidationError> {
        if !self.is_valid() {
            return Err(ValidationError::IncompleteLogin);
        }
        Ok(LoginRequest {
            email: self.email,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthday: chrono::NaiveDate,
}

impl SignUpForm {
    pub fn is_complete(&self) -> bool {
        [&self.email, &self.phone_number, &self.password, &self.first_name, &self.last_name, &self.gender]
            .iter()
            .all(|field| !field.is_empty())
    }

    pub fn into_request(self) -> Result<SignUpRequest, ValidationError> {
        if !self.is_complete() {
            return Err(ValidationError::IncompleteSignUp);
        }
        let birthday = self
            .birthday
            .and_hms_opt(0, 0, 0)
            .map(|at| at.and_utc().timestamp() as f64)
            .unwrap_or_default();
        Ok(SignUpRequest {
            email: self.email,
            phone_number: self.phone_number,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            birthday,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn sign_up() -> SignUpForm {
        SignUpForm {
            email: "ada@x.io".into(),
            phone_number: "0912".into(),
            password: "pw".into(),
            first_name: "Ada".into(),
            last_name: "Lee".into(),
            gender: "F".into(),
            birthday: NaiveDate::from_ymd_opt(1970, 1, 2).unwrap(),
        }
    }

    #[test]
    fn login_needs_both_fields() {
        let form = LoginForm { email: "ada@x.io".into(), password: "".into() };
        assert!(!form.is_valid());
        assert_eq!(form.into_request(), Err(ValidationError::IncompleteLogin));
        let form = LoginForm { email: "ada@x.io".into(), password: "pw".into() };
        assert_eq!(form.into_request().unwrap().email, "ada@x.io");
    }

    #[test]
    fn sign_up_birthday_in_epoch_seconds() {
        let request = sign_up().into_request().unwrap();
        assert_eq!(request.birthday, 86_400.0);
    }

    #[test]
    fn sign_up_rejects_missing_field() {
        let form = SignUpForm { gender: "".into(), ..sign_up() };
        assert!(!form.is_complete());
        assert_eq!(form.into_request(), Err(ValidationError::IncompleteSignUp));
    }
}
