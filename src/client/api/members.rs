use log::{info, warn};
use reqwest::StatusCode;
use super::{ApiClient, LOGIN, SIGN_UP};
use crate::client::controller::error::{ClientError, ClientResult};
use crate::client::model::member::{LoginRequest, LoginResponse, SignUpRequest};

impl ApiClient {
    /// Succeeds only on 200 with `success: true` in the body
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let res = self.send_json(LOGIN, request).await?;
        let res: LoginResponse = match Self::check_ok(LOGIN, res).await {
            Ok(res) => Self::decode(res).await?,
            Err(ClientError::Status(StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED)) => {
                return Err(ClientError::LoginRejected);
            }
            Err(e) => return Err(e),
        };
        if !res.success {
            warn!("login for {} was refused", request.email);
            return Err(ClientError::LoginRejected);
        }
        info!("logged in as {}", request.email);
        Ok(res)
    }

    /// Any answer but 200 counts as a failed sign up
    pub async fn sign_up(&self, request: &SignUpRequest) -> ClientResult<()> {
        let res = self.send_json(SIGN_UP, request).await?;
        Self::check_ok(SIGN_UP, res).await?;
        info!("signed up {}", request.email);
        Ok(())
    }
}
