use lettre::transport::smtp::authentication::Credentials;

#[derive(Clone)]
pub struct SmtpCredentials {
    pub user: String,
    pub password: String,
}

impl SmtpCredentials {
    pub fn new<T: AsRef<str>>(user: T, password: T) -> Self {
        SmtpCredentials {
            user: user.as_ref().to_string(),
            password: password.as_ref().to_string(),
        }
    }
}

impl From<&SmtpCredentials> for Credentials {
    fn from(creds: &SmtpCredentials) -> Self {
        Credentials::new(creds.user.clone(), creds.password.clone())
    }
}

impl std::fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpCredentials").field("user", &self.user).field("password", &"***").finish()
    }
}
