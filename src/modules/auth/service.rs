use crate::error::Error;
use bcrypt::verify;

/// single shared password gate for the operator UI
///
/// there are no user accounts, the whole application is protected by one
/// password whose bcrypt hash comes from the configuration
pub struct AuthService {
    password_hash: String,
    authenticated: bool,
}

impl AuthService {
    pub fn new(password_hash: String) -> Self {
        AuthService {
            password_hash,
            authenticated: false,
        }
    }

    /// verifies the shared operator password and flips the in memory signed
    /// in flag, which is never persisted
    ///
    /// refused while no password hash is configured
    pub fn login(&mut self, password: &str) -> Result<(), Error> {
        if self.password_hash.is_empty() {
            return Err(Error::AuthFailed);
        }

        let password_is_valid = verify(password, &self.password_hash).or(Err(Error::AuthFailed))?;

        if !password_is_valid {
            return Err(Error::AuthFailed);
        }

        self.authenticated = true;

        Ok(())
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
