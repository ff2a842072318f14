//! The signed-in user, with explicit sign-in and sign-out.
//!
//! A [`Session`] is created once at startup with [`Session::restore`] and
//! handed to whoever needs to know who is signed in. Persistence goes
//! through a [`SessionStore`], which holds the serialized user between runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AuthError, FieldErrors, SessionError};
use crate::models::{DemoAccount, User};
use crate::validation;

/// Storage for the serialized session payload.
pub trait SessionStore {
    fn load(&self) -> Result<Option<String>, SessionError>;
    fn save(&mut self, payload: &str) -> Result<(), SessionError>;
    fn clear(&mut self) -> Result<(), SessionError>;
}

/// Keeps the session in a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), SessionError> {
        fs::write(&self.path, payload).map_err(|err| self.io_error(err))
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }
}

/// Keeps the session in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    payload: Option<String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.payload.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), SessionError> {
        self.payload = Some(payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.payload = None;
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct Active {
    id: Uuid,
    user: User,
}

pub struct Session {
    store: Box<dyn SessionStore>,
    active: Option<Active>,
}

impl Session {
    /// Loads whatever user the store remembers. A payload that no longer
    /// parses is removed and the session starts signed out.
    pub fn restore(store: impl SessionStore + 'static) -> Result<Self, SessionError> {
        let mut store: Box<dyn SessionStore> = Box::new(store);

        let active = match store.load()? {
            Some(payload) => match serde_json::from_str::<User>(&payload) {
                Ok(user) => {
                    let id = Uuid::new_v4();
                    info!(session = %id, email = %user.email, "session restored");
                    Some(Active { id, user })
                }
                Err(err) => {
                    warn!(error = %err, "discarding unreadable stored session");
                    store.clear()?;
                    None
                }
            },
            None => None,
        };

        Ok(Self { store, active })
    }

    pub fn sign_in(&mut self, user: User) -> Result<(), SessionError> {
        let payload = serde_json::to_string(&user)?;
        self.store.save(&payload)?;

        let id = Uuid::new_v4();
        info!(session = %id, email = %user.email, role = %user.role, "signed in");
        self.active = Some(Active { id, user });
        Ok(())
    }

    /// Ends the session, returning who was signed in.
    pub fn sign_out(&mut self) -> Result<Option<User>, SessionError> {
        self.store.clear()?;
        let ended = self.active.take();
        if let Some(active) = &ended {
            info!(session = %active.id, email = %active.user.email, "signed out");
        }
        Ok(ended.map(|active| active.user))
    }

    pub fn user(&self) -> Option<&User> {
        self.active.as_ref().map(|active| &active.user)
    }

    pub fn id(&self) -> Option<Uuid> {
        self.active.as_ref().map(|active| active.id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }
}

/// Checks an email and password against the demo accounts.
pub fn authenticate(
    accounts: &[DemoAccount],
    email: &str,
    password: &str,
) -> Result<User, AuthError> {
    let email = email.trim();

    let mut errors = FieldErrors::new();
    validation::email("email", email, &mut errors);
    validation::required("password", "Password", password, &mut errors);
    errors.into_result().map_err(AuthError::Invalid)?;

    accounts
        .iter()
        .find(|account| account.email == email && account.password == password)
        .map(DemoAccount::user)
        .ok_or_else(|| {
            warn!(email, "rejected sign-in");
            AuthError::InvalidCredentials
        })
}
