use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{info, warn};
use crate::client::controller::error::{ClientError, ClientResult};
use crate::client::model::member::MemberProfile;

/// Key the member's fields are stored under
pub const SESSION_KEY: &str = "userArray";

/// Where the logged-in member is remembered between runs
pub trait SessionStore {
    /// `Ok(None)` when nobody is logged in
    fn load(&self) -> ClientResult<Option<MemberProfile>>;
    fn save(&self, profile: &MemberProfile) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;
}

fn to_profile(fields: Option<Vec<String>>) -> ClientResult<Option<MemberProfile>> {
    match fields {
        None => Ok(None),
        Some(fields) => MemberProfile::from_fields(&fields)
            .map(Some)
            .ok_or_else(|| ClientError::Session(format!("stored session has {} field(s)", fields.len()))),
    }
}

/// JSON object of string arrays on disk
#[derive(Debug)]
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

    fn read_all(&self) -> ClientResult<HashMap<String, Vec<String>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, values: &HashMap<String, Vec<String>>) -> ClientResult<()> {
        fs::write(&self.path, serde_json::to_vec_pretty(values)?)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ClientResult<Option<MemberProfile>> {
        to_profile(self.read_all()?.remove(SESSION_KEY))
    }

    fn save(&self, profile: &MemberProfile) -> ClientResult<()> {
        let mut values = self.read_all().unwrap_or_else(|e| {
            warn!("discarding unreadable session file {:?}, {}", self.path, e);
            HashMap::new()
        });
        values.insert(SESSION_KEY.to_string(), profile.to_fields());
        self.write_all(&values)?;
        info!("session saved for member={}", profile.member_id);
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(e) => {
                warn!("discarding unreadable session file {:?}, {}", self.path, e);
                fs::remove_file(&self.path)?;
                return Ok(());
            }
        };
        if values.remove(SESSION_KEY).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    fields: Mutex<Option<Vec<String>>>,
}

impl MemorySessionStore {
    fn slot(&self) -> ClientResult<std::sync::MutexGuard<'_, Option<Vec<String>>>> {
        self.fields
            .lock()
            .map_err(|_| ClientError::Session("session lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> ClientResult<Option<MemberProfile>> {
        to_profile(self.slot()?.clone())
    }

    fn save(&self, profile: &MemberProfile) -> ClientResult<()> {
        *self.slot()? = Some(profile.to_fields());
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        *self.slot()? = None;
        Ok(())
    }
}
