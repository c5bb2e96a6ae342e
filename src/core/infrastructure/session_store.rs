//! Persistence of the single per-user session.

use crate::core::domain::{
    error::{ProxmoxError, ProxmoxResult, SessionDefect},
    model::session::{Session, SessionRecord, SessionUpdate},
};
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::{fs, io::AsyncWriteExt};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Reads, writes and mutates the stored session.
///
/// Every operation either fully succeeds or leaves the previous on-disk state
/// untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the session, failing with a field-naming error if it is incomplete.
    async fn read(&self) -> ProxmoxResult<Session>;

    /// Replaces whatever was stored with `session`.
    async fn write(&self, session: &Session) -> ProxmoxResult<()>;

    /// Applies one mutation and persists the result.
    ///
    /// The mutated session is validated before anything is written.
    async fn update(&self, update: SessionUpdate) -> ProxmoxResult<Session> {
        let mut session = self.read().await?;
        session.apply(update)?;
        self.write(&session).await?;
        Ok(session)
    }
}

/// Stores the session as JSON in a single file, `~/.proxmox/session` by default.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location used when no override is configured.
    pub fn default_path() -> ProxmoxResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".proxmox").join("session"))
            .ok_or_else(|| {
                ProxmoxError::persistence(
                    "~/.proxmox/session",
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        "home directory could not be determined",
                    ),
                )
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent(&self) -> ProxmoxResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ProxmoxError::persistence(parent, e))?;
        }
        Ok(())
    }

    async fn create_placeholder(&self) -> ProxmoxResult<()> {
        self.ensure_parent().await?;
        match create_private(&self.path).await {
            Ok(_) => {
                tracing::debug!(path = %self.path.display(), "Created empty session placeholder");
                Ok(())
            }
            // Another process got there first.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(ProxmoxError::persistence(&self.path, e)),
        }
    }

    /// Sibling path for staging a write, unique per process and call.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(
            ".{}.{}.tmp",
            std::process::id(),
            TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn read(&self) -> ProxmoxResult<Session> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.create_placeholder().await?;
                String::new()
            }
            Err(e) => return Err(ProxmoxError::persistence(&self.path, e)),
        };

        if raw.trim().is_empty() {
            return Err(ProxmoxError::SessionMissing {
                path: self.path.clone(),
            });
        }

        let record: SessionRecord = serde_json::from_str(&raw)
            .map_err(|e| SessionDefect::Malformed(e.to_string()))?;
        Ok(Session::try_from(record)?)
    }

    async fn write(&self, session: &Session) -> ProxmoxResult<()> {
        self.ensure_parent().await?;

        let contents = serde_json::to_string_pretty(&SessionRecord::from(session))
            .map_err(|e| ProxmoxError::Decode(format!("Failed to encode session: {}", e)))?;

        let temp = self.temp_path();
        if let Err(e) = write_private(&temp, contents.as_bytes()).await {
            let _ = fs::remove_file(&temp).await;
            return Err(ProxmoxError::persistence(&temp, e));
        }
        if let Err(e) = fs::rename(&temp, &self.path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(ProxmoxError::persistence(&self.path, e));
        }

        tracing::debug!(path = %self.path.display(), "Session written");
        Ok(())
    }
}

/// Creates a new file that only the owner can read or write.
///
/// The mode is applied at creation, so the file is never readable by others.
async fn create_private(path: &Path) -> io::Result<fs::File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);
    options.open(path).await
}

async fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = create_private(path).await?;
    file.write_all(contents).await?;
    file.sync_all().await
}
