//! Vault service
//!
//! Owns the single vault slot and its lifecycle:
//!
//! ```text
//! Empty --seal--> Armed --open (burn)--> Empty
//!                 Armed --open (keep)--> Armed
//!                 Armed --clear------->  Empty
//!                 Armed --seal-------->  Armed (replaced)
//! ```
//!
//! At most one seal/open/clear runs against a service at a time. A second
//! caller gets [`GhostVaultError::Busy`] instead of racing the first.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::crypto::{self, Envelope, SecureString};
use crate::error::{GhostVaultError, GhostVaultResult};
use crate::storage::VaultStore;

/// Store key holding the serialized envelope
pub const VAULT_KEY: &str = "vaultData";

/// What the vault slot currently holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultState {
    Empty,
    Armed(Envelope),
}

impl VaultState {
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed(_))
    }
}

/// Result of a successful open
pub struct OpenedNote {
    /// The decrypted note
    pub plaintext: String,
    /// Whether the slot was destroyed as part of the open
    pub burned: bool,
}

/// Held while an operation runs; releases the in-flight flag on drop
struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn acquire(flag: &Arc<AtomicBool>) -> GhostVaultResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GhostVaultError::Busy)?;
        Ok(Self(Arc::clone(flag)))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Service for sealing, opening and clearing the vault slot
pub struct VaultService<S: VaultStore> {
    store: S,
    burn_after_reading: bool,
    in_flight: Arc<AtomicBool>,
}

impl<S: VaultStore> VaultService<S> {
    /// Create a vault over `store` with burn-after-reading enabled
    pub fn new(store: S) -> Self {
        Self {
            store,
            burn_after_reading: true,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the burn-after-reading policy
    pub fn with_burn_after_reading(mut self, burn: bool) -> Self {
        self.burn_after_reading = burn;
        self
    }

    pub fn burn_after_reading(&self) -> bool {
        self.burn_after_reading
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the envelope currently in the slot
    ///
    /// A slot holding anything other than a valid envelope reads as empty.
    /// The store is consulted on every call, so changes made by another
    /// process are picked up.
    pub fn load(&self) -> GhostVaultResult<Option<Envelope>> {
        let Some(raw) = self.store.get(VAULT_KEY)? else {
            return Ok(None);
        };

        let envelope = Envelope::parse(&raw);
        if envelope.is_none() {
            tracing::warn!("vault slot does not hold a valid envelope; treating as empty");
        }
        Ok(envelope)
    }

    /// Current state of the slot
    pub fn state(&self) -> GhostVaultResult<VaultState> {
        Ok(match self.load()? {
            Some(envelope) => VaultState::Armed(envelope),
            None => VaultState::Empty,
        })
    }

    /// Encrypt `plaintext` and store it, replacing any previous envelope
    pub fn seal(&self, plaintext: &str, passphrase: &str) -> GhostVaultResult<Envelope> {
        let _guard = InFlight::acquire(&self.in_flight)?;
        self.seal_unguarded(plaintext, passphrase)
    }

    /// Decrypt the stored envelope, burning it afterwards if configured to
    pub fn open(&self, passphrase: &str) -> GhostVaultResult<OpenedNote> {
        let _guard = InFlight::acquire(&self.in_flight)?;
        self.open_unguarded(passphrase)
    }

    /// Destroy the stored envelope
    pub fn clear(&self) -> GhostVaultResult<()> {
        let _guard = InFlight::acquire(&self.in_flight)?;
        self.store.delete(VAULT_KEY)?;
        tracing::info!("vault cleared");
        Ok(())
    }

    fn seal_unguarded(&self, plaintext: &str, passphrase: &str) -> GhostVaultResult<Envelope> {
        if plaintext.trim().is_empty() {
            return Err(GhostVaultError::EmptyNote);
        }
        if passphrase.is_empty() {
            return Err(GhostVaultError::Validation(
                "Passphrase cannot be empty".into(),
            ));
        }

        let envelope = crypto::encrypt(plaintext, passphrase)?;
        self.store.set(VAULT_KEY, &envelope.to_json()?)?;

        tracing::info!(ts = envelope.timestamp, "note sealed");
        Ok(envelope)
    }

    fn open_unguarded(&self, passphrase: &str) -> GhostVaultResult<OpenedNote> {
        let envelope = self.load()?.ok_or(GhostVaultError::NoVault)?;

        let plaintext = crypto::decrypt(&envelope, passphrase).map_err(|e| {
            tracing::debug!(error = %e, "open failed");
            e
        })?;

        if self.burn_after_reading {
            self.store.delete(VAULT_KEY)?;
            tracing::info!("note opened and burned");
        } else {
            tracing::info!("note opened; envelope kept");
        }

        Ok(OpenedNote {
            plaintext,
            burned: self.burn_after_reading,
        })
    }
}

impl<S: VaultStore + 'static> VaultService<S> {
    /// Seal on the blocking thread pool.
    ///
    /// The in-flight guard is taken when this is called, not when the
    /// returned future is first polled. Once running the work can't be
    /// cancelled; dropping the future only discards its result.
    pub fn seal_async(
        self: Arc<Self>,
        plaintext: String,
        passphrase: SecureString,
    ) -> impl Future<Output = GhostVaultResult<Envelope>> + Send + 'static {
        let guard = InFlight::acquire(&self.in_flight);
        run_blocking(guard, move || self.seal_unguarded(&plaintext, &passphrase))
    }

    /// Open on the blocking thread pool; see [`VaultService::seal_async`]
    pub fn open_async(
        self: Arc<Self>,
        passphrase: SecureString,
    ) -> impl Future<Output = GhostVaultResult<OpenedNote>> + Send + 'static {
        let guard = InFlight::acquire(&self.in_flight);
        run_blocking(guard, move || self.open_unguarded(&passphrase))
    }
}

async fn run_blocking<T, F>(guard: GhostVaultResult<InFlight>, work: F) -> GhostVaultResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> GhostVaultResult<T> + Send + 'static,
{
    let guard = guard?;
    tokio::task::spawn_blocking(move || {
        let _guard = guard;
        work()
    })
    .await
    .map_err(|e| GhostVaultError::Task(e.to_string()))?
}
