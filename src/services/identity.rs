use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::domain::{Identity, RegisterData, Role};
use crate::error::AuthError;
use crate::messages::{IdentityRequest, ServiceResponse};
use crate::session::SessionStore;

/// Session/identity actor: authenticates, registers, and tracks "who is
/// logged in", persisting the current identity to the session slot.
///
/// Credentials live in a map parallel to the identity list and are never part
/// of an [`Identity`], so responses cannot leak them. Login applies a
/// configurable latency modeling the upstream identity call; because the
/// actor processes one message at a time, a second login submitted during
/// that window queues behind the first rather than racing it.
pub struct IdentityService {
    receiver: mpsc::Receiver<IdentityRequest>,
    identities: Vec<Identity>,
    credentials: HashMap<String, String>,
    current: Option<Identity>,
    session: Box<dyn SessionStore>,
    login_latency: Duration,
    next_id: u64,
}

impl IdentityService {
    /// Seeds are (identity, password) pairs. A previously persisted session
    /// is restored from the store, if present and well-formed.
    pub fn new(
        buffer_size: usize,
        seeds: Vec<(Identity, String)>,
        session: Box<dyn SessionStore>,
        login_latency: Duration,
    ) -> (Self, mpsc::Sender<IdentityRequest>) {
        let (sender, receiver) = mpsc::channel(buffer_size);

        let mut identities = Vec::with_capacity(seeds.len());
        let mut credentials = HashMap::with_capacity(seeds.len());
        for (identity, password) in seeds {
            credentials.insert(identity.email.clone(), password);
            identities.push(identity);
        }
        let next_id = super::next_numeric_suffix(identities.iter().map(|i| i.id.as_str()));

        let current = session.load();
        if let Some(identity) = &current {
            info!(user_id = %identity.id, "Restored persisted session");
        }

        let service = Self {
            receiver,
            identities,
            credentials,
            current,
            session,
            login_latency,
            next_id,
        };
        (service, sender)
    }

    #[instrument(name = "identity_service", skip(self))]
    pub async fn run(mut self) {
        info!("IdentityService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                IdentityRequest::Login {
                    email,
                    password,
                    respond_to,
                } => {
                    self.handle_login(email, password, respond_to).await;
                }
                IdentityRequest::Register { data, respond_to } => {
                    self.handle_register(data, respond_to);
                }
                IdentityRequest::Logout { respond_to } => {
                    self.handle_logout(respond_to);
                }
                IdentityRequest::Current { respond_to } => {
                    let _ = respond_to.send(Ok(self.current.clone()));
                }
                IdentityRequest::SetBlocked {
                    id,
                    blocked,
                    respond_to,
                } => {
                    self.handle_set_blocked(id, blocked, respond_to);
                }
                IdentityRequest::ListIdentities { filter, respond_to } => {
                    self.handle_list(filter, respond_to);
                }
                IdentityRequest::Shutdown => {
                    info!("IdentityService shutting down");
                    break;
                }
                #[cfg(test)]
                IdentityRequest::IdentityCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.identities.len()));
                }
            }
        }

        info!("IdentityService stopped");
    }

    /// Exact (email, password) match, case-sensitive on both. The latency
    /// models the upstream identity call; after it elapses the handler checks
    /// whether the caller is still waiting and discards the result otherwise,
    /// so a caller that navigated away mid-login never mutates the session.
    #[instrument(fields(email = %email), skip(self, email, password, respond_to))]
    async fn handle_login(
        &mut self,
        email: String,
        password: String,
        respond_to: ServiceResponse<Identity, AuthError>,
    ) {
        debug!("Processing login request");

        if !self.login_latency.is_zero() {
            tokio::time::sleep(self.login_latency).await;
        }
        if respond_to.is_closed() {
            debug!("Caller gone before login resolved, discarding result");
            return;
        }

        let credential_matches = self
            .credentials
            .get(&email)
            .is_some_and(|stored| *stored == password);
        let identity = self
            .identities
            .iter()
            .find(|i| i.email == email)
            .cloned()
            .filter(|_| credential_matches);

        let result = match identity {
            Some(identity) => {
                self.current = Some(identity.clone());
                self.session.save(&identity);
                info!(user_id = %identity.id, role = %identity.role, "Login successful");
                Ok(identity)
            }
            None => {
                warn!("Login failed: invalid credentials");
                Err(AuthError::InvalidCredentials)
            }
        };

        let _ = respond_to.send(result);
    }

    #[instrument(fields(email = %data.email, role = %data.role), skip(self, data, respond_to))]
    fn handle_register(
        &mut self,
        data: RegisterData,
        respond_to: ServiceResponse<Identity, AuthError>,
    ) {
        debug!("Processing register request");

        let result = self.register(data);
        if let Err(e) = &result {
            warn!(error = %e, "Registration failed");
        }
        let _ = respond_to.send(result);
    }

    fn register(&mut self, data: RegisterData) -> Result<Identity, AuthError> {
        if data.email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if data.password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }
        if data.name.is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if self.identities.iter().any(|i| i.email == data.email) {
            return Err(AuthError::DuplicateEmail);
        }

        let identity = Identity {
            id: self.mint_id(data.role),
            email: data.email,
            name: data.name,
            role: data.role,
            phone: data.phone,
            location: data.location,
            // Providers wait for admin approval.
            is_approved: data.role != Role::Provider,
            is_blocked: false,
        };
        self.credentials
            .insert(identity.email.clone(), data.password);
        self.identities.push(identity.clone());

        // Customers get an active session right away; providers are routed
        // back to the login view by the caller.
        if identity.role == Role::Customer {
            self.current = Some(identity.clone());
            self.session.save(&identity);
        }

        info!(user_id = %identity.id, "Identity registered");
        Ok(identity)
    }

    fn mint_id(&mut self, role: Role) -> String {
        let n = self.next_id;
        self.next_id += 1;
        match role {
            Role::Provider => format!("PRV{:04}", n),
            _ => format!("USR{:04}", n),
        }
    }

    #[instrument(skip(self, respond_to))]
    fn handle_logout(&mut self, respond_to: ServiceResponse<(), AuthError>) {
        debug!("Processing logout request");

        if self.current.take().is_some() {
            info!("Logged out");
        }
        self.session.clear();

        let _ = respond_to.send(Ok(()));
    }

    /// Toggling the block flag does not revoke an active session; the flag is
    /// visible through `Current`/`ListIdentities` for the host to act on.
    #[instrument(fields(user_id = %id, blocked = blocked), skip(self, id, respond_to))]
    fn handle_set_blocked(
        &mut self,
        id: String,
        blocked: bool,
        respond_to: ServiceResponse<Identity, AuthError>,
    ) {
        debug!("Processing set_blocked request");

        let result = match self.identities.iter_mut().find(|i| i.id == id) {
            Some(identity) => {
                identity.is_blocked = blocked;
                let updated = identity.clone();
                if let Some(current) = &mut self.current {
                    if current.id == id {
                        current.is_blocked = blocked;
                        self.session.save(current);
                    }
                }
                info!("Block flag updated");
                Ok(updated)
            }
            None => Err(AuthError::NotFound(id)),
        };

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(
        &self,
        filter: Option<String>,
        respond_to: ServiceResponse<Vec<Identity>, AuthError>,
    ) {
        debug!("Processing list_identities request");

        let needle = filter.map(|f| f.to_lowercase());
        let identities: Vec<Identity> = self
            .identities
            .iter()
            .filter(|i| match &needle {
                Some(needle) => {
                    i.name.to_lowercase().contains(needle)
                        || i.email.to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect();
        info!(count = identities.len(), "Listed identities");

        let _ = respond_to.send(Ok(identities));
    }
}
