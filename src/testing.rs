//! Test doubles shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;

use crate::net::api::AuthBackend;
use crate::net::auth::AuthError;
use crate::net::types::{AuthResponse, LoginRequest, RegisterRequest, Role, User};

pub type Reply = Result<AuthResponse, AuthError>;

enum Scripted {
    Now(Reply),
    Later(oneshot::Receiver<Reply>),
}

/// Backend that answers each call with the next scripted reply.
///
/// Unscripted calls fail with `NetworkFailure("unscripted")`.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: RefCell<VecDeque<Scripted>>,
    pub calls: Cell<usize>,
    pub last_token: RefCell<Option<String>>,
    pub last_full_name: RefCell<Option<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.replies.borrow_mut().push_back(Scripted::Now(reply));
        self
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub fn deferred(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Later(rx));
        tx
    }

    async fn next(&self) -> Reply {
        self.calls.set(self.calls.get() + 1);
        let scripted = self.replies.borrow_mut().pop_front();
        match scripted {
            Some(Scripted::Now(reply)) => reply,
            Some(Scripted::Later(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(AuthError::NetworkFailure("cancelled".to_owned()))),
            None => Err(AuthError::NetworkFailure("unscripted".to_owned())),
        }
    }
}

impl AuthBackend for ScriptedBackend {
    async fn login(&self, _request: &LoginRequest<'_>) -> Result<AuthResponse, AuthError> {
        self.next().await
    }

    async fn register(&self, request: &RegisterRequest<'_>) -> Result<AuthResponse, AuthError> {
        *self.last_full_name.borrow_mut() = Some(request.full_name.to_owned());
        self.next().await
    }

    async fn check_status(&self, token: &str) -> Result<AuthResponse, AuthError> {
        *self.last_token.borrow_mut() = Some(token.to_owned());
        self.next().await
    }
}

pub fn user(id: &str, roles: &[Role]) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@x.com"),
        full_name: format!("User {id}"),
        is_active: true,
        roles: roles.iter().copied().collect(),
    }
}

pub fn response(id: &str, roles: &[Role], token: &str) -> AuthResponse {
    AuthResponse { user: user(id, roles), token: token.to_owned() }
}

pub fn rejected(status: u16) -> AuthError {
    AuthError::BackendRejected { status, message: "Unauthorized".to_owned() }
}
