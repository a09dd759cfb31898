//! Two fake backends side by side: the default provider serves login, a
//! scoped override borrows the second provider for registration.
//!
//! Run with: `cargo run --example two_backends`
//! (set `RUST_LOG=gatekit_core=debug` to watch installs and resolutions)

use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::EnvFilter;

use gatekit_core::contract::{
    AuthSession, Feature, IdentityCredentials, LoginOperation, NewIdentity, OpResult,
    RegisterOperation,
};
use gatekit_core::{scope, ProviderDescriptor, Registry, RegistrySetup};

struct DemoLogin {
    backend: &'static str,
}

#[async_trait::async_trait]
impl LoginOperation for DemoLogin {
    async fn login(&self, credentials: IdentityCredentials) -> OpResult<AuthSession> {
        Ok(AuthSession {
            session_id: format!("{}-session", self.backend),
            user_id: credentials.identity,
            issued_at: chrono::Utc::now(),
        })
    }
}

struct DemoRegister;

#[async_trait::async_trait]
impl RegisterOperation for DemoRegister {
    async fn register(&self, identity: NewIdentity) -> OpResult<AuthSession> {
        Ok(AuthSession {
            session_id: "supabase-session".to_string(),
            user_id: identity.identity,
            issued_at: chrono::Utc::now(),
        })
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Registry::new();
    RegistrySetup::new("firebase")
        .provider(
            ProviderDescriptor::builder("firebase")
                .feature(Feature::Login(Arc::new(DemoLogin { backend: "firebase" })))
                .credentials(json!({ "apiKey": "demo-key", "projectId": "demo" }))
                .build(),
        )
        .provider(
            ProviderDescriptor::builder("supabase")
                .feature(Feature::Login(Arc::new(DemoLogin { backend: "supabase" })))
                .feature(Feature::Register(Arc::new(DemoRegister)))
                .credentials(json!({ "url": "https://demo.supabase.co" }))
                .build(),
        )
        .apply(&registry);

    // Consumer code: ask for the capability, not the backend.
    let login = registry.login().expect("default provider binds login");
    let session = login
        .login(IdentityCredentials {
            identity: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .expect("demo login always succeeds");
    println!("logged in via default provider: {}", session.session_id);

    // Firebase offers no registration here — resolution says so explicitly.
    let err = registry.register().err().unwrap();
    println!("register on default provider: {err}");

    // Borrow the supabase provider for one scope.
    let register = scope::with_provider("supabase", || {
        registry.register().expect("supabase binds register")
    });
    let session = register
        .register(NewIdentity {
            identity: "grace@example.com".to_string(),
            password: "hunter2".to_string(),
            attributes: None,
        })
        .await
        .expect("demo register always succeeds");
    println!("registered via scoped provider: {}", session.session_id);
}
