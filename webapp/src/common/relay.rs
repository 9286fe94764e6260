use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use tracing::{debug, error};

use api::contact::{SendContactReq, send_contact};
use portfolio::{
    config::ContactConfig,
    contact::{ContactMessage, SubmitError, Submitter},
};

// stand-in used until a relay url is configured: waits, then always succeeds
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedRelay {
    delay_ms: u32,
}

#[async_trait(?Send)]
impl Submitter for SimulatedRelay {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        debug!(from = %message.email, "simulating contact submission");
        TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRelay {
    url: String,
}

#[async_trait(?Send)]
impl Submitter for HttpRelay {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        let req = SendContactReq {
            name: message.name.clone(),
            email: message.email.clone(),
            message: message.message.clone(),
        };

        match send_contact(&self.url, &req).await {
            Ok(_) => Ok(()),
            Err(err) => {
                error!(url = %self.url, %err, "contact relay failed");
                Err(SubmitError::from(err))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Relay {
    Simulated(SimulatedRelay),
    Http(HttpRelay),
}

impl Relay {
    pub fn from_config(config: &ContactConfig) -> Self {
        match &config.relay_url {
            Some(url) => Relay::Http(HttpRelay { url: url.clone() }),
            None => Relay::Simulated(SimulatedRelay {
                delay_ms: config.simulated_delay_ms,
            }),
        }
    }
}

#[async_trait(?Send)]
impl Submitter for Relay {
    async fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        match self {
            Relay::Simulated(relay) => relay.submit(message).await,
            Relay::Http(relay) => relay.submit(message).await,
        }
    }
}
