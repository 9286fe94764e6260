use gloo_net::http::Request;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

pub mod contact;

// endpoint
//
// every relay call is a json POST whose request and response types are named
// <Endpoint>Req and <Endpoint>Resp; this expands to an async fn <endpoint>(url, req)
//
// unlike a same-origin api, the relay lives wherever the site config points it, so the
// url is a parameter rather than a constant
#[macro_export]
macro_rules! endpoint {
    ($s:ident) => {
        paste::paste! {
            pub async fn [<$s:snake>](url: &str, req: &[<$s Req>]) -> anyhow::Result<[<$s Resp>]> {
                $crate::post_json(url, req).await
            }
        }
    };
}

// the relay either answers 2xx with a json body, or the status is surfaced to the caller
#[derive(Debug, Error)]
#[error("relay responded with http status {0}")]
pub struct HttpStatusError(pub u16);

pub async fn post_json<Req, Resp>(url: &str, req: &Req) -> anyhow::Result<Resp>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    let resp = Request::post(url).json(req)?.send().await?;

    if !resp.ok() {
        return Err(anyhow::Error::new(HttpStatusError(resp.status())));
    }

    Ok(resp.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_survives_anyhow_wrapping() {
        let err = anyhow::Error::new(HttpStatusError(404));
        assert_eq!(err.to_string(), "relay responded with http status 404");
        assert!(matches!(err.downcast_ref::<HttpStatusError>(), Some(HttpStatusError(404))));
    }
}
