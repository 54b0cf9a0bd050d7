use crate::core::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Opaque request signer for the sandbox SNAP header set.
///
/// Signs `"{METHOD}:{path}:{sha256hex(body)}:{timestamp}"` with
/// HMAC-SHA256 under the partner's client secret, base64-encoded. The
/// platform treats the signature as opaque; the suite only needs it to be
/// deterministic and to change when any signed component changes.
#[derive(Debug, Clone)]
pub struct Signer {
    client_secret: String,
}

impl Signer {
    pub fn new(client_secret: impl Into<String>) -> Self {
        Self {
            client_secret: client_secret.into(),
        }
    }

    /// Produce the `X-SIGNATURE` value for one request.
    pub fn sign(
        &self,
        method: &str,
        resource_path: &str,
        body: &str,
        timestamp: &str,
    ) -> Result<String> {
        let body_digest = hex::encode(Sha256::digest(body.as_bytes()));
        let string_to_sign = format!("{method}:{resource_path}:{body_digest}:{timestamp}");

        let mut mac = HmacSha256::new_from_slice(self.client_secret.as_bytes())
            .map_err(|_| Error::signature("client secret rejected as HMAC key"))?;
        mac.update(string_to_sign.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}
