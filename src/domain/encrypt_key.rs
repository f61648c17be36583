use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;

/// Consul gossip keys are 16 raw bytes.
const KEY_LEN: usize = 16;
const PBKDF2_ROUNDS: u32 = 20_000;

/// Convert a manifest `encrypt_keys` entry into a base64 Consul gossip key.
///
/// Values that already decode to 16 bytes pass through untouched. Anything
/// else is treated as a passphrase and stretched with PBKDF2-HMAC-SHA1 and an
/// empty salt.
pub fn consul_encrypt_key(raw: &str) -> String {
    if let Ok(decoded) = STANDARD.decode(raw) {
        if decoded.len() == KEY_LEN {
            return raw.to_string();
        }
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha1>(raw.as_bytes(), &[], PBKDF2_ROUNDS, &mut key);
    STANDARD.encode(key)
}
