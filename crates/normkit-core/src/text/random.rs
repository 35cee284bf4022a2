//! Random token generation
//!
//! `random` draws from the operating system's secure generator. `quick_random`
//! is a shuffle over a fixed alphabet driven by whatever `rand::Rng` the
//! caller passes in; it is predictable and must never back passwords, reset
//! codes or session identifiers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::seq::SliceRandom;
use rand::Rng;
use ring::rand::SystemRandom;

use crate::core_types::schema::EVENT_FALLBACK;
use crate::core_types::Redacted;
use crate::errors::{ExError, NormError, Result};

const QUICK_POOL: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const QUICK_POOL_MIN_COPIES: usize = 5;

// Rounds of entropy drawn before a source that only yields stripped
// characters is treated as broken.
const MAX_DRAW_ROUNDS: usize = 8;

/// Source of cryptographically secure bytes
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `RandomSourceUnavailable` when the source cannot be read.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

impl EntropySource for SystemRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        ring::rand::SecureRandom::fill(self, dest).map_err(|_| {
            NormError::RandomSourceUnavailable {
                reason: "system random source could not be read".to_string(),
            }
        })
    }
}

/// Generate `length` characters from the system's secure random source.
///
/// Output uses the standard base64 alphabet minus `/`, `+` and `=`, so it is
/// always `[A-Za-z0-9]` and exactly `length` characters long.
///
/// # Errors
///
/// Returns `RandomSourceUnavailable` if the system source fails. Callers that
/// can accept a weaker token should use [`random_or_fallback`].
pub fn random(length: usize) -> Result<String> {
    random_with(&SystemRandom::new(), length)
}

/// [`random`] with an explicit entropy source.
///
/// # Errors
///
/// Returns `RandomSourceUnavailable` if the source fails or keeps producing
/// bytes that encode only to stripped characters.
pub fn random_with<S: EntropySource + ?Sized>(source: &S, length: usize) -> Result<String> {
    let mut out = String::with_capacity(length);

    for _ in 0..MAX_DRAW_ROUNDS {
        if out.len() >= length {
            break;
        }
        let mut bytes = vec![0u8; (length - out.len()) * 2];
        source.fill(&mut bytes)?;
        out.extend(
            STANDARD
                .encode(&bytes)
                .chars()
                .filter(|c| !matches!(c, '/' | '+' | '=')),
        );
    }

    if out.len() < length {
        return Err(NormError::RandomSourceUnavailable {
            reason: format!(
                "entropy source yielded {} usable characters after {} rounds",
                out.len(),
                MAX_DRAW_ROUNDS
            ),
        });
    }

    // base64 output is ASCII, so byte truncation is char truncation
    out.truncate(length);
    Ok(out)
}

/// Generate a "random" alpha-numeric string by shuffling a repeated pool.
///
/// # Security
///
/// Not suitable for anything that must be unpredictable. The output is only
/// as good as `rng`, and a seeded generator reproduces it exactly. Use
/// [`random`] for secrets.
pub fn quick_random<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let copies = length
        .div_ceil(QUICK_POOL.len())
        .max(QUICK_POOL_MIN_COPIES);
    let mut pool = QUICK_POOL.repeat(copies);
    pool.shuffle(rng);
    pool.into_iter().take(length).map(char::from).collect()
}

/// Which generator produced a [`Token`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Secure system randomness
    Secure,
    /// Non-cryptographic shuffle, used because the secure source failed
    Fallback,
}

impl TokenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSource::Secure => "secure",
            TokenSource::Fallback => "fallback",
        }
    }
}

/// Generated token tagged with its source; prints as `[redacted]`
#[derive(Debug, Clone)]
pub struct Token {
    value: Redacted<String>,
    source: TokenSource,
}

impl Token {
    pub fn value(&self) -> &str {
        self.value.reveal()
    }

    pub fn source(&self) -> TokenSource {
        self.source
    }

    /// False when the token came from the predictable fallback.
    pub fn is_secure(&self) -> bool {
        self.source == TokenSource::Secure
    }

    pub fn into_string(self) -> String {
        self.value.into_inner()
    }
}

/// Secure token, or a fallback token when the system source is unavailable.
///
/// The returned [`Token`] says which generator was used, and the fallback is
/// logged at WARN, so security-sensitive callers can reject it.
pub fn random_or_fallback(length: usize) -> Token {
    random_or_fallback_with(&SystemRandom::new(), &mut rand::thread_rng(), length)
}

/// [`random_or_fallback`] with explicit sources.
pub fn random_or_fallback_with<S, R>(source: &S, rng: &mut R, length: usize) -> Token
where
    S: EntropySource + ?Sized,
    R: Rng + ?Sized,
{
    match random_with(source, length) {
        Ok(value) => Token {
            value: Redacted::new(value),
            source: TokenSource::Secure,
        },
        Err(err) => {
            let ex_err: ExError = err.into();
            tracing::warn!(
                component = module_path!(),
                op = "random",
                event = EVENT_FALLBACK,
                err.code = ex_err.code(),
                source = TokenSource::Fallback.as_str(),
                "secure random source unavailable, using non-cryptographic fallback"
            );
            Token {
                value: Redacted::new(quick_random(rng, length)),
                source: TokenSource::Fallback,
            }
        }
    }
}
