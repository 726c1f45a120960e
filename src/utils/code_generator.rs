//! Short code generation and reserved path policy.
//!
//! Codes are drawn uniformly from a 62-symbol alphabet. Uniqueness is not
//! guaranteed here; callers check the store and retry.

use rand::Rng;

/// Alphabet for generated codes: `a-z`, `A-Z`, `0-9`.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every generated code.
pub const CODE_LENGTH: usize = 6;

/// Path prefixes shared with non-redirect routes and static assets.
const RESERVED_PREFIXES: &[&str] = &["api", "src"];

/// Top-level route names that would shadow a short code.
const RESERVED_CODES: &[&str] = &["health"];

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a fresh candidate code.
    fn generate(&self) -> String;
}

/// Generates [`CODE_LENGTH`]-character codes from [`ALPHABET`] using the
/// thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a random short code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if a path segment belongs to another route namespace.
///
/// Such segments contain a path separator or a dot (static assets), start
/// with a reserved prefix, or name a top-level route. They are never issued
/// as codes and never looked up in the store.
pub fn is_reserved_path(code: &str) -> bool {
    code.contains('/')
        || code.contains('.')
        || RESERVED_PREFIXES.iter().any(|p| code.starts_with(p))
        || RESERVED_CODES.contains(&code)
}
