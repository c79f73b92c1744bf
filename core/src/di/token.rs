use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Opaque handle naming a dependency independent of its concrete recipe.
///
/// Identity is the inner allocation, not the name: two tokens created with
/// the same name are distinct map keys, while clones of one token share its
/// identity. Containers key every table on this.
#[derive(Clone)]
pub struct Token {
    inner: Arc<TokenInner>,
}

struct TokenInner {
    name: String,
}

impl Token {
    /// Create a token with a fresh identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(TokenInner { name: name.into() }),
        }
    }

    /// Human-readable token name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.inner), state);
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.inner.name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.name)
    }
}
