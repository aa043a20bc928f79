use std::sync::{Arc, RwLock};

/// Supplies the current access token to a dispatcher at call time.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Shared, replaceable access token.
///
/// Writes replace the whole value; concurrent writers race and the last one wins.
#[derive(Debug, Clone, Default)]
pub struct SharedToken {
    inner: Arc<RwLock<Option<String>>>,
}

impl SharedToken {
    pub fn new(token: Option<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(token)),
        }
    }

    pub fn get(&self) -> Option<String> {
        // A poisoned lock still holds a complete String; keep serving it.
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set(&self, token: String) {
        match self.inner.write() {
            Ok(mut guard) => *guard = Some(token),
            Err(poisoned) => *poisoned.into_inner() = Some(token),
        }
    }
}

impl TokenSource for SharedToken {
    fn token(&self) -> Option<String> {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_token_is_shared_between_clones() {
        let token = SharedToken::new(None);
        let reader = token.clone();
        assert_eq!(reader.token(), None);

        token.set("first".into());
        assert_eq!(reader.token().as_deref(), Some("first"));

        token.set("second".into());
        assert_eq!(reader.token().as_deref(), Some("second"));
    }
}
