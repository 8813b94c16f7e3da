use crate::system::storage::{KeyValueStore, StorageError, CUSTOMER_NAME_KEY, NAME_TIME_KEY};

/// How long a remembered customer name stays valid.
pub const NAME_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Result of looking up the remembered customer on the order form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    /// Known customer; the header shows `Hello, {name}`.
    Known(String),
    /// Nothing usable stored; the name dialog must open.
    AskName,
}

impl Greeting {
    pub fn header(&self) -> Option<String> {
        match self {
            Greeting::Known(name) => Some(format!("Hello, {name}")),
            Greeting::AskName => None,
        }
    }
}

/// Looks up the stored customer. An entry older than [`NAME_TTL_MS`], or one
/// with an unreadable timestamp, is removed from storage.
pub fn load_greeting(store: &dyn KeyValueStore, now_ms: i64) -> Greeting {
    let (Some(name), Some(time)) = (
        store.get_item(CUSTOMER_NAME_KEY),
        store.get_item(NAME_TIME_KEY),
    ) else {
        return Greeting::AskName;
    };

    match time.trim().parse::<i64>() {
        Ok(stored_at)
            if now_ms
                .checked_sub(stored_at)
                .is_some_and(|age| age <= NAME_TTL_MS)
                && !name.is_empty() =>
        {
            Greeting::Known(name)
        }
        _ => {
            forget_customer(store);
            Greeting::AskName
        }
    }
}

pub fn remember_customer(
    store: &dyn KeyValueStore,
    name: &str,
    now_ms: i64,
) -> Result<Greeting, StorageError> {
    store.set_item(CUSTOMER_NAME_KEY, name)?;
    store.set_item(NAME_TIME_KEY, &now_ms.to_string())?;
    Ok(Greeting::Known(name.to_string()))
}

pub fn forget_customer(store: &dyn KeyValueStore) {
    store.remove_item(CUSTOMER_NAME_KEY);
    store.remove_item(NAME_TIME_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::storage::MemoryStore;

    const NOW: i64 = 1_728_000_000_000;

    #[test]
    fn missing_name_asks() {
        let store = MemoryStore::new();
        assert_eq!(load_greeting(&store, NOW), Greeting::AskName);

        store.set_item(CUSTOMER_NAME_KEY, "Juan").unwrap();
        assert_eq!(load_greeting(&store, NOW), Greeting::AskName);
    }

    #[test]
    fn fresh_name_is_greeted() {
        let store = MemoryStore::new();
        remember_customer(&store, "Juan", NOW - NAME_TTL_MS).unwrap();
        let greeting = load_greeting(&store, NOW);
        assert_eq!(greeting.header().as_deref(), Some("Hello, Juan"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn expired_name_is_cleared() {
        let store = MemoryStore::new();
        remember_customer(&store, "Juan", NOW - NAME_TTL_MS - 1).unwrap();
        assert_eq!(load_greeting(&store, NOW), Greeting::AskName);
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_time_counts_as_expired() {
        let store = MemoryStore::new();
        store.set_item(CUSTOMER_NAME_KEY, "Juan").unwrap();
        store.set_item(NAME_TIME_KEY, "yesterday").unwrap();
        assert_eq!(load_greeting(&store, NOW), Greeting::AskName);
        assert!(store.is_empty());
    }

    #[test]
    fn out_of_range_time_counts_as_expired() {
        let store = MemoryStore::new();
        store.set_item(CUSTOMER_NAME_KEY, "Juan").unwrap();
        store.set_item(NAME_TIME_KEY, &i64::MIN.to_string()).unwrap();
        assert_eq!(load_greeting(&store, NOW), Greeting::AskName);
        assert!(store.is_empty());
    }
}
