//! Checkout quotes and the repositories that serve them
use super::error::LookupError;
use std::collections::HashMap;
use std::sync::Arc;

// Customer entered delivery preferences, captured before the order exists
#[derive(minicbor::Encode, minicbor::Decode, Debug, Default, Clone, PartialEq, Eq)]
pub struct Quote {
    #[n(0)]
    pub id: String,
    #[n(1)]
    pub delivery_date: Option<String>, // raw checkout value, may be ""
    #[n(2)]
    pub delivery_instructions: Option<String>,
}

impl Quote {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
    pub fn set_delivery_date(mut self, date: impl Into<String>) -> Self {
        self.delivery_date = Some(date.into());
        self
    }
    pub fn set_delivery_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.delivery_instructions = Some(instructions.into());
        self
    }
    pub fn delivery_date(&self) -> Option<&str> {
        self.delivery_date.as_deref()
    }
    pub fn delivery_instructions(&self) -> Option<&str> {
        self.delivery_instructions.as_deref()
    }
}

pub trait QuoteLookup {
    fn get(&self, quote_id: &str) -> Result<Quote, LookupError>;
}

impl<Q: QuoteLookup + ?Sized> QuoteLookup for &Q {
    fn get(&self, quote_id: &str) -> Result<Quote, LookupError> {
        (**self).get(quote_id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryQuoteRepository {
    quotes: HashMap<String, Quote>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&mut self, quote: Quote) {
        self.quotes.insert(quote.id.clone(), quote);
    }
}

impl QuoteLookup for InMemoryQuoteRepository {
    fn get(&self, quote_id: &str) -> Result<Quote, LookupError> {
        self.quotes
            .get(quote_id)
            .cloned()
            .ok_or_else(|| LookupError::QuoteNotFound(quote_id.to_string()))
    }
}

/// Quotes encoded as cbor in the `quotes` tree, keyed by quote id
#[derive(Clone)]
pub struct SledQuoteRepository {
    tree: sled::Tree,
}

impl SledQuoteRepository {
    pub const TREE: &'static str = "quotes";

    pub fn open(instance: &Arc<sled::Db>) -> Result<Self, LookupError> {
        Ok(Self {
            tree: instance.open_tree(Self::TREE)?,
        })
    }
    pub fn save(&self, quote: &Quote) -> anyhow::Result<()> {
        self.tree.insert(quote.id.as_bytes(), minicbor::to_vec(quote)?)?;
        Ok(())
    }
}

impl QuoteLookup for SledQuoteRepository {
    fn get(&self, quote_id: &str) -> Result<Quote, LookupError> {
        let bytes = self
            .tree
            .get(quote_id.as_bytes())?
            .ok_or_else(|| LookupError::QuoteNotFound(quote_id.to_string()))?;

        Ok(minicbor::decode(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn in_memory_lookup_reports_missing_quote() {
        let mut repo = InMemoryQuoteRepository::new();
        repo.insert(Quote::new("q-1").set_delivery_date("2025-09-01"));

        assert_eq!(repo.get("q-1").unwrap().delivery_date(), Some("2025-09-01"));
        assert!(matches!(
            repo.get("q-2"),
            Err(LookupError::QuoteNotFound(id)) if id == "q-2"
        ));
    }

    #[test]
    fn sled_repository_reads_back_saved_quote() {
        let temp_dir = tempdir().unwrap();
        let db = Arc::new(sled::open(temp_dir.path().join("quotes.db")).unwrap());
        let repo = SledQuoteRepository::open(&db).unwrap();

        let quote = Quote::new("q-42")
            .set_delivery_date("")
            .set_delivery_instructions("leave at door");
        repo.save(&quote).unwrap();

        assert_eq!(repo.get("q-42").unwrap(), quote);
        assert!(matches!(repo.get("q-43"), Err(LookupError::QuoteNotFound(_))));
    }
}
