use std::{fs::File, io::BufReader};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::types::{Address, Symbol};

/// Symbol -> per-network deployments, in document order.
#[derive(Debug, Deserialize)]
pub struct AddressBook {
    #[serde(flatten)]
    pub symbols: IndexMap<Symbol, SymbolDeployments>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolDeployments {
    #[serde(flatten)]
    pub networks: IndexMap<String, NetworkEntry>,
}

/// The collector stores a symbol-level `tag` string next to the network
/// keys, so per-network values are either a deployment record or a bare
/// annotation string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NetworkEntry {
    Deployment(FeedDeployment),
    Annotation(String),
}

#[derive(Debug, Deserialize)]
pub struct FeedDeployment {
    pub feed: Address,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub fn load(path: &str) -> Result<AddressBook, LoadError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let address_book: AddressBook = serde_json::from_reader(reader)?;

    Ok(address_book)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_address_book(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_keeps_document_order() {
        let file = write_address_book(
            r#"{
                "BTC-USDT": {
                    "baobab": { "feed": "0xAAA", "proxy": "0xBBB" },
                    "cypress": { "feed": "0xCCC" }
                },
                "ETH-USDT": {
                    "cypress": { "feed": "0xDDD" }
                },
                "ADA-USDT": {
                    "baobab": { "feed": "0xEEE" }
                }
            }"#,
        );

        let address_book = load(file.path().to_str().unwrap()).unwrap();

        let symbols: Vec<&str> = address_book.symbols.keys().map(String::as_str).collect();
        assert_eq!(symbols, vec!["BTC-USDT", "ETH-USDT", "ADA-USDT"]);

        let btc = address_book.symbols.get("BTC-USDT").unwrap();
        let networks: Vec<&str> = btc.networks.keys().map(String::as_str).collect();
        assert_eq!(networks, vec!["baobab", "cypress"]);

        match btc.networks.get("baobab").unwrap() {
            NetworkEntry::Deployment(deployment) => assert_eq!(deployment.feed, "0xAAA"),
            _ => panic!("Expected a deployment entry"),
        }
    }

    #[test]
    fn test_load_tolerates_tag_annotation() {
        let file = write_address_book(
            r#"{
                "BTC-USDT": {
                    "baobab": { "feed": "0xAAA" },
                    "tag": "premium"
                }
            }"#,
        );

        let address_book = load(file.path().to_str().unwrap()).unwrap();

        let btc = address_book.symbols.get("BTC-USDT").unwrap();
        match btc.networks.get("tag").unwrap() {
            NetworkEntry::Annotation(tag) => assert_eq!(tag, "premium"),
            _ => panic!("Expected an annotation entry"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let result = load("does/not/exist.json");

        assert!(matches!(result, Err(LoadError::IoError(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_address_book("{ not json");

        let result = load(file.path().to_str().unwrap());

        assert!(matches!(result, Err(LoadError::SerdeError(_))));
    }

    #[test]
    fn test_load_rejects_deployment_without_feed() {
        let file = write_address_book(
            r#"{
                "BTC-USDT": {
                    "baobab": { "proxy": "0xBBB" }
                }
            }"#,
        );

        let result = load(file.path().to_str().unwrap());

        assert!(matches!(result, Err(LoadError::SerdeError(_))));
    }
}
