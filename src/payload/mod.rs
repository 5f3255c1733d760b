use tracing::{debug, warn};

use crate::address_book::{AddressBook, FeedDeployment, NetworkEntry};
use crate::types::{
    AddOraclePlan, DeployPlan, FeedPayload, FeedUpdate, SubmissionProxyPayload,
    UpdateSubmitterPlan,
};

pub fn build_submission_proxy_payload(
    address_book: &AddressBook,
    network: &str,
) -> SubmissionProxyPayload {
    let update_feed = matching_feed_deployments(address_book, network)
        .into_iter()
        .map(|(symbol, deployment)| FeedUpdate {
            name: symbol.to_string(),
            address: deployment.feed.clone(),
        })
        .collect();

    SubmissionProxyPayload {
        deploy: DeployPlan {},
        add_oracle: AddOraclePlan {
            oracles: Vec::new(),
        },
        update_feed,
    }
}

pub fn build_feed_payload(address_book: &AddressBook, network: &str) -> FeedPayload {
    let feed_addresses = matching_feed_deployments(address_book, network)
        .into_iter()
        .map(|(_, deployment)| deployment.feed.clone())
        .collect();

    FeedPayload {
        update_submitter: UpdateSubmitterPlan {
            submitter: String::new(),
            feed_addresses,
        },
    }
}

/// Both payload shapes select entries through this filter, in the
/// address book's document order.
fn matching_feed_deployments<'a>(
    address_book: &'a AddressBook,
    network: &str,
) -> Vec<(&'a str, &'a FeedDeployment)> {
    let mut matches = Vec::new();

    for (symbol, deployments) in &address_book.symbols {
        let mut matched = false;

        for (network_name, entry) in &deployments.networks {
            if network_name != network {
                continue;
            }

            if let NetworkEntry::Deployment(deployment) = entry {
                matches.push((symbol.as_str(), deployment));
                matched = true;
            }
        }

        if !matched {
            debug!(
                symbol = %symbol,
                network = %network,
                "Symbol has no deployment on the requested network"
            );
        }
    }

    if matches.is_empty() {
        warn!(
            network = %network,
            "No feed deployments matched the requested network"
        );
    }

    matches
}
