use clap::ValueEnum;
use serde::Serialize;

pub type Symbol = String;

pub type Address = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ContractKind {
    #[value(name = "SubmissionProxy")]
    SubmissionProxy,
    #[value(name = "Feed")]
    Feed,
}

impl ContractKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractKind::SubmissionProxy => "SubmissionProxy",
            ContractKind::Feed => "Feed",
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SubmissionProxyPayload {
    pub deploy: DeployPlan,
    #[serde(rename = "addOracle")]
    pub add_oracle: AddOraclePlan,
    #[serde(rename = "updateFeed")]
    pub update_feed: Vec<FeedUpdate>,
}

/// Serializes as `{}`; filled in by hand before the migration runs.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DeployPlan {}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AddOraclePlan {
    pub oracles: Vec<Address>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FeedUpdate {
    pub name: Symbol,
    pub address: Address,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FeedPayload {
    #[serde(rename = "updateSubmitter")]
    pub update_submitter: UpdateSubmitterPlan,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UpdateSubmitterPlan {
    pub submitter: String,
    #[serde(rename = "feedAddresses")]
    pub feed_addresses: Vec<Address>,
}
