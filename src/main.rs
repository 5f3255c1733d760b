mod address_book;
mod payload;
mod types;
mod write;

use clap::Parser;
use tracing::info;

use types::ContractKind;

const ADDRESS_BOOK_PATH: &str = "addresses/datafeeds-addresses.json";
const MIGRATION_FOLDER: &str = "migration";

#[derive(Debug, Parser)]
#[command(about = "Generate a migration payload from the datafeed address book", long_about = None)]
struct Args {
    /// Network whose deployments go into the payload.
    #[arg(long, default_value = "baobab")]
    network: String,

    /// Contract the payload targets.
    #[arg(long, value_enum, default_value = "SubmissionProxy")]
    contract: ContractKind,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let address_book =
        address_book::load(ADDRESS_BOOK_PATH).expect("Failed to load the address book");

    let path = match args.contract {
        ContractKind::SubmissionProxy => {
            let payload = payload::build_submission_proxy_payload(&address_book, &args.network);
            write::write(MIGRATION_FOLDER, &args.network, args.contract, &payload)
        }
        ContractKind::Feed => {
            let payload = payload::build_feed_payload(&address_book, &args.network);
            write::write(MIGRATION_FOLDER, &args.network, args.contract, &payload)
        }
    }
    .expect("Failed to write the migration payload");

    info!(path = %path, "Migration payload written");
}
