use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use chrono::Local;
use serde::Serialize;

use crate::types::ContractKind;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

pub fn payload_path(folder: &str, network: &str, contract: ContractKind, timestamp: &str) -> String {
    format!(
        "{}/{}/{}/{}_update.json",
        folder,
        network,
        contract.as_str(),
        timestamp
    )
}

pub fn write<T: Serialize>(
    folder: &str,
    network: &str,
    contract: ContractKind,
    payload: &T,
) -> Result<String, std::io::Error> {
    let contract_path = format!("{}/{}/{}", folder, network, contract.as_str());

    if !Path::new(&contract_path).exists() {
        fs::create_dir_all(&contract_path)?;
    }

    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let path = payload_path(folder, network, contract, &timestamp);

    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, payload)?;
    writer.write_all(b"\n")?;

    Ok(path)
}
