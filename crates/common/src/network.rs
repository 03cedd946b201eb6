//! Human readable network labels.

use alloy_chains::NamedChain;

/// Returns the display label for `chain_id`, or `Unknown (chain ID <id>)` for chains without one.
pub fn network_name(chain_id: u64) -> String {
    let label = match NamedChain::try_from(chain_id) {
        Ok(NamedChain::Mainnet) => "Ethereum Mainnet",
        Ok(NamedChain::Sepolia) => "Sepolia Testnet",
        Ok(NamedChain::Optimism) => "Optimism",
        Ok(NamedChain::Polygon) => "Polygon",
        Ok(NamedChain::Arbitrum) => "Arbitrum One",
        Ok(NamedChain::Base) => "Base",
        Ok(NamedChain::Avalanche) => "Avalanche C-Chain",
        _ => return format!("Unknown (chain ID {chain_id})"),
    };
    label.to_string()
}
