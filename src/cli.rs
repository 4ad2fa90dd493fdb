use clap::Parser;

use cold_wallet_checker::analyzer::DEFAULT_MONTHS_IDLE;

#[derive(Parser, Debug)]
#[command(
    name = "cold-wallet-checker",
    version,
    about = "Check whether an Ethereum wallet has gone cold"
)]
pub struct Cli {
    /// Ethereum address
    pub address: String,
    /// Etherscan API key
    pub api_key: String,
    /// Months without transactions after which the wallet counts as cold
    #[arg(long, default_value_t = DEFAULT_MONTHS_IDLE)]
    pub months: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_defaults_to_twelve() {
        let cli = Cli::try_parse_from(["cold-wallet-checker", "0xabc", "KEY"]).unwrap();
        assert_eq!(cli.address, "0xabc");
        assert_eq!(cli.api_key, "KEY");
        assert_eq!(cli.months, 12);
    }

    #[test]
    fn months_flag_overrides_default() {
        let cli = Cli::try_parse_from(["cold-wallet-checker", "0xabc", "KEY", "--months", "3"])
            .unwrap();
        assert_eq!(cli.months, 3);
    }

    #[test]
    fn rejects_missing_api_key_and_negative_months() {
        assert!(Cli::try_parse_from(["cold-wallet-checker", "0xabc"]).is_err());
        assert!(
            Cli::try_parse_from(["cold-wallet-checker", "0xabc", "KEY", "--months", "-1"])
                .is_err()
        );
    }
}
