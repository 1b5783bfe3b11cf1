// ⚙️ Session configuration

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Clear the terminal before each new calculation
    pub clear_screen: bool,

    /// Prefix for currency figures
    pub currency_symbol: String,

    /// Also print each result as one JSON line
    pub echo_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clear_screen: true,
            currency_symbol: "$".to_string(),
            echo_json: false,
        }
    }
}
