/// Bank transfer details shown to customers at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct BankInfo {
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
    pub cedula: String,
}

/// Singleton store configuration. At most one record exists; the first
/// read creates it with these defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub store_name: String,
    pub location: String,
    pub whatsapp_number: String,
    pub bank_info: BankInfo,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_name: "Lumina & Co.".to_string(),
            location: "San José, Costa Rica".to_string(),
            whatsapp_number: "89953348".to_string(),
            bank_info: BankInfo {
                bank_name: "BAC Credomatic".to_string(),
                account_number: "Configurar número de cuenta".to_string(),
                account_holder: "Lumina & Co.".to_string(),
                cedula: "Configurar cédula".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_provide_store_defaults() {
        let settings = StoreSettings::default();
        assert_eq!(settings.whatsapp_number, "89953348");
        assert_eq!(settings.bank_info.bank_name, "BAC Credomatic");
    }
}
