use sqlx::FromRow;

use business::domain::settings::model::{BankInfo, StoreSettings};

#[derive(Debug, FromRow)]
pub struct StoreSettingsEntity {
    pub store_name: String,
    pub location: String,
    pub whatsapp_number: String,
    pub bank_name: String,
    pub account_number: String,
    pub account_holder: String,
    pub cedula: String,
}

impl StoreSettingsEntity {
    pub fn into_domain(self) -> StoreSettings {
        StoreSettings {
            store_name: self.store_name,
            location: self.location,
            whatsapp_number: self.whatsapp_number,
            bank_info: BankInfo {
                bank_name: self.bank_name,
                account_number: self.account_number,
                account_holder: self.account_holder,
                cedula: self.cedula,
            },
        }
    }
}
